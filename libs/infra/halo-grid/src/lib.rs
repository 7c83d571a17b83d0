// [libs/infra/halo-grid/src/lib.rs]
/*!
 * =================================================================
 * APARATO: HALO GRID MASTER HUB (V9.0 - SIX-STAGE OVERLAP)
 * CLASIFICACIÓN: INFRA TRANSPORT (ESTRATO L3)
 * RESPONSABILIDAD: COORDINACIÓN MULTI-RANGO DEL BARRIDO
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. TIME AXIS PARTITION: nprocs rangos se reparten las rebanadas
 *    temporales; cada rango posee sus slabs y alcanza la rebanada
 *    ajena a través del halo.
 * 2. OVERLAP PIPELINE: Intercambio de halo de ida y vuelta en tres
 *    etapas cada uno, solapado con el cómputo de seis particiones
 *    del interior.
 * 3. FATAL COLLECTIVES: Un canal roto o un colectivo caído aborta la
 *    corrida; no existe semántica de resultado parcial porque el
 *    estado está replicado módulo la partición de rebanadas.
 * =================================================================
 */

/// Reducción colectiva determinista y barrera entre rangos.
pub mod collective;
/// El comunicador: barridos con halo, calidad global, reparación.
pub mod communicator;
/// Catálogo de fallos del transporte.
pub mod errors;
/// Partición del eje temporal y las seis partes del interior.
pub mod partition;

/**
 * PRELUDIO DEL TRANSPORTE SOBERANO
 */
pub mod prelude {
    pub use crate::collective::Collective;
    pub use crate::communicator::{
        build_ring_topology, collect_slices, scatter_slices, GridCommunicator, HaloChannels,
    };
    pub use crate::errors::CommError;
    pub use crate::partition::TimePartition;
}

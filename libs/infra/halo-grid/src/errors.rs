// [libs/infra/halo-grid/src/errors.rs]
/*!
 * =================================================================
 * APARATO: TRANSPORT FAULT CATALOG (V3.1)
 * CLASIFICACIÓN: INFRA TRANSPORT (ESTRATO L3)
 * =================================================================
 */

use lgf_domain_gaugefixing::prelude::FixingError;
use thiserror::Error;

/// Fallos del estrato de comunicación. Todos son fatales: el estado
/// de la fijación no puede continuar de forma consistente.
#[derive(Debug, Error)]
pub enum CommError {
    /// Partición imposible del eje temporal.
    #[error("COMM_FAULT: partición temporal inválida: {reason}")]
    Partition { reason: String },

    /// Un canal de halo se cerró con el vecino indicado.
    #[error("COMM_FAULT: canal de halo roto hacia/desde el rango {peer} en la etapa '{stage}'")]
    ChannelClosed { peer: usize, stage: &'static str },

    /// El mensaje de halo recibido no tiene el tamaño de media rebanada.
    #[error("COMM_FAULT: halo con tamaño {found} (esperado {expected})")]
    HaloSizeMismatch { expected: usize, found: usize },

    /// El estado compartido del colectivo quedó envenenado.
    #[error("COMM_FAULT: colectivo envenenado por pánico en otro rango")]
    PoisonedCollective,

    /// El campo importado no casa con las rebanadas locales.
    #[error("COMM_FAULT: importación de campo con forma incompatible")]
    FieldShapeMismatch,

    /// Fallo del dominio durante la reproyección local.
    #[error(transparent)]
    Fixing(#[from] FixingError),
}

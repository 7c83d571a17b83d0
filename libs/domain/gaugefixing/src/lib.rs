// [libs/domain/gaugefixing/src/lib.rs]
/*!
 * =================================================================
 * APARATO: GAUGE FIXING DOMAIN HUB (V14.0 - CABIBBO SOVEREIGN)
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: BARRIDO DE SUBGRUPOS, CALIDAD Y CONDUCTOR
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. CHECKERBOARD DISCIPLINE: Toda mutación del campo ocurre en
 *    clases de paridad; dos sitios actualizados en paralelo jamás
 *    comparten un enlace.
 * 2. POLICY STRATA: Las cinco políticas de actualización son tipos
 *    monomorfizados en el kernel; el tipo de gauge es la variante
 *    etiquetada que selecciona las fórmulas de contribución.
 * 3. BACKEND SEAM: El conductor por nodo es genérico sobre el
 *    ejecutor de barridos; el comunicador multi-rango del estrato
 *    L3 lo implementa sin que el dominio dependa de él.
 * =================================================================
 */

// Se autoriza 'unsafe' únicamente para la vista compartida del slab
// durante el barrido por paridad; la disciplina checkerboard
// garantiza la disyunción de las escrituras.
#![allow(unsafe_code)]

/// Conductor por nodo: máquina de estados de una corrida completa.
pub mod driver;
/// Catálogo de fallos del dominio.
pub mod errors;
/// Tipos de gauge y sus fórmulas de contribución al acumulador.
pub mod gauge;
/// Lectura/escritura de enlaces sobre slabs de rebanada temporal.
pub mod links;
/// Kernels por rebanada: barrido, calidad, reproyección, arranque.
pub mod sweep;
/// Paso de subgrupo por sitio (acumulación + política + aplicación).
pub mod subgroup;
/// Las cinco políticas de actualización.
pub mod updates;

/**
 * PRELUDIO DEL DOMINIO SOBERANO
 */
pub mod prelude {
    pub use crate::driver::{
        run_gauge_fixing, CopyReport, DriverError, FixingSchedule, GaugeQuality, RunReport,
        SaTracePoint, SweepBackend,
    };
    pub use crate::errors::FixingError;
    pub use crate::gauge::GaugeKind;
    pub use crate::links::{read_link, write_link, write_link_full, SiteLinks};
    pub use crate::subgroup::{AlgorithmOptions, SweepAlgorithm};
    pub use crate::sweep::{
        apply_slice, apply_slice_ordered, apply_slice_with_options, quality_slice,
        reproject_slice, restore_third_row_slice, set_hot_slice, DriftStats, SliceContext,
    };
    pub use crate::updates::{
        MicroUpdate, OrUpdate, RandomUpdate, SaUpdate, SrUpdate, UpdatePolicy,
    };
}

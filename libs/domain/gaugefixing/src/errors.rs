// [libs/domain/gaugefixing/src/errors.rs]
/*!
 * =================================================================
 * APARATO: DOMAIN FAULT CATALOG (V3.0)
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * =================================================================
 */

use lgf_core_su3::prelude::SuError;
use thiserror::Error;

/// Fallos del estrato de fijación de gauge.
///
/// La no-convergencia del bucle de sobre-relajación NO es un fallo:
/// se reporta en 'CopyReport::converged' y la salida se escribe
/// igualmente etiquetada.
#[derive(Debug, Error)]
pub enum FixingError {
    /// Un enlace quedó irrecuperable durante la reproyección.
    #[error("FIXING_FAULT: reproyección imposible en la rebanada {timeslice}: {source}")]
    Reprojection {
        timeslice: usize,
        #[source]
        source: SuError,
    },

    /// Planificación incoherente (p. ej. intervalo de reproyección nulo).
    #[error("FIXING_FAULT: planificación inválida: {reason}")]
    InvalidSchedule { reason: String },
}

// [libs/core/su3-math/src/errors.rs]
/*!
 * =================================================================
 * APARATO: ALGEBRAIC FAULT CATALOG (V2.1)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: TAXONOMÍA DE FALLOS DEL ESTRATO ALGEBRAICO
 * =================================================================
 */

use crate::Real;
use thiserror::Error;

/// Fallos detectables durante las operaciones sobre la variedad SU(3).
#[derive(Debug, Error)]
pub enum SuError {
    /// La fila a normalizar durante la proyección tiene norma degenerada.
    /// Señala un enlace corrupto (lectura rota o deriva catastrófica).
    #[error("MATH_FAULT: fila {row} con norma degenerada {norm:.3e} durante la proyección SU(3)")]
    DegenerateRow { row: usize, norm: Real },

    /// Un componente del enlace dejó de ser finito (NaN / Inf).
    #[error("MATH_FAULT: componente no finito detectado en el enlace durante la proyección")]
    NonFiniteLink,
}

// [libs/core/su3-math/src/lib.rs]
/*!
 * =================================================================
 * APARATO: SU(3) ALGEBRA MASTER HUB (V12.0 - TWO-ROW SOVEREIGN)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: ORQUESTACIÓN DE PRIMITIVAS ALGEBRAICAS DE GAUGE
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. TWO-ROW SOVEREIGNTY: Exporta el frontend SU(3) que persiste
 *    únicamente las dos primeras filas del enlace y reconstruye la
 *    tercera por ortogonalidad, reduciendo ancho de banda un 33%.
 * 2. QUATERNION STRATA: Centraliza la representación cuaterniónica
 *    de los subgrupos SU(2) para el barrido Cabibbo-Marinari.
 * 3. NOMINAL PURITY: Erradicación total de abreviaciones en la
 *    interfaz pública del estrato L1.
 *
 * # Mathematical Proof (Group Closure):
 * Toda operación exportada preserva la pertenencia a SU(3) módulo
 * redondeo de coma flotante; la deriva acumulada se corrige con
 * 'project_special_unitary' (Gram-Schmidt + fila derivada).
 * =================================================================
 */

/// Números complejos de precisión configurable sobre el tipo 'Real'.
pub mod complex;
/// Catálogo de fallos algebraicos del estrato L1.
pub mod errors;
/// Matrices complejas densas 2x2 y 3x3 de tamaño fijo (stack-only).
pub mod matrix;
/// Cuaterniones con semántica SU(2) y producto cerrado.
pub mod quaternion;
/// Frontend SU(3) de dos filas con operaciones de subgrupo.
pub mod su3;

/// Escalar real del motor. Toda la aritmética de enlaces opera en f64.
pub type Real = f64;

/// Dimensión del grupo de color.
pub const NC: usize = 3;
/// Dimensión del retículo espacio-temporal.
pub const NDIM: usize = 4;
/// Pares (fila, columna) de los tres subgrupos SU(2) de SU(3),
/// en el orden del barrido Cabibbo-Marinari.
pub const SU2_SUBGROUPS: [(usize, usize); 3] = [(0, 1), (0, 2), (1, 2)];

/**
 * PRELUDIO ALGEBRAICO SOBERANO
 *
 * Única autoridad de importación autorizada para los estratos
 * superiores (L2-Gaugefixing y L3-Engine).
 */
pub mod prelude {
    pub use crate::complex::Complex;
    pub use crate::errors::SuError;
    pub use crate::matrix::{Matrix2, Matrix3};
    pub use crate::quaternion::Quaternion;
    pub use crate::su3::Su3;
    pub use crate::{Real, NC, NDIM, SU2_SUBGROUPS};
}

// [libs/core/su3-math/src/su3.rs]
/*!
 * =================================================================
 * APARATO: SU(3) LINK FRONTEND (V15.1 - THIRD ROW DERIVED)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: OPERACIONES DE SUBGRUPO Y PROYECCIÓN DEL ENLACE
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. TWO-ROW DISCIPLINE: Las dos primeras filas son la verdad
 *    persistida; la tercera es derivada (conjugado del producto
 *    vectorial) y se reconstruye bajo demanda.
 * 2. SUBGROUP STRATA: Extracción cuaterniónica y multiplicación
 *    izquierda/derecha restringida a los bloques (i,j) del barrido
 *    Cabibbo-Marinari.
 * 3. MANIFOLD REPAIR: Proyección Gram-Schmidt con fallo tipado ante
 *    filas degeneradas para el protocolo de reproyección periódica.
 *
 * # Mathematical Proof (Row Reconstruction):
 * Para U en SU(3) las filas forman una base ortonormal con
 * fila2 = conj(fila0 x fila1); la reconstrucción restaura por tanto
 * el determinante unidad exacto a partir de dos filas ortonormales.
 * =================================================================
 */

use crate::complex::Complex;
use crate::errors::SuError;
use crate::matrix::{Matrix2, Matrix3};
use crate::quaternion::Quaternion;
use crate::Real;

/// Enlace SU(3) residente en registros con fila inferior derivada.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Su3 {
    cells: Matrix3,
}

impl Su3 {
    /// Envuelve una matriz densa ya poblada.
    #[inline(always)]
    #[must_use]
    pub const fn from_matrix(cells: Matrix3) -> Self {
        Self { cells }
    }

    /// Enlace unidad (configuración fría).
    #[must_use]
    pub fn identity() -> Self {
        Self { cells: Matrix3::identity() }
    }

    /// Vista de la matriz densa subyacente.
    #[inline(always)]
    #[must_use]
    pub const fn matrix(&self) -> &Matrix3 {
        &self.cells
    }

    /// Celda (i, j).
    #[inline(always)]
    #[must_use]
    pub const fn get(&self, row: usize, col: usize) -> Complex {
        self.cells.get(row, col)
    }

    /// Escritura de la celda (i, j).
    #[inline(always)]
    pub fn set(&mut self, row: usize, col: usize, value: Complex) {
        self.cells.set(row, col, value);
    }

    /// Parte real de la traza (contribución al funcional de gauge).
    #[inline(always)]
    #[must_use]
    pub fn re_trace(&self) -> Real {
        self.cells.trace().re
    }

    /// Suma de |U_aa|^2 sobre la diagonal (funcional MAG).
    #[inline]
    #[must_use]
    pub fn diagonal_abs_squared(&self) -> Real {
        (0..3).map(|diagonal| self.get(diagonal, diagonal).abs_squared()).sum()
    }

    // --- ESTRATO DE SUBGRUPOS SU(2) ---

    /// Proyección cuaterniónica (sin normalizar) del bloque (i, j).
    ///
    /// Para un cuaternión inmerso de forma exacta devuelve 2·q; la
    /// escala es irrelevante porque toda política de actualización
    /// renormaliza antes de aplicar.
    #[inline(always)]
    #[must_use]
    pub fn subgroup_quaternion(&self, i: usize, j: usize) -> Quaternion {
        let top_left = self.get(i, i);
        let top_right = self.get(i, j);
        let bottom_left = self.get(j, i);
        let bottom_right = self.get(j, j);
        Quaternion::new(
            top_left.re + bottom_right.re,
            top_right.im + bottom_left.im,
            top_right.re - bottom_left.re,
            top_left.im - bottom_right.im,
        )
    }

    /// Bloque 2x2 crudo del subgrupo (i, j).
    #[inline(always)]
    #[must_use]
    pub fn subgroup_matrix(&self, i: usize, j: usize) -> Matrix2 {
        Matrix2::from_rows(
            [self.get(i, i), self.get(i, j)],
            [self.get(j, i), self.get(j, j)],
        )
    }

    /// Bloque 2x2 hermítico del subgrupo (i, j), usado por la medida
    /// de precisión MAG sobre los enlaces entrantes.
    #[inline(always)]
    #[must_use]
    pub fn subgroup_matrix_hermitian(&self, i: usize, j: usize) -> Matrix2 {
        Matrix2::from_rows(
            [self.get(i, i).conj(), self.get(j, i).conj()],
            [self.get(i, j).conj(), self.get(j, j).conj()],
        )
    }

    /// Multiplica por la izquierda las filas (i, j) con el elemento
    /// SU(2) inmerso: U <- M(q)·U restringido al bloque.
    #[inline]
    pub fn left_subgroup_multiply(&mut self, i: usize, j: usize, update: &Quaternion) {
        let alpha = update.cell_alpha();
        let beta = update.cell_beta();
        for col in 0..3 {
            let upper = self.get(i, col);
            let lower = self.get(j, col);
            self.set(i, col, alpha * upper + beta * lower);
            self.set(j, col, alpha.conj() * lower - beta.conj() * upper);
        }
    }

    /// Multiplica por la derecha las columnas (i, j): U <- U·M(q).
    #[inline]
    pub fn right_subgroup_multiply(&mut self, i: usize, j: usize, update: &Quaternion) {
        let alpha = update.cell_alpha();
        let beta = update.cell_beta();
        for row in 0..3 {
            let left = self.get(row, i);
            let right = self.get(row, j);
            self.set(row, i, left * alpha - right * beta.conj());
            self.set(row, j, left * beta + right * alpha.conj());
        }
    }

    // --- ESTRATO DE VARIEDAD ---

    /// Reconstruye la fila derivada: fila2 = conj(fila0 x fila1).
    #[inline]
    pub fn reconstruct_third_row(&mut self) {
        let r0 = [self.get(0, 0), self.get(0, 1), self.get(0, 2)];
        let r1 = [self.get(1, 0), self.get(1, 1), self.get(1, 2)];
        self.set(2, 0, (r0[1] * r1[2] - r0[2] * r1[1]).conj());
        self.set(2, 1, (r0[2] * r1[0] - r0[0] * r1[2]).conj());
        self.set(2, 2, (r0[0] * r1[1] - r0[1] * r1[0]).conj());
    }

    /// Proyección completa a SU(3): ortonormaliza las dos primeras
    /// filas (Gram-Schmidt) y deriva la tercera.
    ///
    /// # Errors
    /// 'SuError::DegenerateRow' si una fila tiene norma fuera de todo
    /// rango recuperable; 'SuError::NonFiniteLink' ante NaN/Inf.
    pub fn project_special_unitary(&mut self) -> Result<(), SuError> {
        for row in 0..2 {
            for col in 0..3 {
                let cell = self.get(row, col);
                if !cell.re.is_finite() || !cell.im.is_finite() {
                    return Err(SuError::NonFiniteLink);
                }
            }
        }

        // Fila 0: normalización directa.
        let norm0 = ((0..3).map(|col| self.get(0, col).abs_squared()).sum::<Real>()).sqrt();
        if norm0 < 1e-30 {
            return Err(SuError::DegenerateRow { row: 0, norm: norm0 });
        }
        let inverse_norm0 = 1.0 / norm0;
        for col in 0..3 {
            self.set(0, col, self.get(0, col).scale(inverse_norm0));
        }

        // Fila 1: sustrae la componente sobre fila 0 y normaliza.
        let mut overlap = Complex::zero();
        for col in 0..3 {
            overlap += self.get(0, col).conj() * self.get(1, col);
        }
        for col in 0..3 {
            let projected = self.get(1, col) - self.get(0, col) * overlap;
            self.set(1, col, projected);
        }
        let norm1 = ((0..3).map(|col| self.get(1, col).abs_squared()).sum::<Real>()).sqrt();
        if norm1 < 1e-30 {
            return Err(SuError::DegenerateRow { row: 1, norm: norm1 });
        }
        let inverse_norm1 = 1.0 / norm1;
        for col in 0..3 {
            self.set(1, col, self.get(1, col).scale(inverse_norm1));
        }

        self.reconstruct_third_row();
        Ok(())
    }

    /// Defecto de unitariedad ||U·U† - I||_F para auditoría de deriva.
    #[must_use]
    pub fn unitarity_defect(&self) -> Real {
        let mut gram = self.cells.multiply(&self.cells.hermitian());
        gram.subtract_from_diagonal(Complex::one());
        gram.frobenius_squared().sqrt()
    }

    /// Determinante complejo (auditoría; no pertenece al Hot-Path).
    #[must_use]
    pub fn determinant(&self) -> Complex {
        let m = &self.cells;
        m.get(0, 0) * (m.get(1, 1) * m.get(2, 2) - m.get(1, 2) * m.get(2, 1))
            - m.get(0, 1) * (m.get(1, 0) * m.get(2, 2) - m.get(1, 2) * m.get(2, 0))
            + m.get(0, 2) * (m.get(1, 0) * m.get(2, 1) - m.get(1, 1) * m.get(2, 0))
    }
}

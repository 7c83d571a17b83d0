// [libs/core/su3-math/src/quaternion.rs]
/*!
 * =================================================================
 * APARATO: SU(2) QUATERNION ENGINE (V9.3 - CABIBBO ALIGNED)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: REPRESENTACIÓN DE 4 REALES DE ELEMENTOS SU(2)
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. QUATERNION SOVEREIGNTY: Cuatro reales (a0,a1,a2,a3) sustituyen
 *    a los ocho de una matriz compleja 2x2, halvando el tráfico del
 *    acumulador compartido del barrido de subgrupos.
 * 2. CLOSED PRODUCT: El producto cuaterniónico replica bit a bit el
 *    producto matricial de la inmersión SU(2) elegida.
 *
 * # Mathematical Proof (SU(2) Embedding):
 * La correspondencia usada en todo el monorepo es
 *   M(q) = [[ a0 + i·a3,  a2 + i·a1 ],
 *           [ -a2 + i·a1, a0 - i·a3 ]],
 * de modo que M(q)·M(r) = M(q·r) y M(q)† = M(conj(q)). Un cuaternión
 * de norma 1 es exactamente un elemento de SU(2).
 * =================================================================
 */

use crate::complex::Complex;
use crate::Real;
use std::ops::{Index, IndexMut, Mul};

/// Elemento SU(2) en representación de cuatro reales, parte real en [0].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Quaternion {
    components: [Real; 4],
}

impl Quaternion {
    /// Constructor nominal desde los cuatro componentes.
    #[inline(always)]
    #[must_use]
    pub const fn new(a0: Real, a1: Real, a2: Real, a3: Real) -> Self {
        Self { components: [a0, a1, a2, a3] }
    }

    /// Elemento neutro del grupo (matriz identidad 2x2).
    #[inline(always)]
    #[must_use]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Cuaternión nulo (acumulador virgen).
    #[inline(always)]
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Vista inmutable de los componentes crudos.
    #[inline(always)]
    #[must_use]
    pub const fn as_array(&self) -> &[Real; 4] {
        &self.components
    }

    /// Conjugación: equivale al hermítico de la matriz inmersa.
    #[inline(always)]
    #[must_use]
    pub const fn hermitian(self) -> Self {
        Self::new(
            self.components[0],
            -self.components[1],
            -self.components[2],
            -self.components[3],
        )
    }

    /// Norma al cuadrado a0^2 + a1^2 + a2^2 + a3^2.
    #[inline(always)]
    #[must_use]
    pub fn norm_squared(self) -> Real {
        self.components.iter().map(|component| component * component).sum()
    }

    /// Norma euclídea.
    #[inline(always)]
    #[must_use]
    pub fn norm(self) -> Real {
        self.norm_squared().sqrt()
    }

    /// Reescala el elemento a la esfera unidad (proyección a SU(2)).
    #[inline(always)]
    #[must_use]
    pub fn normalized(self) -> Self {
        let inverse_norm = 1.0 / self.norm();
        Self::new(
            self.components[0] * inverse_norm,
            self.components[1] * inverse_norm,
            self.components[2] * inverse_norm,
            self.components[3] * inverse_norm,
        )
    }

    /// Celda (0,0) de la matriz inmersa: a0 + i·a3.
    #[inline(always)]
    #[must_use]
    pub const fn cell_alpha(self) -> Complex {
        Complex::new(self.components[0], self.components[3])
    }

    /// Celda (0,1) de la matriz inmersa: a2 + i·a1.
    #[inline(always)]
    #[must_use]
    pub const fn cell_beta(self) -> Complex {
        Complex::new(self.components[2], self.components[1])
    }
}

impl Index<usize> for Quaternion {
    type Output = Real;

    #[inline(always)]
    fn index(&self, index: usize) -> &Real {
        &self.components[index]
    }
}

impl IndexMut<usize> for Quaternion {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut Real {
        &mut self.components[index]
    }
}

impl Mul for Quaternion {
    type Output = Self;

    /// Producto cerrado: M(self)·M(other) = M(resultado).
    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        let alpha_left = self.cell_alpha();
        let beta_left = self.cell_beta();
        let alpha_right = other.cell_alpha();
        let beta_right = other.cell_beta();

        // Bloque superior del producto matricial; el inferior queda
        // determinado por la estructura SU(2).
        let alpha = alpha_left * alpha_right - beta_left * beta_right.conj();
        let beta = alpha_left * beta_right + beta_left * alpha_right.conj();

        Self::new(alpha.re, beta.im, beta.re, alpha.im)
    }
}

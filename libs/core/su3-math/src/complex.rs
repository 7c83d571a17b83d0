// [libs/core/su3-math/src/complex.rs]
/*!
 * =================================================================
 * APARATO: COMPLEX SCALAR ENGINE (V6.2 - STACK PURE)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: ARITMÉTICA COMPLEJA DE COMA FLOTANTE SIN HEAP
 *
 * # Mathematical Proof (Field Axioms):
 * El tipo opera sobre C como par (re, im) de f64. Producto y
 * conjugación satisfacen |z·w| = |z||w| y conj(z·w) = conj(z)·conj(w)
 * módulo redondeo IEEE-754, suficiente para la deriva tolerada por
 * el intervalo de reproyección del barrido.
 * =================================================================
 */

use crate::Real;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Escalar complejo del motor de enlaces.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    /// Parte real.
    pub re: Real,
    /// Parte imaginaria.
    pub im: Real,
}

impl Complex {
    /// Constructor nominal.
    #[inline(always)]
    #[must_use]
    pub const fn new(re: Real, im: Real) -> Self {
        Self { re, im }
    }

    /// Cero aditivo.
    #[inline(always)]
    #[must_use]
    pub const fn zero() -> Self {
        Self { re: 0.0, im: 0.0 }
    }

    /// Unidad multiplicativa.
    #[inline(always)]
    #[must_use]
    pub const fn one() -> Self {
        Self { re: 1.0, im: 0.0 }
    }

    /// Conjugación compleja.
    #[inline(always)]
    #[must_use]
    pub const fn conj(self) -> Self {
        Self { re: self.re, im: -self.im }
    }

    /// Módulo al cuadrado |z|^2 (evita la raíz en el Hot-Path).
    #[inline(always)]
    #[must_use]
    pub fn abs_squared(self) -> Real {
        self.re * self.re + self.im * self.im
    }

    /// Módulo |z|.
    #[inline(always)]
    #[must_use]
    pub fn abs(self) -> Real {
        self.abs_squared().sqrt()
    }

    /// Escalado por un real.
    #[inline(always)]
    #[must_use]
    pub fn scale(self, factor: Real) -> Self {
        Self { re: self.re * factor, im: self.im * factor }
    }
}

impl Add for Complex {
    type Output = Self;

    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Self::new(self.re + other.re, self.im + other.im)
    }
}

impl AddAssign for Complex {
    #[inline(always)]
    fn add_assign(&mut self, other: Self) {
        self.re += other.re;
        self.im += other.im;
    }
}

impl Sub for Complex {
    type Output = Self;

    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        Self::new(self.re - other.re, self.im - other.im)
    }
}

impl SubAssign for Complex {
    #[inline(always)]
    fn sub_assign(&mut self, other: Self) {
        self.re -= other.re;
        self.im -= other.im;
    }
}

impl Mul for Complex {
    type Output = Self;

    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        Self::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }
}

impl Neg for Complex {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

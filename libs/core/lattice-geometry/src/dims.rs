// [libs/core/lattice-geometry/src/dims.rs]
/*!
 * =================================================================
 * APARATO: LATTICE EXTENT REGISTER (V4.0)
 * CLASIFICACIÓN: CORE GEOMETRY (ESTRATO L1)
 * RESPONSABILIDAD: EXTENSIONES FIJAS (Nt, Nx, Ny, Nz) Y VOLÚMENES
 *
 * # Mathematical Proof (Even Extents):
 * La linearización por paridad exige extensiones pares: con Nz par,
 * dos índices lexicográficos consecutivos difieren solo en z y tienen
 * paridades opuestas, lo que hace exacta la decodificación par/impar.
 * =================================================================
 */

use lgf_core_su3::{NC, NDIM};

/// Extensiones del retículo periódico, fijadas en el arranque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatticeDims {
    extents: [usize; NDIM],
}

impl LatticeDims {
    /// Constructor nominal (t, x, y, z). Las extensiones deben ser pares.
    #[must_use]
    pub const fn new(nt: usize, nx: usize, ny: usize, nz: usize) -> Self {
        assert!(nt % 2 == 0 && nx % 2 == 0 && ny % 2 == 0 && nz % 2 == 0);
        Self { extents: [nt, nx, ny, nz] }
    }

    /// Extensión en la dirección pedida (0 = temporal).
    #[inline(always)]
    #[must_use]
    pub const fn extent(&self, direction: usize) -> usize {
        self.extents[direction]
    }

    /// Extensión temporal Nt.
    #[inline(always)]
    #[must_use]
    pub const fn nt(&self) -> usize {
        self.extents[0]
    }

    /// Número total de sitios |Lambda|.
    #[inline(always)]
    #[must_use]
    pub const fn volume(&self) -> usize {
        self.extents[0] * self.extents[1] * self.extents[2] * self.extents[3]
    }

    /// Sitios por rebanada temporal.
    #[inline(always)]
    #[must_use]
    pub const fn timeslice_volume(&self) -> usize {
        self.extents[1] * self.extents[2] * self.extents[3]
    }

    /// Reales por rebanada temporal (todas las direcciones y celdas).
    #[inline(always)]
    #[must_use]
    pub const fn timeslice_reals(&self) -> usize {
        self.timeslice_volume() * NDIM * NC * NC * 2
    }

    /// Reales de la configuración completa.
    #[inline(always)]
    #[must_use]
    pub const fn total_reals(&self) -> usize {
        self.nt() * self.timeslice_reals()
    }
}

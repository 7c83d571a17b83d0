// [libs/core/lattice-geometry/src/neighbour.rs]
/*!
 * =================================================================
 * APARATO: SPATIAL NEIGHBOUR TABLE (V5.1 - SLICE LOCAL)
 * CLASIFICACIÓN: CORE GEOMETRY (ESTRATO L1)
 * RESPONSABILIDAD: VECINOS ESPACIALES PRECOMPUTADOS POR REBANADA
 *
 * # Mathematical Proof (Time Stepping Exclusion):
 * Un paso en la dirección temporal no altera las coordenadas
 * espaciales, por lo que el vecino t-abajo de un sitio vive en la
 * rebanada t-1 con el MISMO índice espacial dividido por paridad.
 * La tabla solo necesita las tres direcciones espaciales.
 * =================================================================
 */

use crate::dims::LatticeDims;
use crate::site::SiteCoord;

/// Tabla de vecinos espaciales en índices divididos por paridad.
///
/// Para cada sitio espacial s (en orden split) y dirección espacial
/// d en {1,2,3} guarda el índice split de s + d̂ y de s - d̂ dentro de
/// la misma rebanada, con contorno periódico.
#[derive(Debug, Clone)]
pub struct SpatialNeighbourTable {
    dims: LatticeDims,
    up: Vec<u32>,
    down: Vec<u32>,
}

impl SpatialNeighbourTable {
    /// Precomputa la tabla completa de la rebanada.
    #[must_use]
    pub fn build(dims: LatticeDims) -> Self {
        let slice_volume = dims.timeslice_volume();
        let mut up = vec![0u32; slice_volume * 3];
        let mut down = vec![0u32; slice_volume * 3];
        let mut site = SiteCoord::origin(dims);
        for split_index in 0..slice_volume {
            for direction in 1..4 {
                site.set_spatial_from_slice_split(split_index);
                site.step(direction, true);
                up[split_index * 3 + (direction - 1)] = site.slice_split_index() as u32;

                site.set_spatial_from_slice_split(split_index);
                site.step(direction, false);
                down[split_index * 3 + (direction - 1)] = site.slice_split_index() as u32;
            }
        }
        Self { dims, up, down }
    }

    /// Extensiones del retículo asociado.
    #[inline(always)]
    #[must_use]
    pub const fn dims(&self) -> LatticeDims {
        self.dims
    }

    /// Vecino espacial ascendente (direction en {1,2,3}).
    #[inline(always)]
    #[must_use]
    pub fn up(&self, split_index: usize, direction: usize) -> usize {
        self.up[split_index * 3 + (direction - 1)] as usize
    }

    /// Vecino espacial descendente (direction en {1,2,3}).
    #[inline(always)]
    #[must_use]
    pub fn down(&self, split_index: usize, direction: usize) -> usize {
        self.down[split_index * 3 + (direction - 1)] as usize
    }
}

// [libs/core/lattice-geometry/src/site.rs]
/*!
 * =================================================================
 * APARATO: SITE COORDINATE ENGINE (V11.2 - PARITY SPLIT)
 * CLASIFICACIÓN: CORE GEOMETRY (ESTRATO L1)
 * RESPONSABILIDAD: COORDENADA 4D CON LINEARIZACIONES CHECKERBOARD
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. SPLIT DISCIPLINE: El orden por paridad coloca los sitios pares
 *    en [0, N/2) y los impares en [N/2, N); el barrido y el halo
 *    dependen de esta partición contigua.
 * 2. SLICE STRATA: Variantes por rebanada temporal para el pipeline
 *    multi-rango (la paridad se evalúa solo sobre (x, y, z)).
 *
 * # Mathematical Proof (Split Decode):
 * Con Nz par, los índices lexicográficos 2m y 2m+1 difieren solo en
 * z (par -> impar), de modo que decodificar 2m y corregir z en +1
 * cuando la paridad no casa produce exactamente el m-ésimo sitio de
 * la clase pedida. El mismo argumento aplica dentro de una rebanada.
 * =================================================================
 */

use crate::dims::LatticeDims;

/// Sitio del retículo con su vector de extensiones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteCoord {
    dims: LatticeDims,
    coords: [usize; 4],
}

impl SiteCoord {
    /// Sitio en el origen del retículo dado.
    #[inline]
    #[must_use]
    pub const fn origin(dims: LatticeDims) -> Self {
        Self { dims, coords: [0; 4] }
    }

    /// Sitio desde coordenadas explícitas (t, x, y, z).
    #[inline]
    #[must_use]
    pub const fn from_coords(dims: LatticeDims, coords: [usize; 4]) -> Self {
        Self { dims, coords }
    }

    /// Coordenada en la dirección pedida.
    #[inline(always)]
    #[must_use]
    pub const fn coord(&self, direction: usize) -> usize {
        self.coords[direction]
    }

    /// Extensiones asociadas.
    #[inline(always)]
    #[must_use]
    pub const fn dims(&self) -> LatticeDims {
        self.dims
    }

    /// Paridad completa: (t + x + y + z) mod 2.
    #[inline(always)]
    #[must_use]
    pub fn parity(&self) -> usize {
        self.coords.iter().sum::<usize>() % 2
    }

    /// Paridad espacial: (x + y + z) mod 2 (la usada por rebanada).
    #[inline(always)]
    #[must_use]
    pub fn spatial_parity(&self) -> usize {
        (self.coords[1] + self.coords[2] + self.coords[3]) % 2
    }

    // --- LINEARIZACIONES SOBRE EL RETÍCULO COMPLETO ---

    /// Índice lexicográfico (t mayor, z menor). Es el orden canónico
    /// de los índices únicos de fichero.
    #[inline]
    #[must_use]
    pub fn lexicographic_index(&self) -> usize {
        let mut index = 0;
        for direction in 0..4 {
            index = index * self.dims.extent(direction) + self.coords[direction];
        }
        index
    }

    /// Índice con división completa por paridad: pares primero.
    #[inline]
    #[must_use]
    pub fn full_split_index(&self) -> usize {
        let lexicographic = self.lexicographic_index();
        if self.parity() == 0 {
            lexicographic / 2
        } else {
            lexicographic / 2 + self.dims.volume() / 2
        }
    }

    /// Decodifica el índice lexicográfico en coordenadas.
    #[inline]
    pub fn set_from_lexicographic(&mut self, mut index: usize) {
        for direction in (0..4).rev() {
            self.coords[direction] = index % self.dims.extent(direction);
            index /= self.dims.extent(direction);
        }
    }

    /// Decodifica un índice en orden dividido por paridad.
    #[inline]
    pub fn set_from_full_split(&mut self, split_index: usize) {
        let half_volume = self.dims.volume() / 2;
        let target_parity = usize::from(split_index >= half_volume);
        let doubled = if target_parity == 1 {
            (split_index - half_volume) * 2
        } else {
            split_index * 2
        };
        self.set_from_lexicographic(doubled);
        if self.parity() != target_parity {
            // Nz par: z es par aquí, el incremento nunca desborda.
            self.coords[3] += 1;
        }
    }

    // --- LINEARIZACIONES POR REBANADA TEMPORAL ---

    /// Índice lexicográfico espacial dentro de la rebanada.
    #[inline]
    #[must_use]
    pub fn slice_lexicographic_index(&self) -> usize {
        let mut index = 0;
        for direction in 1..4 {
            index = index * self.dims.extent(direction) + self.coords[direction];
        }
        index
    }

    /// Índice espacial dividido por paridad dentro de la rebanada.
    #[inline]
    #[must_use]
    pub fn slice_split_index(&self) -> usize {
        let lexicographic = self.slice_lexicographic_index();
        if self.spatial_parity() == 0 {
            lexicographic / 2
        } else {
            lexicographic / 2 + self.dims.timeslice_volume() / 2
        }
    }

    /// Índice global con prioridad de rebanada: t * Vs + split espacial.
    #[inline]
    #[must_use]
    pub fn timeslice_split_index(&self) -> usize {
        self.coords[0] * self.dims.timeslice_volume() + self.slice_split_index()
    }

    /// Decodifica un índice espacial dividido por paridad; t queda intacto.
    #[inline]
    pub fn set_spatial_from_slice_split(&mut self, split_index: usize) {
        let half_volume = self.dims.timeslice_volume() / 2;
        let target_parity = usize::from(split_index >= half_volume);
        let mut doubled = if target_parity == 1 {
            (split_index - half_volume) * 2
        } else {
            split_index * 2
        };
        for direction in (1..4).rev() {
            self.coords[direction] = doubled % self.dims.extent(direction);
            doubled /= self.dims.extent(direction);
        }
        if self.spatial_parity() != target_parity {
            self.coords[3] += 1;
        }
    }

    /// Decodifica el índice global con prioridad de rebanada.
    #[inline]
    pub fn set_from_timeslice_split(&mut self, index: usize) {
        let slice_volume = self.dims.timeslice_volume();
        self.coords[0] = index / slice_volume;
        self.set_spatial_from_slice_split(index % slice_volume);
    }

    // --- VECINDAD PERIÓDICA ---

    /// Avanza (up) o retrocede una unidad en la dirección dada,
    /// con condiciones de contorno periódicas.
    #[inline]
    pub fn step(&mut self, direction: usize, up: bool) {
        let extent = self.dims.extent(direction);
        let coordinate = self.coords[direction];
        self.coords[direction] = if up {
            if coordinate + 1 == extent { 0 } else { coordinate + 1 }
        } else if coordinate == 0 {
            extent - 1
        } else {
            coordinate - 1
        };
    }
}

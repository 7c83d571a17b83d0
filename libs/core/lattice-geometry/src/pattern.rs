// [libs/core/lattice-geometry/src/pattern.rs]
/*!
 * =================================================================
 * APARATO: MEMORY ACCESS PATTERN MATRIX (V10.0 - ZERO DISPATCH)
 * CLASIFICACIÓN: CORE GEOMETRY (ESTRATO L1)
 * RESPONSABILIDAD: MAPEO (sitio, mu, fila, col, re/im) -> OFFSET
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. ZERO DISPATCH: Cada patrón es un tipo de tamaño cero; los
 *    kernels se monomorfizan sobre él y el bucle interno no paga
 *    ninguna indirección.
 * 2. UNIQUE ROUTING: Todos los patrones exponen 'index_by_unique'
 *    desde el orden lexicográfico canónico, el contrato que usa la
 *    conversión de formatos de fichero en carga y guardado.
 * 3. SLAB STRATA: El patrón de prioridad rebanada-paridad expone el
 *    offset local a una rebanada; es el layout de trabajo del motor
 *    y hace contiguas las mitades de paridad que viajan en el halo.
 * =================================================================
 */

use crate::dims::LatticeDims;
use crate::site::SiteCoord;
use lgf_core_su3::{NC, NDIM};

/// Descomposición del índice único canónico (sitio lexicográfico
/// mayor; re/im menor).
#[inline(always)]
fn split_unique(mut unique: usize) -> (usize, usize, usize, usize, usize) {
    let c = unique % 2;
    unique /= 2;
    let col = unique % NC;
    unique /= NC;
    let row = unique % NC;
    unique /= NC;
    let mu = unique % NDIM;
    unique /= NDIM;
    (unique, mu, row, col, c)
}

/// Capacidad común de todos los patrones de memoria.
///
/// Las implementaciones son funciones puras; la misma 'SiteCoord'
/// sirve a cualquier patrón porque el orden se decide aquí.
pub trait AccessPattern {
    /// Offset del real pedido dentro del array de configuración.
    fn index(site: &SiteCoord, mu: usize, row: usize, col: usize, c: usize) -> usize;

    /// Índice del sitio en el orden propio del patrón.
    fn site_index(site: &SiteCoord) -> usize;

    /// Índice único canónico del real (orden lexicográfico de sitio).
    #[inline]
    fn unique_index(site: &SiteCoord, mu: usize, row: usize, col: usize, c: usize) -> usize {
        (((site.lexicographic_index() * NDIM + mu) * NC + row) * NC + col) * 2 + c
    }

    /// Redirige un índice único canónico al offset de este patrón.
    #[inline]
    fn index_by_unique(unique: usize, dims: LatticeDims) -> usize {
        let (lexicographic, mu, row, col, c) = split_unique(unique);
        let mut site = SiteCoord::origin(dims);
        site.set_from_lexicographic(lexicographic);
        Self::index(&site, mu, row, col, c)
    }
}

/// Orden natural de fichero: sitio, mu, fila, columna, re/im.
pub struct StandardPattern;

impl AccessPattern for StandardPattern {
    #[inline(always)]
    fn index(site: &SiteCoord, mu: usize, row: usize, col: usize, c: usize) -> usize {
        (((site.lexicographic_index() * NDIM + mu) * NC + row) * NC + col) * 2 + c
    }

    #[inline(always)]
    fn site_index(site: &SiteCoord) -> usize {
        site.lexicographic_index()
    }
}

/// Patrón acelerador por defecto: mu, fila, columna, re/im, sitio
/// (dividido por paridad). Los sitios consecutivos de una clase de
/// paridad quedan contiguos para lecturas coalescidas.
pub struct GpuPattern;

impl AccessPattern for GpuPattern {
    #[inline(always)]
    fn index(site: &SiteCoord, mu: usize, row: usize, col: usize, c: usize) -> usize {
        site.full_split_index()
            + site.dims().volume() * (c + 2 * (col + NC * (row + NC * mu)))
    }

    #[inline(always)]
    fn site_index(site: &SiteCoord) -> usize {
        site.full_split_index()
    }
}

/// Variante histórica del patrón acelerador usada por las cadenas de
/// fijación Landau; comparte orden con 'GpuPattern' y se conserva por
/// compatibilidad de formatos.
pub struct GpuLandauPattern;

impl AccessPattern for GpuLandauPattern {
    #[inline(always)]
    fn index(site: &SiteCoord, mu: usize, row: usize, col: usize, c: usize) -> usize {
        GpuPattern::index(site, mu, row, col, c)
    }

    #[inline(always)]
    fn site_index(site: &SiteCoord) -> usize {
        GpuPattern::site_index(site)
    }
}

/// Rebanada temporal mayor; dentro de la rebanada: mu, fila, columna,
/// re/im, sitio espacial (dividido por paridad).
pub struct GpuTimeslicePattern;

impl AccessPattern for GpuTimeslicePattern {
    #[inline(always)]
    fn index(site: &SiteCoord, mu: usize, row: usize, col: usize, c: usize) -> usize {
        let dims = site.dims();
        let slice_volume = dims.timeslice_volume();
        site.coord(0) * dims.timeslice_reals()
            + site.slice_split_index()
            + slice_volume * (c + 2 * (col + NC * (row + NC * mu)))
    }

    #[inline(always)]
    fn site_index(site: &SiteCoord) -> usize {
        site.timeslice_split_index()
    }
}

/// Layout de trabajo del motor: rebanada temporal mayor, luego
/// paridad, luego mu/fila/columna/re-im, sitio espacial menor. La
/// mitad de paridad de una rebanada es un bloque contiguo, que es
/// exactamente lo que viaja en un intercambio de halo.
pub struct TimesliceParityPriorityPattern;

impl TimesliceParityPriorityPattern {
    /// Offset dentro de una rebanada aislada (sin el término t).
    ///
    /// 'half_index' es el índice espacial dentro de la mitad de
    /// paridad, en [0, Vs/2).
    #[inline(always)]
    #[must_use]
    pub fn slab_index(
        dims: LatticeDims,
        half_index: usize,
        parity: usize,
        mu: usize,
        row: usize,
        col: usize,
        c: usize,
    ) -> usize {
        let half_volume = dims.timeslice_volume() / 2;
        half_index + half_volume * (c + 2 * (col + NC * (row + NC * (mu + NDIM * parity))))
    }

    /// Offset del comienzo de la mitad de paridad dentro de la rebanada.
    #[inline(always)]
    #[must_use]
    pub fn parity_offset(dims: LatticeDims, parity: usize) -> usize {
        if parity == 1 { dims.timeslice_reals() / 2 } else { 0 }
    }
}

impl AccessPattern for TimesliceParityPriorityPattern {
    #[inline(always)]
    fn index(site: &SiteCoord, mu: usize, row: usize, col: usize, c: usize) -> usize {
        let dims = site.dims();
        let half_volume = dims.timeslice_volume() / 2;
        let slice_split = site.slice_split_index();
        let parity = slice_split / half_volume;
        let half_index = slice_split % half_volume;
        site.coord(0) * dims.timeslice_reals()
            + Self::slab_index(dims, half_index, parity, mu, row, col, c)
    }

    #[inline(always)]
    fn site_index(site: &SiteCoord) -> usize {
        site.timeslice_split_index()
    }
}

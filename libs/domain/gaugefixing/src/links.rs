// [libs/domain/gaugefixing/src/links.rs]
/*!
 * =================================================================
 * APARATO: SLAB LINK ACCESSOR (V6.1 - TWO-ROW TRAFFIC)
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: CARGA/DESCARGA DE ENLACES SOBRE REBANADAS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. BANDWIDTH DISCIPLINE: Solo las dos primeras filas viajan entre
 *    el slab y los registros; la tercera se reconstruye al cargar y
 *    jamás se persiste.
 * 2. SHARED VIEW: La vista cruda del slab habilita la mutación
 *    paralela intra-paridad; su contrato de seguridad es la
 *    no-interferencia checkerboard.
 * =================================================================
 */

use lgf_core_lattice::prelude::{LatticeDims, TimesliceParityPriorityPattern};
use lgf_core_su3::prelude::{Complex, Real, Su3};

/// Los ocho enlaces adjuntos a un sitio, indexados por (mu, up/down).
#[derive(Debug, Clone)]
pub struct SiteLinks {
    /// Orden: updown * 4 + mu. updown=0 son los enlaces salientes.
    pub links: [Su3; 8],
}

impl SiteLinks {
    /// Enlace en la dirección mu, saliente (updown=0) o entrante.
    #[inline(always)]
    #[must_use]
    pub fn link(&self, mu: usize, updown: usize) -> &Su3 {
        &self.links[updown * 4 + mu]
    }

    /// Acceso mutable al mismo enlace.
    #[inline(always)]
    pub fn link_mut(&mut self, mu: usize, updown: usize) -> &mut Su3 {
        &mut self.links[updown * 4 + mu]
    }
}

/// Carga un enlace desde el slab de su rebanada y reconstruye la
/// fila derivada.
#[inline]
#[must_use]
pub fn read_link(dims: LatticeDims, slab: &[Real], slice_split_index: usize, mu: usize) -> Su3 {
    let half_volume = dims.timeslice_volume() / 2;
    let parity = slice_split_index / half_volume;
    let half_index = slice_split_index % half_volume;
    let mut link = Su3::identity();
    for row in 0..2 {
        for col in 0..3 {
            let re = slab
                [TimesliceParityPriorityPattern::slab_index(dims, half_index, parity, mu, row, col, 0)];
            let im = slab
                [TimesliceParityPriorityPattern::slab_index(dims, half_index, parity, mu, row, col, 1)];
            link.set(row, col, Complex::new(re, im));
        }
    }
    link.reconstruct_third_row();
    link
}

/// Persiste las dos primeras filas de un enlace en su slab.
#[inline]
pub fn write_link(
    dims: LatticeDims,
    slab: &mut [Real],
    slice_split_index: usize,
    mu: usize,
    link: &Su3,
) {
    let half_volume = dims.timeslice_volume() / 2;
    let parity = slice_split_index / half_volume;
    let half_index = slice_split_index % half_volume;
    for row in 0..2 {
        for col in 0..3 {
            let cell = link.get(row, col);
            slab[TimesliceParityPriorityPattern::slab_index(
                dims, half_index, parity, mu, row, col, 0,
            )] = cell.re;
            slab[TimesliceParityPriorityPattern::slab_index(
                dims, half_index, parity, mu, row, col, 1,
            )] = cell.im;
        }
    }
}

/// Persiste la matriz completa (las tres filas) de un enlace.
///
/// Camino del sellado: los barridos solo escriben dos filas, así que
/// la ranura de la fila derivada del slab queda obsoleta hasta que la
/// pasada de restauración la reescribe antes de persistir a fichero.
#[inline]
pub fn write_link_full(
    dims: LatticeDims,
    slab: &mut [Real],
    slice_split_index: usize,
    mu: usize,
    link: &Su3,
) {
    let half_volume = dims.timeslice_volume() / 2;
    let parity = slice_split_index / half_volume;
    let half_index = slice_split_index % half_volume;
    for row in 0..3 {
        for col in 0..3 {
            let cell = link.get(row, col);
            slab[TimesliceParityPriorityPattern::slab_index(
                dims, half_index, parity, mu, row, col, 0,
            )] = cell.re;
            slab[TimesliceParityPriorityPattern::slab_index(
                dims, half_index, parity, mu, row, col, 1,
            )] = cell.im;
        }
    }
}

/// Vista cruda de un slab para la mutación paralela intra-paridad.
///
/// SEGURIDAD: dos sitios de la misma clase de paridad no comparten
/// ningún enlace (coloreado checkerboard), de modo que las tareas del
/// barrido escriben en offsets disjuntos. La vista solo vive durante
/// un barrido de una clase de paridad.
#[derive(Clone, Copy)]
pub(crate) struct SlabView {
    pointer: *mut Real,
}

unsafe impl Send for SlabView {}
unsafe impl Sync for SlabView {}

impl SlabView {
    #[inline(always)]
    pub(crate) fn new(slab: &mut [Real]) -> Self {
        Self { pointer: slab.as_mut_ptr() }
    }

    /// Lee el enlace completo a través de la vista.
    ///
    /// # Safety
    /// El offset debe pertenecer al slab y ningún otro sitio de la
    /// tarea paralela en curso puede escribir ese enlace.
    #[inline]
    pub(crate) unsafe fn read_link(
        &self,
        dims: LatticeDims,
        slice_split_index: usize,
        mu: usize,
    ) -> Su3 {
        let half_volume = dims.timeslice_volume() / 2;
        let parity = slice_split_index / half_volume;
        let half_index = slice_split_index % half_volume;
        let mut link = Su3::identity();
        for row in 0..2 {
            for col in 0..3 {
                let re = *self.pointer.add(TimesliceParityPriorityPattern::slab_index(
                    dims, half_index, parity, mu, row, col, 0,
                ));
                let im = *self.pointer.add(TimesliceParityPriorityPattern::slab_index(
                    dims, half_index, parity, mu, row, col, 1,
                ));
                link.set(row, col, Complex::new(re, im));
            }
        }
        link.reconstruct_third_row();
        link
    }

    /// Escribe las dos primeras filas a través de la vista.
    ///
    /// # Safety
    /// Mismas condiciones que 'read_link'.
    #[inline]
    pub(crate) unsafe fn write_link(
        &self,
        dims: LatticeDims,
        slice_split_index: usize,
        mu: usize,
        link: &Su3,
    ) {
        let half_volume = dims.timeslice_volume() / 2;
        let parity = slice_split_index / half_volume;
        let half_index = slice_split_index % half_volume;
        for row in 0..2 {
            for col in 0..3 {
                let cell = link.get(row, col);
                *self.pointer.add(TimesliceParityPriorityPattern::slab_index(
                    dims, half_index, parity, mu, row, col, 0,
                )) = cell.re;
                *self.pointer.add(TimesliceParityPriorityPattern::slab_index(
                    dims, half_index, parity, mu, row, col, 1,
                )) = cell.im;
            }
        }
    }

    /// Escribe la matriz completa (tres filas) a través de la vista.
    ///
    /// # Safety
    /// Mismas condiciones que 'read_link'.
    #[inline]
    pub(crate) unsafe fn write_link_full(
        &self,
        dims: LatticeDims,
        slice_split_index: usize,
        mu: usize,
        link: &Su3,
    ) {
        let half_volume = dims.timeslice_volume() / 2;
        let parity = slice_split_index / half_volume;
        let half_index = slice_split_index % half_volume;
        for row in 0..3 {
            for col in 0..3 {
                let cell = link.get(row, col);
                *self.pointer.add(TimesliceParityPriorityPattern::slab_index(
                    dims, half_index, parity, mu, row, col, 0,
                )) = cell.re;
                *self.pointer.add(TimesliceParityPriorityPattern::slab_index(
                    dims, half_index, parity, mu, row, col, 1,
                )) = cell.im;
            }
        }
    }
}

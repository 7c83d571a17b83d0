// [libs/infra/linkfile/src/qcdstag.rs]
/*!
 * =================================================================
 * APARATO: QCDSTAG FORMAT HANDLER (V4.2 - MU MAJOR)
 * CLASIFICACIÓN: INFRA PERSISTENCE (ESTRATO L3)
 * RESPONSABILIDAD: DOUBLES LITTLE-ENDIAN EN ORDEN (mu,t,z,y,x,...)
 *
 * El payload agrupa primero por dirección del retículo y después por
 * sitio en orden (t, z, y, x); cada enlace son 18 doubles (fila,
 * columna, re/im). Carga y guardado son simétricos byte a byte.
 * =================================================================
 */

use crate::errors::LinkFileError;
use byteorder::{ByteOrder, LittleEndian};
use lgf_core_lattice::prelude::{
    AccessPattern, LatticeDims, SiteCoord, TimesliceParityPriorityPattern,
};
use lgf_core_su3::prelude::Real;
use memmap2::Mmap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Manejador del formato QCDSTAG.
pub struct QcdstagFile;

/// Posición del real en el payload mu-mayor del fichero.
#[inline]
fn file_place(
    dims: LatticeDims,
    mu: usize,
    t: usize,
    x: usize,
    y: usize,
    z: usize,
    row: usize,
    col: usize,
    c: usize,
) -> usize {
    let (nt, nx, ny, nz) = (dims.extent(0), dims.extent(1), dims.extent(2), dims.extent(3));
    let file_site = ((mu * nt + t) * nz + z) * ny * nx + y * nx + x;
    file_site * 18 + row * 6 + col * 2 + c
}

/// Índice único canónico del mismo real en memoria.
#[inline]
fn memory_unique(
    dims: LatticeDims,
    mu: usize,
    t: usize,
    x: usize,
    y: usize,
    z: usize,
    row: usize,
    col: usize,
    c: usize,
) -> usize {
    let site = SiteCoord::from_coords(dims, [t, x, y, z]);
    (((site.lexicographic_index() * 4 + mu) * 3 + row) * 3 + col) * 2 + c
}

impl QcdstagFile {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Carga el payload mu-mayor en el layout de trabajo.
    pub fn load(
        &mut self,
        dims: LatticeDims,
        path: &Path,
        field: &mut [Real],
    ) -> Result<(), LinkFileError> {
        let file = File::open(path)
            .map_err(|source| LinkFileError::Open { path: path.to_path_buf(), source })?;
        let mapping = unsafe { Mmap::map(&file) }
            .map_err(|source| LinkFileError::Open { path: path.to_path_buf(), source })?;

        let expected = dims.total_reals() * 8;
        if mapping.len() != expected {
            return Err(LinkFileError::ShortRead {
                path: path.to_path_buf(),
                expected,
                found: mapping.len(),
            });
        }

        for mu in 0..4 {
            for t in 0..dims.extent(0) {
                for z in 0..dims.extent(3) {
                    for y in 0..dims.extent(2) {
                        for x in 0..dims.extent(1) {
                            for row in 0..3 {
                                for col in 0..3 {
                                    for c in 0..2 {
                                        let place = file_place(dims, mu, t, x, y, z, row, col, c);
                                        let unique = memory_unique(dims, mu, t, x, y, z, row, col, c);
                                        field[TimesliceParityPriorityPattern::index_by_unique(
                                            unique, dims,
                                        )] = LittleEndian::read_f64(
                                            &mapping[place * 8..place * 8 + 8],
                                        );
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Persiste el payload mu-mayor desde el layout de trabajo.
    pub fn save(&self, dims: LatticeDims, path: &Path, field: &[Real]) -> Result<(), LinkFileError> {
        let mut payload = vec![0u8; dims.total_reals() * 8];
        for mu in 0..4 {
            for t in 0..dims.extent(0) {
                for z in 0..dims.extent(3) {
                    for y in 0..dims.extent(2) {
                        for x in 0..dims.extent(1) {
                            for row in 0..3 {
                                for col in 0..3 {
                                    for c in 0..2 {
                                        let place = file_place(dims, mu, t, x, y, z, row, col, c);
                                        let unique = memory_unique(dims, mu, t, x, y, z, row, col, c);
                                        let value = field
                                            [TimesliceParityPriorityPattern::index_by_unique(
                                                unique, dims,
                                            )];
                                        LittleEndian::write_f64(
                                            &mut payload[place * 8..place * 8 + 8],
                                            value,
                                        );
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        let file = File::create(path)
            .map_err(|source| LinkFileError::Open { path: path.to_path_buf(), source })?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(&payload)
            .and_then(|()| writer.flush())
            .map_err(|source| LinkFileError::Write { path: path.to_path_buf(), source })?;
        Ok(())
    }
}

impl Default for QcdstagFile {
    fn default() -> Self {
        Self::new()
    }
}

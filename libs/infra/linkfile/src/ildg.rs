// [libs/infra/linkfile/src/ildg.rs]
/*!
 * =================================================================
 * APARATO: ILDG FORMAT HANDLER (V7.0 - LIME CARRIER)
 * CLASIFICACIÓN: INFRA PERSISTENCE (ESTRATO L3)
 * RESPONSABILIDAD: REGISTRO ildg-binary-data Y METADATOS INTACTOS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. RECORD FIDELITY: Todos los registros no binarios se copian sin
 *    alterar; el registro xlf-info recibe la anotación de pasos de
 *    recocido al guardar.
 * 2. AXIS CONVENTION: El payload es big-endian f64 en orden
 *    (t, z, y, x, mu', fila, columna, re/im) con mu' = (mu+1) mod 4:
 *    el fichero coloca la dirección temporal en la última posición.
 * =================================================================
 */

use crate::errors::LinkFileError;
use crate::lime::{read_records, write_records, LimeRecord};
use byteorder::{BigEndian, ByteOrder};
use lgf_core_lattice::prelude::{
    AccessPattern, LatticeDims, SiteCoord, TimesliceParityPriorityPattern,
};
use lgf_core_su3::prelude::Real;
use std::path::Path;
use tracing::debug;

const BINARY_RECORD: &str = "ildg-binary-data";
const XLF_RECORD: &str = "xlf-info";

/// Manejador del formato ILDG.
pub struct IldgFile {
    records: Vec<LimeRecord>,
    annealing_steps: usize,
}

/// Posición del real en el payload del fichero para el recorrido
/// (t, z, y, x, mu_fichero, fila, columna, re/im).
#[inline]
fn file_place(
    dims: LatticeDims,
    t: usize,
    x: usize,
    y: usize,
    z: usize,
    file_mu: usize,
    row: usize,
    col: usize,
    c: usize,
) -> usize {
    let (nx, ny, nz) = (dims.extent(1), dims.extent(2), dims.extent(3));
    let file_site = t * nx * ny * nz + z * nx * ny + y * nx + x;
    (file_site * 4 + file_mu) * 18 + row * 6 + col * 2 + c
}

/// Índice único canónico del mismo real en memoria; la dirección del
/// retículo es mu = (mu_fichero + 1) mod 4.
#[inline]
fn memory_unique(
    dims: LatticeDims,
    t: usize,
    x: usize,
    y: usize,
    z: usize,
    file_mu: usize,
    row: usize,
    col: usize,
    c: usize,
) -> usize {
    let mu = if file_mu == 3 { 0 } else { file_mu + 1 };
    let site = SiteCoord::from_coords(dims, [t, x, y, z]);
    (((site.lexicographic_index() * 4 + mu) * 3 + row) * 3 + col) * 2 + c
}

impl IldgFile {
    #[must_use]
    pub const fn new() -> Self {
        Self { records: Vec::new(), annealing_steps: 0 }
    }

    /// Anota los pasos de recocido para el registro xlf-info.
    pub fn set_annealing_steps(&mut self, steps: usize) {
        self.annealing_steps = steps;
    }

    /// Carga el registro binario y retiene el sobre completo.
    pub fn load(
        &mut self,
        dims: LatticeDims,
        path: &Path,
        field: &mut [Real],
    ) -> Result<(), LinkFileError> {
        self.records = read_records(path)?;
        let binary = self
            .records
            .iter()
            .find(|record| record.lime_type == BINARY_RECORD)
            .ok_or_else(|| LinkFileError::MissingBinaryRecord { path: path.to_path_buf() })?;

        let expected = dims.total_reals() * 8;
        if binary.data.len() != expected {
            return Err(LinkFileError::ShortRead {
                path: path.to_path_buf(),
                expected,
                found: binary.data.len(),
            });
        }

        for t in 0..dims.extent(0) {
            for z in 0..dims.extent(3) {
                for y in 0..dims.extent(2) {
                    for x in 0..dims.extent(1) {
                        for file_mu in 0..4 {
                            for row in 0..3 {
                                for col in 0..3 {
                                    for c in 0..2 {
                                        let place =
                                            file_place(dims, t, x, y, z, file_mu, row, col, c);
                                        let unique =
                                            memory_unique(dims, t, x, y, z, file_mu, row, col, c);
                                        field[TimesliceParityPriorityPattern::index_by_unique(
                                            unique, dims,
                                        )] = BigEndian::read_f64(
                                            &binary.data[place * 8..place * 8 + 8],
                                        );
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        debug!(
            "📦 [ILDG_LOAD]: {} registros LIME retenidos desde '{}'",
            self.records.len(),
            path.display()
        );
        Ok(())
    }

    /// Reescribe el sobre: binario regenerado, xlf-info anotado, el
    /// resto de registros byte a byte.
    pub fn save(&self, dims: LatticeDims, path: &Path, field: &[Real]) -> Result<(), LinkFileError> {
        if self.records.is_empty() {
            return Err(LinkFileError::MissingBinaryRecord { path: path.to_path_buf() });
        }

        let mut outgoing = Vec::with_capacity(self.records.len());
        for record in &self.records {
            if record.lime_type == BINARY_RECORD {
                let mut payload = vec![0u8; dims.total_reals() * 8];
                for t in 0..dims.extent(0) {
                    for z in 0..dims.extent(3) {
                        for y in 0..dims.extent(2) {
                            for x in 0..dims.extent(1) {
                                for file_mu in 0..4 {
                                    for row in 0..3 {
                                        for col in 0..3 {
                                            for c in 0..2 {
                                                let place = file_place(
                                                    dims, t, x, y, z, file_mu, row, col, c,
                                                );
                                                let unique = memory_unique(
                                                    dims, t, x, y, z, file_mu, row, col, c,
                                                );
                                                let value = field
                                                    [TimesliceParityPriorityPattern::index_by_unique(
                                                        unique, dims,
                                                    )];
                                                BigEndian::write_f64(
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
                outgoing.push(LimeRecord { data: payload, ..record.clone() });
            } else if record.lime_type == XLF_RECORD {
                let mut annotated = String::from_utf8_lossy(&record.data).into_owned();
                annotated.push_str(&format!(" SA steps {}", self.annealing_steps));
                outgoing.push(LimeRecord { data: annotated.into_bytes(), ..record.clone() });
            } else {
                outgoing.push(record.clone());
            }
        }
        write_records(path, &outgoing)
    }
}

impl Default for IldgFile {
    fn default() -> Self {
        Self::new()
    }
}

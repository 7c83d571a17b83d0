// [libs/infra/linkfile/src/vogt.rs]
/*!
 * =================================================================
 * APARATO: VOGT FORMAT HANDLER (V4.0 - SELF DESCRIBING)
 * CLASIFICACIÓN: INFRA PERSISTENCE (ESTRATO L3)
 * RESPONSABILIDAD: CABECERA AUTODESCRIPTIVA + PAYLOAD ÚNICO
 *
 * Cabecera de 32 bytes little-endian: magia "VOGT", dimensión,
 * número de colores, las cuatro extensiones (t, x, y, z) y el ancho
 * del elemento en bytes. La carga verifica que el fichero describa
 * exactamente el retículo compilado.
 * =================================================================
 */

use crate::codec::{decode_element, element_bytes, encode_element};
use crate::errors::LinkFileError;
use crate::ReinterpretReal;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use lgf_core_lattice::prelude::{AccessPattern, LatticeDims, TimesliceParityPriorityPattern};
use lgf_core_su3::prelude::Real;
use lgf_core_su3::{NC, NDIM};
use memmap2::Mmap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const VOGT_MAGIC: &[u8; 4] = b"VOGT";
const VOGT_HEADER_BYTES: usize = 32;

/// Manejador del formato VOGT.
pub struct VogtFile {
    reinterpret: ReinterpretReal,
}

impl VogtFile {
    #[must_use]
    pub const fn new(reinterpret: ReinterpretReal) -> Self {
        Self { reinterpret }
    }

    /// Carga la configuración validando la cabecera.
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

        if mapping.len() < VOGT_HEADER_BYTES {
            return Err(LinkFileError::ShortRead {
                path: path.to_path_buf(),
                expected: VOGT_HEADER_BYTES,
                found: mapping.len(),
            });
        }
        if &mapping[..4] != VOGT_MAGIC {
            return Err(LinkFileError::BadHeader {
                path: path.to_path_buf(),
                reason: "magia VOGT ausente".to_string(),
            });
        }

        let mut cursor = &mapping[4..VOGT_HEADER_BYTES];
        let file_ndim = cursor.read_i32::<LittleEndian>().unwrap_or_default() as usize;
        let file_nc = cursor.read_i32::<LittleEndian>().unwrap_or_default() as usize;
        let mut extents = [0usize; 4];
        for extent in extents.iter_mut() {
            *extent = cursor.read_i32::<LittleEndian>().unwrap_or_default() as usize;
        }
        let file_width = cursor.read_i32::<LittleEndian>().unwrap_or_default() as usize;

        if file_ndim != NDIM || file_nc != NC {
            return Err(LinkFileError::BadHeader {
                path: path.to_path_buf(),
                reason: format!("ndim = {file_ndim}, nc = {file_nc} no soportados"),
            });
        }
        let expected_extents =
            [dims.extent(0), dims.extent(1), dims.extent(2), dims.extent(3)];
        if extents != expected_extents {
            return Err(LinkFileError::ExtentMismatch {
                path: path.to_path_buf(),
                expected: expected_extents,
                found: extents,
            });
        }

        let payload_reinterpret = match file_width {
            4 => ReinterpretReal::Float,
            8 => ReinterpretReal::Double,
            other => {
                return Err(LinkFileError::BadHeader {
                    path: path.to_path_buf(),
                    reason: format!("ancho de elemento {other} desconocido"),
                })
            }
        };

        let total = dims.total_reals();
        let expected = VOGT_HEADER_BYTES + total * element_bytes(payload_reinterpret);
        if mapping.len() != expected {
            return Err(LinkFileError::ShortRead {
                path: path.to_path_buf(),
                expected,
                found: mapping.len(),
            });
        }

        let payload = &mapping[VOGT_HEADER_BYTES..];
        for unique in 0..total {
            field[TimesliceParityPriorityPattern::index_by_unique(unique, dims)] =
                decode_element(payload, unique, payload_reinterpret);
        }
        Ok(())
    }

    /// Persiste cabecera y payload con el ancho configurado.
    pub fn save(&self, dims: LatticeDims, path: &Path, field: &[Real]) -> Result<(), LinkFileError> {
        let file = File::create(path)
            .map_err(|source| LinkFileError::Open { path: path.to_path_buf(), source })?;
        let mut writer = BufWriter::new(file);
        let write_fault =
            |source| LinkFileError::Write { path: path.to_path_buf(), source };

        writer.write_all(VOGT_MAGIC).map_err(write_fault)?;
        writer.write_i32::<LittleEndian>(NDIM as i32).map_err(write_fault)?;
        writer.write_i32::<LittleEndian>(NC as i32).map_err(write_fault)?;
        for direction in 0..4 {
            writer.write_i32::<LittleEndian>(dims.extent(direction) as i32).map_err(write_fault)?;
        }
        writer
            .write_i32::<LittleEndian>(element_bytes(self.reinterpret) as i32)
            .map_err(write_fault)?;

        for unique in 0..dims.total_reals() {
            let value = field[TimesliceParityPriorityPattern::index_by_unique(unique, dims)];
            encode_element(&mut writer, value, self.reinterpret).map_err(write_fault)?;
        }
        writer.flush().map_err(write_fault)?;
        Ok(())
    }
}

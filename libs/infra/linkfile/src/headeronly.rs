// [libs/infra/linkfile/src/headeronly.rs]
/*!
 * =================================================================
 * APARATO: HEADERONLY FORMAT HANDLER (V4.1)
 * CLASIFICACIÓN: INFRA PERSISTENCE (ESTRATO L3)
 * RESPONSABILIDAD: PAYLOAD PLAIN PRECEDIDO DE CABECERA OPACA
 *
 * La cabecera es un bloque de tamaño fijo que el motor no interpreta:
 * se retiene byte a byte en la carga y se antepone intacta en el
 * guardado. Su longitud es la del fichero menos la del payload.
 * =================================================================
 */

use crate::codec::{decode_element, element_bytes, encode_element};
use crate::errors::LinkFileError;
use crate::ReinterpretReal;
use lgf_core_lattice::prelude::{AccessPattern, LatticeDims, TimesliceParityPriorityPattern};
use lgf_core_su3::prelude::Real;
use memmap2::Mmap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Manejador del formato HEADERONLY.
pub struct HeaderOnlyFile {
    reinterpret: ReinterpretReal,
    header: Vec<u8>,
}

impl HeaderOnlyFile {
    #[must_use]
    pub const fn new(reinterpret: ReinterpretReal) -> Self {
        Self { reinterpret, header: Vec::new() }
    }

    /// Carga la configuración, reteniendo la cabecera opaca.
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

        let total = dims.total_reals();
        let payload_bytes = total * element_bytes(self.reinterpret);
        if mapping.len() < payload_bytes {
            return Err(LinkFileError::ShortRead {
                path: path.to_path_buf(),
                expected: payload_bytes,
                found: mapping.len(),
            });
        }

        let header_bytes = mapping.len() - payload_bytes;
        self.header = mapping[..header_bytes].to_vec();
        let payload = &mapping[header_bytes..];
        for unique in 0..total {
            field[TimesliceParityPriorityPattern::index_by_unique(unique, dims)] =
                decode_element(payload, unique, self.reinterpret);
        }
        debug!(
            "📦 [HEADERONLY_LOAD]: cabecera de {} bytes preservada desde '{}'",
            header_bytes,
            path.display()
        );
        Ok(())
    }

    /// Persiste la cabecera retenida seguida del payload.
    pub fn save(&self, dims: LatticeDims, path: &Path, field: &[Real]) -> Result<(), LinkFileError> {
        let file = File::create(path)
            .map_err(|source| LinkFileError::Open { path: path.to_path_buf(), source })?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(&self.header)
            .map_err(|source| LinkFileError::Write { path: path.to_path_buf(), source })?;
        for unique in 0..dims.total_reals() {
            let value = field[TimesliceParityPriorityPattern::index_by_unique(unique, dims)];
            encode_element(&mut writer, value, self.reinterpret)
                .map_err(|source| LinkFileError::Write { path: path.to_path_buf(), source })?;
        }
        writer
            .flush()
            .map_err(|source| LinkFileError::Write { path: path.to_path_buf(), source })?;
        Ok(())
    }
}

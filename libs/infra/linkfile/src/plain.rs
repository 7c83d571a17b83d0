// [libs/infra/linkfile/src/plain.rs]
/*!
 * =================================================================
 * APARATO: PLAIN FORMAT HANDLER (V5.0)
 * CLASIFICACIÓN: INFRA PERSISTENCE (ESTRATO L3)
 * RESPONSABILIDAD: SECUENCIA CRUDA LITTLE-ENDIAN EN ORDEN ÚNICO
 *
 * El fichero es exactamente |Lambda|·Nd·Nc²·2 elementos en el orden
 * único canónico (sitio lexicográfico, mu, fila, columna, re/im).
 * Cargar y guardar sin fijar reproduce el fichero byte a byte.
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

/// Manejador del formato PLAIN.
pub struct PlainFile {
    reinterpret: ReinterpretReal,
}

impl PlainFile {
    #[must_use]
    pub const fn new(reinterpret: ReinterpretReal) -> Self {
        Self { reinterpret }
    }

    /// Carga el payload completo enrutándolo al layout de trabajo.
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
        let expected = total * element_bytes(self.reinterpret);
        if mapping.len() != expected {
            return Err(LinkFileError::ShortRead {
                path: path.to_path_buf(),
                expected,
                found: mapping.len(),
            });
        }

        for unique in 0..total {
            field[TimesliceParityPriorityPattern::index_by_unique(unique, dims)] =
                decode_element(&mapping, unique, self.reinterpret);
        }
        debug!("📦 [PLAIN_LOAD]: {} reales desde '{}'", total, path.display());
        Ok(())
    }

    /// Persiste el payload en el orden único canónico.
    pub fn save(&self, dims: LatticeDims, path: &Path, field: &[Real]) -> Result<(), LinkFileError> {
        let file = File::create(path)
            .map_err(|source| LinkFileError::Open { path: path.to_path_buf(), source })?;
        let mut writer = BufWriter::new(file);
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

// [libs/infra/linkfile/src/lib.rs]
/*!
 * =================================================================
 * APARATO: LINK FILE MASTER HUB (V10.0 - FORMAT SOVEREIGN)
 * CLASIFICACIÓN: INFRA PERSISTENCE (ESTRATO L3)
 * RESPONSABILIDAD: CONVERSIÓN FICHERO <-> LAYOUT DE TRABAJO
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. UNIQUE ROUTING: Todo formato enruta sus reales a través del
 *    índice único canónico y del 'index_by_unique' del patrón de
 *    trabajo; el layout en memoria es invisible para el fichero.
 * 2. SYMMETRIC CONTRACT: Cargar y guardar sin fijar reproduce el
 *    fichero byte a byte (PLAIN, QCDSTAG, VOGT) o módulo la
 *    anotación de metadatos (ILDG).
 * 3. WIDTH ADAPTATION: Los formatos crudos reinterpretan el ancho
 *    del elemento (STANDARD/FLOAT/DOUBLE) en carga y guardado.
 * =================================================================
 */

/// Ancho y endianidad de los elementos crudos.
pub(crate) mod codec;
/// Catálogo de fallos de persistencia.
pub mod errors;
/// Formato HEADERONLY: cabecera opaca preservada + carga única.
pub mod headeronly;
/// Formato ILDG sobre sobre LIME.
pub mod ildg;
/// Lector/escritor del envoltorio LIME.
pub mod lime;
/// Construcción de nombres de fichero numerados.
pub mod naming;
/// Formato PLAIN: secuencia cruda little-endian en orden único.
pub mod plain;
/// Formato QCDSTAG: doubles little-endian con dirección mayor.
pub mod qcdstag;
/// Formato VOGT: cabecera autodescriptiva + carga única.
pub mod vogt;

use lgf_core_lattice::prelude::LatticeDims;
use lgf_core_su3::prelude::Real;
use std::path::Path;

pub use crate::errors::LinkFileError;

/// Ancho del elemento al reinterpretar formatos crudos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReinterpretReal {
    /// Sin adaptación: el ancho nativo del motor (f64).
    #[default]
    Standard,
    /// El fichero guarda f32; se promociona al cargar.
    Float,
    /// El fichero guarda f64 explícitamente.
    Double,
}

/// Tipo de fichero de configuración aceptado por el motor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Plain,
    HeaderOnly,
    Vogt,
    Ildg,
    Qcdstag,
}

/// Manejador con estado de un formato concreto: los formatos con
/// metadatos (cabecera opaca, registros LIME) los retienen entre la
/// carga y el guardado.
pub enum LinkFileFormat {
    Plain(plain::PlainFile),
    HeaderOnly(headeronly::HeaderOnlyFile),
    Vogt(vogt::VogtFile),
    Ildg(ildg::IldgFile),
    Qcdstag(qcdstag::QcdstagFile),
}

impl LinkFileFormat {
    /// Manejador virgen para el tipo pedido.
    #[must_use]
    pub fn open(kind: FileKind, reinterpret: ReinterpretReal) -> Self {
        match kind {
            FileKind::Plain => Self::Plain(plain::PlainFile::new(reinterpret)),
            FileKind::HeaderOnly => Self::HeaderOnly(headeronly::HeaderOnlyFile::new(reinterpret)),
            FileKind::Vogt => Self::Vogt(vogt::VogtFile::new(reinterpret)),
            FileKind::Ildg => Self::Ildg(ildg::IldgFile::new()),
            FileKind::Qcdstag => Self::Qcdstag(qcdstag::QcdstagFile::new()),
        }
    }

    /// Carga la configuración en el layout de trabajo.
    pub fn load(
        &mut self,
        dims: LatticeDims,
        path: &Path,
        field: &mut [Real],
    ) -> Result<(), LinkFileError> {
        match self {
            Self::Plain(handler) => handler.load(dims, path, field),
            Self::HeaderOnly(handler) => handler.load(dims, path, field),
            Self::Vogt(handler) => handler.load(dims, path, field),
            Self::Ildg(handler) => handler.load(dims, path, field),
            Self::Qcdstag(handler) => handler.load(dims, path, field),
        }
    }

    /// Persiste la configuración desde el layout de trabajo.
    pub fn save(&self, dims: LatticeDims, path: &Path, field: &[Real]) -> Result<(), LinkFileError> {
        match self {
            Self::Plain(handler) => handler.save(dims, path, field),
            Self::HeaderOnly(handler) => handler.save(dims, path, field),
            Self::Vogt(handler) => handler.save(dims, path, field),
            Self::Ildg(handler) => handler.save(dims, path, field),
            Self::Qcdstag(handler) => handler.save(dims, path, field),
        }
    }

    /// Anota los pasos de recocido ejecutados (solo ILDG: registro
    /// xlf-info; el resto de formatos lo ignora).
    pub fn set_annealing_steps(&mut self, steps: usize) {
        if let Self::Ildg(handler) = self {
            handler.set_annealing_steps(steps);
        }
    }
}

/**
 * PRELUDIO DE PERSISTENCIA SOBERANO
 */
pub mod prelude {
    pub use crate::errors::LinkFileError;
    pub use crate::naming::{input_path, output_path, NamingScheme};
    pub use crate::{FileKind, LinkFileFormat, ReinterpretReal};
}

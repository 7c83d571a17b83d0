// [libs/infra/linkfile/src/errors.rs]
/*!
 * =================================================================
 * APARATO: PERSISTENCE FAULT CATALOG (V4.0)
 * CLASIFICACIÓN: INFRA PERSISTENCE (ESTRATO L3)
 * RESPONSABILIDAD: TAXONOMÍA DE FALLOS DE E/S DE CONFIGURACIONES
 *
 * Los fallos de fichero se reportan por configuración; el motor de
 * lotes continúa con la siguiente en vez de abortar la corrida.
 * =================================================================
 */

use std::path::PathBuf;
use thiserror::Error;

/// Fallos de carga/guardado de configuraciones.
#[derive(Debug, Error)]
pub enum LinkFileError {
    /// El fichero no pudo abrirse o mapearse.
    #[error("IO_FAULT: imposible abrir '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// El fichero termina antes de la carga esperada.
    #[error("IO_FAULT: lectura corta en '{path}': esperados {expected} bytes, presentes {found}")]
    ShortRead { path: PathBuf, expected: usize, found: usize },

    /// Fallo de escritura del fichero de salida.
    #[error("IO_FAULT: escritura fallida en '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Cabecera incoherente con el formato declarado.
    #[error("IO_FAULT: cabecera inválida en '{path}': {reason}")]
    BadHeader { path: PathBuf, reason: String },

    /// El sobre LIME no arranca con la palabra mágica.
    #[error("IO_FAULT: magia LIME ausente en '{path}'")]
    BadLimeMagic { path: PathBuf },

    /// El sobre LIME no contiene el registro de datos binarios.
    #[error("IO_FAULT: registro 'ildg-binary-data' ausente en '{path}'")]
    MissingBinaryRecord { path: PathBuf },

    /// Las extensiones declaradas no casan con el retículo compilado.
    #[error("IO_FAULT: '{path}' declara extensiones {found:?}, el retículo es {expected:?}")]
    ExtentMismatch { path: PathBuf, expected: [usize; 4], found: [usize; 4] },
}

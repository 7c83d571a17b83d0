// [libs/infra/linkfile/src/naming.rs]
/*!
 * =================================================================
 * APARATO: CONFIGURATION NAMING ENGINE (V3.2)
 * CLASIFICACIÓN: INFRA PERSISTENCE (ESTRATO L3)
 * RESPONSABILIDAD: NOMBRES NUMERADOS DE ENTRADA Y SALIDA
 * =================================================================
 */

use std::path::PathBuf;

/// Política de numeración y afijos de una corrida por lotes.
#[derive(Debug, Clone)]
pub struct NamingScheme {
    /// Parte del nombre de entrada anterior a la numeración.
    pub basename: String,
    /// Terminación de los ficheros de entrada.
    pub ending: String,
    /// Anchura de la numeración: 1 -> (0,1,..,10), 2 -> (00,01,...), ...
    pub number_format: usize,
    /// Primer índice de configuración.
    pub start_number: usize,
    /// Paso entre configuraciones consecutivas del lote.
    pub step_number: usize,
    /// Apéndice insertado entre el nombre y el número en la salida.
    pub output_appendix: String,
    /// Ruta de salida alternativa (sustituye al basename si existe).
    pub output_conf: Option<String>,
    /// Terminación de los ficheros de salida.
    pub output_ending: String,
}

impl NamingScheme {
    /// Índice de la configuración i-ésima del lote.
    #[inline]
    #[must_use]
    pub const fn number_of(&self, index: usize) -> usize {
        self.start_number + index * self.step_number
    }

    /// Ruta del fichero de entrada de la configuración i-ésima.
    #[must_use]
    pub fn input(&self, index: usize) -> PathBuf {
        input_path(&self.basename, self.number_format, self.number_of(index), &self.ending)
    }

    /// Ruta del fichero de salida de la configuración i-ésima.
    #[must_use]
    pub fn output(&self, index: usize) -> PathBuf {
        let stem = match &self.output_conf {
            Some(explicit) => explicit.clone(),
            None => format!("{}{}", self.basename, self.output_appendix),
        };
        output_path(&stem, self.number_format, self.number_of(index), &self.output_ending)
    }

    /// Ruta de salida de una copia de gauge concreta (save_each).
    #[must_use]
    pub fn output_for_copy(&self, index: usize, copy: usize) -> PathBuf {
        let stem = match &self.output_conf {
            Some(explicit) => format!("{explicit}copy{copy}_"),
            None => format!("{}{}copy{copy}_", self.basename, self.output_appendix),
        };
        output_path(&stem, self.number_format, self.number_of(index), &self.output_ending)
    }
}

/// Nombre numerado de entrada: basename + número + terminación.
#[must_use]
pub fn input_path(basename: &str, number_format: usize, number: usize, ending: &str) -> PathBuf {
    PathBuf::from(format!("{basename}{number:0width$}{ending}", width = number_format))
}

/// Nombre numerado de salida: stem + número + terminación.
#[must_use]
pub fn output_path(stem: &str, number_format: usize, number: usize, ending: &str) -> PathBuf {
    PathBuf::from(format!("{stem}{number:0width$}{ending}", width = number_format))
}

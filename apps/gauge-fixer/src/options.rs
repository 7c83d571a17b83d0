// [apps/gauge-fixer/src/options.rs]
/*!
 * =================================================================
 * APARATO: COMMAND DIRECTIVES (V9.1 - FULL SURFACE)
 * CLASIFICACIÓN: APPLICATION LAYER (ESTRATO L4)
 * RESPONSABILIDAD: SUPERFICIE CLI COMPLETA DEL FORJADOR
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. NOMINAL SURFACE: Cada opción conserva su nombre histórico de
 *    línea de mandos (ftype, fbasename, ormaxiter, ...); los valores
 *    booleanos se pasan explícitos (--randomtrafo false).
 * 2. SOVEREIGN SUPPLEMENTS: El tipo de gauge y el número de rangos
 *    sustituyen a la antigua selección por binario dedicado y al
 *    lanzador de procesos externo.
 * =================================================================
 */

use clap::{Parser, ValueEnum};
use lgf_domain_gaugefixing::prelude::{FixingSchedule, GaugeKind};
use lgf_infra_linkfile::prelude::{FileKind, NamingScheme, ReinterpretReal};

/// Tipo de fichero de configuración en la línea de mandos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FileKindArg {
    #[value(name = "PLAIN")]
    Plain,
    #[value(name = "HEADERONLY")]
    HeaderOnly,
    #[value(name = "VOGT")]
    Vogt,
    #[value(name = "ILDG")]
    Ildg,
    #[value(name = "QCDSTAG")]
    Qcdstag,
}

impl From<FileKindArg> for FileKind {
    fn from(value: FileKindArg) -> Self {
        match value {
            FileKindArg::Plain => FileKind::Plain,
            FileKindArg::HeaderOnly => FileKind::HeaderOnly,
            FileKindArg::Vogt => FileKind::Vogt,
            FileKindArg::Ildg => FileKind::Ildg,
            FileKindArg::Qcdstag => FileKind::Qcdstag,
        }
    }
}

/// Reinterpretación del ancho del elemento en la línea de mandos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReinterpretArg {
    #[value(name = "STANDARD")]
    Standard,
    #[value(name = "FLOAT")]
    Float,
    #[value(name = "DOUBLE")]
    Double,
}

impl From<ReinterpretArg> for ReinterpretReal {
    fn from(value: ReinterpretArg) -> Self {
        match value {
            ReinterpretArg::Standard => ReinterpretReal::Standard,
            ReinterpretArg::Float => ReinterpretReal::Float,
            ReinterpretArg::Double => ReinterpretReal::Double,
        }
    }
}

/// Funcional a maximizar en la línea de mandos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GaugeArg {
    #[value(name = "LANDAU")]
    Landau,
    #[value(name = "COULOMB")]
    Coulomb,
    #[value(name = "MAG")]
    Mag,
    #[value(name = "U1XU1")]
    U1xU1,
}

impl From<GaugeArg> for GaugeKind {
    fn from(value: GaugeArg) -> Self {
        match value {
            GaugeArg::Landau => GaugeKind::Landau,
            GaugeArg::Coulomb => GaugeKind::Coulomb,
            GaugeArg::Mag => GaugeKind::MaximalAbelian,
            GaugeArg::U1xU1 => GaugeKind::U1xU1,
        }
    }
}

/// Directivas de mando del nodo de fijación.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "gauge-fixer",
    author = "Lattice Forge Team",
    version,
    about = "Lattice Forge Sovereign Gauge Fixing Node // SU(3) Cabibbo-Marinari Grid"
)]
pub struct GaugeFixerDirectives {
    /// Tipo de configuración de entrada.
    #[arg(long = "ftype", value_enum, default_value = "PLAIN")]
    pub ftype: FileKindArg,

    /// Parte del nombre de entrada anterior a la numeración.
    #[arg(long = "fbasename", default_value = "")]
    pub fbasename: String,

    /// Terminación a añadir al basename.
    #[arg(long = "fending", default_value = ".vogt")]
    pub fending: String,

    /// Anchura de numeración: 1 = (0,1,...,10), 2 = (00,01,...), ...
    #[arg(long = "fnumberformat", default_value_t = 1)]
    pub fnumberformat: usize,

    /// Índice de fichero inicial.
    #[arg(long = "fstartnumber", default_value_t = 0)]
    pub fstartnumber: usize,

    /// Cargar cada fstepnumber-ésimo fichero.
    #[arg(long = "fstepnumber", default_value_t = 1)]
    pub fstepnumber: usize,

    /// Cuántas configuraciones fijar.
    #[arg(long = "nconf", short = 'm', default_value_t = 1)]
    pub nconf: usize,

    /// Apéndice insertado entre el nombre de entrada y el número.
    #[arg(long = "fappendix", default_value = "gaugefixed_")]
    pub fappendix: String,

    /// Ruta de salida (parte anterior a la numeración).
    #[arg(long = "output_conf")]
    pub output_conf: Option<String>,

    /// Terminación de los ficheros de salida.
    #[arg(long = "output_ending", default_value = "")]
    pub output_ending: String,

    /// true: guardar cada copia de gauge; false: solo la mejor.
    #[arg(long = "save_each", default_value_t = false, action = clap::ArgAction::Set)]
    pub save_each: bool,

    /// Reinterpretación del ancho del elemento de los formatos crudos.
    #[arg(long = "reinterpret", value_enum, default_value = "STANDARD")]
    pub reinterpret: ReinterpretArg,

    /// No cargar fichero; poblar con SU(3) aleatorio.
    #[arg(long = "hotgaugefield", default_value_t = false, action = clap::ArgAction::Set)]
    pub hot_gauge_field: bool,

    /// Semilla del RNG contador-basado.
    #[arg(long = "seed", default_value_t = 1)]
    pub seed: u32,

    /// Número de copias de gauge independientes.
    #[arg(long = "gaugecopies", default_value_t = 1)]
    pub gauge_copies: usize,

    /// Transformación aleatoria previa a cada corrida.
    #[arg(long = "randomtrafo", default_value_t = true, action = clap::ArgAction::Set)]
    pub random_trafo: bool,

    /// Reproyectar a SU(3) cada arg-ésimo barrido.
    #[arg(long = "reproject", default_value_t = 100)]
    pub reproject: usize,

    /// Número de pasos de recocido simulado.
    #[arg(long = "sasteps", default_value_t = 1000)]
    pub sa_steps: usize,

    /// Temperatura mínima del recocido.
    #[arg(long = "samin", default_value_t = 0.01)]
    pub sa_min: f64,

    /// Temperatura máxima del recocido.
    #[arg(long = "samax", default_value_t = 0.4)]
    pub sa_max: f64,

    /// Barridos microcanónicos por temperatura.
    #[arg(long = "microupdates", default_value_t = 3)]
    pub sa_microupdates: usize,

    /// Tope de iteraciones de sobre-relajación.
    #[arg(long = "ormaxiter", default_value_t = 1000)]
    pub or_max_iter: usize,

    /// Parámetro omega de la sobre-relajación.
    #[arg(long = "orparameter", default_value_t = 1.7)]
    pub or_parameter: f64,

    /// Tope de iteraciones de relajación estocástica (0 = sin etapa).
    #[arg(long = "srmaxiter", default_value_t = 0)]
    pub sr_max_iter: usize,

    /// Probabilidad de la relajación estocástica.
    #[arg(long = "srparameter", default_value_t = 1.7)]
    pub sr_parameter: f64,

    /// Precisión objetivo del bucle OR (sobre theta).
    #[arg(long = "precision", default_value_t = 1e-7)]
    pub precision: f64,

    /// Cada cuántos barridos comprobar la precisión.
    #[arg(long = "checkprecision", default_value_t = 100)]
    pub check_precision: usize,

    /// true: ejecutar la etapa de recocido simulado.
    #[arg(long = "doSA", default_value_t = true, action = clap::ArgAction::Set)]
    pub do_sa: bool,

    /// Selección de acelerador: hilos de cómputo (-1 = automático).
    #[arg(long = "devicenumber", short = 'D', default_value_t = -1)]
    pub device_number: i32,

    /// Ruta de la traza temperatura-funcional del recocido.
    #[arg(long = "output_SA_functional")]
    pub output_sa_functional: Option<String>,

    /// Funcional a maximizar.
    #[arg(long = "gaugetype", value_enum, default_value = "LANDAU")]
    pub gauge_type: GaugeArg,

    /// Rangos del eje temporal (hilos de rejilla).
    #[arg(long = "ranks", default_value_t = 1)]
    pub ranks: usize,
}

impl GaugeFixerDirectives {
    /// Planificación del conductor derivada de las directivas.
    #[must_use]
    pub fn schedule(&self) -> FixingSchedule {
        FixingSchedule {
            gauge_copies: self.gauge_copies,
            random_trafo: self.random_trafo,
            do_sa: self.do_sa,
            sa_steps: self.sa_steps,
            sa_min: self.sa_min,
            sa_max: self.sa_max,
            sa_microupdates: self.sa_microupdates,
            sr_max_iter: self.sr_max_iter,
            sr_parameter: self.sr_parameter,
            or_max_iter: self.or_max_iter,
            or_parameter: self.or_parameter,
            precision: self.precision,
            check_precision: self.check_precision,
            reproject_interval: self.reproject,
            seed: self.seed,
            record_sa_trace: self.output_sa_functional.is_some(),
        }
    }

    /// Política de nombres derivada de las directivas.
    #[must_use]
    pub fn naming(&self) -> NamingScheme {
        NamingScheme {
            basename: self.fbasename.clone(),
            ending: self.fending.clone(),
            number_format: self.fnumberformat,
            start_number: self.fstartnumber,
            step_number: self.fstepnumber,
            output_appendix: self.fappendix.clone(),
            output_conf: self.output_conf.clone(),
            output_ending: self.output_ending.clone(),
        }
    }
}

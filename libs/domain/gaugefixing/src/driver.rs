// [libs/domain/gaugefixing/src/driver.rs]
/*!
 * =================================================================
 * APARATO: PER-NODE FIXING DRIVER (V18.0 - STATE MACHINE)
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: COMPONER BARRIDOS EN UNA CORRIDA COMPLETA
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. STATE MACHINE: INIT -> (RANDOM_TRANSFORM) -> SA_LOOP ->
 *    (SR_LOOP) -> OR_LOOP -> DONE; el recocido enfría linealmente y
 *    el bucle OR termina por precisión o por tope de iteraciones.
 * 2. BACKEND SEAM: El conductor es genérico sobre el ejecutor de
 *    barridos; el mismo código gobierna el camino mono-rango y el
 *    comunicador de halo multi-rango.
 * 3. COPY TOURNAMENT: Corre N copias de gauge independientes desde
 *    la configuración original y retiene la de mayor funcional.
 * 4. COUNTER LOCKSTEP: El contador de lanzamientos avanza solo en
 *    los barridos estocásticos y de forma idéntica en cada rango.
 * =================================================================
 */

use crate::errors::FixingError;
use crate::subgroup::AlgorithmOptions;
use lgf_core_philox::LaunchCounter;
use lgf_core_su3::prelude::Real;
use thiserror::Error;
use tracing::{debug, info};

/// Tope duro del intervalo de reproyección: más allá la deriva en
/// precisión simple viola el invariante de unitariedad.
pub const REPROJECT_INTERVAL_CEILING: usize = 10_000;

/// Los dos escalares de calidad, ya normalizados por el ejecutor:
/// Gff/(Nc·Nd·|Lambda|) y theta/(Nc·|Lambda|).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeQuality {
    pub gff: Real,
    pub theta: Real,
}

/// Punto de la traza funcional-temperatura del recocido.
#[derive(Debug, Clone, Copy)]
pub struct SaTracePoint {
    pub step: usize,
    pub temperature: Real,
    pub gff: Real,
}

/// Resultado de una copia de gauge.
#[derive(Debug, Clone)]
pub struct CopyReport {
    pub gff: Real,
    pub theta: Real,
    /// false: el bucle OR agotó el tope sin alcanzar la precisión.
    /// La salida se escribe igualmente, etiquetada por este campo.
    pub converged: bool,
    pub or_iterations: usize,
    pub sa_trace: Vec<SaTracePoint>,
}

/// Resultado de la corrida completa (todas las copias).
#[derive(Debug, Clone)]
pub struct RunReport {
    pub best_index: usize,
    pub copies: Vec<CopyReport>,
}

impl RunReport {
    /// Informe de la copia retenida.
    #[must_use]
    pub fn best(&self) -> &CopyReport {
        &self.copies[self.best_index]
    }
}

/// Planificación de la corrida; espejo del registro de opciones.
#[derive(Debug, Clone)]
pub struct FixingSchedule {
    pub gauge_copies: usize,
    pub random_trafo: bool,
    pub do_sa: bool,
    pub sa_steps: usize,
    pub sa_min: Real,
    pub sa_max: Real,
    pub sa_microupdates: usize,
    pub sr_max_iter: usize,
    pub sr_parameter: Real,
    pub or_max_iter: usize,
    pub or_parameter: Real,
    pub precision: Real,
    pub check_precision: usize,
    pub reproject_interval: usize,
    pub seed: u32,
    pub record_sa_trace: bool,
}

impl Default for FixingSchedule {
    fn default() -> Self {
        Self {
            gauge_copies: 1,
            random_trafo: true,
            do_sa: true,
            sa_steps: 1000,
            sa_min: 0.01,
            sa_max: 0.4,
            sa_microupdates: 3,
            sr_max_iter: 0,
            sr_parameter: 1.7,
            or_max_iter: 1000,
            or_parameter: 1.7,
            precision: 1e-7,
            check_precision: 100,
            reproject_interval: 100,
            seed: 1,
            record_sa_trace: false,
        }
    }
}

impl FixingSchedule {
    fn validate(&self) -> Result<(), FixingError> {
        if self.reproject_interval == 0 || self.reproject_interval > REPROJECT_INTERVAL_CEILING {
            return Err(FixingError::InvalidSchedule {
                reason: format!(
                    "intervalo de reproyección {} fuera de [1, {REPROJECT_INTERVAL_CEILING}]",
                    self.reproject_interval
                ),
            });
        }
        if self.check_precision == 0 {
            return Err(FixingError::InvalidSchedule {
                reason: "checkprecision debe ser positivo".to_string(),
            });
        }
        if self.do_sa && self.sa_steps > 0 && self.sa_min <= 0.0 {
            return Err(FixingError::InvalidSchedule {
                reason: "la temperatura mínima del recocido debe ser positiva".to_string(),
            });
        }
        Ok(())
    }
}

/// Ejecutor de barridos visto por el conductor. El comunicador de
/// halo del estrato L3 lo implementa; la semántica exigida:
/// - 'apply_sweep' actualiza exactamente una clase de paridad;
/// - 'restore_third_row' persiste la fila derivada de cada enlace en
///   las rebanadas locales (los barridos solo escriben dos filas);
/// - 'gauge_quality' devuelve los escalares globales normalizados;
/// - exportar/importar preserva bit a bit las rebanadas locales.
pub trait SweepBackend {
    type Error: std::error::Error + Send + 'static;

    fn apply_sweep(&mut self, options: &AlgorithmOptions, parity: usize)
        -> Result<(), Self::Error>;
    fn reproject(&mut self) -> Result<(), Self::Error>;
    fn restore_third_row(&mut self) -> Result<(), Self::Error>;
    fn gauge_quality(&mut self) -> Result<GaugeQuality, Self::Error>;
    fn export_field(&self) -> Vec<Vec<Real>>;
    fn import_field(&mut self, field: &[Vec<Real>]) -> Result<(), Self::Error>;
}

/// Fallos del conductor: planificación local o ejecutor subyacente.
#[derive(Debug, Error)]
pub enum DriverError<E: std::error::Error> {
    #[error(transparent)]
    Schedule(#[from] FixingError),

    #[error("DRIVER_FAULT: el ejecutor de barridos colapsó: {0}")]
    Backend(E),
}

fn both_parities<B: SweepBackend>(
    backend: &mut B,
    options: &AlgorithmOptions,
) -> Result<(), DriverError<B::Error>> {
    for parity in 0..2 {
        backend.apply_sweep(options, parity).map_err(DriverError::Backend)?;
    }
    Ok(())
}

fn run_copy<B: SweepBackend>(
    backend: &mut B,
    schedule: &FixingSchedule,
    counter: &mut LaunchCounter,
    copy_index: usize,
) -> Result<CopyReport, DriverError<B::Error>> {
    // 1. TRANSFORMACIÓN ALEATORIA PREVIA
    if schedule.random_trafo {
        for parity in 0..2 {
            let options = AlgorithmOptions::random_transform(schedule.seed, counter.next());
            backend.apply_sweep(&options, parity).map_err(DriverError::Backend)?;
        }
    }

    // 2. RECOCIDO SIMULADO (ENFRIAMIENTO LINEAL)
    let mut sa_trace = Vec::new();
    if schedule.do_sa && schedule.sa_steps > 0 {
        for step in 0..schedule.sa_steps {
            let temperature = if schedule.sa_steps > 1 {
                schedule.sa_max
                    + (schedule.sa_min - schedule.sa_max) * step as Real
                        / (schedule.sa_steps - 1) as Real
            } else {
                schedule.sa_max
            };
            for parity in 0..2 {
                let options = AlgorithmOptions::simulated_annealing(
                    temperature,
                    schedule.seed,
                    counter.next(),
                );
                backend.apply_sweep(&options, parity).map_err(DriverError::Backend)?;
            }
            for _ in 0..schedule.sa_microupdates {
                both_parities(backend, &AlgorithmOptions::microcanonical())?;
            }
            if (step + 1) % schedule.reproject_interval == 0 {
                backend.reproject().map_err(DriverError::Backend)?;
            }
            if schedule.record_sa_trace {
                let quality = backend.gauge_quality().map_err(DriverError::Backend)?;
                sa_trace.push(SaTracePoint { step, temperature, gff: quality.gff });
            }
        }
        backend.reproject().map_err(DriverError::Backend)?;
    }

    let mut converged = false;

    // 3. RELAJACIÓN ESTOCÁSTICA (OPCIONAL)
    if schedule.sr_max_iter > 0 {
        for iteration in 1..=schedule.sr_max_iter {
            for parity in 0..2 {
                let options = AlgorithmOptions::stochastic_relaxation(
                    schedule.sr_parameter,
                    schedule.seed,
                    counter.next(),
                );
                backend.apply_sweep(&options, parity).map_err(DriverError::Backend)?;
            }
            if iteration % schedule.reproject_interval == 0 {
                backend.reproject().map_err(DriverError::Backend)?;
            }
            if iteration % schedule.check_precision == 0 {
                let quality = backend.gauge_quality().map_err(DriverError::Backend)?;
                debug!(
                    "🌀 [SR_LOOP]: copy {copy_index} iter {iteration}: gff = {:.8}, theta = {:.3e}",
                    quality.gff, quality.theta
                );
                if quality.theta < schedule.precision {
                    converged = true;
                    break;
                }
            }
        }
    }

    // 4. SOBRE-RELAJACIÓN HASTA PRECISIÓN O TOPE
    let mut or_iterations = 0;
    if !converged {
        for iteration in 1..=schedule.or_max_iter {
            both_parities(backend, &AlgorithmOptions::overrelaxation(schedule.or_parameter))?;
            or_iterations = iteration;
            if iteration % schedule.reproject_interval == 0 {
                backend.reproject().map_err(DriverError::Backend)?;
            }
            if iteration % schedule.check_precision == 0 {
                let quality = backend.gauge_quality().map_err(DriverError::Backend)?;
                debug!(
                    "🔧 [OR_LOOP]: copy {copy_index} iter {iteration}: gff = {:.8}, theta = {:.3e}",
                    quality.gff, quality.theta
                );
                if quality.theta < schedule.precision {
                    converged = true;
                    break;
                }
            }
        }
    }

    // 5. SELLADO DE LA COPIA
    // Reproyección final y restauración de la fila derivada: el campo
    // exportado lleva las tres filas de cada enlace consistentes, listo
    // para recolectarse y persistirse en cualquier formato.
    backend.reproject().map_err(DriverError::Backend)?;
    backend.restore_third_row().map_err(DriverError::Backend)?;
    let quality = backend.gauge_quality().map_err(DriverError::Backend)?;
    Ok(CopyReport {
        gff: quality.gff,
        theta: quality.theta,
        converged,
        or_iterations,
        sa_trace,
    })
}

/// Corre la máquina de estados completa sobre el ejecutor dado y deja
/// el ejecutor cargado con la mejor copia de gauge.
pub fn run_gauge_fixing<B: SweepBackend>(
    backend: &mut B,
    schedule: &FixingSchedule,
    counter: &mut LaunchCounter,
) -> Result<RunReport, DriverError<B::Error>> {
    schedule.validate()?;

    let copy_total = schedule.gauge_copies.max(1);
    let original = backend.export_field();

    let mut copies = Vec::with_capacity(copy_total);
    let mut best_index = 0;
    let mut best_field: Option<Vec<Vec<Real>>> = None;

    for copy_index in 0..copy_total {
        if copy_index > 0 {
            backend.import_field(&original).map_err(DriverError::Backend)?;
        }
        let report = run_copy(backend, schedule, counter, copy_index)?;
        info!(
            "🏁 [COPY_SEALED]: copy {copy_index}: gff = {:.8}, theta = {:.3e}, converged = {}",
            report.gff, report.theta, report.converged
        );

        let is_best = copies
            .get(best_index)
            .map_or(true, |current: &CopyReport| report.gff > current.gff);
        if is_best {
            best_index = copy_index;
            best_field = Some(backend.export_field());
        }
        copies.push(report);
    }

    if let Some(field) = best_field {
        backend.import_field(&field).map_err(DriverError::Backend)?;
    }

    info!(
        "🏆 [TOURNAMENT]: best copy {best_index} of {copy_total}: gff = {:.8}",
        copies[best_index].gff
    );
    Ok(RunReport { best_index, copies })
}

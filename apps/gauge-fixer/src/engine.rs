// [apps/gauge-fixer/src/engine.rs]
/*!
 * =================================================================
 * APARATO: BATCH FIXING ENGINE (V11.0 - GRID IGNITION)
 * CLASIFICACIÓN: APPLICATION LAYER (ESTRATO L4)
 * RESPONSABILIDAD: LOTE COMPLETO: CARGA -> REJILLA -> PERSISTENCIA
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. SPMD IGNITION: Lanza un hilo por rango temporal con sus
 *    rebanadas dispersadas; el anillo de canales y el colectivo se
 *    construyen una vez por corrida.
 * 2. IO TRIAGE: Un fallo de fichero se reporta y el lote continúa
 *    con la siguiente configuración; un fallo de rejilla es fatal.
 * 3. COUNTER CONTINUITY: El contador de lanzamientos RNG fluye de
 *    corrida en corrida para no correlar copias ni configuraciones.
 * =================================================================
 */

use crate::options::GaugeFixerDirectives;
use crate::settings;
use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use lgf_core_lattice::prelude::{LatticeDims, SpatialNeighbourTable};
use lgf_core_philox::LaunchCounter;
use lgf_core_su3::prelude::Real;
use lgf_domain_gaugefixing::prelude::{
    run_gauge_fixing, set_hot_slice, FixingSchedule, GaugeKind, RunReport, SliceContext,
};
use lgf_infra_halo::prelude::{
    build_ring_topology, collect_slices, scatter_slices, Collective, GridCommunicator,
    HaloChannels, TimePartition,
};
use lgf_infra_linkfile::prelude::{LinkFileFormat, NamingScheme};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Resultado agregado de una corrida por lotes.
#[derive(Debug, Clone, Copy)]
pub struct EngineSummary {
    /// Configuraciones fijadas y persistidas.
    pub fixed: usize,
    /// Configuraciones saltadas por fallos de E/S.
    pub skipped: usize,
}

/// Ejecuta una corrida completa de la rejilla sobre el campo anfitrión
/// y devuelve el informe junto al contador RNG final.
pub fn run_fixing_grid(
    dims: LatticeDims,
    gauge: GaugeKind,
    nprocs: usize,
    schedule: &FixingSchedule,
    host: &mut [Real],
    counter_start: u32,
) -> Result<(RunReport, u32)> {
    let collective = Arc::new(Collective::new(nprocs));
    let mut endpoints: Vec<Option<HaloChannels>> = if nprocs > 1 {
        build_ring_topology(nprocs).into_iter().map(Some).collect()
    } else {
        vec![None]
    };

    // Partición y dispersión ANTES de la ignición para fallar pronto.
    let mut seats = Vec::with_capacity(nprocs);
    for rank in 0..nprocs {
        let partition = TimePartition::build(dims.nt(), nprocs, rank)?;
        let slabs = scatter_slices(dims, host, partition.tmin(), partition.tmax());
        let channels = endpoints[rank].take();
        seats.push((partition, slabs, channels));
    }

    let outcomes: Vec<Result<(RunReport, u32, usize, Vec<Vec<Real>>)>> =
        std::thread::scope(|scope| {
            let mut handles = Vec::with_capacity(nprocs);
            for (partition, slabs, channels) in seats {
                let shared_collective = Arc::clone(&collective);
                let rank_schedule = schedule.clone();
                handles.push(scope.spawn(
                    move || -> Result<(RunReport, u32, usize, Vec<Vec<Real>>)> {
                    let tmin = partition.tmin();
                    let mut communicator = GridCommunicator::new(
                        dims,
                        gauge,
                        partition,
                        slabs,
                        channels,
                        shared_collective,
                    )?;
                    let mut counter = LaunchCounter::starting_at(counter_start);
                    let report =
                        run_gauge_fixing(&mut communicator, &rank_schedule, &mut counter)?;
                    Ok((report, counter.current(), tmin, communicator.into_slices()))
                },
                ));
            }
            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .map_err(|_| anyhow!("COMM_FAULT: rank thread collapsed"))?
                })
                .collect()
        });

    let mut master_outcome = None;
    for outcome in outcomes {
        let (report, counter_end, tmin, slabs) = outcome?;
        collect_slices(dims, host, tmin, &slabs);
        if tmin == 0 {
            master_outcome = Some((report, counter_end));
        }
    }
    master_outcome.ok_or_else(|| anyhow!("COMM_FAULT: master rank produced no report"))
}

/// Puebla el campo anfitrión con SU(3) aleatorio (arranque caliente).
fn ignite_hot_field(
    dims: LatticeDims,
    host: &mut [Real],
    seed: u32,
    counter: &mut LaunchCounter,
) {
    let table = SpatialNeighbourTable::build(dims);
    let launch = counter.next();
    let slice_reals = dims.timeslice_reals();
    for timeslice in 0..dims.nt() {
        let ctx = SliceContext { dims, table: &table, timeslice };
        let slab = &mut host[timeslice * slice_reals..(timeslice + 1) * slice_reals];
        set_hot_slice(&ctx, slab, seed, launch);
    }
}

/// Motor de lotes del forjador.
pub struct FixingEngine {
    directives: GaugeFixerDirectives,
}

impl FixingEngine {
    #[must_use]
    pub fn new(directives: GaugeFixerDirectives) -> Self {
        Self { directives }
    }

    fn write_sa_trace(&self, stem: &str, number: usize, report: &RunReport) -> Result<()> {
        let path = PathBuf::from(format!(
            "{stem}{number:0width$}.csv",
            width = self.directives.fnumberformat
        ));
        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("IO_FAULT: traza SA en '{}'", path.display()))?;
        writer.write_record(["step", "temperature", "gff"])?;
        for point in &report.best().sa_trace {
            writer.serialize((point.step, point.temperature, point.gff))?;
        }
        writer.flush()?;
        info!("📈 [SA_TRACE]: {} puntos en '{}'", report.best().sa_trace.len(), path.display());
        Ok(())
    }

    /// Corre el lote completo de configuraciones.
    pub fn run(&self) -> Result<EngineSummary> {
        let dims = settings::LATTICE;
        let gauge = GaugeKind::from(self.directives.gauge_type);
        let schedule = self.directives.schedule();
        let naming: NamingScheme = self.directives.naming();
        let nprocs = self.directives.ranks.max(1);

        let progress = ProgressBar::new(self.directives.nconf as u64).with_style(
            ProgressStyle::with_template("{prefix} [{bar:32}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        progress.set_prefix("⚒️  forge");

        let mut summary = EngineSummary { fixed: 0, skipped: 0 };
        let mut counter_cursor = 0u32;

        for index in 0..self.directives.nconf {
            let number = naming.number_of(index);
            progress.set_message(format!("conf {number}"));

            let mut format = LinkFileFormat::open(
                self.directives.ftype.into(),
                self.directives.reinterpret.into(),
            );
            let mut host = vec![0.0; dims.total_reals()];
            let mut hot_counter = LaunchCounter::starting_at(counter_cursor);

            if self.directives.hot_gauge_field {
                ignite_hot_field(dims, &mut host, schedule.seed, &mut hot_counter);
                info!("🔥 [HOT_START]: configuración {number} poblada con SU(3) aleatorio");
            } else {
                let input = naming.input(index);
                if let Err(fault) = format.load(dims, &input, &mut host) {
                    error!("❌ [IO_FAULT]: configuración {number} saltada: {fault}");
                    summary.skipped += 1;
                    progress.inc(1);
                    continue;
                }
                info!("📥 [LOADED]: '{}'", input.display());
            }
            counter_cursor = hot_counter.current();

            let report = if self.directives.save_each && schedule.gauge_copies > 1 {
                self.run_copies_saving_each(
                    dims,
                    gauge,
                    nprocs,
                    &schedule,
                    &naming,
                    &mut format,
                    index,
                    &mut host,
                    &mut counter_cursor,
                )?
            } else {
                let (report, counter_end) =
                    run_fixing_grid(dims, gauge, nprocs, &schedule, &mut host, counter_cursor)?;
                counter_cursor = counter_end;
                report
            };

            let best = report.best();
            if !best.converged {
                warn!(
                    "⚠️ [NONCONVERGENCE]: configuración {number}: theta = {:.3e} tras {} barridos OR; la salida se escribe etiquetada",
                    best.theta, best.or_iterations
                );
            }

            format.set_annealing_steps(if schedule.do_sa { schedule.sa_steps } else { 0 });
            let output = naming.output(index);
            if let Err(fault) = format.save(dims, &output, &host) {
                error!("❌ [IO_FAULT]: salida de la configuración {number} fallida: {fault}");
                summary.skipped += 1;
                progress.inc(1);
                continue;
            }
            info!(
                "📤 [SEALED]: '{}' (gff = {:.8}, theta = {:.3e})",
                output.display(),
                best.gff,
                best.theta
            );

            if let Some(stem) = &self.directives.output_sa_functional {
                self.write_sa_trace(stem, number, &report)?;
            }

            summary.fixed += 1;
            progress.inc(1);
        }

        progress.finish_with_message("lote sellado");
        Ok(summary)
    }

    /// Torneo de copias con persistencia de cada copia intermedia.
    #[allow(clippy::too_many_arguments)]
    fn run_copies_saving_each(
        &self,
        dims: LatticeDims,
        gauge: GaugeKind,
        nprocs: usize,
        schedule: &FixingSchedule,
        naming: &NamingScheme,
        format: &mut LinkFileFormat,
        index: usize,
        host: &mut Vec<Real>,
        counter_cursor: &mut u32,
    ) -> Result<RunReport> {
        let pristine = host.clone();
        let mut single = schedule.clone();
        single.gauge_copies = 1;

        let mut best_host = host.clone();
        let mut best_report: Option<RunReport> = None;

        for copy in 0..schedule.gauge_copies {
            host.copy_from_slice(&pristine);
            let (report, counter_end) =
                run_fixing_grid(dims, gauge, nprocs, &single, host, *counter_cursor)?;
            *counter_cursor = counter_end;

            let copy_output = naming.output_for_copy(index, copy);
            if let Err(fault) = format.save(dims, &copy_output, host) {
                error!("❌ [IO_FAULT]: copia {copy} no persistida: {fault}");
            }

            let improves = best_report
                .as_ref()
                .map_or(true, |current| report.best().gff > current.best().gff);
            if improves {
                best_host.copy_from_slice(host);
                best_report = Some(report);
            }
        }

        host.copy_from_slice(&best_host);
        best_report.ok_or_else(|| anyhow!("DRIVER_FAULT: torneo de copias sin resultado"))
    }
}

// [libs/infra/halo-grid/src/communicator.rs]
/*!
 * =================================================================
 * APARATO: GRID COMMUNICATOR (V12.1 - HIDDEN LATENCY)
 * CLASIFICACIÓN: INFRA TRANSPORT (ESTRATO L3)
 * RESPONSABILIDAD: BARRIDOS CON HALO, CALIDAD GLOBAL Y REPARACIÓN
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. HIDDEN LATENCY: Cada mitad direccional del intercambio corre en
 *    tres etapas (empaquetar, enviar/recibir, desempaquetar) y entre
 *    etapa y etapa se computa una de las seis partes del interior.
 * 2. SINGLE PARITY HALO: El halo transporta los enlaces temporales
 *    (dos filas, mu = 0) de una sola mitad de paridad: 1/12 de la
 *    rebanada. El offset de empaquetado es |slice|/2 si la paridad
 *    del barrido es impar, cero si es par; ambos extremos comparten
 *    el convenio.
 * 3. WRITEBACK DISCIPLINE: El kernel de tmin muta los enlaces
 *    t-abajo dentro del halo local; la vuelta del intercambio los
 *    reinstala en la rebanada tmax-1 del vecino izquierdo.
 * 4. SPMD LOCKSTEP: Todos los rangos ejecutan la misma secuencia de
 *    envíos, recepciones y colectivos; una barrera sella cada
 *    barrido para mantener el tiempo lógico síncrono.
 * =================================================================
 */

use crate::collective::Collective;
use crate::errors::CommError;
use crate::partition::TimePartition;
use crossbeam_channel::{unbounded, Receiver, Sender};
use lgf_core_lattice::prelude::{LatticeDims, SpatialNeighbourTable, TimesliceParityPriorityPattern};
use lgf_core_su3::prelude::Real;
use lgf_core_su3::NC;
use lgf_domain_gaugefixing::prelude::{
    apply_slice_with_options, quality_slice, reproject_slice, restore_third_row_slice,
    set_hot_slice, AlgorithmOptions, GaugeKind, GaugeQuality, SliceContext, SweepBackend,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Umbral de deriva a partir del cual la reproyección deja aviso.
const DRIFT_WARNING_THRESHOLD: Real = 1e-3;

/// Extremos de canal de un rango dentro del anillo de halos.
pub struct HaloChannels {
    pub to_right: Sender<Vec<Real>>,
    pub from_left: Receiver<Vec<Real>>,
    pub to_left: Sender<Vec<Real>>,
    pub from_right: Receiver<Vec<Real>>,
}

/// Construye el anillo de canales de halo para todo el universo.
/// El índice del vector es el rango propietario de los extremos.
#[must_use]
pub fn build_ring_topology(nprocs: usize) -> Vec<HaloChannels> {
    let mut forward_senders = Vec::with_capacity(nprocs);
    let mut forward_receivers = Vec::with_capacity(nprocs);
    let mut backward_senders = Vec::with_capacity(nprocs);
    let mut backward_receivers = Vec::with_capacity(nprocs);
    for _ in 0..nprocs {
        let (sender, receiver) = unbounded();
        forward_senders.push(sender);
        forward_receivers.push(receiver);
        let (sender, receiver) = unbounded();
        backward_senders.push(sender);
        backward_receivers.push(receiver);
    }

    let mut endpoints = Vec::with_capacity(nprocs);
    for rank in 0..nprocs {
        let right = (rank + 1) % nprocs;
        let left = (rank + nprocs - 1) % nprocs;
        endpoints.push(HaloChannels {
            // El halo de ida del rango r aterriza en el buzón del
            // vecino derecho; el de vuelta, en el del izquierdo.
            to_right: forward_senders[right].clone(),
            from_left: forward_receivers[rank].clone(),
            to_left: backward_senders[left].clone(),
            from_right: backward_receivers[rank].clone(),
        });
    }
    endpoints
}

/// Extrae las rebanadas [tmin, tmax) de la configuración anfitriona
/// (layout de prioridad rebanada-paridad) para un rango.
#[must_use]
pub fn scatter_slices(dims: LatticeDims, host: &[Real], tmin: usize, tmax: usize) -> Vec<Vec<Real>> {
    let slice_reals = dims.timeslice_reals();
    (tmin..tmax)
        .map(|timeslice| host[timeslice * slice_reals..(timeslice + 1) * slice_reals].to_vec())
        .collect()
}

/// Reinstala las rebanadas de un rango en la configuración anfitriona.
pub fn collect_slices(dims: LatticeDims, host: &mut [Real], tmin: usize, slabs: &[Vec<Real>]) {
    let slice_reals = dims.timeslice_reals();
    for (offset, slab) in slabs.iter().enumerate() {
        let timeslice = tmin + offset;
        host[timeslice * slice_reals..(timeslice + 1) * slice_reals].copy_from_slice(slab);
    }
}

/// Par (rebanada, rebanada vecina) con préstamos disjuntos.
fn split_pair(slabs: &mut [Vec<Real>], upper: usize, lower: usize) -> (&mut [Real], &mut [Real]) {
    debug_assert_ne!(upper, lower);
    if lower < upper {
        let (head, tail) = slabs.split_at_mut(upper);
        (tail[0].as_mut_slice(), head[lower].as_mut_slice())
    } else {
        let (head, tail) = slabs.split_at_mut(lower);
        (head[upper].as_mut_slice(), tail[0].as_mut_slice())
    }
}

/// Computa las rebanadas [begin, end) del interior de un rango; la
/// rebanada t usa t-1 (también propia) como vecina t-abajo.
#[allow(clippy::too_many_arguments)]
fn compute_interior(
    dims: LatticeDims,
    gauge: GaugeKind,
    table: &SpatialNeighbourTable,
    slabs: &mut [Vec<Real>],
    tmin: usize,
    begin: usize,
    end: usize,
    options: &AlgorithmOptions,
    evenodd: usize,
) {
    for timeslice in begin..end {
        let (ut, ut_down) = split_pair(slabs, timeslice - tmin, timeslice - 1 - tmin);
        let ctx = SliceContext { dims, table, timeslice };
        apply_slice_with_options(&ctx, ut, ut_down, evenodd ^ (timeslice % 2), gauge, options);
    }
}

/// El comunicador de un rango: slabs propios, halos y colectivos.
pub struct GridCommunicator {
    dims: LatticeDims,
    gauge: GaugeKind,
    partition: TimePartition,
    table: SpatialNeighbourTable,
    slabs: Vec<Vec<Real>>,
    halo_out: Vec<Real>,
    halo_in: Vec<Real>,
    device_halo: Vec<Real>,
    channels: Option<HaloChannels>,
    collective: Arc<Collective>,
}

impl GridCommunicator {
    /// Monta el comunicador de un rango sobre sus rebanadas.
    pub fn new(
        dims: LatticeDims,
        gauge: GaugeKind,
        partition: TimePartition,
        slabs: Vec<Vec<Real>>,
        channels: Option<HaloChannels>,
        collective: Arc<Collective>,
    ) -> Result<Self, CommError> {
        if slabs.len() != partition.owned_slices() {
            return Err(CommError::FieldShapeMismatch);
        }
        let slice_reals = dims.timeslice_reals();
        if slabs.iter().any(|slab| slab.len() != slice_reals) {
            return Err(CommError::FieldShapeMismatch);
        }
        if partition.nprocs() > 1 && channels.is_none() {
            return Err(CommError::Partition {
                reason: "universo multi-rango sin canales de halo".to_string(),
            });
        }
        Ok(Self {
            dims,
            gauge,
            partition,
            table: SpatialNeighbourTable::build(dims),
            slabs,
            halo_out: vec![0.0; slice_reals],
            halo_in: vec![0.0; slice_reals],
            device_halo: vec![0.0; slice_reals],
            channels,
            collective,
        })
    }

    /// Rebanadas propias, consumiendo el comunicador (recolección).
    #[must_use]
    pub fn into_slices(self) -> Vec<Vec<Real>> {
        self.slabs
    }

    /// Partición temporal del rango.
    #[must_use]
    pub fn partition(&self) -> &TimePartition {
        &self.partition
    }

    fn send_halo(
        sender: &Sender<Vec<Real>>,
        payload: Vec<Real>,
        peer: usize,
        stage: &'static str,
    ) -> Result<(), CommError> {
        sender.send(payload).map_err(|_| CommError::ChannelClosed { peer, stage })
    }

    fn recv_halo(
        receiver: &Receiver<Vec<Real>>,
        expected: usize,
        peer: usize,
        stage: &'static str,
    ) -> Result<Vec<Real>, CommError> {
        let payload = receiver.recv().map_err(|_| CommError::ChannelClosed { peer, stage })?;
        if payload.len() != expected {
            return Err(CommError::HaloSizeMismatch { expected, found: payload.len() });
        }
        Ok(payload)
    }

    /// Un barrido de una clase de paridad sobre todas las rebanadas
    /// propias, con el intercambio de halo solapado al interior.
    pub fn apply(&mut self, options: &AlgorithmOptions, evenodd: usize) -> Result<(), CommError> {
        let Self {
            dims,
            gauge,
            partition,
            table,
            slabs,
            halo_out,
            halo_in,
            device_halo,
            channels,
            collective,
        } = self;
        let dims = *dims;
        let gauge = *gauge;
        let tmin = partition.tmin();
        let tmax = partition.tmax();
        let nt = dims.nt();

        if partition.nprocs() == 1 {
            for timeslice in tmin..tmax {
                let down_slice = if timeslice > 0 { timeslice - 1 } else { nt - 1 };
                let (ut, ut_down) = split_pair(slabs, timeslice - tmin, down_slice - tmin);
                let ctx = SliceContext { dims, table, timeslice };
                apply_slice_with_options(
                    &ctx,
                    ut,
                    ut_down,
                    evenodd ^ (timeslice % 2),
                    gauge,
                    options,
                );
            }
            collective.barrier_wait();
            return Ok(());
        }

        let channels = channels.as_ref().ok_or_else(|| CommError::Partition {
            reason: "universo multi-rango sin canales de halo".to_string(),
        })?;
        // El halo es el bloque de dos filas de los enlaces temporales
        // (mu = 0) de una mitad de paridad: 1/12 de la rebanada. En el
        // layout de prioridad rebanada-paridad ese bloque es contiguo
        // al comienzo de la mitad (offset = paridad ? |slice|/2 : 0).
        let halo_reals = dims.timeslice_reals() / 12;
        let parity_offset = TimesliceParityPriorityPattern::parity_offset(dims, evenodd);
        let parity_range = parity_offset..parity_offset + halo_reals;
        let left = partition.left();
        let right = partition.right();

        // IDA, ETAPA 0: empaquetado de tmax-1 ‖ interior parte 2.
        halo_out[parity_range.clone()]
            .copy_from_slice(&slabs[tmax - 1 - tmin][parity_range.clone()]);
        compute_interior(
            dims, gauge, table, slabs, tmin,
            partition.start_part(2), partition.end_part(2),
            options, evenodd,
        );

        // IDA, ETAPA 1: envío no bloqueante al derecho ‖ parte 0 ‖ espera.
        Self::send_halo(&channels.to_right, halo_out[parity_range.clone()].to_vec(), right, "forward-send")?;
        compute_interior(
            dims, gauge, table, slabs, tmin,
            partition.start_part(0), partition.end_part(0),
            options, evenodd,
        );
        let incoming = Self::recv_halo(&channels.from_left, halo_reals, left, "forward-recv")?;
        halo_in[parity_range.clone()].copy_from_slice(&incoming);

        // IDA, ETAPA 2: halo anfitrión al slab de halo ‖ parte 3.
        device_halo[parity_range.clone()].copy_from_slice(&halo_in[parity_range.clone()]);
        compute_interior(
            dims, gauge, table, slabs, tmin,
            partition.start_part(3), partition.end_part(3),
            options, evenodd,
        );

        // REBANADA tmin: el halo hace de vecina t-abajo.
        {
            let ctx = SliceContext { dims, table, timeslice: tmin };
            apply_slice_with_options(
                &ctx,
                slabs[0].as_mut_slice(),
                device_halo.as_mut_slice(),
                evenodd ^ (tmin % 2),
                gauge,
                options,
            );
        }

        // VUELTA, ETAPA 0: empaquetado del halo mutado ‖ parte 4.
        halo_out[parity_range.clone()].copy_from_slice(&device_halo[parity_range.clone()]);
        compute_interior(
            dims, gauge, table, slabs, tmin,
            partition.start_part(4), partition.end_part(4),
            options, evenodd,
        );

        // VUELTA, ETAPA 1: envío al izquierdo ‖ parte 1 ‖ espera.
        Self::send_halo(&channels.to_left, halo_out[parity_range.clone()].to_vec(), left, "backward-send")?;
        compute_interior(
            dims, gauge, table, slabs, tmin,
            partition.start_part(1), partition.end_part(1),
            options, evenodd,
        );
        let incoming = Self::recv_halo(&channels.from_right, halo_reals, right, "backward-recv")?;
        halo_in[parity_range.clone()].copy_from_slice(&incoming);

        // VUELTA, ETAPA 2: reinstalación en tmax-1 ‖ parte 5.
        slabs[tmax - 1 - tmin][parity_range.clone()]
            .copy_from_slice(&halo_in[parity_range.clone()]);
        compute_interior(
            dims, gauge, table, slabs, tmin,
            partition.start_part(5), partition.end_part(5),
            options, evenodd,
        );

        collective.barrier_wait();
        Ok(())
    }

    /// Suma local de (Gff, theta) de las rebanadas [begin, end).
    fn quality_interior(&self, begin: usize, end: usize, evenodd: usize) -> (Real, Real) {
        let tmin = self.partition.tmin();
        let mut totals = (0.0, 0.0);
        for timeslice in begin..end {
            let ut = &self.slabs[timeslice - tmin];
            let ut_down = &self.slabs[timeslice - 1 - tmin];
            let ctx = SliceContext { dims: self.dims, table: &self.table, timeslice };
            let (gff, theta) =
                quality_slice(&ctx, self.gauge, ut, ut_down, evenodd ^ (timeslice % 2));
            totals.0 += gff;
            totals.1 += theta;
        }
        totals
    }

    /// Calidad de gauge global: barrido de solo lectura con halo de
    /// ida, reducción local y all-reduce determinista.
    pub fn generate_gauge_quality(&mut self) -> Result<GaugeQuality, CommError> {
        let tmin = self.partition.tmin();
        let tmax = self.partition.tmax();
        let mut local_totals = [0.0; 2];

        if self.partition.nprocs() == 1 {
            for evenodd in 0..2 {
                for timeslice in tmin..tmax {
                    let down_slice = if timeslice > tmin { timeslice - 1 } else { tmax - 1 };
                    let ut = &self.slabs[timeslice - tmin];
                    let ut_down = &self.slabs[down_slice - tmin];
                    let ctx = SliceContext { dims: self.dims, table: &self.table, timeslice };
                    let (gff, theta) =
                        quality_slice(&ctx, self.gauge, ut, ut_down, evenodd ^ (timeslice % 2));
                    local_totals[0] += gff;
                    local_totals[1] += theta;
                }
            }
        } else {
            let halo_reals = self.dims.timeslice_reals() / 12;
            let left = self.partition.left();
            let right = self.partition.right();

            for evenodd in 0..2 {
                let parity_offset =
                    TimesliceParityPriorityPattern::parity_offset(self.dims, evenodd);
                let parity_range = parity_offset..parity_offset + halo_reals;

                // Empaquetado de tmax-1 ‖ partes 0-1.
                self.halo_out[parity_range.clone()]
                    .copy_from_slice(&self.slabs[tmax - 1 - tmin][parity_range.clone()]);
                let (gff, theta) = self.quality_interior(
                    self.partition.start_part(0),
                    self.partition.end_part(1),
                    evenodd,
                );
                local_totals[0] += gff;
                local_totals[1] += theta;

                // Envío/recepción ‖ partes 2-3.
                let payload = self.halo_out[parity_range.clone()].to_vec();
                {
                    let channels = self.channels.as_ref().ok_or_else(|| CommError::Partition {
                        reason: "universo multi-rango sin canales de halo".to_string(),
                    })?;
                    Self::send_halo(&channels.to_right, payload, right, "quality-send")?;
                }
                let (gff, theta) = self.quality_interior(
                    self.partition.start_part(2),
                    self.partition.end_part(3),
                    evenodd,
                );
                local_totals[0] += gff;
                local_totals[1] += theta;
                {
                    let channels = self.channels.as_ref().ok_or_else(|| CommError::Partition {
                        reason: "universo multi-rango sin canales de halo".to_string(),
                    })?;
                    let incoming =
                        Self::recv_halo(&channels.from_left, halo_reals, left, "quality-recv")?;
                    self.halo_in[parity_range.clone()].copy_from_slice(&incoming);
                }

                // Desempaquetado ‖ partes 4-5 ‖ rebanada tmin con halo.
                self.device_halo[parity_range.clone()]
                    .copy_from_slice(&self.halo_in[parity_range.clone()]);
                let (gff, theta) = self.quality_interior(
                    self.partition.start_part(4),
                    self.partition.end_part(5),
                    evenodd,
                );
                local_totals[0] += gff;
                local_totals[1] += theta;

                let ctx = SliceContext { dims: self.dims, table: &self.table, timeslice: tmin };
                let (gff, theta) = quality_slice(
                    &ctx,
                    self.gauge,
                    &self.slabs[0],
                    &self.device_halo,
                    evenodd ^ (tmin % 2),
                );
                local_totals[0] += gff;
                local_totals[1] += theta;

                self.collective.barrier_wait();
            }
        }

        let [gff_total, theta_total] =
            self.collective.all_reduce_pair(self.partition.rank(), local_totals)?;
        self.collective.barrier_wait();

        let volume = self.dims.volume() as Real;
        let directions = self.gauge.functional_directions() as Real;
        let quality = GaugeQuality {
            gff: gff_total / (volume * directions * NC as Real),
            theta: theta_total / (volume * NC as Real),
        };
        debug!(
            "📐 [QUALITY]: rank {}: gff = {:.10}, theta = {:.4e}",
            self.partition.rank(),
            quality.gff,
            quality.theta
        );
        Ok(quality)
    }

    /// Reproyección de todas las rebanadas propias; sin comunicación.
    pub fn project_special_unitary(&mut self) -> Result<(), CommError> {
        let tmin = self.partition.tmin();
        let tmax = self.partition.tmax();
        let mut worst_drift: Real = 0.0;
        for timeslice in tmin..tmax {
            let ctx = SliceContext { dims: self.dims, table: &self.table, timeslice };
            let drift = reproject_slice(&ctx, self.slabs[timeslice - tmin].as_mut_slice())?;
            worst_drift = worst_drift.max(drift.max_defect);
        }
        if worst_drift > DRIFT_WARNING_THRESHOLD {
            // La deriva no es fatal: la reproyección acaba de corregirla.
            warn!(
                "⚠️ [DRIFT]: rank {}: defecto de unitariedad {:.3e} por encima del umbral {:.0e}",
                self.partition.rank(),
                worst_drift,
                DRIFT_WARNING_THRESHOLD
            );
        }
        self.collective.barrier_wait();
        Ok(())
    }

    /// Restaura y persiste la fila derivada de todos los enlaces de
    /// las rebanadas propias; sin comunicación. Los barridos solo
    /// escriben dos filas, así que esta pasada deja cada slab con la
    /// matriz 3x3 completa antes de la recolección y el guardado.
    pub fn restore_third_rows(&mut self) {
        let tmin = self.partition.tmin();
        let tmax = self.partition.tmax();
        for timeslice in tmin..tmax {
            let ctx = SliceContext { dims: self.dims, table: &self.table, timeslice };
            restore_third_row_slice(&ctx, self.slabs[timeslice - tmin].as_mut_slice());
        }
        self.collective.barrier_wait();
    }

    /// Puebla las rebanadas propias con enlaces aleatorios calientes.
    pub fn set_hot(&mut self, seed: u32, launch_counter: u32) {
        let tmin = self.partition.tmin();
        let tmax = self.partition.tmax();
        for timeslice in tmin..tmax {
            let ctx = SliceContext { dims: self.dims, table: &self.table, timeslice };
            set_hot_slice(&ctx, self.slabs[timeslice - tmin].as_mut_slice(), seed, launch_counter);
        }
        self.collective.barrier_wait();
    }
}

impl SweepBackend for GridCommunicator {
    type Error = CommError;

    fn apply_sweep(&mut self, options: &AlgorithmOptions, parity: usize) -> Result<(), CommError> {
        self.apply(options, parity)
    }

    fn reproject(&mut self) -> Result<(), CommError> {
        self.project_special_unitary()
    }

    fn restore_third_row(&mut self) -> Result<(), CommError> {
        self.restore_third_rows();
        Ok(())
    }

    fn gauge_quality(&mut self) -> Result<GaugeQuality, CommError> {
        self.generate_gauge_quality()
    }

    fn export_field(&self) -> Vec<Vec<Real>> {
        self.slabs.clone()
    }

    fn import_field(&mut self, field: &[Vec<Real>]) -> Result<(), CommError> {
        if field.len() != self.slabs.len() {
            return Err(CommError::FieldShapeMismatch);
        }
        for (slab, source) in self.slabs.iter_mut().zip(field) {
            if slab.len() != source.len() {
                return Err(CommError::FieldShapeMismatch);
            }
            slab.copy_from_slice(source);
        }
        Ok(())
    }
}

// [libs/domain/gaugefixing/src/sweep.rs]
/*!
 * =================================================================
 * APARATO: TIMESLICE SWEEP KERNELS (V16.2 - PARITY WAVEFRONT)
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: KERNELS POR REBANADA (BARRIDO, CALIDAD, REPARACIÓN)
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. WAVEFRONT DISCIPLINE: Un kernel procesa una clase de paridad
 *    espacial de una rebanada; los enlaces t-abajo viven en la
 *    rebanada anterior (o en el halo) con el mismo índice espacial.
 * 2. SCHEDULING INVARIANCE: El resultado del barrido es invariante
 *    bajo cualquier orden de sitios dentro de la clase de paridad;
 *    la variante 'ordered' lo certifica bit a bit en los tests.
 * 3. SITE STREAMS: El flujo RNG de cada sitio se clava al índice
 *    global (rebanada * volumen espacial + split), lo que hace el
 *    resultado multi-rango idéntico al mono-rango.
 *
 * # Mathematical Proof (Race Freedom):
 * Los sitios de una clase de paridad forman un conjunto independiente
 * del grafo de adyacencia de enlaces: cada enlace toca exactamente un
 * sitio actualizado (su origen o su destino, nunca ambos, porque los
 * extremos tienen paridades opuestas). Las escrituras del barrido son
 * por tanto disjuntas.
 * =================================================================
 */

use crate::errors::FixingError;
use crate::gauge::GaugeKind;
use crate::links::{read_link, SiteLinks, SlabView};
use crate::subgroup::{subgroup_step_site, AlgorithmOptions, SweepAlgorithm};
use crate::updates::{MicroUpdate, OrUpdate, RandomUpdate, SaUpdate, SrUpdate, UpdatePolicy};
use lgf_core_lattice::prelude::{LatticeDims, SpatialNeighbourTable};
use lgf_core_philox::CounterStream;
use lgf_core_su3::prelude::{Complex, Matrix3, Quaternion, Real, Su3};
use lgf_core_su3::SU2_SUBGROUPS;
use rayon::prelude::*;

/// Contexto geométrico de una rebanada durante un kernel.
#[derive(Clone, Copy)]
pub struct SliceContext<'a> {
    pub dims: LatticeDims,
    pub table: &'a SpatialNeighbourTable,
    /// Índice temporal global de la rebanada (clave de los flujos RNG).
    pub timeslice: usize,
}

/// Deriva observada por una pasada de reproyección.
#[derive(Debug, Clone, Copy, Default)]
pub struct DriftStats {
    /// Mayor defecto de unitariedad ||U·U† - I||_F antes de reparar.
    pub max_defect: Real,
}

#[inline]
fn stream_for_site(ctx: &SliceContext<'_>, slice_split_index: usize, seed: u32, launch: u32) -> CounterStream {
    let stream_id = (ctx.timeslice * ctx.dims.timeslice_volume() + slice_split_index) as u32;
    CounterStream::new(stream_id, seed, launch)
}

/// Carga los ocho enlaces adjuntos a un sitio de la rebanada.
///
/// # Safety
/// Las vistas deben apuntar a slabs vivos y ningún otro sitio de la
/// clase de paridad en curso puede tocar estos enlaces.
#[inline]
unsafe fn load_site_links(
    ctx: &SliceContext<'_>,
    ut: SlabView,
    ut_down: SlabView,
    slice_split_index: usize,
) -> SiteLinks {
    let mut links = SiteLinks { links: [Su3::identity(); 8] };
    for mu in 0..4 {
        *links.link_mut(mu, 0) = ut.read_link(ctx.dims, slice_split_index, mu);
    }
    // El vecino t-abajo comparte índice espacial en la rebanada previa.
    *links.link_mut(0, 1) = ut_down.read_link(ctx.dims, slice_split_index, 0);
    for direction in 1..4 {
        let neighbour = ctx.table.down(slice_split_index, direction);
        *links.link_mut(direction, 1) = ut.read_link(ctx.dims, neighbour, direction);
    }
    links
}

/// Persiste los ocho enlaces tras el paso de subgrupo.
///
/// # Safety
/// Mismas condiciones que 'load_site_links'.
#[inline]
unsafe fn store_site_links(
    ctx: &SliceContext<'_>,
    ut: SlabView,
    ut_down: SlabView,
    slice_split_index: usize,
    links: &SiteLinks,
) {
    for mu in 0..4 {
        ut.write_link(ctx.dims, slice_split_index, mu, links.link(mu, 0));
    }
    ut_down.write_link(ctx.dims, slice_split_index, 0, links.link(0, 1));
    for direction in 1..4 {
        let neighbour = ctx.table.down(slice_split_index, direction);
        ut.write_link(ctx.dims, neighbour, direction, links.link(direction, 1));
    }
}

#[inline]
fn site_step<P: UpdatePolicy>(
    ctx: &SliceContext<'_>,
    ut: SlabView,
    ut_down: SlabView,
    gauge: GaugeKind,
    policy: &P,
    seed: u32,
    launch: u32,
    slice_split_index: usize,
) {
    let mut stream = stream_for_site(ctx, slice_split_index, seed, launch);
    // SEGURIDAD: disciplina checkerboard; ver cabecera del aparato.
    unsafe {
        let mut links = load_site_links(ctx, ut, ut_down, slice_split_index);
        subgroup_step_site(gauge, &mut links, policy, &mut stream);
        store_site_links(ctx, ut, ut_down, slice_split_index, &links);
    }
}

/// Barrido de una clase de paridad espacial de la rebanada, en
/// paralelo sobre los sitios de la clase.
pub fn apply_slice<P: UpdatePolicy + Sync>(
    ctx: &SliceContext<'_>,
    ut: &mut [Real],
    ut_down: &mut [Real],
    parity: usize,
    gauge: GaugeKind,
    policy: &P,
    seed: u32,
    launch: u32,
) {
    let half_volume = ctx.dims.timeslice_volume() / 2;
    let ut_view = SlabView::new(ut);
    let ut_down_view = SlabView::new(ut_down);
    (0..half_volume).into_par_iter().for_each(|half_index| {
        let slice_split_index = parity * half_volume + half_index;
        site_step(ctx, ut_view, ut_down_view, gauge, policy, seed, launch, slice_split_index);
    });
}

/// Variante de referencia con orden de sitios explícito. El resultado
/// es bit a bit idéntico al de 'apply_slice' para cualquier orden:
/// es el certificado ejecutable de la no-interferencia checkerboard.
pub fn apply_slice_ordered<P: UpdatePolicy>(
    ctx: &SliceContext<'_>,
    ut: &mut [Real],
    ut_down: &mut [Real],
    parity: usize,
    gauge: GaugeKind,
    policy: &P,
    seed: u32,
    launch: u32,
    half_order: &[usize],
) {
    let half_volume = ctx.dims.timeslice_volume() / 2;
    let ut_view = SlabView::new(ut);
    let ut_down_view = SlabView::new(ut_down);
    for &half_index in half_order {
        let slice_split_index = parity * half_volume + half_index;
        site_step(ctx, ut_view, ut_down_view, gauge, policy, seed, launch, slice_split_index);
    }
}

/// Despacho del barrido según las opciones del conductor.
pub fn apply_slice_with_options(
    ctx: &SliceContext<'_>,
    ut: &mut [Real],
    ut_down: &mut [Real],
    parity: usize,
    gauge: GaugeKind,
    options: &AlgorithmOptions,
) {
    match options.algorithm {
        SweepAlgorithm::Overrelaxation => {
            let policy = OrUpdate::new(options.or_parameter);
            apply_slice(ctx, ut, ut_down, parity, gauge, &policy, options.seed, options.launch_counter);
        }
        SweepAlgorithm::Microcanonical => {
            apply_slice(ctx, ut, ut_down, parity, gauge, &MicroUpdate, options.seed, options.launch_counter);
        }
        SweepAlgorithm::SimulatedAnnealing => {
            let policy = SaUpdate::new(options.temperature);
            apply_slice(ctx, ut, ut_down, parity, gauge, &policy, options.seed, options.launch_counter);
        }
        SweepAlgorithm::StochasticRelaxation => {
            let policy = SrUpdate::new(options.sr_parameter);
            apply_slice(ctx, ut, ut_down, parity, gauge, &policy, options.seed, options.launch_counter);
        }
        SweepAlgorithm::RandomTransform => {
            apply_slice(ctx, ut, ut_down, parity, gauge, &RandomUpdate, options.seed, options.launch_counter);
        }
    }
}

// --- ESTRATO DE CALIDAD DE GAUGE ---

#[inline]
fn landau_site_quality(
    ctx: &SliceContext<'_>,
    gauge: GaugeKind,
    ut: &[Real],
    ut_down: &[Real],
    slice_split_index: usize,
) -> (Real, Real) {
    let mut functional = 0.0;
    let mut divergence = Matrix3::zero();
    for mu in 0..4 {
        if !gauge.includes_direction(mu) {
            continue;
        }
        let up = read_link(ctx.dims, ut, slice_split_index, mu);
        functional += up.re_trace();
        let down = if mu == 0 {
            read_link(ctx.dims, ut_down, slice_split_index, 0)
        } else {
            read_link(ctx.dims, ut, ctx.table.down(slice_split_index, mu), mu)
        };
        divergence += *up.matrix();
        divergence -= *down.matrix();
    }
    divergence.subtract_from_diagonal(divergence.trace().scale(1.0 / 3.0));
    let hermitian = divergence.hermitian();
    divergence -= hermitian;
    (functional, divergence.frobenius_squared())
}

#[inline]
fn mag_site_quality(
    ctx: &SliceContext<'_>,
    ut: &[Real],
    ut_down: &[Real],
    slice_split_index: usize,
) -> (Real, Real) {
    let mut functional = 0.0;
    let mut abelian = [Complex::zero(); 3];
    for mu in 0..4 {
        let up = read_link(ctx.dims, ut, slice_split_index, mu);
        functional += up.diagonal_abs_squared();
        let down = if mu == 0 {
            read_link(ctx.dims, ut_down, slice_split_index, 0)
        } else {
            read_link(ctx.dims, ut, ctx.table.down(slice_split_index, mu), mu)
        };
        for (i, j) in SU2_SUBGROUPS {
            let block = up.subgroup_matrix(i, j);
            abelian[i + j - 1] += block.get(0, 0) * block.get(1, 0).conj()
                - block.get(0, 1) * block.get(1, 1).conj();
            let block = down.subgroup_matrix_hermitian(i, j);
            abelian[i + j - 1] += block.get(0, 0) * block.get(1, 0).conj()
                - block.get(0, 1) * block.get(1, 1).conj();
        }
    }
    let precision = abelian[0].abs() + abelian[1].abs() + abelian[2].abs();
    (functional, precision)
}

/// Suma (Gff, theta) sobre una clase de paridad de la rebanada.
/// Solo lectura: el orden de reducción es el de los índices.
#[must_use]
pub fn quality_slice(
    ctx: &SliceContext<'_>,
    gauge: GaugeKind,
    ut: &[Real],
    ut_down: &[Real],
    parity: usize,
) -> (Real, Real) {
    let half_volume = ctx.dims.timeslice_volume() / 2;
    (0..half_volume)
        .into_par_iter()
        .map(|half_index| {
            let slice_split_index = parity * half_volume + half_index;
            match gauge {
                GaugeKind::MaximalAbelian => {
                    mag_site_quality(ctx, ut, ut_down, slice_split_index)
                }
                _ => landau_site_quality(ctx, gauge, ut, ut_down, slice_split_index),
            }
        })
        .reduce(|| (0.0, 0.0), |left, right| (left.0 + right.0, left.1 + right.1))
}

// --- ESTRATO DE REPARACIÓN Y ARRANQUE ---

/// Reproyecta todos los enlaces de la rebanada a SU(3) y reporta la
/// deriva máxima observada antes de la reparación.
pub fn reproject_slice(ctx: &SliceContext<'_>, ut: &mut [Real]) -> Result<DriftStats, FixingError> {
    let slice_volume = ctx.dims.timeslice_volume();
    let view = SlabView::new(ut);
    let max_defect = (0..slice_volume)
        .into_par_iter()
        .map(|slice_split_index| {
            let mut worst: Real = 0.0;
            for mu in 0..4 {
                // SEGURIDAD: cada (sitio, mu) se escribe exactamente
                // una vez; no hay solape entre tareas.
                unsafe {
                    let mut link = view.read_link(ctx.dims, slice_split_index, mu);
                    worst = worst.max(link.unitarity_defect());
                    link.project_special_unitary().map_err(|source| {
                        FixingError::Reprojection { timeslice: ctx.timeslice, source }
                    })?;
                    view.write_link(ctx.dims, slice_split_index, mu, &link);
                }
            }
            Ok(worst)
        })
        .try_reduce(|| 0.0, |left: Real, right: Real| Ok(left.max(right)))?;
    Ok(DriftStats { max_defect })
}

/// Restaura la fila derivada de cada enlace de la rebanada y la
/// persiste: fila2 = conj(fila0 x fila1) escrita junto a las dos
/// filas de verdad. Los barridos solo escriben dos filas, de modo que
/// la ranura de la tercera queda obsoleta en el slab; esta pasada la
/// sella antes de recolectar y guardar la configuración.
pub fn restore_third_row_slice(ctx: &SliceContext<'_>, ut: &mut [Real]) {
    let slice_volume = ctx.dims.timeslice_volume();
    let view = SlabView::new(ut);
    (0..slice_volume).into_par_iter().for_each(|slice_split_index| {
        for mu in 0..4 {
            // SEGURIDAD: cada (sitio, mu) pertenece a una única tarea.
            unsafe {
                let link = view.read_link(ctx.dims, slice_split_index, mu);
                view.write_link_full(ctx.dims, slice_split_index, mu, &link);
            }
        }
    });
}

/// Puebla la rebanada con enlaces SU(3) aleatorios: tres rotaciones
/// SU(2) sorteadas sobre la identidad, una por subgrupo.
pub fn set_hot_slice(ctx: &SliceContext<'_>, ut: &mut [Real], seed: u32, launch: u32) {
    let slice_volume = ctx.dims.timeslice_volume();
    let view = SlabView::new(ut);
    (0..slice_volume).into_par_iter().for_each(|slice_split_index| {
        let mut stream = stream_for_site(ctx, slice_split_index, seed, launch);
        for mu in 0..4 {
            let mut link = Su3::identity();
            for (i, j) in SU2_SUBGROUPS {
                let rotation = Quaternion::new(
                    stream.uniform() - 0.5,
                    stream.uniform() - 0.5,
                    stream.uniform() - 0.5,
                    stream.uniform() - 0.5,
                )
                .normalized();
                link.left_subgroup_multiply(i, j, &rotation);
            }
            // SEGURIDAD: cada (sitio, mu) pertenece a una única tarea.
            unsafe {
                view.write_link(ctx.dims, slice_split_index, mu, &link);
            }
        }
    });
}

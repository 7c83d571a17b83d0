// [tests/mirror/libs/domain/gaugefixing/functional_covariance.test.rs]
/**
 * =================================================================
 * APARATO: FUNCTIONAL COVARIANCE CERTIFIER (V4.2)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L2-DOMAIN
 * RESPONSABILIDAD: COVARIANZA GLOBAL DE Gff Y RECUPERACIÓN DE GAUGE
 * =================================================================
 */

use lgf_core_lattice::prelude::{LatticeDims, SpatialNeighbourTable};
use lgf_core_su3::prelude::{Quaternion, Real, Su3};
use lgf_domain_gaugefixing::prelude::*;

const DIMS: LatticeDims = LatticeDims::new(4, 4, 4, 4);

struct FieldFixture {
    table: SpatialNeighbourTable,
    slabs: Vec<Vec<Real>>,
}

impl FieldFixture {
    fn cold() -> Self {
        let mut slabs = Vec::new();
        for _ in 0..DIMS.nt() {
            let mut slab = vec![0.0; DIMS.timeslice_reals()];
            for split in 0..DIMS.timeslice_volume() {
                for mu in 0..4 {
                    write_link(DIMS, &mut slab, split, mu, &Su3::identity());
                }
            }
            slabs.push(slab);
        }
        Self { table: SpatialNeighbourTable::build(DIMS), slabs }
    }

    fn hot(seed: u32) -> Self {
        let table = SpatialNeighbourTable::build(DIMS);
        let mut slabs = Vec::new();
        for timeslice in 0..DIMS.nt() {
            let mut slab = vec![0.0; DIMS.timeslice_reals()];
            let ctx = SliceContext { dims: DIMS, table: &table, timeslice };
            set_hot_slice(&ctx, &mut slab, seed, 0);
            slabs.push(slab);
        }
        Self { table, slabs }
    }

    fn sweep(&mut self, gauge: GaugeKind, options: &AlgorithmOptions, evenodd: usize) {
        for timeslice in 0..DIMS.nt() {
            let down = if timeslice > 0 { timeslice - 1 } else { DIMS.nt() - 1 };
            let (left, right) = if down < timeslice {
                let (head, tail) = self.slabs.split_at_mut(timeslice);
                (&mut tail[0], &mut head[down])
            } else {
                let (head, tail) = self.slabs.split_at_mut(down);
                (&mut head[timeslice], &mut tail[0])
            };
            let ctx = SliceContext { dims: DIMS, table: &self.table, timeslice };
            apply_slice_with_options(&ctx, left, right, evenodd ^ (timeslice % 2), gauge, options);
        }
    }

    fn quality(&self, gauge: GaugeKind) -> (Real, Real) {
        let mut totals = (0.0, 0.0);
        for evenodd in 0..2 {
            for timeslice in 0..DIMS.nt() {
                let down = if timeslice > 0 { timeslice - 1 } else { DIMS.nt() - 1 };
                let ctx = SliceContext { dims: DIMS, table: &self.table, timeslice };
                let (gff, theta) = quality_slice(
                    &ctx,
                    gauge,
                    &self.slabs[timeslice],
                    &self.slabs[down],
                    evenodd ^ (timeslice % 2),
                );
                totals.0 += gff;
                totals.1 += theta;
            }
        }
        let volume = DIMS.volume() as Real;
        let directions = gauge.functional_directions() as Real;
        (totals.0 / (volume * directions * 3.0), totals.1 / (volume * 3.0))
    }

    fn reproject(&mut self) {
        for timeslice in 0..DIMS.nt() {
            let ctx = SliceContext { dims: DIMS, table: &self.table, timeslice };
            reproject_slice(&ctx, &mut self.slabs[timeslice]).expect("reproyección rota");
        }
    }

    /// U_mu(x) -> g·U_mu(x)·g† con g constante global.
    fn transform_globally(&mut self, g: &Su3) {
        let g_dagger = Su3::from_matrix(g.matrix().hermitian());
        for slab in &mut self.slabs {
            for split in 0..DIMS.timeslice_volume() {
                for mu in 0..4 {
                    let link = read_link(DIMS, slab, split, mu);
                    let rotated =
                        Su3::from_matrix(g.matrix().multiply(link.matrix()).multiply(g_dagger.matrix()));
                    write_link(DIMS, slab, split, mu, &rotated);
                }
            }
        }
    }
}

fn constant_group_element() -> Su3 {
    let mut g = Su3::identity();
    g.left_subgroup_multiply(0, 1, &Quaternion::new(0.5, 0.5, -0.5, 0.5));
    g.left_subgroup_multiply(0, 2, &Quaternion::new(0.8, 0.0, 0.6, 0.0));
    g.left_subgroup_multiply(1, 2, &Quaternion::new(0.6, -0.8, 0.0, 0.0));
    g
}

/**
 * CERTIFICACIÓN: Gff es invariante bajo una transformación global
 * constante (la traza es cíclica) módulo redondeo.
 */
#[test]
fn certify_global_transform_leaves_functional_invariant() {
    let mut fixture = FieldFixture::hot(3);
    let (gff_before, _) = fixture.quality(GaugeKind::Landau);
    let (coulomb_before, _) = fixture.quality(GaugeKind::Coulomb);

    fixture.transform_globally(&constant_group_element());

    let (gff_after, _) = fixture.quality(GaugeKind::Landau);
    let (coulomb_after, _) = fixture.quality(GaugeKind::Coulomb);
    assert!(
        (gff_after - gff_before).abs() < 1e-10,
        "Covarianza Landau rota: {gff_before} -> {gff_after}"
    );
    assert!(
        (coulomb_after - coulomb_before).abs() < 1e-10,
        "Covarianza Coulomb rota: {coulomb_before} -> {coulomb_after}"
    );
}

/**
 * CERTIFICACIÓN (ida y vuelta): una transformación aleatoria del
 * campo frío es gauge puro; la sobre-relajación convergida debe
 * devolver theta < 1e-6 y un funcional a menos de 1e-4 del valor 1
 * del punto de partida.
 */
#[test]
fn certify_pure_gauge_recovery_after_random_transform() {
    let mut fixture = FieldFixture::cold();

    for parity in 0..2 {
        let options = AlgorithmOptions::random_transform(11, parity as u32);
        fixture.sweep(GaugeKind::Landau, &options, parity);
    }
    let (scrambled_gff, scrambled_theta) = fixture.quality(GaugeKind::Landau);
    assert!(scrambled_gff < 0.99, "La transformación aleatoria no movió el campo");
    assert!(scrambled_theta > 1e-3, "Divergencia sospechosamente baja tras el revuelto");

    let options = AlgorithmOptions::overrelaxation(1.7);
    let mut final_theta = scrambled_theta;
    for iteration in 1..=2000 {
        for parity in 0..2 {
            fixture.sweep(GaugeKind::Landau, &options, parity);
        }
        if iteration % 100 == 0 {
            fixture.reproject();
            let (_, theta) = fixture.quality(GaugeKind::Landau);
            final_theta = theta;
            if theta < 1e-8 {
                break;
            }
        }
    }

    let (final_gff, theta) = fixture.quality(GaugeKind::Landau);
    final_theta = final_theta.min(theta);
    assert!(final_theta < 1e-6, "Sin converger: theta = {final_theta:.3e}");
    assert!(
        (final_gff - 1.0).abs() < 1e-4,
        "El gauge puro no se recuperó: gff = {final_gff}"
    );
}

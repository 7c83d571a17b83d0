// [tests/mirror/libs/domain/gaugefixing/mag_accumulator_invariant.test.rs]
/**
 * =================================================================
 * APARATO: MAG ACCUMULATOR INVARIANT CERTIFIER (V2.0)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L2-DOMAIN
 * RESPONSABILIDAD: EL CUARTO COMPONENTE DEL CUATERNIÓN MAG
 *
 * Invariante clavado: para toda política determinista (y para SA/SR)
 * el cuaternión aplicado en el gauge Abeliano maximal tiene cuarto
 * componente exactamente cero; SOLO la transformación aleatoria
 * conserva su cuarto componente, porque debe producir un elemento
 * SU(2) completo. Este test es la referencia antes de tocar esa
 * rama del código.
 * =================================================================
 */

use lgf_core_lattice::prelude::{LatticeDims, SpatialNeighbourTable};
use lgf_core_philox::CounterStream;
use lgf_core_su3::prelude::{Quaternion, Real, Su3};
use lgf_domain_gaugefixing::prelude::*;

const DIMS: LatticeDims = LatticeDims::new(4, 4, 4, 4);

fn skewed_links() -> SiteLinks {
    let mut links = SiteLinks { links: [Su3::identity(); 8] };
    let rotations = [
        Quaternion::new(0.5, 0.5, 0.5, 0.5),
        Quaternion::new(0.8, 0.0, 0.6, 0.0),
        Quaternion::new(0.6, -0.8, 0.0, 0.0),
    ];
    for mu in 0..4 {
        for updown in 0..2 {
            let rotation = rotations[(mu + updown) % 3];
            links.link_mut(mu, updown).left_subgroup_multiply(0, 2, &rotation);
            links.link_mut(mu, updown).right_subgroup_multiply(1, 2, &rotations[mu % 3]);
        }
    }
    links
}

fn mag_update_for<P: UpdatePolicy>(policy: &P, random: bool) -> Quaternion {
    let gauge = GaugeKind::MaximalAbelian;
    let links = skewed_links();
    let mut stream = CounterStream::new(40, 2, 1);
    let mut accumulator = gauge.accumulate(&links, 0, 1);
    gauge.prepare_accumulator(&mut accumulator);
    policy.calculate_update(&mut accumulator, &mut stream);
    gauge.finalize_update(&mut accumulator, random);
    accumulator
}

/**
 * CERTIFICACIÓN: tras preparar el acumulador MAG, A3 = 0 y A0 lleva
 * el radio sumado; tras cualquier política no aleatoria el cuarto
 * componente del cuaternión final es exactamente cero.
 */
#[test]
fn certify_deterministic_mag_updates_have_null_fourth_component() {
    let or_update = mag_update_for(&OrUpdate::new(1.7), false);
    assert_eq!(or_update[3], 0.0, "OR filtró un cuarto componente");
    assert!((or_update.norm_squared() - 1.0).abs() < 1e-12);

    let micro_update = mag_update_for(&MicroUpdate, false);
    assert_eq!(micro_update[3], 0.0, "Micro filtró un cuarto componente");

    let sa_update = mag_update_for(&SaUpdate::new(0.3), false);
    assert_eq!(sa_update[3], 0.0, "SA filtró un cuarto componente");

    let sr_update = mag_update_for(&SrUpdate::new(0.5), false);
    assert_eq!(sr_update[3], 0.0, "SR filtró un cuarto componente");
}

/**
 * CERTIFICACIÓN: la transformación aleatoria conserva su cuarto
 * componente (elemento SU(2) completo) y sigue siendo unitaria.
 */
#[test]
fn certify_random_transform_keeps_full_su2_element() {
    let random_update = mag_update_for(&RandomUpdate, true);
    assert!(random_update[3] != 0.0, "El elemento aleatorio quedó mutilado");
    assert!((random_update.norm_squared() - 1.0).abs() < 1e-12);
}

/**
 * CERTIFICACIÓN: a nivel de barrido completo, tanto la fijación MAG
 * determinista como la transformación aleatoria MAG conservan la
 * unitariedad de todos los enlaces.
 */
#[test]
fn certify_mag_sweeps_preserve_unitarity() {
    let table = SpatialNeighbourTable::build(DIMS);
    let mut ut = vec![0.0; DIMS.timeslice_reals()];
    let mut ut_down = vec![0.0; DIMS.timeslice_reals()];
    {
        let ctx = SliceContext { dims: DIMS, table: &table, timeslice: 1 };
        set_hot_slice(&ctx, &mut ut, 7, 0);
    }
    {
        let ctx = SliceContext { dims: DIMS, table: &table, timeslice: 0 };
        set_hot_slice(&ctx, &mut ut_down, 7, 0);
    }

    let ctx = SliceContext { dims: DIMS, table: &table, timeslice: 1 };
    for parity in 0..2 {
        let options = AlgorithmOptions::random_transform(7, 1);
        apply_slice_with_options(&ctx, &mut ut, &mut ut_down, parity, GaugeKind::MaximalAbelian, &options);
        let options = AlgorithmOptions::overrelaxation(1.7);
        apply_slice_with_options(&ctx, &mut ut, &mut ut_down, parity, GaugeKind::MaximalAbelian, &options);
    }

    for split in 0..DIMS.timeslice_volume() {
        for mu in 0..4 {
            let defect = read_link(DIMS, &ut, split, mu).unitarity_defect();
            assert!(defect < 1e-10, "Enlace no unitario tras el barrido MAG: {defect:.3e}");
        }
    }
}

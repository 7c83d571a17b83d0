// [tests/mirror/libs/domain/gaugefixing/checkerboard_discipline.test.rs]
/**
 * =================================================================
 * APARATO: CHECKERBOARD DISCIPLINE CERTIFIER (V3.1)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L2-DOMAIN
 * RESPONSABILIDAD: NO-INTERFERENCIA BIT A BIT DEL BARRIDO
 *
 * El coloreado checkerboard garantiza que dos sitios de la misma
 * clase de paridad no comparten ningún enlace: el resultado de un
 * barrido debe ser idéntico bit a bit bajo cualquier orden de sitios
 * y bajo la planificación paralela.
 * =================================================================
 */

use lgf_core_lattice::prelude::{LatticeDims, SpatialNeighbourTable};
use lgf_core_su3::prelude::Real;
use lgf_domain_gaugefixing::prelude::*;

const DIMS: LatticeDims = LatticeDims::new(4, 4, 4, 4);

fn hot_pair(seed: u32) -> (SpatialNeighbourTable, Vec<Real>, Vec<Real>) {
    let table = SpatialNeighbourTable::build(DIMS);
    let mut ut = vec![0.0; DIMS.timeslice_reals()];
    let mut ut_down = vec![0.0; DIMS.timeslice_reals()];
    {
        let ctx = SliceContext { dims: DIMS, table: &table, timeslice: 1 };
        set_hot_slice(&ctx, &mut ut, seed, 0);
    }
    {
        let ctx = SliceContext { dims: DIMS, table: &table, timeslice: 0 };
        set_hot_slice(&ctx, &mut ut_down, seed, 0);
    }
    (table, ut, ut_down)
}

fn bits_of(slab: &[Real]) -> Vec<u64> {
    slab.iter().map(|value| value.to_bits()).collect()
}

/**
 * CERTIFICACIÓN: orden ascendente, orden inverso y planificación
 * paralela producen slabs idénticos bit a bit.
 */
#[test]
fn certify_site_order_invariance() {
    let half_volume = DIMS.timeslice_volume() / 2;
    let forward: Vec<usize> = (0..half_volume).collect();
    let reversed: Vec<usize> = (0..half_volume).rev().collect();
    // Un orden entrelazado arbitrario adicional.
    let interleaved: Vec<usize> =
        (0..half_volume / 2).flat_map(|k| [k, half_volume - 1 - k]).collect();

    let policy = OrUpdate::new(1.7);
    let mut reference: Option<(Vec<u64>, Vec<u64>)> = None;

    for order in [&forward, &reversed, &interleaved] {
        let (table, mut ut, mut ut_down) = hot_pair(9);
        let ctx = SliceContext { dims: DIMS, table: &table, timeslice: 1 };
        for parity in 0..2 {
            apply_slice_ordered(
                &ctx,
                &mut ut,
                &mut ut_down,
                parity,
                GaugeKind::Landau,
                &policy,
                1,
                0,
                order,
            );
        }
        let snapshot = (bits_of(&ut), bits_of(&ut_down));
        match &reference {
            None => reference = Some(snapshot),
            Some(expected) => {
                assert_eq!(expected.0, snapshot.0, "Orden de sitios visible en la rebanada");
                assert_eq!(expected.1, snapshot.1, "Orden de sitios visible en la vecina");
            }
        }
    }

    // La planificación paralela coincide con la referencia ordenada.
    let (table, mut ut, mut ut_down) = hot_pair(9);
    let ctx = SliceContext { dims: DIMS, table: &table, timeslice: 1 };
    for parity in 0..2 {
        apply_slice(&ctx, &mut ut, &mut ut_down, parity, GaugeKind::Landau, &policy, 1, 0);
    }
    let expected = reference.expect("referencia ausente");
    assert_eq!(expected.0, bits_of(&ut), "Planificación paralela no determinista");
    assert_eq!(expected.1, bits_of(&ut_down));
}

/**
 * CERTIFICACIÓN: también las políticas estocásticas son invariantes
 * de orden, porque el flujo RNG está clavado al sitio y no al hilo.
 */
#[test]
fn certify_stochastic_sweeps_are_order_invariant() {
    let half_volume = DIMS.timeslice_volume() / 2;
    let forward: Vec<usize> = (0..half_volume).collect();
    let reversed: Vec<usize> = (0..half_volume).rev().collect();
    let policy = SaUpdate::new(0.25);

    let mut snapshots = Vec::new();
    for order in [&forward, &reversed] {
        let (table, mut ut, mut ut_down) = hot_pair(21);
        let ctx = SliceContext { dims: DIMS, table: &table, timeslice: 1 };
        apply_slice_ordered(
            &ctx,
            &mut ut,
            &mut ut_down,
            0,
            GaugeKind::Landau,
            &policy,
            21,
            4,
            order,
        );
        snapshots.push((bits_of(&ut), bits_of(&ut_down)));
    }
    assert_eq!(snapshots[0], snapshots[1], "Flujos RNG dependientes del orden");
}

// [tests/mirror/libs/infra/halo_grid/partition_coverage.test.rs]
/**
 * =================================================================
 * APARATO: PARTITION COVERAGE CERTIFIER (V2.2)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L3-TRANSPORT
 * RESPONSABILIDAD: LAS SEIS PARTES CUBREN EL INTERIOR UNA SOLA VEZ
 * =================================================================
 */

use lgf_infra_halo::prelude::TimePartition;

/**
 * CERTIFICACIÓN: en varios universos válidos, las seis partes de
 * cada rango recubren exactamente (tmin, tmax) y nada más.
 */
#[test]
fn certify_six_parts_tile_every_interior() {
    for (nt, nprocs) in [(8usize, 1usize), (8, 2), (16, 2), (16, 4), (48, 4), (64, 8)] {
        for rank in 0..nprocs {
            let partition = TimePartition::build(nt, nprocs, rank).expect("partición válida");
            let mut covered = vec![0usize; nt];
            for part in 0..6 {
                assert!(
                    partition.start_part(part) <= partition.end_part(part),
                    "Parte {part} invertida"
                );
                for timeslice in partition.start_part(part)..partition.end_part(part) {
                    covered[timeslice] += 1;
                }
            }
            for timeslice in 0..nt {
                let interior =
                    timeslice > partition.tmin() && timeslice < partition.tmax();
                assert_eq!(
                    covered[timeslice],
                    usize::from(interior),
                    "Cobertura errónea de t = {timeslice} en (nt={nt}, n={nprocs}, r={rank})"
                );
            }
        }
    }
}

/**
 * CERTIFICACIÓN: el reparto de rebanadas es una partición del eje y
 * el mapa de propietarios es coherente con ella.
 */
#[test]
fn certify_ownership_partitions_the_time_axis() {
    let (nt, nprocs) = (24usize, 3usize);
    let mut owners = vec![usize::MAX; nt];
    for rank in 0..nprocs {
        let partition = TimePartition::build(nt, nprocs, rank).expect("partición válida");
        for timeslice in partition.tmin()..partition.tmax() {
            assert_eq!(owners[timeslice], usize::MAX, "Rebanada {timeslice} doblemente poseída");
            owners[timeslice] = rank;
            assert_eq!(partition.owner_of(timeslice), rank);
        }
    }
    assert!(owners.iter().all(|owner| *owner != usize::MAX), "Rebanadas huérfanas");
}

/**
 * CERTIFICACIÓN: los universos que desalinean la paridad del halo se
 * rechazan en la construcción; los degenerados también.
 */
#[test]
fn certify_degenerate_universes_are_rejected() {
    assert!(TimePartition::build(6, 2, 0).is_err(), "Nt no divisible por 2·n aceptado");
    assert!(TimePartition::build(10, 4, 0).is_err());
    assert!(TimePartition::build(8, 2, 2).is_err(), "Rango fuera del universo aceptado");
    assert!(TimePartition::build(8, 0, 0).is_err(), "Universo vacío aceptado");
    assert!(TimePartition::build(8, 2, 1).is_ok());
}

/**
 * CERTIFICACIÓN: el anillo de vecinos es periódico en ambos sentidos.
 */
#[test]
fn certify_neighbour_ring_closure() {
    let nprocs = 4;
    for rank in 0..nprocs {
        let partition = TimePartition::build(16, nprocs, rank).expect("partición válida");
        assert_eq!(partition.left(), (rank + nprocs - 1) % nprocs);
        assert_eq!(partition.right(), (rank + 1) % nprocs);
    }
}

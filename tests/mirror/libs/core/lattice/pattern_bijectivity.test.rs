// [tests/mirror/libs/core/lattice/pattern_bijectivity.test.rs]
/**
 * =================================================================
 * APARATO: PATTERN BIJECTIVITY CERTIFIER (V4.0)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-GEOMETRY
 * RESPONSABILIDAD: LOS CINCO PATRONES SON PERMUTACIONES DEL ARRAY
 * =================================================================
 */

use lgf_core_lattice::prelude::{
    AccessPattern, GpuLandauPattern, GpuPattern, GpuTimeslicePattern, LatticeDims, SiteCoord,
    StandardPattern, TimesliceParityPriorityPattern,
};

const DIMS: LatticeDims = LatticeDims::new(4, 4, 6, 4);

fn certify_permutation<P: AccessPattern>(label: &str) {
    let total = DIMS.total_reals();
    let mut seen = vec![false; total];
    for unique in 0..total {
        let offset = P::index_by_unique(unique, DIMS);
        assert!(offset < total, "{label}: offset {offset} fuera del array");
        assert!(!seen[offset], "{label}: colisión en unique {unique}");
        seen[offset] = true;
    }
}

/**
 * CERTIFICACIÓN: index_by_unique es biyectiva para cada patrón.
 */
#[test]
fn certify_all_patterns_are_permutations() {
    certify_permutation::<StandardPattern>("StandardPattern");
    certify_permutation::<GpuPattern>("GpuPattern");
    certify_permutation::<GpuLandauPattern>("GpuLandauPattern");
    certify_permutation::<GpuTimeslicePattern>("GpuTimeslicePattern");
    certify_permutation::<TimesliceParityPriorityPattern>("TimesliceParityPriorityPattern");
}

/**
 * CERTIFICACIÓN: unique_index y index_by_unique son recíprocas, es
 * decir index(site,...) == index_by_unique(unique(site,...)).
 */
#[test]
fn certify_unique_routing_is_consistent() {
    let mut site = SiteCoord::origin(DIMS);
    for lexicographic in 0..DIMS.volume() {
        site.set_from_lexicographic(lexicographic);
        for mu in 0..4 {
            for row in 0..3 {
                for col in 0..3 {
                    for c in 0..2 {
                        let unique = GpuPattern::unique_index(&site, mu, row, col, c);
                        assert_eq!(
                            GpuPattern::index_by_unique(unique, DIMS),
                            GpuPattern::index(&site, mu, row, col, c),
                            "Enrutado único roto en el sitio {lexicographic}"
                        );
                        assert_eq!(
                            TimesliceParityPriorityPattern::index_by_unique(unique, DIMS),
                            TimesliceParityPriorityPattern::index(&site, mu, row, col, c),
                        );
                    }
                }
            }
        }
    }
}

/**
 * CERTIFICACIÓN: para StandardPattern el índice propio ES el único.
 */
#[test]
fn certify_standard_pattern_is_the_canonical_order() {
    let mut site = SiteCoord::origin(DIMS);
    site.set_from_lexicographic(123 % DIMS.volume());
    for mu in 0..4 {
        for row in 0..3 {
            assert_eq!(
                StandardPattern::index(&site, mu, row, 1, 0),
                StandardPattern::unique_index(&site, mu, row, 1, 0),
            );
        }
    }
}

/**
 * CERTIFICACIÓN: el patrón de trabajo deja las mitades de paridad de
 * cada rebanada contiguas (contrato del empaquetado de halo).
 */
#[test]
fn certify_working_layout_parity_contiguity() {
    let slice_reals = DIMS.timeslice_reals();
    let mut site = SiteCoord::origin(DIMS);
    for t in 0..DIMS.nt() {
        let mut even_max = 0usize;
        let mut odd_min = usize::MAX;
        for split in 0..DIMS.timeslice_volume() {
            site = SiteCoord::from_coords(DIMS, [t, 0, 0, 0]);
            site.set_spatial_from_slice_split(split);
            for mu in 0..4 {
                for row in 0..3 {
                    for col in 0..3 {
                        for c in 0..2 {
                            let offset =
                                TimesliceParityPriorityPattern::index(&site, mu, row, col, c)
                                    - t * slice_reals;
                            if split < DIMS.timeslice_volume() / 2 {
                                even_max = even_max.max(offset);
                            } else {
                                odd_min = odd_min.min(offset);
                            }
                        }
                    }
                }
            }
        }
        assert_eq!(even_max + 1, slice_reals / 2, "Mitad par no compacta en t = {t}");
        assert_eq!(odd_min, slice_reals / 2, "Mitad impar desplazada en t = {t}");
    }
}

// [tests/mirror/libs/core/lattice/neighbour_stepping.test.rs]
/**
 * =================================================================
 * APARATO: NEIGHBOUR STEPPING CERTIFIER (V3.2)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-GEOMETRY
 * RESPONSABILIDAD: PERIODICIDAD DEL PASO Y COHERENCIA DE LA TABLA
 * =================================================================
 */

use lgf_core_lattice::prelude::{LatticeDims, SiteCoord, SpatialNeighbourTable};
use proptest::prelude::*;

const DIMS: LatticeDims = LatticeDims::new(4, 6, 4, 8);

proptest! {
    /// Avanzar y retroceder en cualquier dirección es la identidad.
    #[test]
    fn certify_step_updown_roundtrip(
        t in 0usize..4,
        x in 0usize..6,
        y in 0usize..4,
        z in 0usize..8,
        direction in 0usize..4,
    ) {
        let original = SiteCoord::from_coords(DIMS, [t, x, y, z]);
        let mut walker = original;
        walker.step(direction, true);
        walker.step(direction, false);
        prop_assert_eq!(walker, original);
    }

    /// Extent(i) pasos en la dirección i cierran el anillo periódico.
    #[test]
    fn certify_full_orbit_is_periodic(
        t in 0usize..4,
        x in 0usize..6,
        y in 0usize..4,
        z in 0usize..8,
        direction in 0usize..4,
    ) {
        let original = SiteCoord::from_coords(DIMS, [t, x, y, z]);
        let mut walker = original;
        for _ in 0..DIMS.extent(direction) {
            walker.step(direction, true);
        }
        prop_assert_eq!(walker, original);
    }

    /// Un paso cualquiera invierte la paridad completa del sitio.
    #[test]
    fn certify_step_flips_parity(
        t in 0usize..4,
        x in 0usize..6,
        y in 0usize..4,
        z in 0usize..8,
        direction in 0usize..4,
        up in any::<bool>(),
    ) {
        let mut walker = SiteCoord::from_coords(DIMS, [t, x, y, z]);
        let parity_before = walker.parity();
        walker.step(direction, up);
        prop_assert_ne!(parity_before, walker.parity());
    }
}

/**
 * CERTIFICACIÓN: la tabla precomputada coincide con el paso directo
 * en toda la rebanada, en ambos sentidos.
 */
#[test]
fn certify_table_matches_direct_stepping() {
    let table = SpatialNeighbourTable::build(DIMS);
    let mut site = SiteCoord::origin(DIMS);
    for split in 0..DIMS.timeslice_volume() {
        for direction in 1..4 {
            site.set_spatial_from_slice_split(split);
            site.step(direction, true);
            assert_eq!(table.up(split, direction), site.slice_split_index());

            site.set_spatial_from_slice_split(split);
            site.step(direction, false);
            assert_eq!(table.down(split, direction), site.slice_split_index());
        }
    }
}

// [tests/mirror/libs/core/su3_math/quaternion_laws.test.rs]
/**
 * =================================================================
 * APARATO: QUATERNION LAW CERTIFIER (V3.0)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-CORE
 * RESPONSABILIDAD: LEY DE GRUPO SU(2) EN REPRESENTACIÓN DE 4 REALES
 * =================================================================
 */

use lgf_core_su3::prelude::{Quaternion, Su3};

fn unit(a0: f64, a1: f64, a2: f64, a3: f64) -> Quaternion {
    Quaternion::new(a0, a1, a2, a3).normalized()
}

/**
 * CERTIFICACIÓN: asociatividad del producto cerrado.
 */
#[test]
fn certify_product_is_associative() {
    let p = unit(0.3, -0.4, 0.5, 0.6);
    let q = unit(-0.8, 0.1, 0.2, 0.3);
    let r = unit(0.05, 0.9, -0.3, 0.2);
    let left = (p * q) * r;
    let right = p * (q * r);
    for component in 0..4 {
        assert!(
            (left[component] - right[component]).abs() < 1e-14,
            "Asociatividad rota en el componente {component}"
        );
    }
}

/**
 * CERTIFICACIÓN: el hermítico es el inverso sobre la esfera unidad.
 */
#[test]
fn certify_hermitian_is_group_inverse() {
    let element = unit(0.1, 0.7, -0.2, 0.5);
    let product = element * element.hermitian();
    assert!((product[0] - 1.0).abs() < 1e-14);
    assert!(product[1].abs() + product[2].abs() + product[3].abs() < 1e-14);
}

/**
 * CERTIFICACIÓN: la inmersión (i,j) y el producto cuaterniónico
 * conmutan con el producto matricial denso 3x3.
 */
#[test]
fn certify_embedding_commutes_with_dense_product() {
    let g = unit(0.2, -0.6, 0.7, 0.1);
    let h = unit(0.9, 0.1, -0.3, 0.2);

    // Camino 1: producto cuaterniónico, luego inmersión.
    let mut via_quaternion = Su3::identity();
    via_quaternion.left_subgroup_multiply(0, 1, &(g * h));

    // Camino 2: inmersiones sucesivas (g después de h).
    let mut via_dense = Su3::identity();
    via_dense.left_subgroup_multiply(0, 1, &h);
    via_dense.left_subgroup_multiply(0, 1, &g);

    for row in 0..3 {
        for col in 0..3 {
            let delta = via_quaternion.get(row, col) - via_dense.get(row, col);
            assert!(delta.abs() < 1e-14, "Inmersión no homomórfica en ({row},{col})");
        }
    }
}

/**
 * CERTIFICACIÓN: la extracción de subgrupo devuelve el doble del
 * cuaternión inmerso, en los tres bloques del barrido.
 */
#[test]
fn certify_subgroup_extraction_scale() {
    for (i, j) in [(0usize, 1usize), (0, 2), (1, 2)] {
        let element = unit(0.4, 0.3, -0.5, 0.2);
        let mut link = Su3::identity();
        link.left_subgroup_multiply(i, j, &element);
        let extracted = link.subgroup_quaternion(i, j);
        for component in 0..4 {
            assert!(
                (extracted[component] - 2.0 * element[component]).abs() < 1e-14,
                "Extracción desalineada en el bloque ({i},{j})"
            );
        }
    }
}

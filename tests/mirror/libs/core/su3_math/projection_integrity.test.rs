// [tests/mirror/libs/core/su3_math/projection_integrity.test.rs]
/**
 * =================================================================
 * APARATO: SU(3) PROJECTION CERTIFIER (V3.1)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-CORE
 * RESPONSABILIDAD: GRAM-SCHMIDT + FILA DERIVADA SOBRE LA VARIEDAD
 * =================================================================
 */

use lgf_core_su3::prelude::{Complex, Quaternion, Su3};

fn drifted_link() -> Su3 {
    // Enlace unitario perturbado componente a componente: simula la
    // deriva acumulada de muchos pasos de subgrupo en precisión finita.
    let mut link = Su3::identity();
    link.left_subgroup_multiply(0, 1, &Quaternion::new(0.6, 0.0, 0.8, 0.0));
    link.left_subgroup_multiply(1, 2, &Quaternion::new(0.8, 0.6, 0.0, 0.0));
    for row in 0..2 {
        for col in 0..3 {
            let cell = link.get(row, col);
            link.set(row, col, cell + Complex::new(1e-4 * (row as f64 + 1.0), -5e-5));
        }
    }
    link
}

/**
 * CERTIFICACIÓN: la proyección reduce el defecto de unitariedad por
 * debajo del umbral posterior a reproyección.
 */
#[test]
fn certify_projection_restores_unitarity_budget() {
    let mut link = drifted_link();
    let defect_before = link.unitarity_defect();
    assert!(defect_before > 1e-5, "La perturbación no derivó el enlace");
    assert!(defect_before < 1e-3, "Deriva inicial fuera del presupuesto previo");

    link.project_special_unitary().expect("proyección degenerada");
    assert!(link.unitarity_defect() < 1e-5, "Defecto residual tras reproyectar");

    let det = link.determinant();
    assert!(
        (det.re - 1.0).abs() < 1e-9 && det.im.abs() < 1e-9,
        "Determinante fuera de presupuesto: ({}, {})",
        det.re,
        det.im
    );
}

/**
 * CERTIFICACIÓN: la proyección es idempotente módulo redondeo.
 */
#[test]
fn certify_projection_is_idempotent() {
    let mut link = drifted_link();
    link.project_special_unitary().expect("proyección degenerada");
    let first_pass = *link.matrix();
    link.project_special_unitary().expect("proyección degenerada");
    for row in 0..3 {
        for col in 0..3 {
            let delta = link.get(row, col) - first_pass.get(row, col);
            assert!(delta.abs() < 1e-14, "Proyección no idempotente en ({row},{col})");
        }
    }
}

/**
 * CERTIFICACIÓN: la fila derivada reconstruye la tercera fila de un
 * elemento exacto del grupo.
 */
#[test]
fn certify_third_row_reconstruction() {
    let mut exact = Su3::identity();
    exact.left_subgroup_multiply(0, 2, &Quaternion::new(0.5, 0.5, 0.5, 0.5));
    exact.right_subgroup_multiply(1, 2, &Quaternion::new(0.0, 1.0, 0.0, 0.0));

    let mut reconstructed = exact;
    // Corrompe la tercera fila y exige su recuperación.
    for col in 0..3 {
        reconstructed.set(2, col, Complex::new(7.0, -7.0));
    }
    reconstructed.reconstruct_third_row();
    for col in 0..3 {
        let delta = reconstructed.get(2, col) - exact.get(2, col);
        assert!(delta.abs() < 1e-14, "Fila derivada incorrecta en la columna {col}");
    }
}

/**
 * CERTIFICACIÓN: una fila nula es un fallo tipado, no un pánico.
 */
#[test]
fn certify_degenerate_row_is_reported() {
    let mut corrupt = Su3::identity();
    for col in 0..3 {
        corrupt.set(0, col, Complex::zero());
    }
    assert!(corrupt.project_special_unitary().is_err(), "Fila nula aceptada");
}

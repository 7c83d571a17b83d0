// [tests/mirror/libs/shared/argus/argus_integrity.test.rs]
/**
 * =================================================================
 * APARATO: ARGUS INTEGRITY CERTIFIER (V2.0)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L4-SHARED
 * RESPONSABILIDAD: VALIDACIÓN DE TRAZADO E INTERCEPCIÓN DE PÁNICOS
 * =================================================================
 */

use lgf_shared_argus::init_tracing;
use std::panic;
use tracing::info;

/**
 * CERTIFICACIÓN: ignición del observador y escudo global de pánicos.
 */
#[test]
fn certify_argus_bootstrap_and_panic_shield() {
    println!("\n👁️  [PROVING_GROUNDS]: Initiating Argus observability audit...");

    // 1. FASE DE IGNICIÓN SOBERANA
    init_tracing("argus_integrity_test");

    // 2. FASE DE EMISIÓN
    println!("   🧪 Phase 1: Emitting a traced event...");
    info!("📡 [SIGNAL]: Executing traced micro-operation.");
    println!("      ✅ Event dispatch: OK.");

    // 3. FASE DE ESCUDO (intercepción de colapso)
    println!("   🧪 Phase 2: Auditing the global panic hook...");
    let capture = panic::catch_unwind(|| {
        panic!("INTENTIONAL_STRATA_FAILURE_FOR_TESTING");
    });
    assert!(capture.is_err(), "CRITICAL: el escudo no aisló el colapso simulado");
    println!("      ✅ Panic shield: interception confirmed.");

    println!("🏁 [COMPLETE]: Argus observability strata certified.\n");
}

// [apps/gauge-fixer/src/main.rs]
/*!
 * =================================================================
 * APARATO: GAUGE FIXER SHELL (V8.0 - FORGE IGNITION)
 * CLASIFICACIÓN: APPLICATION LAYER (ENTRY POINT)
 * RESPONSABILIDAD: BOOTSTRAP DE ENTORNO E IGNICIÓN DEL MOTOR
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. ARCHITECTURAL PURITY: El shell parsea directivas, levanta la
 *    observabilidad y delega la totalidad de la operación al
 *    'FixingEngine'; aquí no vive lógica de dominio.
 * 2. EXIT DISCIPLINE: 0 en éxito; distinto de cero ante fallo fatal
 *    de configuración, E/S global o rejilla.
 * =================================================================
 */

use anyhow::{bail, Context, Result};
use clap::Parser;
use lgf_fixer_lib::engine::FixingEngine;
use lgf_fixer_lib::options::GaugeFixerDirectives;
use lgf_fixer_lib::settings;
use lgf_shared_argus::init_tracing;
use tracing::info;

fn main() -> Result<()> {
    // 1. INICIALIZACIÓN DEL SISTEMA DE OBSERVABILIDAD
    init_tracing("gauge_fixer");

    // 2. PARSEO DE DIRECTIVAS ESTRATÉGICAS
    let directives = GaugeFixerDirectives::parse();

    // 3. DIMENSIONADO DEL MÚSCULO DE CÓMPUTO
    // devicenumber > 0 fija los hilos del pool; -1 deja el automático.
    let workers = if directives.device_number > 0 {
        let requested = directives.device_number as usize;
        rayon::ThreadPoolBuilder::new()
            .num_threads(requested)
            .build_global()
            .context("CONFIG_FAULT: el pool de cómputo global ya estaba construido")?;
        requested
    } else {
        num_cpus::get()
    };

    info!(
        "💠 [FORGE]: Lattice {}x{}x{}x{} | gauge {:?} | {} ranks | {} workers",
        settings::NT,
        settings::NX,
        settings::NY,
        settings::NZ,
        directives.gauge_type,
        directives.ranks,
        workers
    );

    // 4. IGNICIÓN DEL MOTOR DE LOTES
    let summary = FixingEngine::new(directives).run()?;

    info!(
        "🏁 [COMPLETE]: {} configuraciones fijadas, {} saltadas",
        summary.fixed, summary.skipped
    );
    if summary.fixed == 0 && summary.skipped > 0 {
        bail!("IO_FAULT: ninguna configuración del lote pudo procesarse");
    }
    Ok(())
}

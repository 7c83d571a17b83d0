// [apps/gauge-fixer/src/lib.rs]
/*!
 * =================================================================
 * APARATO: GAUGE FIXER LIBRARY SHELL (V6.0)
 * CLASIFICACIÓN: APPLICATION LAYER (ESTRATO L4)
 * RESPONSABILIDAD: EXPONER MOTOR Y DIRECTIVAS AL BINARIO Y AL
 * PROVING GROUNDS
 * =================================================================
 */

/// Motor de lotes: carga, fijación multi-rango y persistencia.
pub mod engine;
/// Directivas de mando (superficie CLI completa).
pub mod options;
/// Extensiones del retículo fijadas en compilación.
pub mod settings;

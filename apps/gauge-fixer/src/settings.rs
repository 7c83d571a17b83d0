// [apps/gauge-fixer/src/settings.rs]
/*!
 * =================================================================
 * APARATO: COMPILE-TIME LATTICE REGISTER (V2.0)
 * CLASIFICACIÓN: APPLICATION LAYER (ESTRATO L4)
 * RESPONSABILIDAD: EXTENSIONES DEL RETÍCULO FIJADAS EN COMPILACIÓN
 *
 * No hay redimensionado dinámico: los kernels se especializan sobre
 * estas constantes. Para otro retículo se recompila el binario.
 * =================================================================
 */

use lgf_core_lattice::prelude::LatticeDims;

/// Extensión temporal Nt.
pub const NT: usize = 8;
/// Extensiones espaciales Nx, Ny, Nz.
pub const NX: usize = 8;
pub const NY: usize = 8;
pub const NZ: usize = 8;

/// El retículo del binario.
pub const LATTICE: LatticeDims = LatticeDims::new(NT, NX, NY, NZ);

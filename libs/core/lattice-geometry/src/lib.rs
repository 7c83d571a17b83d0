// [libs/core/lattice-geometry/src/lib.rs]
/*!
 * =================================================================
 * APARATO: LATTICE GEOMETRY MASTER HUB (V8.0 - CHECKERBOARD SOVEREIGN)
 * CLASIFICACIÓN: CORE GEOMETRY (ESTRATO L1)
 * RESPONSABILIDAD: DIRECCIONAMIENTO 4D PERIÓDICO Y PATRONES DE MEMORIA
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. PARITY SOVEREIGNTY: Toda linearización divide el retículo en
 *    mitades par/impar contiguas; el barrido checkerboard depende de
 *    este contrato para actualizar sin carreras.
 * 2. PATTERN POLYMORPHISM: Los patrones de acceso son tipos de tamaño
 *    cero monomorfizados en los kernels; cero indirección en el
 *    bucle interno.
 * 3. NEIGHBOUR STRATA: Tabla precomputada de vecinos espaciales por
 *    rebanada temporal para el pipeline multi-rango.
 * =================================================================
 */

/// Extensiones del retículo y volúmenes derivados.
pub mod dims;
/// Tabla precomputada de vecinos espaciales dentro de una rebanada.
pub mod neighbour;
/// Patrones de acceso (sitio, mu, fila, columna, re/im) -> offset.
pub mod pattern;
/// Coordenada de sitio con linearizaciones por paridad.
pub mod site;

/**
 * PRELUDIO GEOMÉTRICO SOBERANO
 */
pub mod prelude {
    pub use crate::dims::LatticeDims;
    pub use crate::neighbour::SpatialNeighbourTable;
    pub use crate::pattern::{
        AccessPattern, GpuLandauPattern, GpuPattern, GpuTimeslicePattern, StandardPattern,
        TimesliceParityPriorityPattern,
    };
    pub use crate::site::SiteCoord;
}

// [libs/domain/gaugefixing/src/updates.rs]
/*!
 * =================================================================
 * APARATO: UPDATE POLICY MATRIX (V11.4 - FIVE ALGORITHMS)
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: TRANSFORMAR EL ACUMULADOR A EN EL CUATERNIÓN g
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. PLUG-IN STRATA: Cada algoritmo consume el acumulador de
 *    subgrupo A y deja en su lugar el cuaternión unitario a aplicar;
 *    el kernel se monomorfiza sobre la política.
 * 2. FIXED DRAW BUDGET: Las políticas estocásticas consumen un
 *    número fijo de uniformes por llamada, garantizando flujos
 *    reproducibles sitio a sitio con el RNG contador-basado.
 *
 * # Mathematical Proof (Unit Output):
 * Toda política devuelve un elemento de la esfera unidad: los
 * deterministas normalizan explícitamente y los estocásticos
 * componen elementos ya unitarios. El invariante q†q = 1 está
 * certificado en la matriz de tests del dominio.
 * =================================================================
 */

use lgf_core_philox::CounterStream;
use lgf_core_su3::prelude::{Quaternion, Real};

/// Política de actualización del paso de subgrupo.
///
/// El contrato del kernel: el acumulador está completamente publicado
/// antes de la llamada y completamente consumido después; la política
/// es la única que lo reescribe.
pub trait UpdatePolicy {
    /// Si la política ignora el acumulador y produce un elemento
    /// aleatorio (transformación aleatoria de gauge).
    const IS_RANDOM_TRANSFORM: bool = false;

    /// Reescribe 'accumulator' con el cuaternión de actualización.
    fn calculate_update(&self, accumulator: &mut Quaternion, stream: &mut CounterStream);
}

/// Sobre-relajación con parámetro omega en (1, 2).
///
/// Normaliza A, lo eleva al cuadrado e interpola hacia la identidad
/// con peso (omega - 1); renormaliza al final.
#[derive(Debug, Clone, Copy)]
pub struct OrUpdate {
    or_parameter: Real,
}

impl OrUpdate {
    #[must_use]
    pub const fn new(or_parameter: Real) -> Self {
        Self { or_parameter }
    }
}

impl UpdatePolicy for OrUpdate {
    #[inline]
    fn calculate_update(&self, accumulator: &mut Quaternion, _stream: &mut CounterStream) {
        let unit = accumulator.normalized();
        let squared = unit * unit;
        let blend = self.or_parameter - 1.0;
        let interpolated = Quaternion::new(
            (1.0 - blend) + blend * squared[0],
            blend * squared[1],
            blend * squared[2],
            blend * squared[3],
        );
        *accumulator = interpolated.normalized();
    }
}

/// Actualización microcanónica: la reflexión g = a·a / |a|^2.
#[derive(Debug, Clone, Copy, Default)]
pub struct MicroUpdate;

impl UpdatePolicy for MicroUpdate {
    #[inline]
    fn calculate_update(&self, accumulator: &mut Quaternion, _stream: &mut CounterStream) {
        let unit = accumulator.normalized();
        *accumulator = unit * unit;
    }
}

/// Recocido simulado a temperatura T.
///
/// Sorteo de Creutz para el coseno polar con peso de Boltzmann
/// exp(|A|·g0 / T), dirección isótropa para el resto, y composición
/// con a/|a| para sesgar el elemento hacia el maximizador local.
/// Presupuesto fijo: dos uniformes polares y uno acimutal.
#[derive(Debug, Clone, Copy)]
pub struct SaUpdate {
    temperature: Real,
}

impl SaUpdate {
    #[must_use]
    pub const fn new(temperature: Real) -> Self {
        Self { temperature }
    }
}

impl UpdatePolicy for SaUpdate {
    #[inline]
    fn calculate_update(&self, accumulator: &mut Quaternion, stream: &mut CounterStream) {
        let magnitude = accumulator.norm();
        let unit = accumulator.normalized();

        // Coseno polar g0 con densidad ~ exp(magnitude * g0 / T).
        let polar_draw = stream.uniform();
        let damping = (-2.0 * magnitude / self.temperature).exp();
        let g0 = 1.0
            + (self.temperature / magnitude) * (polar_draw + (1.0 - polar_draw) * damping).ln();
        let sin_alpha = (1.0 - g0 * g0).max(0.0).sqrt();

        // Dirección isótropa del resto del elemento.
        let cos_theta = 2.0 * stream.uniform() - 1.0;
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();
        let azimuth = 2.0 * std::f64::consts::PI * stream.uniform();

        let thermal = Quaternion::new(
            g0,
            sin_alpha * sin_theta * azimuth.cos(),
            sin_alpha * sin_theta * azimuth.sin(),
            sin_alpha * cos_theta,
        );

        *accumulator = thermal * unit;
    }
}

/// Relajación estocástica: con probabilidad p aplica la reflexión
/// microcanónica, si no deja A intacto; siempre renormaliza.
#[derive(Debug, Clone, Copy)]
pub struct SrUpdate {
    sr_parameter: Real,
}

impl SrUpdate {
    #[must_use]
    pub const fn new(sr_parameter: Real) -> Self {
        Self { sr_parameter }
    }
}

impl UpdatePolicy for SrUpdate {
    #[inline]
    fn calculate_update(&self, accumulator: &mut Quaternion, stream: &mut CounterStream) {
        let draw = stream.uniform();
        let a = *accumulator;
        if draw < self.sr_parameter {
            *accumulator = Quaternion::new(
                a[0] * a[0] - a[1] * a[1] - a[2] * a[2] - a[3] * a[3],
                2.0 * a[0] * a[1],
                2.0 * a[0] * a[2],
                2.0 * a[0] * a[3],
            );
        }
        *accumulator = accumulator.normalized();
    }
}

/// Transformación aleatoria: ignora A y sortea un elemento SU(2)
/// desde cuatro uniformes centrados, normalizados a la esfera.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomUpdate;

impl UpdatePolicy for RandomUpdate {
    const IS_RANDOM_TRANSFORM: bool = true;

    #[inline]
    fn calculate_update(&self, accumulator: &mut Quaternion, stream: &mut CounterStream) {
        *accumulator = Quaternion::new(
            stream.uniform() - 0.5,
            stream.uniform() - 0.5,
            stream.uniform() - 0.5,
            stream.uniform() - 0.5,
        )
        .normalized();
    }
}

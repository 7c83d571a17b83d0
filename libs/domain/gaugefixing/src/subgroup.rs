// [libs/domain/gaugefixing/src/subgroup.rs]
/*!
 * =================================================================
 * APARATO: CABIBBO-MARINARI SUBGROUP STEP (V13.0 - EIGHT LINK)
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: EL PASO DE SUBGRUPO COMPLETO DE UN SITIO
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. PUBLISH-CONSUME CONTRACT: El acumulador se publica completo
 *    antes de invocar la política y se consume completo después;
 *    exactamente una invocación de política por (sitio, subgrupo).
 * 2. EIGHT-WAY APPLICATION: El cuaternión resultante se aplica a los
 *    ocho enlaces adjuntos: por la izquierda a los salientes y, como
 *    hermítico, por la derecha a los entrantes.
 * 3. FULL TRANSFORM: La transformación g(x) multiplica TODOS los
 *    enlaces adjuntos, también los temporales excluidos de la suma
 *    en el gauge de Coulomb.
 *
 * # Mathematical Proof (Local Maximization):
 * Para cada inmersión (i,j) el paso elige g que maximiza (o muestrea
 * según la política) Re tr(g·A†) y reescribe U -> g·U en los enlaces
 * salientes y U -> U·g† en los entrantes, lo que deja invariante el
 * resto del funcional.
 * =================================================================
 */

use crate::gauge::GaugeKind;
use crate::links::SiteLinks;
use crate::updates::UpdatePolicy;
use lgf_core_philox::CounterStream;
use lgf_core_su3::prelude::Real;
use lgf_core_su3::SU2_SUBGROUPS;

/// Ejecuta el paso de subgrupo completo (los tres bloques SU(2))
/// sobre los ocho enlaces locales de un sitio.
#[inline]
pub fn subgroup_step_site<P: UpdatePolicy>(
    gauge: GaugeKind,
    links: &mut SiteLinks,
    policy: &P,
    stream: &mut CounterStream,
) {
    for (i, j) in SU2_SUBGROUPS {
        let mut accumulator = gauge.accumulate(links, i, j);
        gauge.prepare_accumulator(&mut accumulator);
        policy.calculate_update(&mut accumulator, stream);
        gauge.finalize_update(&mut accumulator, P::IS_RANDOM_TRANSFORM);

        for mu in 0..4 {
            links.link_mut(mu, 0).left_subgroup_multiply(i, j, &accumulator);
        }
        let inverse = accumulator.hermitian();
        for mu in 0..4 {
            links.link_mut(mu, 1).right_subgroup_multiply(i, j, &inverse);
        }
    }
}

/// Algoritmo de barrido solicitado por el conductor; el ejecutor lo
/// despacha a la política monomorfizada correspondiente.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepAlgorithm {
    Overrelaxation,
    Microcanonical,
    SimulatedAnnealing,
    StochasticRelaxation,
    RandomTransform,
}

/// Parámetros de un barrido: algoritmo, constantes y claves RNG.
///
/// El contador de lanzamiento DEBE avanzar en el host antes de cada
/// barrido estocástico; reutilizarlo correlaría los flujos por sitio.
#[derive(Debug, Clone, Copy)]
pub struct AlgorithmOptions {
    pub algorithm: SweepAlgorithm,
    pub or_parameter: Real,
    pub sr_parameter: Real,
    pub temperature: Real,
    pub seed: u32,
    pub launch_counter: u32,
}

impl AlgorithmOptions {
    /// Barrido de sobre-relajación determinista.
    #[must_use]
    pub const fn overrelaxation(or_parameter: Real) -> Self {
        Self {
            algorithm: SweepAlgorithm::Overrelaxation,
            or_parameter,
            sr_parameter: 0.0,
            temperature: 0.0,
            seed: 0,
            launch_counter: 0,
        }
    }

    /// Barrido microcanónico determinista.
    #[must_use]
    pub const fn microcanonical() -> Self {
        Self {
            algorithm: SweepAlgorithm::Microcanonical,
            or_parameter: 0.0,
            sr_parameter: 0.0,
            temperature: 0.0,
            seed: 0,
            launch_counter: 0,
        }
    }

    /// Barrido de recocido a la temperatura dada.
    #[must_use]
    pub const fn simulated_annealing(temperature: Real, seed: u32, launch_counter: u32) -> Self {
        Self {
            algorithm: SweepAlgorithm::SimulatedAnnealing,
            or_parameter: 0.0,
            sr_parameter: 0.0,
            temperature,
            seed,
            launch_counter,
        }
    }

    /// Barrido de relajación estocástica con probabilidad dada.
    #[must_use]
    pub const fn stochastic_relaxation(sr_parameter: Real, seed: u32, launch_counter: u32) -> Self {
        Self {
            algorithm: SweepAlgorithm::StochasticRelaxation,
            or_parameter: 0.0,
            sr_parameter,
            temperature: 0.0,
            seed,
            launch_counter,
        }
    }

    /// Transformación aleatoria de gauge.
    #[must_use]
    pub const fn random_transform(seed: u32, launch_counter: u32) -> Self {
        Self {
            algorithm: SweepAlgorithm::RandomTransform,
            or_parameter: 0.0,
            sr_parameter: 0.0,
            temperature: 0.0,
            seed,
            launch_counter,
        }
    }
}

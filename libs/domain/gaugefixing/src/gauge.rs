// [libs/domain/gaugefixing/src/gauge.rs]
/*!
 * =================================================================
 * APARATO: GAUGE TYPE DISPATCH (V8.2 - TAGGED VARIANT)
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: FÓRMULAS DE CONTRIBUCIÓN POR TIPO DE GAUGE
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. TAGGED DISPATCH: El tipo de gauge es una variante etiquetada
 *    elegida en la cabecera del kernel; la etiqueta selecciona las
 *    fórmulas de acumulación y las especializaciones del cuaternión.
 * 2. MAG BILINEARS: La suma MAG corre sobre bilineales del bloque
 *    2x2 del subgrupo; el peso entre componentes fuera de diagonal y
 *    diagonal es un único ajustable con valor 2.
 *
 * # Mathematical Proof (Functional Gradient):
 * El acumulador A es el gradiente local del funcional restringido al
 * subgrupo (i,j): para Landau/Coulomb la suma de cuaterniones
 * conjugados de los enlaces salientes más los entrantes; para MAG la
 * suma de bilineales diagonales del bloque. Maximizar Re tr(g·A†)
 * sobre g en SU(2) es el paso exacto de Cabibbo-Marinari.
 * =================================================================
 */

use crate::links::SiteLinks;
use lgf_core_su3::prelude::{Quaternion, Real};

/// Peso entre las componentes fuera de diagonal y la diagonal del
/// acumulador MAG. La tesis de referencia fija 2; hay indicios de
/// que 4 podría ser lo correcto, por eso es un ajustable único.
pub const MAG_OFFDIAG_WEIGHT: Real = 2.0;

/// Funcional a maximizar; decide las fórmulas del barrido y de la
/// medida de calidad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeKind {
    /// Maximización global de Sum_mu Re tr U_mu.
    Landau,
    /// Como Landau pero solo direcciones espaciales (por rebanada).
    Coulomb,
    /// Gauge Abeliano maximal: maximiza la parte diagonal de U·U†.
    MaximalAbelian,
    /// Gauge residual U(1)xU(1) tras MAG: componentes 0 y 3.
    U1xU1,
}

impl GaugeKind {
    /// Si la dirección mu contribuye al acumulador y al funcional.
    #[inline(always)]
    #[must_use]
    pub const fn includes_direction(self, mu: usize) -> bool {
        match self {
            GaugeKind::Coulomb => mu != 0,
            _ => true,
        }
    }

    /// Direcciones que entran en el funcional: fija la normalización
    /// de Gff de modo que la configuración fría valga exactamente 1.
    #[inline(always)]
    #[must_use]
    pub const fn functional_directions(self) -> usize {
        match self {
            GaugeKind::Coulomb => 3,
            _ => 4,
        }
    }

    /// Acumula la suma de subgrupo A sobre los ocho enlaces adjuntos.
    #[inline]
    #[must_use]
    pub fn accumulate(self, links: &SiteLinks, i: usize, j: usize) -> Quaternion {
        let mut accumulator = Quaternion::zero();
        for updown in 0..2 {
            for mu in 0..4 {
                if !self.includes_direction(mu) {
                    continue;
                }
                let link = links.link(mu, updown);
                match self {
                    GaugeKind::Landau | GaugeKind::Coulomb => {
                        let q = link.subgroup_quaternion(i, j);
                        if updown == 0 {
                            accumulator[0] += q[0];
                            accumulator[1] -= q[1];
                            accumulator[2] -= q[2];
                            accumulator[3] -= q[3];
                        } else {
                            accumulator[0] += q[0];
                            accumulator[1] += q[1];
                            accumulator[2] += q[2];
                            accumulator[3] += q[3];
                        }
                    }
                    GaugeKind::U1xU1 => {
                        let q = link.subgroup_quaternion(i, j);
                        accumulator[0] += q[0];
                        if updown == 0 {
                            accumulator[3] -= q[3];
                        } else {
                            accumulator[3] += q[3];
                        }
                    }
                    GaugeKind::MaximalAbelian => {
                        let block = link.subgroup_matrix(i, j);
                        accumulator[0] += block.get(0, 0).abs_squared()
                            - block.get(0, 1).abs_squared()
                            - block.get(1, 0).abs_squared()
                            + block.get(1, 1).abs_squared();
                        let bilinear = if updown == 0 {
                            block.get(0, 0) * block.get(1, 0).conj()
                                - block.get(0, 1) * block.get(1, 1).conj()
                        } else {
                            block.get(0, 0).conj() * block.get(0, 1)
                                - block.get(1, 0).conj() * block.get(1, 1)
                        };
                        accumulator[1] += bilinear.im;
                        accumulator[2] += bilinear.re;
                    }
                }
            }
        }
        accumulator
    }

    /// Especialización previa a la política de actualización.
    #[inline]
    pub fn prepare_accumulator(self, accumulator: &mut Quaternion) {
        match self {
            GaugeKind::MaximalAbelian => {
                accumulator[1] *= MAG_OFFDIAG_WEIGHT;
                accumulator[2] *= MAG_OFFDIAG_WEIGHT;
                accumulator[3] = 0.0;
                let radius = (accumulator[0] * accumulator[0]
                    + accumulator[1] * accumulator[1]
                    + accumulator[2] * accumulator[2])
                    .sqrt();
                accumulator[0] += radius;
            }
            GaugeKind::U1xU1 => {
                accumulator[1] = 0.0;
                accumulator[2] = 0.0;
            }
            _ => {}
        }
    }

    /// Especialización posterior a la política: restringe el
    /// cuaternión al subespacio del gauge y renormaliza.
    ///
    /// El cuarto componente MAG se fuerza a cero salvo para la
    /// transformación aleatoria, que debe producir un elemento SU(2)
    /// completo (invariante certificado por test de regresión).
    #[inline]
    pub fn finalize_update(self, accumulator: &mut Quaternion, random_transform: bool) {
        match self {
            GaugeKind::Landau | GaugeKind::Coulomb => {}
            GaugeKind::U1xU1 => {
                accumulator[1] = 0.0;
                accumulator[2] = 0.0;
                *accumulator = accumulator.normalized();
            }
            GaugeKind::MaximalAbelian => {
                if !random_transform {
                    accumulator[3] = 0.0;
                }
                *accumulator = accumulator.normalized();
            }
        }
    }
}

// [libs/infra/halo-grid/src/partition.rs]
/*!
 * =================================================================
 * APARATO: TIME AXIS PARTITION (V7.2 - SIX PART INTERIOR)
 * CLASIFICACIÓN: INFRA TRANSPORT (ESTRATO L3)
 * RESPONSABILIDAD: REPARTO DE REBANADAS Y PARTES DE SOLAPE
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. RING LAYOUT: El rango r posee [r·Nt/n, (r+1)·Nt/n); los vecinos
 *    izquierdo y derecho cierran el anillo periódico.
 * 2. SIX PARTS: El interior (tmin, tmax) se trocea en seis partes de
 *    tamaño casi igual; cada parte se computa mientras una etapa del
 *    intercambio de halo está en vuelo.
 *
 * # Mathematical Proof (Parity Alignment):
 * El halo transporta una mitad de paridad indexada por la paridad
 * del barrido. El kernel de la rebanada tmin lee el halo con paridad
 * (evenodd XOR tmin), de modo que ambos extremos del canal solo
 * coinciden si tmin es par en cada rango: se exige Nt divisible por
 * 2·nprocs.
 * =================================================================
 */

use crate::errors::CommError;

/// Partición del eje temporal vista desde un rango.
#[derive(Debug, Clone)]
pub struct TimePartition {
    nt: usize,
    nprocs: usize,
    rank: usize,
    tmin: usize,
    tmax: usize,
    start_part: [usize; 6],
    end_part: [usize; 6],
}

impl TimePartition {
    /// Construye la partición del rango dado.
    pub fn build(nt: usize, nprocs: usize, rank: usize) -> Result<Self, CommError> {
        if nprocs == 0 || rank >= nprocs {
            return Err(CommError::Partition {
                reason: format!("rango {rank} fuera del universo de {nprocs} procesos"),
            });
        }
        if nprocs > 1 && nt % (2 * nprocs) != 0 {
            return Err(CommError::Partition {
                reason: format!(
                    "Nt = {nt} debe ser divisible por 2·nprocs = {} para alinear la paridad del halo",
                    2 * nprocs
                ),
            });
        }
        if nprocs == 1 && nt < 2 {
            return Err(CommError::Partition {
                reason: "se requieren al menos dos rebanadas temporales".to_string(),
            });
        }

        let tmin = rank * nt / nprocs;
        let tmax = (rank + 1) * nt / nprocs;
        let owned_slices = tmax - tmin;

        // Las seis partes cubren el interior [tmin+1, tmax) casi por
        // igual; la rebanada tmin espera al halo y va aparte.
        let mut start_part = [tmin + 1; 6];
        let mut end_part = [tmin + 1; 6];
        for slice in 1..owned_slices {
            for part in 0..6 {
                if part == (slice - 1) % 6 {
                    end_part[part] += 1;
                }
                if part > (slice - 1) % 6 {
                    start_part[part] += 1;
                    end_part[part] += 1;
                }
            }
        }

        Ok(Self { nt, nprocs, rank, tmin, tmax, start_part, end_part })
    }

    #[inline]
    #[must_use]
    pub const fn nprocs(&self) -> usize {
        self.nprocs
    }

    #[inline]
    #[must_use]
    pub const fn rank(&self) -> usize {
        self.rank
    }

    /// Rango dueño de la rebanada anterior (anillo periódico).
    #[inline]
    #[must_use]
    pub const fn left(&self) -> usize {
        (self.rank + self.nprocs - 1) % self.nprocs
    }

    /// Rango dueño de la rebanada siguiente.
    #[inline]
    #[must_use]
    pub const fn right(&self) -> usize {
        (self.rank + 1) % self.nprocs
    }

    /// Primera rebanada propia.
    #[inline]
    #[must_use]
    pub const fn tmin(&self) -> usize {
        self.tmin
    }

    /// Una más allá de la última rebanada propia.
    #[inline]
    #[must_use]
    pub const fn tmax(&self) -> usize {
        self.tmax
    }

    /// Número de rebanadas propias.
    #[inline]
    #[must_use]
    pub const fn owned_slices(&self) -> usize {
        self.tmax - self.tmin
    }

    /// Primera rebanada de la parte interior pedida.
    #[inline]
    #[must_use]
    pub const fn start_part(&self, part: usize) -> usize {
        self.start_part[part]
    }

    /// Una más allá de la última rebanada de la parte pedida.
    #[inline]
    #[must_use]
    pub const fn end_part(&self, part: usize) -> usize {
        self.end_part[part]
    }

    /// Rango dueño de una rebanada global.
    #[inline]
    #[must_use]
    pub const fn owner_of(&self, timeslice: usize) -> usize {
        timeslice * self.nprocs / self.nt
    }
}

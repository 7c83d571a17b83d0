// [libs/infra/halo-grid/src/collective.rs]
/*!
 * =================================================================
 * APARATO: DETERMINISTIC COLLECTIVE (V5.0 - RANK ORDERED)
 * CLASIFICACIÓN: INFRA TRANSPORT (ESTRATO L3)
 * RESPONSABILIDAD: ALL-REDUCE SUMA Y BARRERA ENTRE RANGOS
 *
 * # Mathematical Proof (Determinism):
 * Las contribuciones se depositan por rango y la suma final se
 * evalúa SIEMPRE en orden de rango, de modo que el resultado en coma
 * flotante es independiente del orden de llegada de los hilos. Todos
 * los rangos observan bit a bit el mismo escalar global y toman por
 * tanto la misma decisión de terminación.
 * =================================================================
 */

use crate::errors::CommError;
use std::sync::{Barrier, Condvar, Mutex};

struct ReduceState {
    contributions: Vec<Option<[f64; 2]>>,
    result: [f64; 2],
    round: u64,
}

/// Colectivo compartido por todos los rangos de una corrida.
pub struct Collective {
    nprocs: usize,
    state: Mutex<ReduceState>,
    completed: Condvar,
    barrier: Barrier,
}

impl Collective {
    /// Crea el colectivo para el universo dado.
    #[must_use]
    pub fn new(nprocs: usize) -> Self {
        Self {
            nprocs,
            state: Mutex::new(ReduceState {
                contributions: vec![None; nprocs],
                result: [0.0; 2],
                round: 0,
            }),
            completed: Condvar::new(),
            barrier: Barrier::new(nprocs),
        }
    }

    /// Suma global de un par de escalares; bloquea hasta que todos
    /// los rangos depositan su contribución.
    pub fn all_reduce_pair(&self, rank: usize, value: [f64; 2]) -> Result<[f64; 2], CommError> {
        let mut state = self.state.lock().map_err(|_| CommError::PoisonedCollective)?;
        let my_round = state.round;
        state.contributions[rank] = Some(value);

        if state.contributions.iter().all(Option::is_some) {
            let mut total = [0.0; 2];
            for contribution in state.contributions.iter_mut() {
                let [gff, theta] = contribution.take().unwrap_or([0.0, 0.0]);
                total[0] += gff;
                total[1] += theta;
            }
            state.result = total;
            state.round += 1;
            self.completed.notify_all();
            return Ok(total);
        }

        while state.round == my_round {
            state = self.completed.wait(state).map_err(|_| CommError::PoisonedCollective)?;
        }
        Ok(state.result)
    }

    /// Barrera de fin de barrido: mantiene el tiempo lógico síncrono.
    pub fn barrier_wait(&self) {
        self.barrier.wait();
    }
}

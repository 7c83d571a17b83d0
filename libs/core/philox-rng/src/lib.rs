// [libs/core/philox-rng/src/lib.rs]
/*!
 * =================================================================
 * APARATO: PHILOX COUNTER-BASED RNG (V7.0 - STATELESS STREAMS)
 * CLASIFICACIÓN: CORE STOCHASTIC (ESTRATO L1)
 * RESPONSABILIDAD: UNIFORMES (0,1) DETERMINISTAS POR FLUJO-SITIO
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. COUNTER SOVEREIGNTY: Cero estado persistente por flujo; la
 *    clave es (identificador de flujo, semilla) y el contador es
 *    (contador de kernel, contador global, relleno fijo). Cualquier
 *    combinación produce un bloque incorrelado.
 * 2. LAUNCH DISCIPLINE: El contador global DEBE avanzar en el host
 *    antes de cada lanzamiento de kernel estocástico; un avance
 *    incorrecto produce números correlados de forma silenciosa.
 * 3. BITWISE REPRODUCIBILITY: El identificador de flujo es el índice
 *    global del sitio, de modo que el resultado multi-rango iguala
 *    bit a bit al mono-rango con la misma semilla.
 *
 * # Mathematical Proof (Philox4x32-10):
 * Implementación del CBRNG de Salmon et al., "Parallel random
 * numbers: as easy as 1, 2, 3" (SC'11): diez rondas de
 * multiplicación 32x32->64 con inyección de clave de Weyl. Supera
 * BigCrush; el periodo por flujo excede 2^128.
 * =================================================================
 */

/// Multiplicadores de ronda del núcleo Philox4x32.
const PHILOX_M4X32_0: u32 = 0xD251_1F53;
const PHILOX_M4X32_1: u32 = 0xCD9E_8D57;
/// Constantes de Weyl para el avance de clave entre rondas.
const PHILOX_W32_0: u32 = 0x9E37_79B9;
const PHILOX_W32_1: u32 = 0xBB67_AE85;

/// Relleno fijo de los contadores superiores (c[2], c[3]).
const COUNTER_PAD_2: u32 = 0x1234_5678;
const COUNTER_PAD_3: u32 = 0xABCD_EF09;

#[inline(always)]
fn multiply_high_low(multiplier: u32, multiplicand: u32) -> (u32, u32) {
    let product = u64::from(multiplier) * u64::from(multiplicand);
    ((product >> 32) as u32, product as u32)
}

#[inline(always)]
fn philox_round(counter: [u32; 4], key: [u32; 2]) -> [u32; 4] {
    let (high0, low0) = multiply_high_low(PHILOX_M4X32_0, counter[0]);
    let (high1, low1) = multiply_high_low(PHILOX_M4X32_1, counter[2]);
    [
        high1 ^ counter[1] ^ key[0],
        low1,
        high0 ^ counter[3] ^ key[1],
        low0,
    ]
}

/// Bloque de cuatro palabras de 32 bits del núcleo de diez rondas.
#[inline]
#[must_use]
pub fn philox4x32_10(mut counter: [u32; 4], mut key: [u32; 2]) -> [u32; 4] {
    for round in 0..10 {
        if round > 0 {
            key[0] = key[0].wrapping_add(PHILOX_W32_0);
            key[1] = key[1].wrapping_add(PHILOX_W32_1);
        }
        counter = philox_round(counter, key);
    }
    counter
}

/// Conversión abierta-abierta de 64 bits a un double con mantisa de
/// 53 bits: el resultado vive estrictamente en (0, 1).
#[inline(always)]
#[must_use]
pub fn u01_open_open_64_53(word: u64) -> f64 {
    ((word >> 11) as f64 + 0.5) * (1.0 / 9_007_199_254_740_992.0)
}

/// Flujo uniforme por sitio. Cuatro salidas de 32 bits por llamada al
/// núcleo; dos doubles de 53 bits servidos por bloque.
#[derive(Debug, Clone)]
pub struct CounterStream {
    key: [u32; 2],
    counter: [u32; 4],
    block: [u64; 2],
    available: u8,
}

impl CounterStream {
    /// Abre el flujo (identificador, semilla, contador global).
    ///
    /// El identificador de flujo debe ser único por sitio del
    /// retículo; el contador global lo avanza el host por lanzamiento.
    #[inline]
    #[must_use]
    pub fn new(stream_id: u32, seed: u32, global_counter: u32) -> Self {
        Self {
            key: [stream_id, seed],
            counter: [0, global_counter, COUNTER_PAD_2, COUNTER_PAD_3],
            block: [0, 0],
            available: 0,
        }
    }

    /// Siguiente uniforme en (0, 1) abierto-abierto.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        if self.available == 0 {
            // Contador de kernel: la palabra c[0] avanza por bloque.
            self.counter[0] = self.counter[0].wrapping_add(1);
            let words = philox4x32_10(self.counter, self.key);
            self.block[0] = u64::from(words[0]) | (u64::from(words[1]) << 32);
            self.block[1] = u64::from(words[2]) | (u64::from(words[3]) << 32);
            self.available = 2;
        }
        self.available -= 1;
        u01_open_open_64_53(self.block[self.available as usize])
    }
}

/// Contador de lanzamientos del host. Cada kernel estocástico debe
/// consumir 'next()' exactamente una vez antes de lanzarse.
#[derive(Debug, Default)]
pub struct LaunchCounter {
    value: u32,
}

impl LaunchCounter {
    /// Contador virgen (arranque de una corrida).
    #[must_use]
    pub const fn new() -> Self {
        Self { value: 0 }
    }

    /// Contador que continúa una secuencia previa (corridas por lotes).
    #[must_use]
    pub const fn starting_at(value: u32) -> Self {
        Self { value }
    }

    /// Valor a inyectar en el lanzamiento; avanza el estado.
    #[inline]
    pub fn next(&mut self) -> u32 {
        let current = self.value;
        self.value = self.value.wrapping_add(1);
        current
    }

    /// Valor actual sin avanzar (auditoría).
    #[inline]
    #[must_use]
    pub const fn current(&self) -> u32 {
        self.value
    }
}

// [libs/infra/linkfile/src/codec.rs]
/*!
 * =================================================================
 * APARATO: RAW ELEMENT CODEC (V2.3)
 * CLASIFICACIÓN: INFRA PERSISTENCE (ESTRATO L3)
 * RESPONSABILIDAD: ANCHO Y ENDIANIDAD DE LOS ELEMENTOS CRUDOS
 * =================================================================
 */

use crate::ReinterpretReal;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use lgf_core_su3::prelude::Real;
use std::io::Write;

/// Bytes por elemento según la reinterpretación pedida.
#[inline]
#[must_use]
pub(crate) fn element_bytes(reinterpret: ReinterpretReal) -> usize {
    match reinterpret {
        ReinterpretReal::Float => 4,
        ReinterpretReal::Standard | ReinterpretReal::Double => 8,
    }
}

/// Decodifica el elemento k-ésimo de un payload little-endian.
#[inline]
pub(crate) fn decode_element(payload: &[u8], index: usize, reinterpret: ReinterpretReal) -> Real {
    let width = element_bytes(reinterpret);
    let mut cursor = &payload[index * width..(index + 1) * width];
    match reinterpret {
        ReinterpretReal::Float => {
            Real::from(cursor.read_f32::<LittleEndian>().unwrap_or_default())
        }
        ReinterpretReal::Standard | ReinterpretReal::Double => {
            cursor.read_f64::<LittleEndian>().unwrap_or_default()
        }
    }
}

/// Codifica un elemento little-endian con el ancho pedido.
#[inline]
pub(crate) fn encode_element<W: Write>(
    writer: &mut W,
    value: Real,
    reinterpret: ReinterpretReal,
) -> std::io::Result<()> {
    match reinterpret {
        ReinterpretReal::Float => writer.write_f32::<LittleEndian>(value as f32),
        ReinterpretReal::Standard | ReinterpretReal::Double => {
            writer.write_f64::<LittleEndian>(value)
        }
    }
}

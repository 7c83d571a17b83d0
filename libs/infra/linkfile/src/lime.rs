// [libs/infra/linkfile/src/lime.rs]
/*!
 * =================================================================
 * APARATO: LIME ENVELOPE CODEC (V5.2)
 * CLASIFICACIÓN: INFRA PERSISTENCE (ESTRATO L3)
 * RESPONSABILIDAD: REGISTROS LIME (CABECERA 144B + PADDING A 8)
 *
 * Formato del registro (todo big-endian):
 *   0..4    magia 0x456789ab
 *   4..6    versión (1)
 *   6..8    bits MB (15) y ME (14)
 *   8..16   longitud del payload en bytes
 *   16..144 tipo del registro (cadena con relleno nulo)
 * El payload va seguido de relleno nulo hasta múltiplo de 8.
 * =================================================================
 */

use crate::errors::LinkFileError;
use byteorder::{BigEndian, ByteOrder};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

const LIME_MAGIC: u32 = 0x456789ab;
const LIME_VERSION: u16 = 1;
const LIME_HEADER_BYTES: usize = 144;
const LIME_TYPE_BYTES: usize = 128;

/// Un registro LIME completo en memoria.
#[derive(Debug, Clone)]
pub struct LimeRecord {
    pub message_begin: bool,
    pub message_end: bool,
    pub lime_type: String,
    pub data: Vec<u8>,
}

#[inline]
const fn padded(length: usize) -> usize {
    (length + 7) & !7
}

/// Lee todos los registros del fichero.
pub fn read_records(path: &Path) -> Result<Vec<LimeRecord>, LinkFileError> {
    let mut bytes = Vec::new();
    File::open(path)
        .and_then(|mut file| file.read_to_end(&mut bytes))
        .map_err(|source| LinkFileError::Open { path: path.to_path_buf(), source })?;

    let mut records = Vec::new();
    let mut offset = 0;
    while offset + LIME_HEADER_BYTES <= bytes.len() {
        let header = &bytes[offset..offset + LIME_HEADER_BYTES];
        if BigEndian::read_u32(&header[0..4]) != LIME_MAGIC {
            return Err(LinkFileError::BadLimeMagic { path: path.to_path_buf() });
        }
        let flags = BigEndian::read_u16(&header[6..8]);
        let data_length = BigEndian::read_u64(&header[8..16]) as usize;
        let type_field = &header[16..16 + LIME_TYPE_BYTES];
        let type_end = type_field.iter().position(|byte| *byte == 0).unwrap_or(LIME_TYPE_BYTES);
        let lime_type = String::from_utf8_lossy(&type_field[..type_end]).into_owned();

        let data_begin = offset + LIME_HEADER_BYTES;
        let data_end = data_begin + data_length;
        if data_end > bytes.len() {
            return Err(LinkFileError::ShortRead {
                path: path.to_path_buf(),
                expected: data_end,
                found: bytes.len(),
            });
        }
        records.push(LimeRecord {
            message_begin: flags & 0x8000 != 0,
            message_end: flags & 0x4000 != 0,
            lime_type,
            data: bytes[data_begin..data_end].to_vec(),
        });
        offset = data_begin + padded(data_length);
    }
    if records.is_empty() {
        return Err(LinkFileError::BadLimeMagic { path: path.to_path_buf() });
    }
    Ok(records)
}

/// Escribe los registros en orden, con cabeceras y relleno canónicos.
pub fn write_records(path: &Path, records: &[LimeRecord]) -> Result<(), LinkFileError> {
    let file = File::create(path)
        .map_err(|source| LinkFileError::Open { path: path.to_path_buf(), source })?;
    let mut writer = BufWriter::new(file);

    for record in records {
        let mut header = [0u8; LIME_HEADER_BYTES];
        BigEndian::write_u32(&mut header[0..4], LIME_MAGIC);
        BigEndian::write_u16(&mut header[4..6], LIME_VERSION);
        let mut flags = 0u16;
        if record.message_begin {
            flags |= 0x8000;
        }
        if record.message_end {
            flags |= 0x4000;
        }
        BigEndian::write_u16(&mut header[6..8], flags);
        BigEndian::write_u64(&mut header[8..16], record.data.len() as u64);
        let type_bytes = record.lime_type.as_bytes();
        let copied = type_bytes.len().min(LIME_TYPE_BYTES - 1);
        header[16..16 + copied].copy_from_slice(&type_bytes[..copied]);

        writer
            .write_all(&header)
            .and_then(|()| writer.write_all(&record.data))
            .and_then(|()| {
                let pad = padded(record.data.len()) - record.data.len();
                writer.write_all(&[0u8; 8][..pad])
            })
            .map_err(|source| LinkFileError::Write { path: path.to_path_buf(), source })?;
    }
    writer
        .flush()
        .map_err(|source| LinkFileError::Write { path: path.to_path_buf(), source })?;
    Ok(())
}

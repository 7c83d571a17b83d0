// [tests/mirror/libs/infra/linkfile/raw_roundtrips.test.rs]
/**
 * =================================================================
 * APARATO: RAW FORMAT ROUNDTRIP CERTIFIER (V3.1)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L3-PERSISTENCE
 * RESPONSABILIDAD: CARGAR Y GUARDAR SIN FIJAR ES LA IDENTIDAD
 * =================================================================
 */

use lgf_core_lattice::prelude::LatticeDims;
use lgf_infra_linkfile::prelude::*;
use std::fs;

const DIMS: LatticeDims = LatticeDims::new(4, 4, 4, 4);

/// Payload sintético determinista: cada real codifica su índice.
fn synthetic_payload_f64() -> Vec<u8> {
    (0..DIMS.total_reals())
        .flat_map(|index| ((index as f64) * 0.5 - 7.25).to_le_bytes())
        .collect()
}

/**
 * CERTIFICACIÓN: PLAIN reproduce el fichero byte a byte.
 */
#[test]
fn certify_plain_roundtrip_is_byte_identical() {
    let workdir = tempfile::tempdir().expect("tempdir");
    let input = workdir.path().join("conf_plain.bin");
    let output = workdir.path().join("conf_plain_out.bin");
    fs::write(&input, synthetic_payload_f64()).expect("escritura del fixture");

    let mut format = LinkFileFormat::open(FileKind::Plain, ReinterpretReal::Standard);
    let mut field = vec![0.0; DIMS.total_reals()];
    format.load(DIMS, &input, &mut field).expect("carga PLAIN");
    format.save(DIMS, &output, &field).expect("guardado PLAIN");

    assert_eq!(
        fs::read(&input).expect("relectura"),
        fs::read(&output).expect("relectura"),
        "PLAIN no es simétrico byte a byte"
    );
}

/**
 * CERTIFICACIÓN: QCDSTAG reproduce el fichero byte a byte.
 */
#[test]
fn certify_qcdstag_roundtrip_is_byte_identical() {
    let workdir = tempfile::tempdir().expect("tempdir");
    let input = workdir.path().join("conf_stag.bin");
    let output = workdir.path().join("conf_stag_out.bin");
    fs::write(&input, synthetic_payload_f64()).expect("escritura del fixture");

    let mut format = LinkFileFormat::open(FileKind::Qcdstag, ReinterpretReal::Standard);
    let mut field = vec![0.0; DIMS.total_reals()];
    format.load(DIMS, &input, &mut field).expect("carga QCDSTAG");
    format.save(DIMS, &output, &field).expect("guardado QCDSTAG");

    assert_eq!(
        fs::read(&input).expect("relectura"),
        fs::read(&output).expect("relectura"),
        "QCDSTAG no es simétrico byte a byte"
    );
}

/**
 * CERTIFICACIÓN: PLAIN y QCDSTAG colocan el mismo payload en
 * memorias distintas (los órdenes de fichero difieren) pero ambos
 * preservan el multiconjunto de reales.
 */
#[test]
fn certify_plain_and_qcdstag_permute_the_same_values() {
    let workdir = tempfile::tempdir().expect("tempdir");
    let input = workdir.path().join("conf.bin");
    fs::write(&input, synthetic_payload_f64()).expect("escritura del fixture");

    let mut plain_field = vec![0.0; DIMS.total_reals()];
    LinkFileFormat::open(FileKind::Plain, ReinterpretReal::Standard)
        .load(DIMS, &input, &mut plain_field)
        .expect("carga PLAIN");

    let mut stag_field = vec![0.0; DIMS.total_reals()];
    LinkFileFormat::open(FileKind::Qcdstag, ReinterpretReal::Standard)
        .load(DIMS, &input, &mut stag_field)
        .expect("carga QCDSTAG");

    let mut plain_sorted: Vec<u64> = plain_field.iter().map(|v| v.to_bits()).collect();
    let mut stag_sorted: Vec<u64> = stag_field.iter().map(|v| v.to_bits()).collect();
    plain_sorted.sort_unstable();
    stag_sorted.sort_unstable();
    assert_eq!(plain_sorted, stag_sorted, "Valores perdidos en el enrutado");
    assert_ne!(plain_field, stag_field, "Los órdenes de fichero no pueden coincidir");
}

/**
 * CERTIFICACIÓN: HEADERONLY preserva la cabecera opaca intacta.
 */
#[test]
fn certify_headeronly_preserves_opaque_header() {
    let workdir = tempfile::tempdir().expect("tempdir");
    let input = workdir.path().join("conf_header.bin");
    let output = workdir.path().join("conf_header_out.bin");

    let mut bytes = b"OPAQUE-HEADER-v2\x00\x01\x02\x03".to_vec();
    bytes.extend(synthetic_payload_f64());
    fs::write(&input, &bytes).expect("escritura del fixture");

    let mut format = LinkFileFormat::open(FileKind::HeaderOnly, ReinterpretReal::Standard);
    let mut field = vec![0.0; DIMS.total_reals()];
    format.load(DIMS, &input, &mut field).expect("carga HEADERONLY");
    format.save(DIMS, &output, &field).expect("guardado HEADERONLY");

    assert_eq!(fs::read(&input).expect("relectura"), fs::read(&output).expect("relectura"));
}

/**
 * CERTIFICACIÓN: VOGT va y vuelve y rechaza extensiones ajenas.
 */
#[test]
fn certify_vogt_roundtrip_and_extent_validation() {
    let workdir = tempfile::tempdir().expect("tempdir");
    let path = workdir.path().join("conf.vogt");

    let field: Vec<f64> = (0..DIMS.total_reals()).map(|index| index as f64 * 0.25).collect();
    let format = LinkFileFormat::open(FileKind::Vogt, ReinterpretReal::Double);
    format.save(DIMS, &path, &field).expect("guardado VOGT");

    let mut restored = vec![0.0; DIMS.total_reals()];
    LinkFileFormat::open(FileKind::Vogt, ReinterpretReal::Double)
        .load(DIMS, &path, &mut restored)
        .expect("carga VOGT");
    assert_eq!(field, restored, "Payload VOGT alterado");

    // Un retículo distinto debe rechazar la cabecera.
    let other_dims = LatticeDims::new(4, 4, 4, 6);
    let mut sink = vec![0.0; other_dims.total_reals()];
    let fault = LinkFileFormat::open(FileKind::Vogt, ReinterpretReal::Double)
        .load(other_dims, &path, &mut sink)
        .expect_err("extensiones ajenas aceptadas");
    assert!(matches!(fault, LinkFileError::ExtentMismatch { .. }));
}

/**
 * CERTIFICACIÓN: la reinterpretación FLOAT adapta el ancho en ambos
 * sentidos (f32 en disco, f64 en memoria).
 */
#[test]
fn certify_float_reinterpretation_width() {
    let workdir = tempfile::tempdir().expect("tempdir");
    let input = workdir.path().join("conf_f32.bin");
    let payload: Vec<u8> =
        (0..DIMS.total_reals()).flat_map(|index| (index as f32 * 0.125).to_le_bytes()).collect();
    fs::write(&input, &payload).expect("escritura del fixture");

    let mut field = vec![0.0; DIMS.total_reals()];
    let mut format = LinkFileFormat::open(FileKind::Plain, ReinterpretReal::Float);
    format.load(DIMS, &input, &mut field).expect("carga FLOAT");

    let output = workdir.path().join("conf_f32_out.bin");
    format.save(DIMS, &output, &field).expect("guardado FLOAT");
    assert_eq!(fs::read(&input).expect("relectura"), fs::read(&output).expect("relectura"));

    // Un payload f64 con reinterpretación FLOAT es una lectura corta.
    let fault = LinkFileFormat::open(FileKind::Plain, ReinterpretReal::Float)
        .load(DIMS, &workdir.path().join("missing.bin"), &mut field)
        .expect_err("fichero ausente aceptado");
    assert!(matches!(fault, LinkFileError::Open { .. }));
}

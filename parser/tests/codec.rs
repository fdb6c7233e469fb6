//! Decoding and encoding whole data sets across transfer syntaxes.

use dcmcodec_core::{DataSet, Tag, Value, VR};
use dcmcodec_dictionary_std::tags;
use dcmcodec_encoding::transfer_syntax::{
    TransferSyntax, DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN, EXPLICIT_VR_BIG_ENDIAN,
    EXPLICIT_VR_LITTLE_ENDIAN, IMPLICIT_VR_LITTLE_ENDIAN, JPEG_2000_IMAGE_COMPRESSION,
};
use dcmcodec_encoding::{ByteCursor, Endianness};
use dcmcodec_parser::decode::Error as DecodeError;
use dcmcodec_parser::{
    decode, decode_lenient, encode, DecodeOptions, Decoder, EncodeOptions, Encoder,
    SequenceLength,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn text(vr: VR, s: &str) -> Value {
    Value::str(vr, s).unwrap()
}

fn uid(s: &str) -> Value {
    Value::uid(s).unwrap()
}

/// A data set touching every value representation
/// which can be resolved from the dictionary in implicit VR.
fn sample() -> DataSet {
    let concept: DataSet = vec![(tags::CODE_MEANING, text(VR::LO, "Finding"))]
        .into_iter()
        .collect();
    let finding: DataSet = vec![
        (tags::CODE_VALUE, text(VR::SH, "121071")),
        (tags::CONCEPT_NAME_CODE_SEQUENCE, Value::sequence(vec![concept])),
        (tags::TEXT_VALUE, text(VR::UT, "no backslash splitting \\ here")),
    ]
    .into_iter()
    .collect();

    vec![
        (tags::IMAGE_TYPE, text(VR::CS, "ORIGINAL\\PRIMARY")),
        (tags::SOP_CLASS_UID, uid("1.2.840.10008.5.1.4.1.1.7")),
        (tags::SOP_INSTANCE_UID, uid("1.2.826.0.1.3680043.2.1125.1")),
        (tags::ACQUISITION_DATE, text(VR::DA, "20240101")),
        (tags::DERIVATION_CODE_SEQUENCE, Value::sequence(vec![])),
        (tags::PATIENT_NAME, text(VR::PN, "Doe^John")),
        (tags::PATIENT_AGE, text(VR::AS, "042Y")),
        (tags::IMAGER_PIXEL_SPACING, text(VR::DS, "0.5")),
        (tags::IMAGER_PIXEL_SPACING, text(VR::DS, "0.25")),
        (tags::REGION_FLAGS, Value::ul(7)),
        (tags::REFERENCE_PIXEL_X0, Value::sl(-12)),
        (tags::DIFFUSION_B_VALUE, Value::fd(1000.5)),
        (tags::TAG_ANGLE_SECOND_AXIS, Value::ss(-3)),
        (tags::ROWS, Value::us(2)),
        (tags::COLUMNS, Value::us(2)),
        (tags::FRAME_INCREMENT_POINTER, Value::at(tags::ROWS)),
        (tags::BITS_ALLOCATED, Value::us(16)),
        (tags::LUT_DATA, Value::ow(vec![0, 0x7FFF, 0xFFFF, 1])),
        (
            tags::CONTENT_SEQUENCE,
            Value::sequence(vec![finding, DataSet::new()]),
        ),
        (tags::LINE_THICKNESS, Value::fl(1.5)),
        (Tag::PIXEL_DATA, Value::ow(vec![1, 2, 3, 4])),
    ]
    .into_iter()
    .collect()
}

#[rstest]
fn round_trip(
    #[values(
        &IMPLICIT_VR_LITTLE_ENDIAN,
        &EXPLICIT_VR_LITTLE_ENDIAN,
        &EXPLICIT_VR_BIG_ENDIAN,
        &DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN
    )]
    ts: &'static TransferSyntax,
    #[values(SequenceLength::Explicit, SequenceLength::Undefined)] strategy: SequenceLength,
) {
    let dataset = sample();
    let encoder =
        Encoder::new(ts).with_options(EncodeOptions::new().sequence_length(strategy));
    let bytes = encoder.encode(&dataset).unwrap();

    let decoded = decode(&bytes, ts).unwrap();
    assert_eq!(decoded, dataset);

    // well-formed bytes encode back to themselves
    assert_eq!(encoder.encode(&decoded).unwrap(), bytes);
}

#[test]
fn decoded_bytes_reencode_exactly() {
    #[rustfmt::skip]
    let raw: &[u8] = &[
        // (0008,0016) UI "1.2.840.10008.1.1\0"
        0x08, 0x00, 0x16, 0x00, b'U', b'I', 0x12, 0x00,
        b'1', b'.', b'2', b'.', b'8', b'4', b'0', b'.', b'1', b'0', b'0', b'0', b'8',
        b'.', b'1', b'.', b'1', 0x00,
        // (0008,1115) SQ, one item of 10 bytes
        0x08, 0x00, 0x15, 0x11, b'S', b'Q', 0x00, 0x00, 0x12, 0x00, 0x00, 0x00,
        0xFE, 0xFF, 0x00, 0xE0, 0x0A, 0x00, 0x00, 0x00,
        0x20, 0x00, 0x13, 0x00, b'I', b'S', 0x02, 0x00, b'7', b' ',
        // (0010,0010) PN "A^B "
        0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x04, 0x00, b'A', b'^', b'B', b' ',
        // (0028,0010) US 10 \ 20
        0x28, 0x00, 0x10, 0x00, b'U', b'S', 0x04, 0x00, 0x0A, 0x00, 0x14, 0x00,
    ];
    let dataset = decode(raw, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
    assert_eq!(dataset.len(), 5);
    assert_eq!(encode(&dataset, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap(), raw);
}

#[rstest]
#[case(&EXPLICIT_VR_LITTLE_ENDIAN, [0x34, 0x12])]
#[case(&EXPLICIT_VR_BIG_ENDIAN, [0x12, 0x34])]
fn us_byte_order(#[case] ts: &'static TransferSyntax, #[case] value_bytes: [u8; 2]) {
    let dataset: DataSet = vec![(tags::ROWS, Value::us(0x1234))].into_iter().collect();
    let bytes = encode(&dataset, ts).unwrap();
    assert_eq!(&bytes[8..], &value_bytes);
    assert_eq!(
        decode(&bytes, ts).unwrap().get_first(tags::ROWS),
        Some(&Value::us(0x1234))
    );
}

#[test]
fn uid_null_padding_is_stripped() {
    let dataset: DataSet = vec![(tags::SOP_CLASS_UID, uid("1.2.840.10008.1.1"))]
        .into_iter()
        .collect();
    let bytes = encode(&dataset, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
    assert_eq!(&bytes[6..8], &[18, 0]);
    assert_eq!(bytes.last(), Some(&0));

    let decoded = decode(&bytes, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
    assert_eq!(
        decoded
            .get_first(tags::SOP_CLASS_UID)
            .unwrap()
            .as_uid()
            .unwrap()
            .as_str(),
        "1.2.840.10008.1.1"
    );
}

#[test]
fn numeric_multiplicity() {
    let dataset: DataSet = vec![(tags::ROWS, Value::us(10)), (tags::ROWS, Value::us(20))]
        .into_iter()
        .collect();
    let bytes = encode(&dataset, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
    assert_eq!(bytes.len(), 12);
    assert_eq!(&bytes[6..8], &[4, 0]);

    let decoded = decode(&bytes, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
    let rows: Vec<_> = decoded.get_all(tags::ROWS).collect();
    assert_eq!(rows, vec![&Value::us(10), &Value::us(20)]);
}

#[test]
fn string_multiplicity() {
    let dataset: DataSet = vec![
        (tags::CODE_MEANING, text(VR::LO, "A")),
        (tags::CODE_MEANING, text(VR::LO, "B")),
        (tags::CODE_MEANING, text(VR::LO, "C")),
    ]
    .into_iter()
    .collect();
    let bytes = encode(&dataset, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
    assert_eq!(&bytes[8..], b"A\\B\\C ");

    let decoded = decode(&bytes, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
    assert_eq!(decoded, dataset);
}

#[test]
fn values_have_even_length() {
    let dataset: DataSet = vec![
        (tags::CODE_VALUE, text(VR::SH, "ABC")),
        (tags::PATIENT_NAME, text(VR::PN, "Doe")),
        (tags::STUDY_INSTANCE_UID, uid("1.2.3")),
        (Tag::PIXEL_DATA, Value::ob(vec![1, 2, 3])),
    ]
    .into_iter()
    .collect();
    let bytes = encode(&dataset, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap();

    let mut cursor = ByteCursor::from_bytes(bytes, Endianness::Little);
    while !cursor.is_exhausted() {
        cursor.read_tag().unwrap();
        let vr = VR::from_binary(cursor.read_vr_code().unwrap()).unwrap();
        let len = if vr.has_extended_length() {
            cursor.read_u16().unwrap();
            cursor.read_u32().unwrap()
        } else {
            u32::from(cursor.read_u16().unwrap())
        };
        assert_eq!(len % 2, 0, "odd length for {}", vr);
        cursor.advance(len as usize).unwrap();
    }
}

#[rstest]
fn empty_sequence(
    #[values(SequenceLength::Explicit, SequenceLength::Undefined)] strategy: SequenceLength,
) {
    let dataset: DataSet = vec![(tags::CONTENT_SEQUENCE, Value::sequence(vec![]))]
        .into_iter()
        .collect();
    let bytes = Encoder::new(&EXPLICIT_VR_LITTLE_ENDIAN)
        .with_options(EncodeOptions::new().sequence_length(strategy))
        .encode(&dataset)
        .unwrap();
    assert_eq!(
        bytes,
        vec![0x40, 0x00, 0x30, 0xA7, b'S', b'Q', 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
    );

    let decoded = decode(&bytes, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
    let items = decoded
        .get_first(tags::CONTENT_SEQUENCE)
        .unwrap()
        .as_sequence()
        .unwrap();
    assert!(items.is_empty());
}

#[test]
fn sequence_terminated_by_delimiter() {
    #[rustfmt::skip]
    let raw: &[u8] = &[
        // (0040,A730) SQ, undefined length
        0x40, 0x00, 0x30, 0xA7, b'S', b'Q', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
        // item of defined length
        0xFE, 0xFF, 0x00, 0xE0, 0x0E, 0x00, 0x00, 0x00,
        // (0008,0100) CodeValue, SH "121071"
        0x08, 0x00, 0x00, 0x01, b'S', b'H', 0x06, 0x00,
        b'1', b'2', b'1', b'0', b'7', b'1',
        // sequence delimiter
        0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
    ];
    let dataset = decode(raw, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
    let items = dataset
        .get_first(tags::CONTENT_SEQUENCE)
        .unwrap()
        .as_sequence()
        .unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(
        items[0].get_first(tags::CODE_VALUE),
        Some(&text(VR::SH, "121071"))
    );
}

#[test]
fn encapsulated_pixel_data() {
    #[rustfmt::skip]
    let raw: &[u8] = &[
        // (7FE0,0010) OB, undefined length
        0xE0, 0x7F, 0x10, 0x00, b'O', b'B', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
        // empty basic offset table
        0xFE, 0xFF, 0x00, 0xE0, 0x00, 0x00, 0x00, 0x00,
        // first fragment
        0xFE, 0xFF, 0x00, 0xE0, 0x04, 0x00, 0x00, 0x00, 0xFF, 0xD8, 0xFF, 0xE0,
        // second fragment
        0xFE, 0xFF, 0x00, 0xE0, 0x02, 0x00, 0x00, 0x00, 0xFF, 0xD9,
        // sequence delimiter
        0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
    ];
    let dataset = decode(raw, &JPEG_2000_IMAGE_COMPRESSION).unwrap();
    let fragments: Vec<_> = dataset.get_all(Tag::PIXEL_DATA).collect();
    assert_eq!(
        fragments,
        vec![
            &Value::ob(vec![0xFF, 0xD8, 0xFF, 0xE0]),
            &Value::ob(vec![0xFF, 0xD9]),
        ]
    );

    assert_eq!(encode(&dataset, &JPEG_2000_IMAGE_COMPRESSION).unwrap(), raw);
}

#[test]
fn failed_reads_do_not_advance() {
    let mut cursor = ByteCursor::from_bytes(vec![0x01, 0x02], Endianness::Little);
    assert!(cursor.read_u32().is_err());
    assert_eq!(cursor.position(), 0);
    assert_eq!(cursor.read_u16(), Ok(0x0201));
}

#[test]
fn truncated_element() {
    #[rustfmt::skip]
    let raw: &[u8] = &[
        // (0028,0010) Rows, 512
        0x28, 0x00, 0x10, 0x00, b'U', b'S', 0x02, 0x00, 0x00, 0x02,
        // (0028,0011) Columns, says 8 bytes, only 4 follow
        0x28, 0x00, 0x11, 0x00, b'U', b'S', 0x08, 0x00, 0x00, 0x02, 0x00, 0x02,
    ];
    let err = decode(raw, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap_err();
    assert!(matches!(err, DecodeError::ReadBeyondBuffer { .. }));

    let dataset = decode_lenient(raw, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.get_first(tags::ROWS), Some(&Value::us(512)));
    assert!(!dataset.exists(tags::COLUMNS));
}

#[test]
fn lenient_resumes_after_unknown_tag() {
    #[rustfmt::skip]
    let raw: &[u8] = &[
        // (0019,1001) private, not in the dictionary
        0x19, 0x00, 0x01, 0x10, 0x02, 0x00, 0x00, 0x00, 0xAB, 0xCD,
        // (0028,0010) Rows, 16
        0x28, 0x00, 0x10, 0x00, 0x02, 0x00, 0x00, 0x00, 0x10, 0x00,
    ];
    let decoder = Decoder::new(&IMPLICIT_VR_LITTLE_ENDIAN);

    let mut cursor = ByteCursor::from_bytes(raw, Endianness::Little);
    assert!(matches!(
        decoder.decode(&mut cursor),
        Err(DecodeError::UnknownTag { .. })
    ));

    let mut cursor = ByteCursor::from_bytes(raw, Endianness::Little);
    let dataset = decoder.decode_lenient(&mut cursor).unwrap();
    assert_eq!(dataset.get_first(tags::ROWS), Some(&Value::us(16)));

    // without any retries, the first error is final
    let mut cursor = ByteCursor::from_bytes(raw, Endianness::Little);
    let err = decoder
        .clone()
        .with_options(DecodeOptions::new().max_resync(0))
        .decode_lenient(&mut cursor)
        .unwrap_err();
    assert!(matches!(err, DecodeError::UnknownTag { .. }));
}

//! Attribute lookups through the public dictionary API.

use dcmcodec_core::dictionary::{DataDictionary, DictionaryEntry};
use dcmcodec_core::{Tag, VR};
use dcmcodec_dictionary_std::{tags, ExtendedDataDictionary, StandardDataDictionary};
use rstest::rstest;

#[rstest]
#[case(tags::SOP_INSTANCE_UID, "SOPInstanceUID", VR::UI)]
#[case(tags::PATIENT_AGE, "PatientAge", VR::AS)]
#[case(tags::FRAME_INCREMENT_POINTER, "FrameIncrementPointer", VR::AT)]
#[case(tags::REGION_FLAGS, "RegionFlags", VR::UL)]
#[case(tags::REFERENCE_PIXEL_X0, "ReferencePixelX0", VR::SL)]
#[case(tags::DIFFUSION_B_VALUE, "DiffusionBValue", VR::FD)]
#[case(tags::TAG_ANGLE_SECOND_AXIS, "TagAngleSecondAxis", VR::SS)]
#[case(tags::CONTENT_SEQUENCE, "ContentSequence", VR::SQ)]
#[case(tags::TEXT_VALUE, "TextValue", VR::UT)]
#[case(tags::LINE_THICKNESS, "LineThickness", VR::FL)]
fn tag_and_alias_agree(#[case] tag: Tag, #[case] alias: &str, #[case] vr: VR) {
    let dict = StandardDataDictionary;
    let entry = dict.by_tag(tag).expect("attribute should be known");
    assert_eq!(entry.alias, alias);
    assert_eq!(entry.vr, vr);
    assert_eq!(dict.by_name(alias).map(|e| e.tag), Some(tag));
    assert_eq!(dict.lookup_vr(tag), Ok(vr));
}

#[test]
fn generic_entries() {
    let dict = StandardDataDictionary;
    assert_eq!(dict.lookup_vr(Tag(0x0008, 0x0000)), Ok(VR::UL));
    assert_eq!(dict.lookup_vr(Tag(0x0029, 0x0010)), Ok(VR::LO));
    assert!(dict.lookup_vr(Tag(0x0029, 0x1010)).is_err());
}

#[test]
fn runtime_entries_take_precedence() {
    let dict = ExtendedDataDictionary::new()
        .with_entry(DictionaryEntry::owned(
            Tag(0x0029, 0x1010),
            "VendorImageInfo",
            VR::OB,
        ))
        .with_entry(DictionaryEntry::owned(tags::PIXEL_DATA, "PixelData", VR::OB));

    assert_eq!(dict.len(), 2);
    assert_eq!(dict.lookup_vr(Tag(0x0029, 0x1010)), Ok(VR::OB));
    assert_eq!(
        dict.by_name("VendorImageInfo").map(|e| e.tag),
        Some(Tag(0x0029, 0x1010))
    );
    assert_eq!(dict.lookup_vr(tags::PIXEL_DATA), Ok(VR::OB));
    assert_eq!(StandardDataDictionary.lookup_vr(tags::PIXEL_DATA), Ok(VR::OW));
    // everything else falls through to the standard table
    assert_eq!(dict.lookup_vr(tags::ROWS), Ok(VR::US));
}

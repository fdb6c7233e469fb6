//! Tag constants and the built-in table of attribute entries.
//!
//! Each constant maps an attribute alias to its DICOM tag at compile time.

use dcmcodec_core::dictionary::DictionaryEntry;
use dcmcodec_core::header::{Tag, VR};

/// FileMetaInformationGroupLength (0002,0000) UL
#[rustfmt::skip]
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
/// FileMetaInformationVersion (0002,0001) OB
#[rustfmt::skip]
pub const FILE_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0001);
/// MediaStorageSOPClassUID (0002,0002) UI
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);
/// MediaStorageSOPInstanceUID (0002,0003) UI
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);
/// TransferSyntaxUID (0002,0010) UI
#[rustfmt::skip]
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
/// ImplementationClassUID (0002,0012) UI
#[rustfmt::skip]
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag(0x0002, 0x0012);
/// ImplementationVersionName (0002,0013) SH
#[rustfmt::skip]
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag(0x0002, 0x0013);
/// SourceApplicationEntityTitle (0002,0016) AE
#[rustfmt::skip]
pub const SOURCE_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0016);
/// PrivateInformationCreatorUID (0002,0100) UI
#[rustfmt::skip]
pub const PRIVATE_INFORMATION_CREATOR_UID: Tag = Tag(0x0002, 0x0100);
/// PrivateInformation (0002,0102) OB
#[rustfmt::skip]
pub const PRIVATE_INFORMATION: Tag = Tag(0x0002, 0x0102);
/// SpecificCharacterSet (0008,0005) CS
#[rustfmt::skip]
pub const SPECIFIC_CHARACTER_SET: Tag = Tag(0x0008, 0x0005);
/// ImageType (0008,0008) CS
#[rustfmt::skip]
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);
/// InstanceCreationDate (0008,0012) DA
#[rustfmt::skip]
pub const INSTANCE_CREATION_DATE: Tag = Tag(0x0008, 0x0012);
/// InstanceCreationTime (0008,0013) TM
#[rustfmt::skip]
pub const INSTANCE_CREATION_TIME: Tag = Tag(0x0008, 0x0013);
/// SOPClassUID (0008,0016) UI
#[rustfmt::skip]
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
/// SOPInstanceUID (0008,0018) UI
#[rustfmt::skip]
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
/// StudyDate (0008,0020) DA
#[rustfmt::skip]
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
/// SeriesDate (0008,0021) DA
#[rustfmt::skip]
pub const SERIES_DATE: Tag = Tag(0x0008, 0x0021);
/// AcquisitionDate (0008,0022) DA
#[rustfmt::skip]
pub const ACQUISITION_DATE: Tag = Tag(0x0008, 0x0022);
/// ContentDate (0008,0023) DA
#[rustfmt::skip]
pub const CONTENT_DATE: Tag = Tag(0x0008, 0x0023);
/// AcquisitionDateTime (0008,002A) DT
#[rustfmt::skip]
pub const ACQUISITION_DATE_TIME: Tag = Tag(0x0008, 0x002A);
/// StudyTime (0008,0030) TM
#[rustfmt::skip]
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
/// SeriesTime (0008,0031) TM
#[rustfmt::skip]
pub const SERIES_TIME: Tag = Tag(0x0008, 0x0031);
/// AcquisitionTime (0008,0032) TM
#[rustfmt::skip]
pub const ACQUISITION_TIME: Tag = Tag(0x0008, 0x0032);
/// ContentTime (0008,0033) TM
#[rustfmt::skip]
pub const CONTENT_TIME: Tag = Tag(0x0008, 0x0033);
/// AccessionNumber (0008,0050) SH
#[rustfmt::skip]
pub const ACCESSION_NUMBER: Tag = Tag(0x0008, 0x0050);
/// QueryRetrieveLevel (0008,0052) CS
#[rustfmt::skip]
pub const QUERY_RETRIEVE_LEVEL: Tag = Tag(0x0008, 0x0052);
/// RetrieveAETitle (0008,0054) AE
#[rustfmt::skip]
pub const RETRIEVE_AE_TITLE: Tag = Tag(0x0008, 0x0054);
/// InstanceAvailability (0008,0056) CS
#[rustfmt::skip]
pub const INSTANCE_AVAILABILITY: Tag = Tag(0x0008, 0x0056);
/// Modality (0008,0060) CS
#[rustfmt::skip]
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
/// ModalitiesInStudy (0008,0061) CS
#[rustfmt::skip]
pub const MODALITIES_IN_STUDY: Tag = Tag(0x0008, 0x0061);
/// ConversionType (0008,0064) CS
#[rustfmt::skip]
pub const CONVERSION_TYPE: Tag = Tag(0x0008, 0x0064);
/// Manufacturer (0008,0070) LO
#[rustfmt::skip]
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
/// InstitutionName (0008,0080) LO
#[rustfmt::skip]
pub const INSTITUTION_NAME: Tag = Tag(0x0008, 0x0080);
/// InstitutionAddress (0008,0081) ST
#[rustfmt::skip]
pub const INSTITUTION_ADDRESS: Tag = Tag(0x0008, 0x0081);
/// ReferringPhysicianName (0008,0090) PN
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x0090);
/// CodeValue (0008,0100) SH
#[rustfmt::skip]
pub const CODE_VALUE: Tag = Tag(0x0008, 0x0100);
/// CodingSchemeDesignator (0008,0102) SH
#[rustfmt::skip]
pub const CODING_SCHEME_DESIGNATOR: Tag = Tag(0x0008, 0x0102);
/// CodeMeaning (0008,0104) LO
#[rustfmt::skip]
pub const CODE_MEANING: Tag = Tag(0x0008, 0x0104);
/// StationName (0008,1010) SH
#[rustfmt::skip]
pub const STATION_NAME: Tag = Tag(0x0008, 0x1010);
/// StudyDescription (0008,1030) LO
#[rustfmt::skip]
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);
/// SeriesDescription (0008,103E) LO
#[rustfmt::skip]
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
/// InstitutionalDepartmentName (0008,1040) LO
#[rustfmt::skip]
pub const INSTITUTIONAL_DEPARTMENT_NAME: Tag = Tag(0x0008, 0x1040);
/// PerformingPhysicianName (0008,1050) PN
#[rustfmt::skip]
pub const PERFORMING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x1050);
/// OperatorsName (0008,1070) PN
#[rustfmt::skip]
pub const OPERATORS_NAME: Tag = Tag(0x0008, 0x1070);
/// ManufacturerModelName (0008,1090) LO
#[rustfmt::skip]
pub const MANUFACTURER_MODEL_NAME: Tag = Tag(0x0008, 0x1090);
/// ReferencedStudySequence (0008,1110) SQ
#[rustfmt::skip]
pub const REFERENCED_STUDY_SEQUENCE: Tag = Tag(0x0008, 0x1110);
/// ReferencedPerformedProcedureStepSequence (0008,1111) SQ
#[rustfmt::skip]
pub const REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0008, 0x1111);
/// ReferencedSeriesSequence (0008,1115) SQ
#[rustfmt::skip]
pub const REFERENCED_SERIES_SEQUENCE: Tag = Tag(0x0008, 0x1115);
/// ReferencedImageSequence (0008,1140) SQ
#[rustfmt::skip]
pub const REFERENCED_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x1140);
/// ReferencedSOPClassUID (0008,1150) UI
#[rustfmt::skip]
pub const REFERENCED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x1150);
/// ReferencedSOPInstanceUID (0008,1155) UI
#[rustfmt::skip]
pub const REFERENCED_SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x1155);
/// ReferencedFrameNumber (0008,1160) IS
#[rustfmt::skip]
pub const REFERENCED_FRAME_NUMBER: Tag = Tag(0x0008, 0x1160);
/// DerivationDescription (0008,2111) ST
#[rustfmt::skip]
pub const DERIVATION_DESCRIPTION: Tag = Tag(0x0008, 0x2111);
/// SourceImageSequence (0008,2112) SQ
#[rustfmt::skip]
pub const SOURCE_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x2112);
/// DerivationCodeSequence (0008,9215) SQ
#[rustfmt::skip]
pub const DERIVATION_CODE_SEQUENCE: Tag = Tag(0x0008, 0x9215);
/// PatientName (0010,0010) PN
#[rustfmt::skip]
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
/// PatientID (0010,0020) LO
#[rustfmt::skip]
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
/// IssuerOfPatientID (0010,0021) LO
#[rustfmt::skip]
pub const ISSUER_OF_PATIENT_ID: Tag = Tag(0x0010, 0x0021);
/// PatientBirthDate (0010,0030) DA
#[rustfmt::skip]
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
/// PatientBirthTime (0010,0032) TM
#[rustfmt::skip]
pub const PATIENT_BIRTH_TIME: Tag = Tag(0x0010, 0x0032);
/// PatientSex (0010,0040) CS
#[rustfmt::skip]
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
/// OtherPatientIDs (0010,1000) LO
#[rustfmt::skip]
pub const OTHER_PATIENT_I_DS: Tag = Tag(0x0010, 0x1000);
/// OtherPatientNames (0010,1001) PN
#[rustfmt::skip]
pub const OTHER_PATIENT_NAMES: Tag = Tag(0x0010, 0x1001);
/// PatientAge (0010,1010) AS
#[rustfmt::skip]
pub const PATIENT_AGE: Tag = Tag(0x0010, 0x1010);
/// PatientSize (0010,1020) DS
#[rustfmt::skip]
pub const PATIENT_SIZE: Tag = Tag(0x0010, 0x1020);
/// PatientWeight (0010,1030) DS
#[rustfmt::skip]
pub const PATIENT_WEIGHT: Tag = Tag(0x0010, 0x1030);
/// EthnicGroup (0010,2160) SH
#[rustfmt::skip]
pub const ETHNIC_GROUP: Tag = Tag(0x0010, 0x2160);
/// PatientComments (0010,4000) LT
#[rustfmt::skip]
pub const PATIENT_COMMENTS: Tag = Tag(0x0010, 0x4000);
/// ContrastBolusAgent (0018,0010) LO
#[rustfmt::skip]
pub const CONTRAST_BOLUS_AGENT: Tag = Tag(0x0018, 0x0010);
/// BodyPartExamined (0018,0015) CS
#[rustfmt::skip]
pub const BODY_PART_EXAMINED: Tag = Tag(0x0018, 0x0015);
/// ScanningSequence (0018,0020) CS
#[rustfmt::skip]
pub const SCANNING_SEQUENCE: Tag = Tag(0x0018, 0x0020);
/// SequenceVariant (0018,0021) CS
#[rustfmt::skip]
pub const SEQUENCE_VARIANT: Tag = Tag(0x0018, 0x0021);
/// ScanOptions (0018,0022) CS
#[rustfmt::skip]
pub const SCAN_OPTIONS: Tag = Tag(0x0018, 0x0022);
/// MRAcquisitionType (0018,0023) CS
#[rustfmt::skip]
pub const MR_ACQUISITION_TYPE: Tag = Tag(0x0018, 0x0023);
/// SliceThickness (0018,0050) DS
#[rustfmt::skip]
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
/// KVP (0018,0060) DS
#[rustfmt::skip]
pub const KVP: Tag = Tag(0x0018, 0x0060);
/// RepetitionTime (0018,0080) DS
#[rustfmt::skip]
pub const REPETITION_TIME: Tag = Tag(0x0018, 0x0080);
/// EchoTime (0018,0081) DS
#[rustfmt::skip]
pub const ECHO_TIME: Tag = Tag(0x0018, 0x0081);
/// MagneticFieldStrength (0018,0087) DS
#[rustfmt::skip]
pub const MAGNETIC_FIELD_STRENGTH: Tag = Tag(0x0018, 0x0087);
/// SpacingBetweenSlices (0018,0088) DS
#[rustfmt::skip]
pub const SPACING_BETWEEN_SLICES: Tag = Tag(0x0018, 0x0088);
/// DeviceSerialNumber (0018,1000) LO
#[rustfmt::skip]
pub const DEVICE_SERIAL_NUMBER: Tag = Tag(0x0018, 0x1000);
/// SoftwareVersions (0018,1020) LO
#[rustfmt::skip]
pub const SOFTWARE_VERSIONS: Tag = Tag(0x0018, 0x1020);
/// ProtocolName (0018,1030) LO
#[rustfmt::skip]
pub const PROTOCOL_NAME: Tag = Tag(0x0018, 0x1030);
/// ExposureTime (0018,1150) IS
#[rustfmt::skip]
pub const EXPOSURE_TIME: Tag = Tag(0x0018, 0x1150);
/// XRayTubeCurrent (0018,1151) IS
#[rustfmt::skip]
pub const X_RAY_TUBE_CURRENT: Tag = Tag(0x0018, 0x1151);
/// Exposure (0018,1152) IS
#[rustfmt::skip]
pub const EXPOSURE: Tag = Tag(0x0018, 0x1152);
/// ImagerPixelSpacing (0018,1164) DS
#[rustfmt::skip]
pub const IMAGER_PIXEL_SPACING: Tag = Tag(0x0018, 0x1164);
/// PatientPosition (0018,5100) CS
#[rustfmt::skip]
pub const PATIENT_POSITION: Tag = Tag(0x0018, 0x5100);
/// SequenceOfUltrasoundRegions (0018,6011) SQ
#[rustfmt::skip]
pub const SEQUENCE_OF_ULTRASOUND_REGIONS: Tag = Tag(0x0018, 0x6011);
/// RegionFlags (0018,6016) UL
#[rustfmt::skip]
pub const REGION_FLAGS: Tag = Tag(0x0018, 0x6016);
/// ReferencePixelX0 (0018,6020) SL
#[rustfmt::skip]
pub const REFERENCE_PIXEL_X0: Tag = Tag(0x0018, 0x6020);
/// DiffusionBValue (0018,9087) FD
#[rustfmt::skip]
pub const DIFFUSION_B_VALUE: Tag = Tag(0x0018, 0x9087);
/// TagAngleSecondAxis (0018,9219) SS
#[rustfmt::skip]
pub const TAG_ANGLE_SECOND_AXIS: Tag = Tag(0x0018, 0x9219);
/// StudyInstanceUID (0020,000D) UI
#[rustfmt::skip]
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
/// SeriesInstanceUID (0020,000E) UI
#[rustfmt::skip]
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
/// StudyID (0020,0010) SH
#[rustfmt::skip]
pub const STUDY_ID: Tag = Tag(0x0020, 0x0010);
/// SeriesNumber (0020,0011) IS
#[rustfmt::skip]
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
/// AcquisitionNumber (0020,0012) IS
#[rustfmt::skip]
pub const ACQUISITION_NUMBER: Tag = Tag(0x0020, 0x0012);
/// InstanceNumber (0020,0013) IS
#[rustfmt::skip]
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
/// PatientOrientation (0020,0020) CS
#[rustfmt::skip]
pub const PATIENT_ORIENTATION: Tag = Tag(0x0020, 0x0020);
/// ImagePositionPatient (0020,0032) DS
#[rustfmt::skip]
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);
/// ImageOrientationPatient (0020,0037) DS
#[rustfmt::skip]
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);
/// FrameOfReferenceUID (0020,0052) UI
#[rustfmt::skip]
pub const FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0052);
/// Laterality (0020,0060) CS
#[rustfmt::skip]
pub const LATERALITY: Tag = Tag(0x0020, 0x0060);
/// PositionReferenceIndicator (0020,1040) LO
#[rustfmt::skip]
pub const POSITION_REFERENCE_INDICATOR: Tag = Tag(0x0020, 0x1040);
/// SliceLocation (0020,1041) DS
#[rustfmt::skip]
pub const SLICE_LOCATION: Tag = Tag(0x0020, 0x1041);
/// NumberOfStudyRelatedInstances (0020,1208) IS
#[rustfmt::skip]
pub const NUMBER_OF_STUDY_RELATED_INSTANCES: Tag = Tag(0x0020, 0x1208);
/// ImageComments (0020,4000) LT
#[rustfmt::skip]
pub const IMAGE_COMMENTS: Tag = Tag(0x0020, 0x4000);
/// SamplesPerPixel (0028,0002) US
#[rustfmt::skip]
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
/// PhotometricInterpretation (0028,0004) CS
#[rustfmt::skip]
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
/// PlanarConfiguration (0028,0006) US
#[rustfmt::skip]
pub const PLANAR_CONFIGURATION: Tag = Tag(0x0028, 0x0006);
/// NumberOfFrames (0028,0008) IS
#[rustfmt::skip]
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
/// FrameIncrementPointer (0028,0009) AT
#[rustfmt::skip]
pub const FRAME_INCREMENT_POINTER: Tag = Tag(0x0028, 0x0009);
/// Rows (0028,0010) US
#[rustfmt::skip]
pub const ROWS: Tag = Tag(0x0028, 0x0010);
/// Columns (0028,0011) US
#[rustfmt::skip]
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
/// PixelSpacing (0028,0030) DS
#[rustfmt::skip]
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
/// PixelAspectRatio (0028,0034) IS
#[rustfmt::skip]
pub const PIXEL_ASPECT_RATIO: Tag = Tag(0x0028, 0x0034);
/// BitsAllocated (0028,0100) US
#[rustfmt::skip]
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
/// BitsStored (0028,0101) US
#[rustfmt::skip]
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
/// HighBit (0028,0102) US
#[rustfmt::skip]
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
/// PixelRepresentation (0028,0103) US
#[rustfmt::skip]
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
/// SmallestImagePixelValue (0028,0106) US
#[rustfmt::skip]
pub const SMALLEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0106);
/// LargestImagePixelValue (0028,0107) US
#[rustfmt::skip]
pub const LARGEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0107);
/// WindowCenter (0028,1050) DS
#[rustfmt::skip]
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
/// WindowWidth (0028,1051) DS
#[rustfmt::skip]
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
/// RescaleIntercept (0028,1052) DS
#[rustfmt::skip]
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
/// RescaleSlope (0028,1053) DS
#[rustfmt::skip]
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);
/// RescaleType (0028,1054) LO
#[rustfmt::skip]
pub const RESCALE_TYPE: Tag = Tag(0x0028, 0x1054);
/// RedPaletteColorLookupTableDescriptor (0028,1101) US
#[rustfmt::skip]
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1101);
/// GreenPaletteColorLookupTableDescriptor (0028,1102) US
#[rustfmt::skip]
pub const GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1102);
/// BluePaletteColorLookupTableDescriptor (0028,1103) US
#[rustfmt::skip]
pub const BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1103);
/// RedPaletteColorLookupTableData (0028,1201) OW
#[rustfmt::skip]
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1201);
/// GreenPaletteColorLookupTableData (0028,1202) OW
#[rustfmt::skip]
pub const GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1202);
/// BluePaletteColorLookupTableData (0028,1203) OW
#[rustfmt::skip]
pub const BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1203);
/// LossyImageCompression (0028,2110) CS
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION: Tag = Tag(0x0028, 0x2110);
/// LossyImageCompressionRatio (0028,2112) DS
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION_RATIO: Tag = Tag(0x0028, 0x2112);
/// ModalityLUTSequence (0028,3000) SQ
#[rustfmt::skip]
pub const MODALITY_LUT_SEQUENCE: Tag = Tag(0x0028, 0x3000);
/// LUTDescriptor (0028,3002) US
#[rustfmt::skip]
pub const LUT_DESCRIPTOR: Tag = Tag(0x0028, 0x3002);
/// LUTExplanation (0028,3003) LO
#[rustfmt::skip]
pub const LUT_EXPLANATION: Tag = Tag(0x0028, 0x3003);
/// LUTData (0028,3006) OW
#[rustfmt::skip]
pub const LUT_DATA: Tag = Tag(0x0028, 0x3006);
/// VOILUTSequence (0028,3010) SQ
#[rustfmt::skip]
pub const VOILUT_SEQUENCE: Tag = Tag(0x0028, 0x3010);
/// RequestingPhysician (0032,1032) PN
#[rustfmt::skip]
pub const REQUESTING_PHYSICIAN: Tag = Tag(0x0032, 0x1032);
/// RequestedProcedureDescription (0032,1060) LO
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_DESCRIPTION: Tag = Tag(0x0032, 0x1060);
/// RequestedProcedureCodeSequence (0032,1064) SQ
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0032, 0x1064);
/// ScheduledProcedureStepSequence (0040,0100) SQ
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0040, 0x0100);
/// PerformedProcedureStepStartDate (0040,0244) DA
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_START_DATE: Tag = Tag(0x0040, 0x0244);
/// PerformedProcedureStepStartTime (0040,0245) TM
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_START_TIME: Tag = Tag(0x0040, 0x0245);
/// PerformedProcedureStepID (0040,0253) SH
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_ID: Tag = Tag(0x0040, 0x0253);
/// PerformedProcedureStepDescription (0040,0254) LO
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_DESCRIPTION: Tag = Tag(0x0040, 0x0254);
/// PerformedProtocolCodeSequence (0040,0260) SQ
#[rustfmt::skip]
pub const PERFORMED_PROTOCOL_CODE_SEQUENCE: Tag = Tag(0x0040, 0x0260);
/// RequestAttributesSequence (0040,0275) SQ
#[rustfmt::skip]
pub const REQUEST_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0040, 0x0275);
/// ConceptNameCodeSequence (0040,A043) SQ
#[rustfmt::skip]
pub const CONCEPT_NAME_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA043);
/// TextValue (0040,A160) UT
#[rustfmt::skip]
pub const TEXT_VALUE: Tag = Tag(0x0040, 0xA160);
/// ContentSequence (0040,A730) SQ
#[rustfmt::skip]
pub const CONTENT_SEQUENCE: Tag = Tag(0x0040, 0xA730);
/// RadiopharmaceuticalInformationSequence (0054,0016) SQ
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0016);
/// LineThickness (0070,0253) FL
#[rustfmt::skip]
pub const LINE_THICKNESS: Tag = Tag(0x0070, 0x0253);
/// StorageMediaFileSetUID (0088,0140) UI
#[rustfmt::skip]
pub const STORAGE_MEDIA_FILE_SET_UID: Tag = Tag(0x0088, 0x0140);
/// PixelData (7FE0,0010) OW
#[rustfmt::skip]
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);
/// DigitalSignaturesSequence (FFFA,FFFA) SQ
#[rustfmt::skip]
pub const DIGITAL_SIGNATURES_SEQUENCE: Tag = Tag(0xFFFA, 0xFFFA);
/// DataSetTrailingPadding (FFFC,FFFC) OB
#[rustfmt::skip]
pub const DATA_SET_TRAILING_PADDING: Tag = Tag(0xFFFC, 0xFFFC);

type E = DictionaryEntry;

#[rustfmt::skip]
pub(crate) const ENTRIES: &[E] = &[
    E::new(FILE_META_INFORMATION_GROUP_LENGTH, "FileMetaInformationGroupLength", VR::UL),
    E::new(FILE_META_INFORMATION_VERSION, "FileMetaInformationVersion", VR::OB),
    E::new(MEDIA_STORAGE_SOP_CLASS_UID, "MediaStorageSOPClassUID", VR::UI),
    E::new(MEDIA_STORAGE_SOP_INSTANCE_UID, "MediaStorageSOPInstanceUID", VR::UI),
    E::new(TRANSFER_SYNTAX_UID, "TransferSyntaxUID", VR::UI),
    E::new(IMPLEMENTATION_CLASS_UID, "ImplementationClassUID", VR::UI),
    E::new(IMPLEMENTATION_VERSION_NAME, "ImplementationVersionName", VR::SH),
    E::new(SOURCE_APPLICATION_ENTITY_TITLE, "SourceApplicationEntityTitle", VR::AE),
    E::new(PRIVATE_INFORMATION_CREATOR_UID, "PrivateInformationCreatorUID", VR::UI),
    E::new(PRIVATE_INFORMATION, "PrivateInformation", VR::OB),
    E::new(SPECIFIC_CHARACTER_SET, "SpecificCharacterSet", VR::CS),
    E::new(IMAGE_TYPE, "ImageType", VR::CS),
    E::new(INSTANCE_CREATION_DATE, "InstanceCreationDate", VR::DA),
    E::new(INSTANCE_CREATION_TIME, "InstanceCreationTime", VR::TM),
    E::new(SOP_CLASS_UID, "SOPClassUID", VR::UI),
    E::new(SOP_INSTANCE_UID, "SOPInstanceUID", VR::UI),
    E::new(STUDY_DATE, "StudyDate", VR::DA),
    E::new(SERIES_DATE, "SeriesDate", VR::DA),
    E::new(ACQUISITION_DATE, "AcquisitionDate", VR::DA),
    E::new(CONTENT_DATE, "ContentDate", VR::DA),
    E::new(ACQUISITION_DATE_TIME, "AcquisitionDateTime", VR::DT),
    E::new(STUDY_TIME, "StudyTime", VR::TM),
    E::new(SERIES_TIME, "SeriesTime", VR::TM),
    E::new(ACQUISITION_TIME, "AcquisitionTime", VR::TM),
    E::new(CONTENT_TIME, "ContentTime", VR::TM),
    E::new(ACCESSION_NUMBER, "AccessionNumber", VR::SH),
    E::new(QUERY_RETRIEVE_LEVEL, "QueryRetrieveLevel", VR::CS),
    E::new(RETRIEVE_AE_TITLE, "RetrieveAETitle", VR::AE),
    E::new(INSTANCE_AVAILABILITY, "InstanceAvailability", VR::CS),
    E::new(MODALITY, "Modality", VR::CS),
    E::new(MODALITIES_IN_STUDY, "ModalitiesInStudy", VR::CS),
    E::new(CONVERSION_TYPE, "ConversionType", VR::CS),
    E::new(MANUFACTURER, "Manufacturer", VR::LO),
    E::new(INSTITUTION_NAME, "InstitutionName", VR::LO),
    E::new(INSTITUTION_ADDRESS, "InstitutionAddress", VR::ST),
    E::new(REFERRING_PHYSICIAN_NAME, "ReferringPhysicianName", VR::PN),
    E::new(CODE_VALUE, "CodeValue", VR::SH),
    E::new(CODING_SCHEME_DESIGNATOR, "CodingSchemeDesignator", VR::SH),
    E::new(CODE_MEANING, "CodeMeaning", VR::LO),
    E::new(STATION_NAME, "StationName", VR::SH),
    E::new(STUDY_DESCRIPTION, "StudyDescription", VR::LO),
    E::new(SERIES_DESCRIPTION, "SeriesDescription", VR::LO),
    E::new(INSTITUTIONAL_DEPARTMENT_NAME, "InstitutionalDepartmentName", VR::LO),
    E::new(PERFORMING_PHYSICIAN_NAME, "PerformingPhysicianName", VR::PN),
    E::new(OPERATORS_NAME, "OperatorsName", VR::PN),
    E::new(MANUFACTURER_MODEL_NAME, "ManufacturerModelName", VR::LO),
    E::new(REFERENCED_STUDY_SEQUENCE, "ReferencedStudySequence", VR::SQ),
    E::new(REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE, "ReferencedPerformedProcedureStepSequence", VR::SQ),
    E::new(REFERENCED_SERIES_SEQUENCE, "ReferencedSeriesSequence", VR::SQ),
    E::new(REFERENCED_IMAGE_SEQUENCE, "ReferencedImageSequence", VR::SQ),
    E::new(REFERENCED_SOP_CLASS_UID, "ReferencedSOPClassUID", VR::UI),
    E::new(REFERENCED_SOP_INSTANCE_UID, "ReferencedSOPInstanceUID", VR::UI),
    E::new(REFERENCED_FRAME_NUMBER, "ReferencedFrameNumber", VR::IS),
    E::new(DERIVATION_DESCRIPTION, "DerivationDescription", VR::ST),
    E::new(SOURCE_IMAGE_SEQUENCE, "SourceImageSequence", VR::SQ),
    E::new(DERIVATION_CODE_SEQUENCE, "DerivationCodeSequence", VR::SQ),
    E::new(PATIENT_NAME, "PatientName", VR::PN),
    E::new(PATIENT_ID, "PatientID", VR::LO),
    E::new(ISSUER_OF_PATIENT_ID, "IssuerOfPatientID", VR::LO),
    E::new(PATIENT_BIRTH_DATE, "PatientBirthDate", VR::DA),
    E::new(PATIENT_BIRTH_TIME, "PatientBirthTime", VR::TM),
    E::new(PATIENT_SEX, "PatientSex", VR::CS),
    E::new(OTHER_PATIENT_I_DS, "OtherPatientIDs", VR::LO),
    E::new(OTHER_PATIENT_NAMES, "OtherPatientNames", VR::PN),
    E::new(PATIENT_AGE, "PatientAge", VR::AS),
    E::new(PATIENT_SIZE, "PatientSize", VR::DS),
    E::new(PATIENT_WEIGHT, "PatientWeight", VR::DS),
    E::new(ETHNIC_GROUP, "EthnicGroup", VR::SH),
    E::new(PATIENT_COMMENTS, "PatientComments", VR::LT),
    E::new(CONTRAST_BOLUS_AGENT, "ContrastBolusAgent", VR::LO),
    E::new(BODY_PART_EXAMINED, "BodyPartExamined", VR::CS),
    E::new(SCANNING_SEQUENCE, "ScanningSequence", VR::CS),
    E::new(SEQUENCE_VARIANT, "SequenceVariant", VR::CS),
    E::new(SCAN_OPTIONS, "ScanOptions", VR::CS),
    E::new(MR_ACQUISITION_TYPE, "MRAcquisitionType", VR::CS),
    E::new(SLICE_THICKNESS, "SliceThickness", VR::DS),
    E::new(KVP, "KVP", VR::DS),
    E::new(REPETITION_TIME, "RepetitionTime", VR::DS),
    E::new(ECHO_TIME, "EchoTime", VR::DS),
    E::new(MAGNETIC_FIELD_STRENGTH, "MagneticFieldStrength", VR::DS),
    E::new(SPACING_BETWEEN_SLICES, "SpacingBetweenSlices", VR::DS),
    E::new(DEVICE_SERIAL_NUMBER, "DeviceSerialNumber", VR::LO),
    E::new(SOFTWARE_VERSIONS, "SoftwareVersions", VR::LO),
    E::new(PROTOCOL_NAME, "ProtocolName", VR::LO),
    E::new(EXPOSURE_TIME, "ExposureTime", VR::IS),
    E::new(X_RAY_TUBE_CURRENT, "XRayTubeCurrent", VR::IS),
    E::new(EXPOSURE, "Exposure", VR::IS),
    E::new(IMAGER_PIXEL_SPACING, "ImagerPixelSpacing", VR::DS),
    E::new(PATIENT_POSITION, "PatientPosition", VR::CS),
    E::new(SEQUENCE_OF_ULTRASOUND_REGIONS, "SequenceOfUltrasoundRegions", VR::SQ),
    E::new(REGION_FLAGS, "RegionFlags", VR::UL),
    E::new(REFERENCE_PIXEL_X0, "ReferencePixelX0", VR::SL),
    E::new(DIFFUSION_B_VALUE, "DiffusionBValue", VR::FD),
    E::new(TAG_ANGLE_SECOND_AXIS, "TagAngleSecondAxis", VR::SS),
    E::new(STUDY_INSTANCE_UID, "StudyInstanceUID", VR::UI),
    E::new(SERIES_INSTANCE_UID, "SeriesInstanceUID", VR::UI),
    E::new(STUDY_ID, "StudyID", VR::SH),
    E::new(SERIES_NUMBER, "SeriesNumber", VR::IS),
    E::new(ACQUISITION_NUMBER, "AcquisitionNumber", VR::IS),
    E::new(INSTANCE_NUMBER, "InstanceNumber", VR::IS),
    E::new(PATIENT_ORIENTATION, "PatientOrientation", VR::CS),
    E::new(IMAGE_POSITION_PATIENT, "ImagePositionPatient", VR::DS),
    E::new(IMAGE_ORIENTATION_PATIENT, "ImageOrientationPatient", VR::DS),
    E::new(FRAME_OF_REFERENCE_UID, "FrameOfReferenceUID", VR::UI),
    E::new(LATERALITY, "Laterality", VR::CS),
    E::new(POSITION_REFERENCE_INDICATOR, "PositionReferenceIndicator", VR::LO),
    E::new(SLICE_LOCATION, "SliceLocation", VR::DS),
    E::new(NUMBER_OF_STUDY_RELATED_INSTANCES, "NumberOfStudyRelatedInstances", VR::IS),
    E::new(IMAGE_COMMENTS, "ImageComments", VR::LT),
    E::new(SAMPLES_PER_PIXEL, "SamplesPerPixel", VR::US),
    E::new(PHOTOMETRIC_INTERPRETATION, "PhotometricInterpretation", VR::CS),
    E::new(PLANAR_CONFIGURATION, "PlanarConfiguration", VR::US),
    E::new(NUMBER_OF_FRAMES, "NumberOfFrames", VR::IS),
    E::new(FRAME_INCREMENT_POINTER, "FrameIncrementPointer", VR::AT),
    E::new(ROWS, "Rows", VR::US),
    E::new(COLUMNS, "Columns", VR::US),
    E::new(PIXEL_SPACING, "PixelSpacing", VR::DS),
    E::new(PIXEL_ASPECT_RATIO, "PixelAspectRatio", VR::IS),
    E::new(BITS_ALLOCATED, "BitsAllocated", VR::US),
    E::new(BITS_STORED, "BitsStored", VR::US),
    E::new(HIGH_BIT, "HighBit", VR::US),
    E::new(PIXEL_REPRESENTATION, "PixelRepresentation", VR::US),
    E::new(SMALLEST_IMAGE_PIXEL_VALUE, "SmallestImagePixelValue", VR::US),
    E::new(LARGEST_IMAGE_PIXEL_VALUE, "LargestImagePixelValue", VR::US),
    E::new(WINDOW_CENTER, "WindowCenter", VR::DS),
    E::new(WINDOW_WIDTH, "WindowWidth", VR::DS),
    E::new(RESCALE_INTERCEPT, "RescaleIntercept", VR::DS),
    E::new(RESCALE_SLOPE, "RescaleSlope", VR::DS),
    E::new(RESCALE_TYPE, "RescaleType", VR::LO),
    E::new(RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR, "RedPaletteColorLookupTableDescriptor", VR::US),
    E::new(GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR, "GreenPaletteColorLookupTableDescriptor", VR::US),
    E::new(BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR, "BluePaletteColorLookupTableDescriptor", VR::US),
    E::new(RED_PALETTE_COLOR_LOOKUP_TABLE_DATA, "RedPaletteColorLookupTableData", VR::OW),
    E::new(GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA, "GreenPaletteColorLookupTableData", VR::OW),
    E::new(BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA, "BluePaletteColorLookupTableData", VR::OW),
    E::new(LOSSY_IMAGE_COMPRESSION, "LossyImageCompression", VR::CS),
    E::new(LOSSY_IMAGE_COMPRESSION_RATIO, "LossyImageCompressionRatio", VR::DS),
    E::new(MODALITY_LUT_SEQUENCE, "ModalityLUTSequence", VR::SQ),
    E::new(LUT_DESCRIPTOR, "LUTDescriptor", VR::US),
    E::new(LUT_EXPLANATION, "LUTExplanation", VR::LO),
    E::new(LUT_DATA, "LUTData", VR::OW),
    E::new(VOILUT_SEQUENCE, "VOILUTSequence", VR::SQ),
    E::new(REQUESTING_PHYSICIAN, "RequestingPhysician", VR::PN),
    E::new(REQUESTED_PROCEDURE_DESCRIPTION, "RequestedProcedureDescription", VR::LO),
    E::new(REQUESTED_PROCEDURE_CODE_SEQUENCE, "RequestedProcedureCodeSequence", VR::SQ),
    E::new(SCHEDULED_PROCEDURE_STEP_SEQUENCE, "ScheduledProcedureStepSequence", VR::SQ),
    E::new(PERFORMED_PROCEDURE_STEP_START_DATE, "PerformedProcedureStepStartDate", VR::DA),
    E::new(PERFORMED_PROCEDURE_STEP_START_TIME, "PerformedProcedureStepStartTime", VR::TM),
    E::new(PERFORMED_PROCEDURE_STEP_ID, "PerformedProcedureStepID", VR::SH),
    E::new(PERFORMED_PROCEDURE_STEP_DESCRIPTION, "PerformedProcedureStepDescription", VR::LO),
    E::new(PERFORMED_PROTOCOL_CODE_SEQUENCE, "PerformedProtocolCodeSequence", VR::SQ),
    E::new(REQUEST_ATTRIBUTES_SEQUENCE, "RequestAttributesSequence", VR::SQ),
    E::new(CONCEPT_NAME_CODE_SEQUENCE, "ConceptNameCodeSequence", VR::SQ),
    E::new(TEXT_VALUE, "TextValue", VR::UT),
    E::new(CONTENT_SEQUENCE, "ContentSequence", VR::SQ),
    E::new(RADIOPHARMACEUTICAL_INFORMATION_SEQUENCE, "RadiopharmaceuticalInformationSequence", VR::SQ),
    E::new(LINE_THICKNESS, "LineThickness", VR::FL),
    E::new(STORAGE_MEDIA_FILE_SET_UID, "StorageMediaFileSetUID", VR::UI),
    E::new(PIXEL_DATA, "PixelData", VR::OW),
    E::new(DIGITAL_SIGNATURES_SEQUENCE, "DigitalSignaturesSequence", VR::SQ),
    E::new(DATA_SET_TRAILING_PADDING, "DataSetTrailingPadding", VR::OB),
];

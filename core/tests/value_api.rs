//! Separate test suite for building values and data sets
//! in an isolated context, without direct access to `smallvec`

// empty module makes `smallvec` dependency unreachable,
// as would be typical in dependents of `dcmcodec_core`
// unless they include it themselves
mod smallvec {}

use dcmcodec_core::{DataSet, Tag, Uid, Value, VR};

#[test]
fn build_nested_data_set() {
    let item: DataSet = vec![(Tag(0x0008, 0x0100), Value::str(VR::SH, "121071").unwrap())]
        .into_iter()
        .collect();

    let mut dataset = DataSet::new();
    dataset.put(Tag(0x0040, 0xA730), Value::sequence(vec![item.clone(), item]));
    dataset.put(Tag(0x0028, 0x0010), Value::us(512));
    dataset.put(Tag(0x0020, 0x0013), Value::str(VR::IS, " 42").unwrap());

    // kept in tag order regardless of insertion order
    let tags: Vec<Tag> = dataset.iter().map(|(tag, _)| tag).collect();
    assert_eq!(
        tags,
        vec![Tag(0x0020, 0x0013), Tag(0x0028, 0x0010), Tag(0x0040, 0xA730)]
    );

    let items = dataset
        .get_first(Tag(0x0040, 0xA730))
        .unwrap()
        .as_sequence()
        .unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(
        items[1].get_first(Tag(0x0008, 0x0100)).unwrap().as_str(),
        Ok("121071")
    );

    assert_eq!(dataset.get_first(Tag(0x0020, 0x0013)).unwrap().to_int().unwrap(), 42);
    assert_eq!(dataset.get_first(Tag(0x0028, 0x0010)).unwrap().to_float().unwrap(), 512.);
}

#[test]
fn generated_uids_are_valid_values() {
    let uid = Uid::generate("2.25").unwrap();
    assert!(uid.as_str().starts_with("2.25."));
    assert!(uid.len() <= 64);

    let value = Value::from(uid.clone());
    assert_eq!(value.vr(), VR::UI);
    assert_eq!(value.as_uid(), Ok(&uid));
    assert_ne!(Uid::generate("2.25").unwrap(), uid);
}

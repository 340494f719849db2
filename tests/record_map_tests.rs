//! Tests for mapping record values.

#![cfg(feature = "record")]

use std::collections::{BTreeMap, HashMap};

use funclib::record::{MapValues, ValueMapper, map_values, mkmapobj};
use rstest::{fixture, rstest};

#[fixture]
fn inventory() -> BTreeMap<&'static str, u32> {
    BTreeMap::from([("apples", 3), ("pears", 0), ("plums", 12)])
}

#[rstest]
fn converter_maps_every_value(inventory: BTreeMap<&'static str, u32>) {
    let in_stock = mkmapobj::<u32, bool>();
    let available = in_stock.convert(&inventory, |count| *count > 0);

    assert_eq!(
        available,
        BTreeMap::from([("apples", true), ("pears", false), ("plums", true)])
    );
}

#[rstest]
fn input_record_is_left_untouched(inventory: BTreeMap<&'static str, u32>) {
    let before = inventory.clone();
    let _doubled = map_values(&inventory, |count: &u32| count * 2);

    assert_eq!(inventory, before);
}

#[rstest]
fn keys_are_exactly_preserved(inventory: BTreeMap<&'static str, u32>) {
    let labels = inventory.map_values(|count| format!("{count} left"));

    assert!(labels.keys().eq(inventory.keys()));
    assert_eq!(labels["plums"], "12 left");
}

#[rstest]
fn one_converter_serves_several_record_shapes() {
    let length: ValueMapper<String, usize> = ValueMapper::new();

    let ordered = BTreeMap::from([(1, String::from("one")), (3, String::from("three"))]);
    let hashed = HashMap::from([("x", String::from("xyz"))]);

    assert_eq!(length.convert(&ordered, String::len), BTreeMap::from([(1, 3), (3, 5)]));
    assert_eq!(length.convert(&hashed, String::len)["x"], 3);
}

#[rstest]
fn converter_can_be_reused_with_stateful_functions(inventory: BTreeMap<&'static str, u32>) {
    let mut visited = 0;
    let numbered = mkmapobj::<u32, (usize, u32)>().convert(&inventory, |count| {
        visited += 1;
        (visited, *count)
    });

    assert_eq!(visited, 3);
    assert_eq!(numbered["apples"], (1, 3));
    assert_eq!(numbered["plums"], (3, 12));
}

#[rstest]
#[case(HashMap::new(), 0)]
#[case(HashMap::from([("a", -1)]), 1)]
#[case(HashMap::from([("a", -1), ("b", 2)]), 2)]
fn mapped_record_has_same_size(#[case] record: HashMap<&'static str, i32>, #[case] size: usize) {
    let absolute = map_values(&record, |value: &i32| value.unsigned_abs());
    assert_eq!(absolute.len(), size);
    for (key, value) in &record {
        assert_eq!(absolute[key], value.unsigned_abs());
    }
}

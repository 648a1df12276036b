use bintaxlib::{
    model::{NormRecord, Subtype},
    window::{bucket_of, group_by_window},
};
use rust_decimal::Decimal;

fn rec(epoch_secs: i64, note: &str) -> NormRecord {
    NormRecord {
        epoch_secs,
        direction: None,
        subtype: Some(Subtype::Swap),
        amount: Decimal::ONE,
        asset: "BTC".into(),
        note: note.into(),
    }
}

#[test]
fn ten_second_buckets() {
    assert_eq!(bucket_of(100), 10);
    assert_eq!(bucket_of(105), 10);
    assert_eq!(bucket_of(109), 10);
    assert_eq!(bucket_of(110), 11);
}

#[test]
fn grouping_preserves_content_and_cardinality() {
    let input = vec![rec(100, "a"), rec(105, "b"), rec(110, "c")];
    let buckets = group_by_window(input.clone());

    let total: usize = buckets.values().map(Vec::len).sum();
    assert_eq!(total, input.len());
    for r in &input {
        assert!(buckets[&bucket_of(r.epoch_secs)].contains(r));
    }
}

#[test]
fn order_within_bucket_is_insertion_order() {
    let buckets = group_by_window(vec![rec(100, "first"), rec(109, "second"), rec(103, "third")]);
    let notes: Vec<&str> = buckets[&10].iter().map(|r| r.note.as_str()).collect();
    assert_eq!(notes, ["first", "second", "third"]);
}

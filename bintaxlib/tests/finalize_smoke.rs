use bintaxlib::{
    finalize::finalize,
    model::{Direction, NormRecord, Subtype},
};
use rust_decimal::Decimal;

fn rec(amount: &str, direction: Option<Direction>, subtype: Option<Subtype>) -> NormRecord {
    NormRecord {
        epoch_secs: 1672531200,
        direction,
        subtype,
        amount: amount.parse().expect("amount"),
        asset: "BTC".into(),
        note: "n".into(),
    }
}

#[test]
fn negative_amount_becomes_withdrawal() {
    let out = finalize(rec("-0.5", None, Some(Subtype::Swap)));
    assert_eq!(out.direction, Direction::Withdrawal);
    assert_eq!(out.amount, "0.5".parse::<Decimal>().unwrap());
    assert_eq!(out.subtype, Some(Subtype::Swap));
}

#[test]
fn non_negative_amount_becomes_deposit() {
    let out = finalize(rec("1.2345", None, Some(Subtype::StakingReward)));
    assert_eq!(out.direction, Direction::Deposit);
    assert_eq!(out.amount, "1.2345".parse::<Decimal>().unwrap());

    let zero = finalize(rec("0", None, Some(Subtype::Commission)));
    assert_eq!(zero.direction, Direction::Deposit);
}

#[test]
fn sign_overrides_classifier_direction() {
    // классификатор сказал «депозит», но сумма отрицательная
    let out = finalize(rec("-3", Some(Direction::Deposit), None));
    assert_eq!(out.direction, Direction::Withdrawal);
    assert_eq!(out.amount, Decimal::from(3));
}

#[test]
fn finalization_is_idempotent() {
    let once = finalize(rec("7.5", None, Some(Subtype::Swap)));
    let again = finalize(NormRecord {
        epoch_secs: once.epoch_secs,
        direction: Some(once.direction),
        subtype: once.subtype,
        amount: once.amount,
        asset: once.asset.clone(),
        note: once.note.clone(),
    });
    assert_eq!(again.direction, once.direction);
    assert_eq!(again.amount, once.amount);
    assert_eq!(again.subtype, once.subtype);
    assert_eq!(again.note, once.note);
}

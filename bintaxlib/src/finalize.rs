//! Финализация направления по знаку суммы.

use crate::model::{Direction, LedgerRecord, NormRecord};
use rust_decimal::Decimal;

/// Итоговое направление определяет только знак суммы; направление,
/// присвоенное классификатором, здесь игнорируется — оно влияло лишь на
/// сдвиг метки времени. Это два независимых решения, не склеивать.
pub fn finalize(rec: NormRecord) -> LedgerRecord {
    let direction = if rec.amount < Decimal::ZERO {
        Direction::Withdrawal
    } else {
        Direction::Deposit
    };

    LedgerRecord {
        epoch_secs: rec.epoch_secs,
        direction,
        subtype: rec.subtype,
        amount: rec.amount.abs(),
        asset: rec.asset,
        note: rec.note,
    }
}

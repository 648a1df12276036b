//! Классификатор: сырая строка выгрузки -> промежуточная запись.

use crate::{
    error::{BintaxError, Result},
    model::{NormRecord, RawEvent},
    rules::{self, Rule},
};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// Формат времени выгрузки; зоны нет, считаем UTC.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Чистая функция: один и тот же `RawEvent` всегда даёт одну и ту же запись.
///
/// Незнакомая метка операции — фатальная ошибка всего прогона, без
/// пропуска строки.
pub fn classify(ev: &RawEvent) -> Result<NormRecord> {
    let rule = rules::rule_for(&ev.operation)
        .ok_or_else(|| BintaxError::UnknownOperationType(ev.operation.clone()))?;

    let ts = NaiveDateTime::parse_from_str(&ev.time, TIME_FORMAT)
        .map_err(|e| BintaxError::TimestampParse(format!("{}: {e}", ev.time)))?
        .and_utc()
        .timestamp();

    let amount: Decimal = ev
        .amount
        .parse()
        .map_err(|e| BintaxError::AmountParse(format!("{}: {e}", ev.amount)))?;

    let rec = match rule {
        Rule::Directional(dir) => NormRecord {
            epoch_secs: ts + dir.time_skew(),
            direction: Some(dir),
            subtype: None,
            amount,
            asset: ev.asset.clone(),
            note: format!("{}--{}", ev.operation, ev.remark),
        },
        Rule::Subtyped(sub) => NormRecord {
            epoch_secs: ts,
            direction: None,
            subtype: Some(sub),
            amount,
            asset: ev.asset.clone(),
            note: format!("{}--{}", ev.operation, ev.remark),
        },
        // исключение выгрузки: remark без префикса операции
        Rule::SubtypedBareNote(sub) => NormRecord {
            epoch_secs: ts,
            direction: None,
            subtype: Some(sub),
            amount,
            asset: ev.asset.clone(),
            note: ev.remark.clone(),
        },
    };

    Ok(rec)
}

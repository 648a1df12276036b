//! Конвейер целиком: чтение -> классификация -> окна -> финализация -> запись.

use crate::{
    classify::classify,
    error::Result,
    finalize::finalize,
    formats::{binance::BinanceCsv, ledger::LedgerCsv},
    model::{LedgerRecord, RawEvent},
    traits::{ReadSource, WriteLedger},
    window::group_by_window,
};
use std::io::{BufRead, Write};

/// Ядро без I/O. Весь набор записей держится в памяти: принадлежность
/// корзине известна только после классификации всего входа.
///
/// Порядок записей на выходе стабилен внутри корзины и не специфицирован
/// между корзинами.
pub fn transform(events: &[RawEvent]) -> Result<Vec<LedgerRecord>> {
    let mut records = Vec::with_capacity(events.len());
    for ev in events {
        records.push(classify(ev)?);
    }

    let buckets = group_by_window(records);

    let mut out = Vec::with_capacity(events.len());
    for (_, bucket) in buckets {
        for rec in bucket {
            out.push(finalize(rec));
        }
    }
    Ok(out)
}

/// Выгрузка Binance -> леджер, поверх произвольных BufRead/Write.
/// Любая ошибка фатальна для всего прогона; частичный вывод не гарантируется.
pub fn convert<R: BufRead, W: Write>(r: R, w: W) -> Result<()> {
    let events = BinanceCsv::read(r)?;
    log::info!("source rows: {}", events.len());

    let records = transform(&events)?;
    log::info!("ledger records: {}", records.len());

    LedgerCsv::write(w, &records)
}

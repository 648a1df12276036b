//! Запись нормализованного леджера: фиксированная 15-колоночная схема.
//!
//! Заполняются только Timestamp, Operation type, Operation sub type,
//! Base amount, Base currency и Notes; колонки 6–14 зарезервированы
//! (фиат/котировка/комиссии/контрагент) и всегда пустые.

use crate::{error::Result, model::LedgerRecord, traits::WriteLedger};
use csv::WriterBuilder;
use std::io::Write;

pub const HEADERS: [&str; 15] = [
    "Timestamp",
    "Operation type",
    "Operation sub type",
    "Base amount",
    "Base currency",
    "Fiat amount",
    "Quote amount",
    "Quote currency",
    "Fee amount",
    "Fee currency",
    "Fee Fiat Amount",
    "From",
    "To",
    "Transaction Id",
    "Notes",
];

pub struct LedgerCsv;

impl WriteLedger for LedgerCsv {
    fn write<W: Write>(mut w: W, records: &[LedgerRecord]) -> Result<()> {
        let mut wrt = WriterBuilder::new().from_writer(&mut w);
        wrt.write_record(HEADERS)?;

        for r in records {
            let ts = r.epoch_secs.to_string();
            // кратчайшая форма, без хвостовых нулей
            let amount = r.amount.normalize().to_string();
            let row: [&str; 15] = [
                &ts,
                r.direction.as_str(),
                r.subtype.map(|s| s.as_str()).unwrap_or(""),
                &amount,
                &r.asset,
                "",
                "",
                "",
                "",
                "",
                "",
                "",
                "",
                "",
                &r.note,
            ];
            wrt.write_record(row)?;
        }
        wrt.flush()?;
        Ok(())
    }
}

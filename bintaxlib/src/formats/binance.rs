//! Чтение исходной выгрузки Binance.
//!
//! Колонки: User_ID, UTC_Time, Account, Operation, Coin, Change, Remark.
//! Строка с `User_ID` в первой колонке — заголовок, пропускается.

use crate::{error::Result, model::RawEvent, traits::ReadSource};
use csv::ReaderBuilder;
use std::io::BufRead;

pub struct BinanceCsv;

impl ReadSource for BinanceCsv {
    fn read<R: BufRead>(r: R) -> Result<Vec<RawEvent>> {
        // заголовок ищем по маркеру, а не по позиции, поэтому has_headers(false)
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(r);

        let mut events = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            if rec.get(0) == Some("User_ID") {
                continue;
            }
            // выгрузка местами дублирует кавычки внутри полей
            let field = |i: usize| rec.get(i).unwrap_or("").trim_matches('"').to_string();

            events.push(RawEvent {
                time: rec.get(1).unwrap_or("").to_string(),
                operation: field(3),
                asset: field(4),
                amount: field(5),
                remark: field(6),
            });
        }
        Ok(events)
    }
}

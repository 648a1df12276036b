//! Унифицированные трэйты чтения/записи на основе std::io::{BufRead, Write}.

use crate::{
    error::Result,
    model::{LedgerRecord, RawEvent},
};
use std::io::{BufRead, Write};

pub trait ReadSource {
    fn read<R: BufRead>(r: R) -> Result<Vec<RawEvent>>;
}

pub trait WriteLedger {
    fn write<W: Write>(w: W, records: &[LedgerRecord]) -> Result<()>;
}

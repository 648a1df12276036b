//! Группировка записей по 10-секундным окнам.
//!
//! Проход только перегруппировывает: содержимое и количество записей не
//! меняются, порядок внутри корзины сохраняется, порядок самих корзин
//! не специфицирован (итерация по HashMap). Слияния/суммирования по
//! корзине нет — поведение воспроизведено ради совместимости вывода,
//! расширять его не планируется.

use crate::model::NormRecord;
use std::collections::HashMap;

pub const WINDOW_SECS: i64 = 10;

pub fn bucket_of(epoch_secs: i64) -> i64 {
    epoch_secs / WINDOW_SECS
}

pub fn group_by_window(records: Vec<NormRecord>) -> HashMap<i64, Vec<NormRecord>> {
    let mut buckets: HashMap<i64, Vec<NormRecord>> = HashMap::new();
    for rec in records {
        buckets.entry(bucket_of(rec.epoch_secs)).or_default().push(rec);
    }
    buckets
}

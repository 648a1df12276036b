//! bintaxlib — конвертация выгрузки транзакций Binance в нормализованный
//! формат леджера (фиксированная 15-колоночная схема для налогового учёта)

pub mod error;
pub mod model;
pub mod rules;
pub mod classify;
pub mod window;
pub mod finalize;
pub mod convert;
pub mod traits;

pub mod formats {
    pub mod binance;
    pub mod ledger;
}

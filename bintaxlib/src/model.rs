//! Доменные модели — «сырая строка» выгрузки и два слоя нормализованной записи.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Направление внешнего движения средств.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Direction {
    Deposit,
    Withdrawal,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Deposit => "deposit",
            Direction::Withdrawal => "withdrawal",
        }
    }

    /// Сдвиг метки времени в секундах: разводит парные ноги одного перевода,
    /// записанные биржей в одну и ту же секунду.
    pub fn time_skew(self) -> i64 {
        match self {
            Direction::Deposit => -2,
            Direction::Withdrawal => 2,
        }
    }
}

/// Экономическая категория операции без собственного направления.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Subtype {
    RealizedPnl,
    Swap,
    CommissionRebate,
    Airdrop,
    Commission,
    ReferralKickback,
    Lending,
    StakingReward,
    InternalTransfer,
}

impl Subtype {
    pub fn as_str(self) -> &'static str {
        match self {
            Subtype::RealizedPnl => "realized_pnl",
            Subtype::Swap => "swap",
            Subtype::CommissionRebate => "commission_rebate",
            Subtype::Airdrop => "airdrop",
            Subtype::Commission => "commission",
            Subtype::ReferralKickback => "referral_kickback",
            Subtype::Lending => "lending",
            Subtype::StakingReward => "staking_reward",
            Subtype::InternalTransfer => "internal_transfer",
        }
    }
}

/// Одна строка исходной выгрузки, как есть.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawEvent {
    pub time: String,
    pub operation: String,
    pub asset: String,
    pub amount: String,
    pub remark: String,
}

/// Промежуточная запись после классификации.
///
/// Инвариант: ровно одно из `direction`/`subtype` заполнено — это
/// гарантирует таблица правил, а не последующие проходы.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormRecord {
    pub epoch_secs: i64,
    pub direction: Option<Direction>,
    pub subtype: Option<Subtype>,
    pub amount: Decimal,
    pub asset: String,
    pub note: String,
}

/// Итоговая запись леджера: направление всегда заполнено, сумма по модулю.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerRecord {
    pub epoch_secs: i64,
    pub direction: Direction,
    pub subtype: Option<Subtype>,
    pub amount: Decimal,
    pub asset: String,
    pub note: String,
}

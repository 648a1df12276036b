//! Таблица классификации: метка операции биржи -> правило.
//!
//! Словарь меток открытый (биржа добавляет новые), поэтому таблица —
//! явный allow-list: незнакомая метка валит весь прогон, молча пропускать
//! финансовые записи нельзя. Несогласованность самих меток (одна и та же
//! операция встречается в разных написаниях, «Buy Crypto» числится депозитом)
//! воспроизведена из выгрузки дословно.

use crate::model::{Direction, Subtype};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Внешнее движение средств: направление задаёт сдвиг метки времени.
    Directional(Direction),
    /// Внутренняя/экономическая операция: подтип без направления.
    Subtyped(Subtype),
    /// Как `Subtyped`, но в Notes идёт голый remark без префикса операции.
    SubtypedBareNote(Subtype),
}

use Direction::{Deposit, Withdrawal};
use Rule::{Directional, Subtyped, SubtypedBareNote};
use Subtype::*;

/// Метка сравнивается точно, с учётом регистра и пробелов.
pub static RULES: &[(&str, Rule)] = &[
    ("Deposit", Directional(Deposit)),
    ("Fiat Deposit", Directional(Deposit)),
    ("Binance Card Cashback", Directional(Deposit)),
    ("Binance Card Spending", Directional(Deposit)),
    ("Sell to Card", Directional(Deposit)),
    ("Buy Crypto", Directional(Deposit)),
    ("Insurance Fund Compensation", Directional(Deposit)),
    ("Card Cashback", Directional(Deposit)),
    ("send", Directional(Deposit)),
    ("Send", Directional(Deposit)),
    ("C2C Transfer", Directional(Deposit)),
    ("Sell Crypto To Fiat", Directional(Deposit)),
    ("Withdraw", Directional(Withdrawal)),
    ("Fiat Withdrawal", Directional(Withdrawal)),
    ("Fiat Withdraw", Directional(Withdrawal)),
    ("BNB Vault Rewards", Subtyped(RealizedPnl)),
    ("Realized Profit and Loss", Subtyped(RealizedPnl)),
    ("Asset Recovery", Subtyped(RealizedPnl)),
    ("Realize profit and loss", Subtyped(RealizedPnl)),
    ("Launchpool Earnings Withdrawal", Subtyped(RealizedPnl)),
    ("Buy", Subtyped(Swap)),
    ("Transaction Related", Subtyped(Swap)),
    ("Large OTC Trading", Subtyped(Swap)),
    ("Sell", Subtyped(Swap)),
    ("Binance Convert", Subtyped(Swap)),
    ("Transaction Buy", Subtyped(Swap)),
    ("Transaction Spend", Subtyped(Swap)),
    ("Transaction Sold", Subtyped(Swap)),
    ("Transaction Revenue", Subtyped(Swap)),
    ("Stablecoins Auto-Conversion", Subtyped(Swap)),
    ("Auto-Invest Transaction", Subtyped(Swap)),
    ("Small Assets Exchange BNB", SubtypedBareNote(Swap)),
    ("Small assets exchange BNB", SubtypedBareNote(Swap)),
    ("Commission Fee Shared With You", Subtyped(CommissionRebate)),
    ("Commission Rebate", Subtyped(CommissionRebate)),
    ("Distribution", Subtyped(Airdrop)),
    ("Mission Reward Distribution", Subtyped(Airdrop)),
    ("Token Swap - Distribution", Subtyped(Airdrop)),
    ("Airdrop Assets", Subtyped(Airdrop)),
    ("Fee", Subtyped(Commission)),
    ("Transaction Fee", Subtyped(Commission)),
    ("Funding Fee", Subtyped(Commission)),
    ("Referral Kickback", Subtyped(ReferralKickback)),
    ("Simple Earn Flexible Subscription", Subtyped(Lending)),
    ("Simple Earn Locked Subscription", Subtyped(Lending)),
    ("Launchpool Subscription/Redemption", Subtyped(Lending)),
    ("Simple Earn Flexible Redemption", Subtyped(Lending)),
    ("Simple Earn Locked Redemption", Subtyped(Lending)),
    ("Leverage token redemption", Subtyped(Lending)),
    ("Staking Purchase", Subtyped(Lending)),
    ("Staking Redemption", Subtyped(Lending)),
    ("Staking Unlocked", Subtyped(Lending)),
    ("ETH 2.0 Staking", Subtyped(Lending)),
    ("IsolatedMargin loan", Subtyped(Lending)),
    ("IsolatedMargin repayment", Subtyped(Lending)),
    ("Savings Distribution", Subtyped(StakingReward)),
    ("Simple Earn Flexible Interest", Subtyped(StakingReward)),
    ("Staking Rewards", Subtyped(StakingReward)),
    ("Simple Earn Locked Rewards", Subtyped(StakingReward)),
    ("ETH 2.0 Staking Rewards", Subtyped(StakingReward)),
    ("Transfer Between Main and Funding Wallet", Subtyped(InternalTransfer)),
    ("Transfer from Main Account/Futures to Margin Account", Subtyped(InternalTransfer)),
    ("Transfer from Margin Account to Main Account/Futures", Subtyped(InternalTransfer)),
    ("Transfer Between Spot Account and UM Futures Account", Subtyped(InternalTransfer)),
    ("Futures Account Transfer", Subtyped(InternalTransfer)),
    ("Transfer Between Sub-Account UM Futures and Spot Account", Subtyped(InternalTransfer)),
    ("Sub-account Transfer", Subtyped(InternalTransfer)),
    ("Asset Conversion Transfer", Subtyped(InternalTransfer)),
    ("Transfer Between Main Account/Futures and Margin Account", Subtyped(InternalTransfer)),
    ("Main and Funding Account Transfer", Subtyped(InternalTransfer)),
];

pub fn rule_for(label: &str) -> Option<Rule> {
    RULES.iter().find(|(l, _)| *l == label).map(|&(_, r)| r)
}

#![warn(clippy::uninlined_format_args)]

pub mod ledger;
pub mod model;
pub mod services;

pub use ledger::{FriendLedger, LedgerError};
pub use model::{
    BalanceStanding, Friend, FriendId, Money, MoneyParseError, Payer, SettlementInput,
    SettlementInputError,
};
pub use services::SettlementCalculator;

pub mod debt;
pub mod error;
pub mod msg;

pub use crate::debt::{Debt, DebtBase, DebtUnchecked, MsgPayDebt};
pub use crate::error::ContractError;

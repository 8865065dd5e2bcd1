use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("invalid debt: {reason}")]
    InvalidDebt {
        reason: String,
    },

    #[error("invalid message: {reason}")]
    InvalidMessage {
        reason: String,
    },

    #[error("invalid config: {reason}")]
    InvalidConfig {
        reason: String,
    },

    #[error("debt with id `{id}` already exists")]
    DuplicateId {
        id: String,
    },

    #[error("debt with id `{id}` does not exist")]
    DebtNotFound {
        id: String,
    },

    /// Only the debtor recorded on a debt may pay it off
    #[error("{payer} is not the debtor of debt `{id}`")]
    UnauthorizedPayer {
        id: String,
        payer: String,
    },

    #[error("denom mismatch! expected: {expected}, received: {received}")]
    DenomMismatch {
        expected: String,
        received: String,
    },

    #[error("insufficient funds! required: {required}{denom}, available: {available}{denom}")]
    InsufficientFunds {
        denom: String,
        required: Uint128,
        available: Uint128,
    },

    #[error("unauthorized: {reason}")]
    Unauthorized {
        reason: String,
    },
}

impl ContractError {
    pub fn invalid_debt(reason: impl Into<String>) -> Self {
        ContractError::InvalidDebt {
            reason: reason.into(),
        }
    }

    pub fn invalid_message(reason: impl Into<String>) -> Self {
        ContractError::InvalidMessage {
            reason: reason.into(),
        }
    }

    pub fn unauthorized(reason: impl Into<String>) -> Self {
        ContractError::Unauthorized {
            reason: reason.into(),
        }
    }
}

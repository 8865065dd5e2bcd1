use cosmwasm_std::{Addr, Api, Coin};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ContractError;

//--------------------------------------------------------------------------------------------------
// Debt
//--------------------------------------------------------------------------------------------------

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct DebtBase<T> {
    /// Unique identifier of the debt, chosen by whoever records it
    pub id: String,
    /// Account that owes the amount
    pub debtor: T,
    /// Account that is owed the amount
    pub creditor: T,
    /// The amount that is *still* owed. Reduced by every payment; the debt is deleted once this
    /// reaches zero, so a stored debt never carries a zero amount
    pub amount: Coin,
}

pub type DebtUnchecked = DebtBase<String>;
pub type Debt = DebtBase<Addr>;

impl From<Debt> for DebtUnchecked {
    fn from(debt: Debt) -> Self {
        DebtUnchecked {
            id: debt.id,
            debtor: debt.debtor.to_string(),
            creditor: debt.creditor.to_string(),
            amount: debt.amount,
        }
    }
}

impl DebtUnchecked {
    /// Validate the debtor and creditor addresses. A malformed address makes the debt invalid
    pub fn check(&self, api: &dyn Api) -> Result<Debt, ContractError> {
        let debtor = api
            .addr_validate(&self.debtor)
            .map_err(|err| ContractError::invalid_debt(format!("invalid debtor: {}", err)))?;
        let creditor = api
            .addr_validate(&self.creditor)
            .map_err(|err| ContractError::invalid_debt(format!("invalid creditor: {}", err)))?;

        Ok(Debt {
            id: self.id.clone(),
            debtor,
            creditor,
            amount: self.amount.clone(),
        })
    }
}

impl Debt {
    /// Stateless checks on the debt itself. Whether the id is still available is decided by the
    /// keeper against storage
    pub fn validate(&self, max_id_length: u32) -> Result<(), ContractError> {
        validate_id(&self.id, max_id_length).map_err(ContractError::invalid_debt)?;

        if self.debtor.as_str().is_empty() {
            return Err(ContractError::invalid_debt("debtor cannot be empty"));
        }
        if self.creditor.as_str().is_empty() {
            return Err(ContractError::invalid_debt("creditor cannot be empty"));
        }
        if self.debtor == self.creditor {
            return Err(ContractError::invalid_debt("debtor and creditor must be different"));
        }

        validate_coin(&self.amount).map_err(ContractError::invalid_debt)
    }
}

//--------------------------------------------------------------------------------------------------
// Payment
//--------------------------------------------------------------------------------------------------

/// Instruction to pay off (part of) a debt. Not persisted
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MsgPayDebt {
    /// Id of the debt to be paid
    pub id: String,
    /// The amount offered. If it exceeds what is still owed, only the owed amount is charged
    pub amount: Coin,
    /// The paying account; must be the debtor of the debt
    pub debtor: Addr,
}

impl MsgPayDebt {
    pub fn validate_basic(&self) -> Result<(), ContractError> {
        if self.id.is_empty() {
            return Err(ContractError::invalid_message("debt id cannot be empty"));
        }
        if self.debtor.as_str().is_empty() {
            return Err(ContractError::invalid_message("debtor cannot be empty"));
        }
        validate_coin(&self.amount).map_err(ContractError::invalid_message)
    }
}

//--------------------------------------------------------------------------------------------------
// Helpers
//--------------------------------------------------------------------------------------------------

fn validate_id(id: &str, max_id_length: u32) -> Result<(), String> {
    if id.is_empty() {
        return Err("id cannot be empty".to_string());
    }
    if id.len() > max_id_length as usize {
        return Err(format!("id is longer than {} bytes", max_id_length));
    }
    Ok(())
}

fn validate_coin(coin: &Coin) -> Result<(), String> {
    if coin.denom.is_empty() {
        return Err("denom cannot be empty".to_string());
    }
    if coin.amount.is_zero() {
        return Err("amount must be greater than zero".to_string());
    }
    Ok(())
}

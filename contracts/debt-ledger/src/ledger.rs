use cosmwasm_std::{Addr, Coin, StdResult, Storage, Uint128};
use cw_storage_plus::Map;

use debt_ledger::ContractError;

/// Per-account, per-denom fungible balances that the keeper reads and moves funds between
pub trait BalanceLedger {
    fn balance(&self, storage: &dyn Storage, address: &Addr, denom: &str) -> StdResult<Uint128>;

    fn credit(&self, storage: &mut dyn Storage, address: &Addr, coin: &Coin) -> Result<(), ContractError>;

    /// Must fail with `ContractError::InsufficientFunds`, leaving the balance untouched, if the
    /// account holds less than `coin`
    fn debit(&self, storage: &mut dyn Storage, address: &Addr, coin: &Coin) -> Result<(), ContractError>;
}

pub const BALANCES: Map<(&Addr, &str), Uint128> = Map::new("balances");

/// Balances kept in the contract's own storage. Accounts fund them with `Deposit` and drain them
/// with `Withdraw`
pub struct StoreLedger;

impl BalanceLedger for StoreLedger {
    fn balance(&self, storage: &dyn Storage, address: &Addr, denom: &str) -> StdResult<Uint128> {
        Ok(BALANCES.may_load(storage, (address, denom))?.unwrap_or_else(Uint128::zero))
    }

    fn credit(&self, storage: &mut dyn Storage, address: &Addr, coin: &Coin) -> Result<(), ContractError> {
        let balance = self.balance(storage, address, &coin.denom)?;
        BALANCES.save(storage, (address, coin.denom.as_str()), &balance.checked_add(coin.amount)?)?;
        Ok(())
    }

    fn debit(&self, storage: &mut dyn Storage, address: &Addr, coin: &Coin) -> Result<(), ContractError> {
        let balance = self.balance(storage, address, &coin.denom)?;
        if balance < coin.amount {
            return Err(ContractError::InsufficientFunds {
                denom: coin.denom.clone(),
                required: coin.amount,
                available: balance,
            });
        }

        // drop emptied entries so that storage only holds non-zero balances
        let new_balance = balance - coin.amount;
        if new_balance.is_zero() {
            BALANCES.remove(storage, (address, coin.denom.as_str()));
        } else {
            BALANCES.save(storage, (address, coin.denom.as_str()), &new_balance)?;
        }

        Ok(())
    }
}

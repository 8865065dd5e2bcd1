use cosmwasm_std::{Coin, Deps, StdResult};

use debt_ledger::msg::ConfigUnchecked;
use debt_ledger::DebtUnchecked;

use crate::ledger::{BalanceLedger, StoreLedger};
use crate::state::{load_debt, read_debts, CONFIG};

// Default settings for pagination
const MAX_LIMIT: u32 = 30;
const DEFAULT_LIMIT: u32 = 10;

pub fn query_config(deps: Deps) -> StdResult<ConfigUnchecked> {
    let config = CONFIG.load(deps.storage)?;
    Ok(config.into())
}

pub fn query_debt(deps: Deps, id: String) -> StdResult<DebtUnchecked> {
    let debt = load_debt(deps.storage, &id)?;
    Ok(debt.into())
}

pub fn query_debts(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<Vec<DebtUnchecked>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let debts = read_debts(deps.storage, start_after, limit)?;
    Ok(debts.into_iter().map(Into::into).collect())
}

pub fn query_balance(deps: Deps, address: String, denom: String) -> StdResult<Coin> {
    let addr = deps.api.addr_validate(&address)?;
    let amount = StoreLedger.balance(deps.storage, &addr, &denom)?;
    Ok(Coin {
        denom,
        amount,
    })
}

use cosmwasm_std::{Order, StdResult, Storage};
use cw_storage_plus::{Bound, Item, Map};

use debt_ledger::msg::Config;
use debt_ledger::Debt;

pub const CONFIG: Item<Config> = Item::new("config");

// Open debts, keyed by id. Settled debts are removed, so a key present here is always a debt with
// a non-zero remaining amount
pub const DEBTS: Map<&str, Debt> = Map::new("debts");

pub fn debt_exists(storage: &dyn Storage, id: &str) -> StdResult<bool> {
    Ok(DEBTS.may_load(storage, id)?.is_some())
}

pub fn load_debt(storage: &dyn Storage, id: &str) -> StdResult<Debt> {
    DEBTS.load(storage, id)
}

/// Insert or overwrite; callers must check uniqueness where it is required
pub fn save_debt(storage: &mut dyn Storage, debt: &Debt) -> StdResult<()> {
    DEBTS.save(storage, &debt.id, debt)
}

pub fn remove_debt(storage: &mut dyn Storage, id: &str) {
    DEBTS.remove(storage, id)
}

/// Open debts in ascending order of id, starting after `start_after` if provided
pub fn read_debts(
    storage: &dyn Storage,
    start_after: Option<String>,
    limit: usize,
) -> StdResult<Vec<Debt>> {
    let start = start_after.map(Bound::exclusive);

    DEBTS
        .range(storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (_, debt) = item?;
            Ok(debt)
        })
        .collect()
}

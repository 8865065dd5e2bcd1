use cosmwasm_std::{
    entry_point, to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};

use debt_ledger::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use debt_ledger::ContractError;

use crate::execute;
use crate::queries;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    execute::init_storage(deps, info, msg)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CreateDebt(debt) => execute::create_debt(deps, info, debt),
        ExecuteMsg::PayDebt {
            id,
            amount,
        } => execute::pay_debt(deps, info, id, amount),
        ExecuteMsg::Deposit {} => execute::deposit(deps, info),
        ExecuteMsg::Withdraw {
            amount,
        } => execute::withdraw(deps, info, amount),
        ExecuteMsg::UpdateConfig {
            new_config,
        } => execute::update_config(deps, info, new_config),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_binary(&queries::query_config(deps)?),
        QueryMsg::Debt {
            id,
        } => to_binary(&queries::query_debt(deps, id)?),
        QueryMsg::Debts {
            start_after,
            limit,
        } => to_binary(&queries::query_debts(deps, start_after, limit)?),
        QueryMsg::Balance {
            address,
            denom,
        } => to_binary(&queries::query_balance(deps, address, denom)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(_deps: DepsMut, _env: Env, _msg: MigrateMsg) -> StdResult<Response> {
    Ok(Response::new())
}

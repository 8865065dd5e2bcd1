use cosmwasm_std::{BankMsg, Coin, DepsMut, Event, MessageInfo, Response, StdResult, Storage};

use debt_ledger::msg::{ConfigUnchecked, InstantiateMsg};
use debt_ledger::{ContractError, DebtUnchecked, MsgPayDebt};

use crate::helpers::assert_no_funds;
use crate::keeper::Keeper;
use crate::ledger::{BalanceLedger, StoreLedger};
use crate::state::CONFIG;

pub fn init_storage(
    deps: DepsMut,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    assert_no_funds(&info)?;

    let config = msg.config.check(deps.api)?;
    config.validate()?;
    CONFIG.save(deps.storage, &config)?;

    // imported debts go through the keeper, so they obey the same rules as newly created ones
    let keeper = Keeper::new(StoreLedger, config.max_id_length);
    let debts_imported = msg.debts.len();
    for debt in msg.debts {
        keeper.create_debt(deps.storage, debt.check(deps.api)?)?;
    }

    Ok(Response::new()
        .add_attribute("action", "debt_ledger/instantiate")
        .add_attribute("debts_imported", debts_imported.to_string()))
}

pub fn create_debt(
    deps: DepsMut,
    info: MessageInfo,
    debt: DebtUnchecked,
) -> Result<Response, ContractError> {
    assert_no_funds(&info)?;

    let debt = debt.check(deps.api)?;

    if info.sender != debt.debtor {
        return Err(ContractError::unauthorized("only the debtor can record a debt"));
    }

    load_keeper(deps.storage)?.create_debt(deps.storage, debt.clone())?;

    let event = Event::new("debt_ledger/debt_created")
        .add_attribute("id", &debt.id)
        .add_attribute("debtor", debt.debtor.to_string())
        .add_attribute("creditor", debt.creditor.to_string())
        .add_attribute("amount", coin_to_string(&debt.amount));

    Ok(Response::new()
        .add_attribute("action", "debt_ledger/execute/create_debt")
        .add_event(event))
}

pub fn pay_debt(
    deps: DepsMut,
    info: MessageInfo,
    id: String,
    amount: Coin,
) -> Result<Response, ContractError> {
    assert_no_funds(&info)?;

    let msg = MsgPayDebt {
        id,
        amount,
        debtor: info.sender,
    };

    let outcome = load_keeper(deps.storage)?.pay_debt(deps.storage, &msg)?;

    let mut events = vec![Event::new("debt_ledger/debt_paid")
        .add_attribute("id", &msg.id)
        .add_attribute("payer", msg.debtor.to_string())
        .add_attribute("creditor", outcome.creditor.to_string())
        .add_attribute("paid", coin_to_string(&outcome.paid))
        .add_attribute("remaining", coin_to_string(&outcome.remaining))];
    if outcome.is_settled() {
        events.push(Event::new("debt_ledger/debt_settled").add_attribute("id", &msg.id));
    }

    Ok(Response::new()
        .add_attribute("action", "debt_ledger/execute/pay_debt")
        .add_events(events))
}

pub fn deposit(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let coins: Vec<&Coin> = info.funds.iter().filter(|coin| !coin.amount.is_zero()).collect();
    if coins.is_empty() {
        return Err(ContractError::invalid_message("no funds sent"));
    }

    let mut events: Vec<Event> = vec![];
    for coin in coins {
        StoreLedger.credit(deps.storage, &info.sender, coin)?;
        events.push(
            Event::new("debt_ledger/deposited")
                .add_attribute("user", info.sender.to_string())
                .add_attribute("amount", coin_to_string(coin)),
        );
    }

    Ok(Response::new()
        .add_attribute("action", "debt_ledger/execute/deposit")
        .add_events(events))
}

pub fn withdraw(deps: DepsMut, info: MessageInfo, amount: Coin) -> Result<Response, ContractError> {
    assert_no_funds(&info)?;

    if amount.denom.is_empty() || amount.amount.is_zero() {
        return Err(ContractError::invalid_message("withdraw amount must be non-zero"));
    }

    StoreLedger.debit(deps.storage, &info.sender, &amount)?;

    let event = Event::new("debt_ledger/withdrawn")
        .add_attribute("user", info.sender.to_string())
        .add_attribute("amount", coin_to_string(&amount));

    Ok(Response::new()
        .add_message(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: vec![amount],
        })
        .add_attribute("action", "debt_ledger/execute/withdraw")
        .add_event(event))
}

pub fn update_config(
    deps: DepsMut,
    info: MessageInfo,
    new_config: ConfigUnchecked,
) -> Result<Response, ContractError> {
    assert_no_funds(&info)?;

    let config = CONFIG.load(deps.storage)?;

    if info.sender != config.governance {
        return Err(ContractError::unauthorized("only governance can update config"));
    }

    let new_config = new_config.check(deps.api)?;
    new_config.validate()?;
    CONFIG.save(deps.storage, &new_config)?;

    Ok(Response::new().add_attribute("action", "debt_ledger/execute/update_config"))
}

fn load_keeper(storage: &dyn Storage) -> StdResult<Keeper<StoreLedger>> {
    let config = CONFIG.load(storage)?;
    Ok(Keeper::new(StoreLedger, config.max_id_length))
}

fn coin_to_string(coin: &Coin) -> String {
    format!("{}{}", coin.amount, coin.denom)
}

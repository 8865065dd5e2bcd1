use cosmwasm_std::MessageInfo;

use debt_ledger::ContractError;

/// Assert that no funds were sent along with a message. Only `Deposit` credits incoming coins to a
/// balance; coins sent with anything else would be stranded in the contract
pub fn assert_no_funds(info: &MessageInfo) -> Result<(), ContractError> {
    if info.funds.iter().any(|coin| !coin.amount.is_zero()) {
        return Err(ContractError::invalid_message("this message does not accept funds"));
    }
    Ok(())
}

use cosmwasm_std::{Addr, Coin, StdError, Storage};

use debt_ledger::{ContractError, Debt, MsgPayDebt};

use crate::ledger::BalanceLedger;
use crate::state::{debt_exists, load_debt, remove_debt, save_debt};

/// Result of a successful payment, used to report what happened without reading storage again
#[derive(Clone, Debug, PartialEq)]
pub struct PaymentOutcome {
    pub creditor: Addr,
    /// The amount actually moved from debtor to creditor; never more than what was owed
    pub paid: Coin,
    /// What is still owed after the payment; zero if the debt has been settled
    pub remaining: Coin,
}

impl PaymentOutcome {
    pub fn is_settled(&self) -> bool {
        self.remaining.amount.is_zero()
    }
}

/// Owns the rules for recording and settling debts. The balance ledger is injected at
/// construction; storage is handed in with every call
pub struct Keeper<L> {
    ledger: L,
    max_id_length: u32,
}

impl<L: BalanceLedger> Keeper<L> {
    pub fn new(ledger: L, max_id_length: u32) -> Self {
        Keeper {
            ledger,
            max_id_length,
        }
    }

    /// Record a new debt. Only writes the record; no funds are moved
    pub fn create_debt(&self, storage: &mut dyn Storage, debt: Debt) -> Result<(), ContractError> {
        debt.validate(self.max_id_length)?;

        if debt_exists(storage, &debt.id)? {
            return Err(ContractError::DuplicateId {
                id: debt.id,
            });
        }

        save_debt(storage, &debt)?;
        Ok(())
    }

    /// Move funds from the debtor to the creditor, and reduce or delete the debt accordingly
    ///
    /// The amount charged is the smaller of the offered amount and what is still owed. Every check
    /// runs before the first write, so a failed payment leaves balances and the debt untouched
    pub fn pay_debt(
        &self,
        storage: &mut dyn Storage,
        msg: &MsgPayDebt,
    ) -> Result<PaymentOutcome, ContractError> {
        msg.validate_basic()?;

        let mut debt = self.get_debt_by_id(storage, &msg.id)?;

        if msg.debtor != debt.debtor {
            return Err(ContractError::UnauthorizedPayer {
                id: msg.id.clone(),
                payer: msg.debtor.to_string(),
            });
        }

        if msg.amount.denom != debt.amount.denom {
            return Err(ContractError::DenomMismatch {
                expected: debt.amount.denom,
                received: msg.amount.denom.clone(),
            });
        }

        let denom = debt.amount.denom.clone();
        let paid = Coin {
            denom: denom.clone(),
            amount: msg.amount.amount.min(debt.amount.amount),
        };

        // funds are checked against the capped amount; an overpayment is never charged in full
        let available = self.ledger.balance(storage, &msg.debtor, &denom)?;
        if available < paid.amount {
            return Err(ContractError::InsufficientFunds {
                denom,
                required: paid.amount,
                available,
            });
        }

        self.ledger
            .balance(storage, &debt.creditor, &denom)?
            .checked_add(paid.amount)?;

        let remaining = debt.amount.amount.checked_sub(paid.amount)?;

        self.ledger.debit(storage, &msg.debtor, &paid)?;
        self.ledger.credit(storage, &debt.creditor, &paid)?;

        if remaining.is_zero() {
            remove_debt(storage, &debt.id);
        } else {
            debt.amount.amount = remaining;
            save_debt(storage, &debt)?;
        }

        Ok(PaymentOutcome {
            creditor: debt.creditor,
            paid,
            remaining: Coin {
                denom: debt.amount.denom,
                amount: remaining,
            },
        })
    }

    pub fn get_debt_by_id(&self, storage: &dyn Storage, id: &str) -> Result<Debt, ContractError> {
        load_debt(storage, id).map_err(|err| match err {
            StdError::NotFound { .. } => ContractError::DebtNotFound {
                id: id.to_string(),
            },
            err => err.into(),
        })
    }
}

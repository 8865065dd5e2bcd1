use cosmwasm_std::{Addr, Api, Coin, Empty, StdResult};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::debt::DebtUnchecked;
use crate::error::ContractError;

pub const MIN_MAX_ID_LENGTH: u32 = 1;
pub const MAX_MAX_ID_LENGTH: u32 = 256;

//--------------------------------------------------------------------------------------------------
// Config
//--------------------------------------------------------------------------------------------------

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ConfigBase<T> {
    /// Account who can update config
    pub governance: T,
    /// Maximum length, in bytes, of a debt id
    pub max_id_length: u32,
}

pub type ConfigUnchecked = ConfigBase<String>;
pub type Config = ConfigBase<Addr>;

impl From<Config> for ConfigUnchecked {
    fn from(config: Config) -> Self {
        ConfigUnchecked {
            governance: config.governance.into(),
            max_id_length: config.max_id_length,
        }
    }
}

impl ConfigUnchecked {
    pub fn check(&self, api: &dyn Api) -> StdResult<Config> {
        Ok(Config {
            governance: api.addr_validate(&self.governance)?,
            max_id_length: self.max_id_length,
        })
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ContractError> {
        if self.max_id_length < MIN_MAX_ID_LENGTH || self.max_id_length > MAX_MAX_ID_LENGTH {
            return Err(ContractError::InvalidConfig {
                reason: format!(
                    "invalid max id length: {}; must be in [{}, {}]",
                    self.max_id_length, MIN_MAX_ID_LENGTH, MAX_MAX_ID_LENGTH
                ),
            });
        }

        Ok(())
    }
}

//--------------------------------------------------------------------------------------------------
// Message types
//--------------------------------------------------------------------------------------------------

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InstantiateMsg {
    pub config: ConfigUnchecked,
    /// Debts to be recorded at instantiation, e.g. when importing the state of another ledger.
    /// Subject to the same validation as `ExecuteMsg::CreateDebt`
    pub debts: Vec<DebtUnchecked>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Record a new debt. The sender must be the debtor, i.e. the party acknowledging that it owes
    /// the amount. No funds are moved
    CreateDebt(DebtUnchecked),
    /// Pay off part or all of a debt owed by the sender, using the sender's deposited balance
    ///
    /// If `amount` exceeds what is still owed, only the owed amount is charged and the debt is
    /// deleted
    PayDebt {
        id: String,
        amount: Coin,
    },
    /// Credit the native coins sent along with this message to the sender's balance
    Deposit {},
    /// Debit the sender's balance and send the coin to the sender
    Withdraw {
        amount: Coin,
    },
    /// Update data stored in config (only governance can call)
    UpdateConfig {
        new_config: ConfigUnchecked,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    /// Return the ledger's configurations. Response: `ConfigUnchecked`
    Config {},
    /// Return a single debt; errors if it does not exist. Response: `DebtUnchecked`
    Debt {
        id: String,
    },
    /// Enumerate open debts, ordered by id. Response: `Vec<DebtUnchecked>`
    Debts {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    /// Return an account's deposited balance of a denom. Response: `Coin`
    Balance {
        address: String,
        denom: String,
    },
}

/// We currently don't need any input parameter for migration
pub type MigrateMsg = Empty;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validating_config() {
        let mut config = Config {
            governance: Addr::unchecked("governance"),
            max_id_length: 64,
        };
        assert_eq!(config.validate(), Ok(()));

        config.max_id_length = 0;
        assert_eq!(
            config.validate(),
            Err(ContractError::InvalidConfig {
                reason: "invalid max id length: 0; must be in [1, 256]".to_string()
            })
        );

        config.max_id_length = 257;
        assert!(config.validate().is_err());
    }
}

use cosmwasm_std::{Addr, StdResult, Storage};
use cw_storage_plus::{Item, Map};
use society_membership::types::{Config, DuesPayment, Member};

use crate::error::ContractError;

/// Default limit for list pagination.
pub const DEFAULT_LIMIT: u32 = 30;
pub const MAX_LIMIT: u32 = 100;

pub const CONFIG: Item<Config> = Item::new("config");
pub const MEMBERS: Map<&Addr, Member> = Map::new("members");
/// Highest credential id issued so far.
pub const CREDENTIAL_COUNT: Item<u64> = Item::new("credential_count");
pub const DUES_COUNT: Item<u64> = Item::new("dues_count");
pub const DUES: Map<u64, DuesPayment> = Map::new("dues");

pub fn validate_config(config: &Config) -> Result<(), ContractError> {
    if config.dues_denom.is_empty() {
        return Err(ContractError::InvalidConfig {
            reason: "dues_denom must not be empty".to_string(),
        });
    }
    Ok(())
}

pub fn next_credential_id(store: &mut dyn Storage) -> StdResult<u64> {
    let id: u64 = CREDENTIAL_COUNT.may_load(store)?.unwrap_or_default() + 1;
    CREDENTIAL_COUNT.save(store, &id)?;
    Ok(id)
}

pub fn append_dues(store: &mut dyn Storage, payment: &DuesPayment) -> StdResult<u64> {
    let id: u64 = DUES_COUNT.may_load(store)?.unwrap_or_default() + 1;
    DUES_COUNT.save(store, &id)?;
    DUES.save(store, id, payment)?;
    Ok(id)
}

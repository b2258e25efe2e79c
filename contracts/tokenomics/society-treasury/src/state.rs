use cosmwasm_std::{StdResult, Storage};
use cw_storage_plus::{Item, Map};
use society_treasury::types::{Config, DepositRecord, ScheduledOperation};

use crate::error::ContractError;

/// Default limit for deposit log pagination.
pub const DEFAULT_LIMIT: u32 = 30;
pub const MAX_LIMIT: u32 = 100;

/// Largest eta in seconds that still fits a nanosecond `Timestamp`.
pub const MAX_ETA_SECONDS: u64 = u64::MAX / 1_000_000_000;

pub const CONFIG: Item<Config> = Item::new("config");
/// The single operation slot. Absent until the first payout is scheduled.
pub const OPERATION: Item<ScheduledOperation> = Item::new("operation");
pub const DEPOSIT_COUNT: Item<u64> = Item::new("deposit_count");
pub const DEPOSITS: Map<u64, DepositRecord> = Map::new("deposits");

pub fn validate_config(config: &Config) -> Result<(), ContractError> {
    if config.denom.is_empty() {
        return Err(ContractError::InvalidConfig {
            reason: "denom must not be empty".to_string(),
        });
    }
    Ok(())
}

pub fn append_deposit(store: &mut dyn Storage, record: &DepositRecord) -> StdResult<u64> {
    let id: u64 = DEPOSIT_COUNT.may_load(store)?.unwrap_or_default() + 1;
    DEPOSIT_COUNT.save(store, &id)?;
    DEPOSITS.save(store, id, record)?;
    Ok(id)
}

use cosmwasm_std::{Addr, StdResult, Storage, Uint64};
use cw_storage_plus::{Item, Map};
use society_governor::identity::ProposalId;
use society_governor::types::{Ballot, Config, Proposal};

use crate::error::ContractError;

/// Default limit for proposal and vote pagination.
pub const DEFAULT_LIMIT: u64 = 30;
pub const MAX_LIMIT: u64 = 100;

pub const CONFIG: Item<Config> = Item::new("config");
/// Proposals keyed by their id bytes.
pub const PROPOSALS: Map<&[u8], Proposal> = Map::new("proposals");
pub const PROPOSAL_COUNT: Item<u64> = Item::new("proposal_count");
/// Submission order index.
pub const PROPOSAL_IDS: Map<u64, ProposalId> = Map::new("proposal_ids");
pub const BALLOTS: Map<(&[u8], &Addr), Ballot> = Map::new("ballots");

pub fn validate_config(config: &Config) -> Result<(), ContractError> {
    if config.voting_period == 0 {
        return Err(ContractError::InvalidConfig {
            reason: "voting_period must be greater than zero".to_string(),
        });
    }
    if config.quorum == 0 {
        return Err(ContractError::InvalidConfig {
            reason: "quorum must be greater than zero".to_string(),
        });
    }
    if config.denom.is_empty() {
        return Err(ContractError::InvalidConfig {
            reason: "denom must not be empty".to_string(),
        });
    }
    Ok(())
}

pub fn advance_proposal_number(store: &mut dyn Storage) -> StdResult<u64> {
    let number: u64 = PROPOSAL_COUNT.may_load(store)?.unwrap_or_default() + 1;
    PROPOSAL_COUNT.save(store, &number)?;
    Ok(number)
}

/// Voting start, voting end and expiration for a proposal submitted at `height`.
pub fn voting_window(height: u64, config: &Config) -> StdResult<(u64, u64, Option<u64>)> {
    let voting_start = Uint64::new(height).checked_add(Uint64::new(config.voting_delay))?;
    let voting_end = voting_start.checked_add(Uint64::new(config.voting_period))?;
    let expiration = config
        .proposal_expiry
        .map(|expiry| voting_end.checked_add(Uint64::new(expiry)))
        .transpose()?;
    Ok((
        voting_start.u64(),
        voting_end.u64(),
        expiration.map(|expiration| expiration.u64()),
    ))
}

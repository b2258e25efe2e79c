use cosmwasm_std::{Addr, Coin, Timestamp, Uint128};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct Config {
    /// The governor is the only address allowed to schedule payouts.
    pub governor: Addr,
    /// Denom held in custody.
    pub denom: String,
}

/// The single scheduled payout slot.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct ScheduledOperation {
    pub recipient: Addr,
    pub amount: Uint128,
    pub note: String,
    /// Earliest block time at which the payout may run.
    pub eta: Timestamp,
    pub executed: bool,
}

impl ScheduledOperation {
    pub fn is_mature(&self, now: Timestamp) -> bool {
        now >= self.eta
    }
}

/// One entry of the append-only deposit log.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct DepositRecord {
    pub depositor: Addr,
    pub amount: Uint128,
    pub note: String,
    pub timestamp: Timestamp,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct CurrentOperationResponse {
    /// `None` until the first payout is scheduled.
    pub operation: Option<ScheduledOperation>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct BalanceResponse {
    pub balance: Coin,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct DepositListResponse {
    pub deposits: Vec<(u64, DepositRecord)>,
}

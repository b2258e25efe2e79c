use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

#[cw_serde]
pub struct InstantiateMsg {
    /// Address of the governor contract.
    pub governor: String,
    pub denom: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Adds the attached funds to custody. Open to anyone.
    Deposit { note: String },
    /// Installs a payout in the single operation slot, replacing whatever
    /// was there. Governor only.
    SchedulePayout {
        recipient: String,
        amount: Uint128,
        /// Unix time in seconds.
        eta: u64,
        note: String,
    },
    /// Runs the scheduled payout once its eta is reached. Open to anyone.
    ExecutePayout {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(crate::types::Config)]
    Config {},

    #[returns(crate::types::CurrentOperationResponse)]
    CurrentOperation {},

    /// Custody balance in the treasury denom.
    #[returns(crate::types::BalanceResponse)]
    Balance {},

    /// Lists the deposit log. If no limit is set a max of 30 records
    /// will be returned.
    #[returns(crate::types::DepositListResponse)]
    ListDeposits {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct MigrateMsg {}

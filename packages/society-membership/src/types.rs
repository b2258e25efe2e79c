use cosmwasm_std::{Addr, Timestamp, Uint128};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct Config {
    /// Admin can mint and revoke membership credentials.
    pub admin: Addr,
    /// Denom accepted for dues payments.
    pub dues_denom: String,
}

/// A membership credential. Credentials have no transfer operation, so
/// they stay bound to the address they were minted for.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct Member {
    pub address: Addr,
    /// Sequential credential id, never reused after a revoke.
    pub credential_id: u64,
    /// Height at which the credential was minted.
    pub since_height: u64,
}

/// One entry of the append-only dues log.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct DuesPayment {
    pub payer: Addr,
    pub amount: Uint128,
    pub note: String,
    pub timestamp: Timestamp,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct IsMemberResponse {
    pub is_member: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct MemberResponse {
    pub member: Option<Member>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct MemberListResponse {
    pub members: Vec<Member>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct DuesListResponse {
    pub dues: Vec<(u64, DuesPayment)>,
}

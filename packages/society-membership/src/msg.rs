use cosmwasm_schema::{cw_serde, QueryResponses};

#[cw_serde]
pub struct InstantiateMsg {
    pub admin: String,
    /// Addresses that hold a credential from the start.
    pub members: Vec<String>,
    pub dues_denom: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Issues a membership credential. Admin only.
    Mint { address: String },
    /// Revokes a membership credential. Admin only.
    Revoke { address: String },
    /// Records a dues payment from a current member.
    PayDues { note: String },
    UpdateAdmin { admin: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(crate::types::Config)]
    Config {},

    /// The membership check consumed by the governor.
    #[returns(crate::types::IsMemberResponse)]
    IsMember { address: String },

    #[returns(crate::types::MemberResponse)]
    Member { address: String },

    /// Lists members ordered by address. If no limit is set a max of
    /// 30 members will be returned.
    #[returns(crate::types::MemberListResponse)]
    ListMembers {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Lists the dues log in payment order.
    #[returns(crate::types::DuesListResponse)]
    ListDues {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct MigrateMsg {}

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::HexBinary;

use crate::identity::ProposalId;
use crate::types::{ProposalAction, Vote};

#[cw_serde]
pub struct InstantiateMsg {
    /// Address of the membership registry.
    pub membership: String,
    /// Native denom of action values.
    pub denom: String,
    /// In blocks.
    pub voting_delay: u64,
    /// In blocks.
    pub voting_period: u64,
    pub quorum: u64,
    /// In blocks, counted from the end of voting.
    pub proposal_expiry: Option<u64>,
    pub admin: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Submits an action bundle. Members only.
    Propose {
        actions: Vec<ProposalAction>,
        description: String,
    },
    /// Casts the sender's single vote on an active proposal.
    CastVote {
        proposal_id: ProposalId,
        support: Vote,
    },
    /// Dispatches the actions of a succeeded proposal. The exact submitted
    /// bundle must be supplied; the proposal is looked up by its hash.
    Execute {
        actions: Vec<ProposalAction>,
        description_hash: HexBinary,
    },
    /// Withdraws a pending or active proposal nobody has voted on yet.
    Cancel { proposal_id: ProposalId },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(crate::types::Config)]
    Config {},

    /// Effective status of a proposal at the current block.
    #[returns(crate::types::ProposalStatus)]
    State { proposal_id: ProposalId },

    #[returns(crate::types::ProposalResponse)]
    Proposal { proposal_id: ProposalId },

    /// Lists proposals in submission order.
    #[returns(crate::types::ProposalListResponse)]
    ListProposals {
        /// The proposal number to start listing proposals after. For
        /// example, if this is set to 2 proposals with numbers 3 and
        /// higher will be returned.
        start_after: Option<u64>,
        /// If no limit is set a max of 30 proposals will be returned.
        limit: Option<u64>,
    },

    #[returns(u64)]
    ProposalCount {},

    /// Computes the id an action bundle has or would have.
    #[returns(crate::identity::ProposalId)]
    HashProposal {
        actions: Vec<ProposalAction>,
        description_hash: HexBinary,
    },

    #[returns(cosmwasm_std::HexBinary)]
    HashDescription { description: String },

    #[returns(crate::types::VoteResponse)]
    GetVote {
        proposal_id: ProposalId,
        voter: String,
    },

    #[returns(crate::types::VoteListResponse)]
    ListVotes {
        proposal_id: ProposalId,
        start_after: Option<String>,
        limit: Option<u64>,
    },
}

#[cw_serde]
pub struct MigrateMsg {}

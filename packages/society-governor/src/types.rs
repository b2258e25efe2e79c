use std::fmt;

use cosmwasm_std::{coins, Addr, Binary, BlockInfo, Uint128, WasmMsg};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::identity::ProposalId;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct Config {
    /// Membership registry answering every membership check.
    pub membership: Addr,
    /// Native denom of the `value` attached to proposal actions.
    pub denom: String,
    /// Blocks between submission and the start of voting.
    pub voting_delay: u64,
    /// Length of the voting window in blocks.
    pub voting_period: u64,
    /// Minimum number of votes (for + against + abstain) for a proposal
    /// to be able to pass.
    pub quorum: u64,
    /// Blocks after the end of voting during which a succeeded proposal
    /// may still be executed. `None` means it never expires.
    pub proposal_expiry: Option<u64>,
    /// Besides the proposer, the admin may cancel proposals nobody voted on.
    pub admin: Option<Addr>,
}

/// One call of an action bundle: the target contract, the native funds
/// sent along with it and the encoded execute message.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct ProposalAction {
    pub target: String,
    pub value: Uint128,
    pub msg: Binary,
}

impl ProposalAction {
    pub fn to_wasm_msg(&self, denom: &str) -> WasmMsg {
        let funds = if self.value.is_zero() {
            vec![]
        } else {
            coins(self.value.u128(), denom)
        };
        WasmMsg::Execute {
            contract_addr: self.target.clone(),
            msg: self.msg.clone(),
            funds,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Vote {
    Against = 0,
    For = 1,
    Abstain = 2,
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vote::Against => write!(f, "against"),
            Vote::For => write!(f, "for"),
            Vote::Abstain => write!(f, "abstain"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema, Default)]
pub struct Votes {
    pub for_votes: u64,
    pub against_votes: u64,
    pub abstain_votes: u64,
}

impl Votes {
    pub fn add_vote(&mut self, vote: Vote, weight: u64) {
        match vote {
            Vote::For => self.for_votes += weight,
            Vote::Against => self.against_votes += weight,
            Vote::Abstain => self.abstain_votes += weight,
        }
    }

    pub fn total(&self) -> u64 {
        self.for_votes + self.against_votes + self.abstain_votes
    }
}

/// A member's recorded vote on a proposal.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct Ballot {
    pub vote: Vote,
    pub weight: u64,
    pub height: u64,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema, Debug, Copy)]
#[serde(rename_all = "snake_case")]
pub enum ProposalStatus {
    /// Submitted, voting has not started yet.
    Pending,
    /// Voting is open.
    Active,
    /// Withdrawn before anyone voted.
    Canceled,
    /// Voting ended without reaching quorum or a majority in favor.
    Defeated,
    /// Voting ended with quorum and more votes for than against.
    Succeeded,
    /// Never reported: actions are dispatched directly on execution.
    Queued,
    /// The actions have been dispatched.
    Executed,
    /// Succeeded, but was not executed in time.
    Expired,
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProposalStatus::Pending => write!(f, "pending"),
            ProposalStatus::Active => write!(f, "active"),
            ProposalStatus::Canceled => write!(f, "canceled"),
            ProposalStatus::Defeated => write!(f, "defeated"),
            ProposalStatus::Succeeded => write!(f, "succeeded"),
            ProposalStatus::Queued => write!(f, "queued"),
            ProposalStatus::Executed => write!(f, "executed"),
            ProposalStatus::Expired => write!(f, "expired"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct Proposal {
    pub id: ProposalId,
    /// Position in submission order, starting at 1.
    pub number: u64,
    pub proposer: Addr,
    pub actions: Vec<ProposalAction>,
    pub description: String,
    pub creation_height: u64,
    /// First block at which votes are accepted.
    pub voting_start: u64,
    /// Last block at which votes are accepted.
    pub voting_end: u64,
    pub quorum: u64,
    /// Last block at which a succeeded proposal may be executed.
    pub expiration: Option<u64>,
    pub votes: Votes,
    /// Only the explicit transitions are stored here (`Pending`,
    /// `Canceled`, `Executed`); use `current_status` for everything else.
    pub status: ProposalStatus,
}

impl Proposal {
    /// Derives the effective status from the stored fields and the block.
    pub fn current_status(&self, block: &BlockInfo) -> ProposalStatus {
        if matches!(
            self.status,
            ProposalStatus::Canceled | ProposalStatus::Executed
        ) {
            return self.status;
        }

        let height = block.height;
        if height < self.voting_start {
            ProposalStatus::Pending
        } else if height <= self.voting_end {
            ProposalStatus::Active
        } else if self.is_passed() {
            match self.expiration {
                Some(expiration) if height > expiration => ProposalStatus::Expired,
                _ => ProposalStatus::Succeeded,
            }
        } else {
            ProposalStatus::Defeated
        }
    }

    pub fn quorum_reached(&self) -> bool {
        self.votes.total() >= self.quorum
    }

    /// Ties do not pass.
    pub fn is_passed(&self) -> bool {
        self.quorum_reached() && self.votes.for_votes > self.votes.against_votes
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct ProposalResponse {
    pub proposal: Proposal,
    /// Effective status at the queried block.
    pub status: ProposalStatus,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct ProposalListResponse {
    pub proposals: Vec<ProposalResponse>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct VoteResponse {
    pub ballot: Option<Ballot>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct VoteInfo {
    pub voter: Addr,
    pub ballot: Ballot,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct VoteListResponse {
    pub votes: Vec<VoteInfo>,
}

use cosmwasm_std::{Addr, StdError};
use society_governor::identity::ProposalId;
use society_governor::types::ProposalStatus;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error(transparent)]
    Std(#[from] StdError),

    // Access
    #[error("Unauthorized")]
    Unauthorized {},

    #[error("{address} is not a member")]
    NotAMember { address: Addr },

    // Proposal lifecycle
    #[error("Proposal is not active (status: {status})")]
    ProposalNotActive { status: ProposalStatus },

    #[error("Proposal has not succeeded (status: {status})")]
    ProposalNotSucceeded { status: ProposalStatus },

    #[error("Proposal can not be canceled (status: {status})")]
    ProposalNotCancelable { status: ProposalStatus },

    #[error("Proposal was already executed")]
    AlreadyExecuted {},

    #[error("Already voted on this proposal")]
    AlreadyVoted {},

    // Identity
    #[error("Proposal {id} already exists")]
    DuplicateProposal { id: ProposalId },

    #[error("Unknown proposal {id}")]
    UnknownProposal { id: ProposalId },

    #[error("Description hash must be 32 bytes")]
    InvalidDescriptionHash {},

    // Input
    #[error("Proposal must contain at least one action")]
    EmptyProposal {},

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },
}

#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, HexBinary, MessageInfo, Order, Response,
    StdResult,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;
use society_governor::identity::{
    description_hash_from_binary, hash_description, hash_proposal, ProposalId,
};
use society_governor::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use society_governor::types::{
    Ballot, Config, Proposal, ProposalAction, ProposalListResponse, ProposalResponse,
    ProposalStatus, Vote, VoteInfo, VoteListResponse, VoteResponse, Votes,
};
use society_membership::MembershipContract;

use crate::error::ContractError;
use crate::state::{
    advance_proposal_number, validate_config, voting_window, BALLOTS, CONFIG, DEFAULT_LIMIT,
    MAX_LIMIT, PROPOSALS, PROPOSAL_COUNT, PROPOSAL_IDS,
};

pub(crate) const CONTRACT_NAME: &str = "crates.io:society-governor";
pub(crate) const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Every verified member votes with the same weight.
const MEMBER_VOTE_WEIGHT: u64 = 1;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        membership: deps.api.addr_validate(&msg.membership)?,
        denom: msg.denom,
        voting_delay: msg.voting_delay,
        voting_period: msg.voting_period,
        quorum: msg.quorum,
        proposal_expiry: msg.proposal_expiry,
        admin: msg
            .admin
            .map(|admin| deps.api.addr_validate(&admin))
            .transpose()?,
    };
    validate_config(&config)?;
    CONFIG.save(deps.storage, &config)?;
    PROPOSAL_COUNT.save(deps.storage, &0)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("membership", config.membership)
        .add_attribute("voting_delay", config.voting_delay.to_string())
        .add_attribute("voting_period", config.voting_period.to_string())
        .add_attribute("quorum", config.quorum.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Propose {
            actions,
            description,
        } => execute_propose(deps, env, info, actions, description),
        ExecuteMsg::CastVote {
            proposal_id,
            support,
        } => execute_cast_vote(deps, env, info, proposal_id, support),
        ExecuteMsg::Execute {
            actions,
            description_hash,
        } => execute_execute(deps, env, info, actions, description_hash),
        ExecuteMsg::Cancel { proposal_id } => execute_cancel(deps, env, info, proposal_id),
    }
}

pub fn execute_propose(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    actions: Vec<ProposalAction>,
    description: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let membership = MembershipContract::new(config.membership.clone());
    if !membership.is_member(&deps.querier, &info.sender)? {
        return Err(ContractError::NotAMember {
            address: info.sender,
        });
    }

    if actions.is_empty() {
        return Err(ContractError::EmptyProposal {});
    }
    for action in &actions {
        deps.api.addr_validate(&action.target)?;
    }

    let id = hash_proposal(&actions, &hash_description(&description));
    if PROPOSALS.has(deps.storage, id.as_slice()) {
        return Err(ContractError::DuplicateProposal { id });
    }

    let (voting_start, voting_end, expiration) = voting_window(env.block.height, &config)?;
    let proposal = Proposal {
        id: id.clone(),
        number: advance_proposal_number(deps.storage)?,
        proposer: info.sender.clone(),
        actions,
        description,
        creation_height: env.block.height,
        voting_start,
        voting_end,
        quorum: config.quorum,
        expiration,
        votes: Votes::default(),
        status: ProposalStatus::Pending,
    };
    PROPOSALS.save(deps.storage, id.as_slice(), &proposal)?;
    PROPOSAL_IDS.save(deps.storage, proposal.number, &id)?;

    Ok(Response::new()
        .set_data(to_json_binary(&id)?)
        .add_attribute("action", "propose")
        .add_attribute("sender", info.sender)
        .add_attribute("proposal_id", id.to_hex())
        .add_attribute("proposal_number", proposal.number.to_string())
        .add_attribute("voting_start", voting_start.to_string())
        .add_attribute("voting_end", voting_end.to_string()))
}

pub fn execute_cast_vote(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    proposal_id: ProposalId,
    support: Vote,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut proposal = load_proposal(deps.as_ref(), &proposal_id)?;

    let status = proposal.current_status(&env.block);
    if status != ProposalStatus::Active {
        return Err(ContractError::ProposalNotActive { status });
    }

    if BALLOTS.has(deps.storage, (proposal_id.as_slice(), &info.sender)) {
        return Err(ContractError::AlreadyVoted {});
    }

    let membership = MembershipContract::new(config.membership);
    if !membership.is_member(&deps.querier, &info.sender)? {
        return Err(ContractError::NotAMember {
            address: info.sender,
        });
    }

    let ballot = Ballot {
        vote: support,
        weight: MEMBER_VOTE_WEIGHT,
        height: env.block.height,
    };
    BALLOTS.save(
        deps.storage,
        (proposal_id.as_slice(), &info.sender),
        &ballot,
    )?;
    proposal.votes.add_vote(support, ballot.weight);
    PROPOSALS.save(deps.storage, proposal_id.as_slice(), &proposal)?;

    Ok(Response::new()
        .add_attribute("action", "vote")
        .add_attribute("sender", info.sender)
        .add_attribute("proposal_id", proposal_id.to_hex())
        .add_attribute("position", support.to_string()))
}

pub fn execute_execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    actions: Vec<ProposalAction>,
    description_hash: HexBinary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let description_hash = description_hash_from_binary(&description_hash)
        .map_err(|_| ContractError::InvalidDescriptionHash {})?;
    let proposal_id = hash_proposal(&actions, &description_hash);
    let mut proposal = load_proposal(deps.as_ref(), &proposal_id)?;

    if proposal.status == ProposalStatus::Executed {
        return Err(ContractError::AlreadyExecuted {});
    }

    let status = proposal.current_status(&env.block);
    if status != ProposalStatus::Succeeded {
        return Err(ContractError::ProposalNotSucceeded { status });
    }

    proposal.status = ProposalStatus::Executed;
    PROPOSALS.save(deps.storage, proposal_id.as_slice(), &proposal)?;

    // Dispatched without replies: a failing action reverts the whole
    // execution, including the status change above.
    let msgs = proposal
        .actions
        .iter()
        .map(|action| action.to_wasm_msg(&config.denom));

    Ok(Response::new()
        .add_messages(msgs)
        .add_attribute("action", "execute")
        .add_attribute("sender", info.sender)
        .add_attribute("proposal_id", proposal_id.to_hex()))
}

pub fn execute_cancel(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    proposal_id: ProposalId,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut proposal = load_proposal(deps.as_ref(), &proposal_id)?;

    let is_admin = config.admin.as_ref() == Some(&info.sender);
    if info.sender != proposal.proposer && !is_admin {
        return Err(ContractError::Unauthorized {});
    }

    let status = proposal.current_status(&env.block);
    let cancelable = matches!(status, ProposalStatus::Pending | ProposalStatus::Active)
        && proposal.votes.total() == 0;
    if !cancelable {
        return Err(ContractError::ProposalNotCancelable { status });
    }

    proposal.status = ProposalStatus::Canceled;
    PROPOSALS.save(deps.storage, proposal_id.as_slice(), &proposal)?;

    Ok(Response::new()
        .add_attribute("action", "cancel")
        .add_attribute("sender", info.sender)
        .add_attribute("proposal_id", proposal_id.to_hex()))
}

fn load_proposal(deps: Deps, proposal_id: &ProposalId) -> Result<Proposal, ContractError> {
    PROPOSALS
        .may_load(deps.storage, proposal_id.as_slice())?
        .ok_or_else(|| ContractError::UnknownProposal {
            id: proposal_id.clone(),
        })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&CONFIG.load(deps.storage)?),
        QueryMsg::State { proposal_id } => to_json_binary(&query_state(deps, env, proposal_id)?),
        QueryMsg::Proposal { proposal_id } => {
            to_json_binary(&query_proposal(deps, env, proposal_id)?)
        }
        QueryMsg::ListProposals { start_after, limit } => {
            to_json_binary(&query_list_proposals(deps, env, start_after, limit)?)
        }
        QueryMsg::ProposalCount {} => to_json_binary(&query_proposal_count(deps)?),
        QueryMsg::HashProposal {
            actions,
            description_hash,
        } => to_json_binary(&query_hash_proposal(actions, description_hash)?),
        QueryMsg::HashDescription { description } => {
            to_json_binary(&HexBinary::from(hash_description(&description)))
        }
        QueryMsg::GetVote { proposal_id, voter } => {
            to_json_binary(&query_vote(deps, proposal_id, voter)?)
        }
        QueryMsg::ListVotes {
            proposal_id,
            start_after,
            limit,
        } => to_json_binary(&query_list_votes(deps, proposal_id, start_after, limit)?),
    }
}

pub fn query_state(deps: Deps, env: Env, proposal_id: ProposalId) -> StdResult<ProposalStatus> {
    let proposal = PROPOSALS.load(deps.storage, proposal_id.as_slice())?;
    Ok(proposal.current_status(&env.block))
}

pub fn query_proposal(
    deps: Deps,
    env: Env,
    proposal_id: ProposalId,
) -> StdResult<ProposalResponse> {
    let proposal = PROPOSALS.load(deps.storage, proposal_id.as_slice())?;
    let status = proposal.current_status(&env.block);
    Ok(ProposalResponse { proposal, status })
}

pub fn query_list_proposals(
    deps: Deps,
    env: Env,
    start_after: Option<u64>,
    limit: Option<u64>,
) -> StdResult<ProposalListResponse> {
    let min = start_after.map(Bound::exclusive);
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;

    let proposals = PROPOSAL_IDS
        .range(deps.storage, min, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (_, id) = item?;
            let proposal = PROPOSALS.load(deps.storage, id.as_slice())?;
            let status = proposal.current_status(&env.block);
            Ok(ProposalResponse { proposal, status })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(ProposalListResponse { proposals })
}

pub fn query_proposal_count(deps: Deps) -> StdResult<u64> {
    Ok(PROPOSAL_COUNT.may_load(deps.storage)?.unwrap_or_default())
}

pub fn query_hash_proposal(
    actions: Vec<ProposalAction>,
    description_hash: HexBinary,
) -> StdResult<ProposalId> {
    let description_hash = description_hash_from_binary(&description_hash)?;
    Ok(hash_proposal(&actions, &description_hash))
}

pub fn query_vote(deps: Deps, proposal_id: ProposalId, voter: String) -> StdResult<VoteResponse> {
    let voter = deps.api.addr_validate(&voter)?;
    let ballot = BALLOTS.may_load(deps.storage, (proposal_id.as_slice(), &voter))?;
    Ok(VoteResponse { ballot })
}

pub fn query_list_votes(
    deps: Deps,
    proposal_id: ProposalId,
    start_after: Option<String>,
    limit: Option<u64>,
) -> StdResult<VoteListResponse> {
    let start_after = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    let min = start_after.as_ref().map(Bound::exclusive);
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;

    let votes = BALLOTS
        .prefix(proposal_id.as_slice())
        .range(deps.storage, min, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(voter, ballot)| VoteInfo { voter, ballot }))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(VoteListResponse { votes })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    // Set contract to version to latest
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::default())
}

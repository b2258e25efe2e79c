#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Order, Response, StdResult,
    Storage,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;
use cw_utils::must_pay;
use society_membership::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use society_membership::types::{
    Config, DuesListResponse, DuesPayment, IsMemberResponse, Member, MemberListResponse,
    MemberResponse,
};

use crate::error::ContractError;
use crate::state::{
    append_dues, next_credential_id, validate_config, CONFIG, DEFAULT_LIMIT, DUES, MAX_LIMIT,
    MEMBERS,
};

pub(crate) const CONTRACT_NAME: &str = "crates.io:society-membership";
pub(crate) const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        admin: deps.api.addr_validate(&msg.admin)?,
        dues_denom: msg.dues_denom,
    };
    validate_config(&config)?;
    CONFIG.save(deps.storage, &config)?;

    for address in msg.members {
        let address = deps.api.addr_validate(&address)?;
        mint(deps.storage, &env, address)?;
    }

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", config.admin))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Mint { address } => execute_mint(deps, env, info, address),
        ExecuteMsg::Revoke { address } => execute_revoke(deps, info, address),
        ExecuteMsg::PayDues { note } => execute_pay_dues(deps, env, info, note),
        ExecuteMsg::UpdateAdmin { admin } => execute_update_admin(deps, info, admin),
    }
}

fn mint(storage: &mut dyn Storage, env: &Env, address: Addr) -> Result<Member, ContractError> {
    if MEMBERS.has(storage, &address) {
        return Err(ContractError::AlreadyMember { address });
    }

    let member = Member {
        address,
        credential_id: next_credential_id(storage)?,
        since_height: env.block.height,
    };
    MEMBERS.save(storage, &member.address, &member)?;
    Ok(member)
}

pub fn execute_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {});
    }

    let address = deps.api.addr_validate(&address)?;
    let member = mint(deps.storage, &env, address)?;

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("sender", info.sender)
        .add_attribute("member", member.address)
        .add_attribute("credential_id", member.credential_id.to_string()))
}

pub fn execute_revoke(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {});
    }

    let address = deps.api.addr_validate(&address)?;
    let member = MEMBERS
        .may_load(deps.storage, &address)?
        .ok_or(ContractError::NotAMember {
            address: address.clone(),
        })?;
    MEMBERS.remove(deps.storage, &address);

    Ok(Response::new()
        .add_attribute("action", "revoke")
        .add_attribute("sender", info.sender)
        .add_attribute("member", address)
        .add_attribute("credential_id", member.credential_id.to_string()))
}

pub fn execute_pay_dues(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    note: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if !MEMBERS.has(deps.storage, &info.sender) {
        return Err(ContractError::NotAMember {
            address: info.sender,
        });
    }

    let amount = must_pay(&info, &config.dues_denom)?;
    let payment = DuesPayment {
        payer: info.sender.clone(),
        amount,
        note,
        timestamp: env.block.time,
    };
    let payment_id = append_dues(deps.storage, &payment)?;

    Ok(Response::new()
        .add_attribute("action", "pay_dues")
        .add_attribute("payment_id", payment_id.to_string())
        .add_attribute("payer", payment.payer)
        .add_attribute("amount", payment.amount)
        .add_attribute("note", payment.note))
}

pub fn execute_update_admin(
    deps: DepsMut,
    info: MessageInfo,
    admin: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {});
    }

    config.admin = deps.api.addr_validate(&admin)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_admin")
        .add_attribute("admin", config.admin))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&CONFIG.load(deps.storage)?),
        QueryMsg::IsMember { address } => to_json_binary(&query_is_member(deps, address)?),
        QueryMsg::Member { address } => to_json_binary(&query_member(deps, address)?),
        QueryMsg::ListMembers { start_after, limit } => {
            to_json_binary(&query_list_members(deps, start_after, limit)?)
        }
        QueryMsg::ListDues { start_after, limit } => {
            to_json_binary(&query_list_dues(deps, start_after, limit)?)
        }
    }
}

pub fn query_is_member(deps: Deps, address: String) -> StdResult<IsMemberResponse> {
    let address = deps.api.addr_validate(&address)?;
    Ok(IsMemberResponse {
        is_member: MEMBERS.has(deps.storage, &address),
    })
}

pub fn query_member(deps: Deps, address: String) -> StdResult<MemberResponse> {
    let address = deps.api.addr_validate(&address)?;
    Ok(MemberResponse {
        member: MEMBERS.may_load(deps.storage, &address)?,
    })
}

pub fn query_list_members(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<MemberListResponse> {
    let start_after = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    let min = start_after.as_ref().map(Bound::exclusive);
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;

    let members = MEMBERS
        .range(deps.storage, min, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, member)| member))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(MemberListResponse { members })
}

pub fn query_list_dues(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<DuesListResponse> {
    let min = start_after.map(Bound::exclusive);
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let dues = DUES
        .range(deps.storage, min, None, Order::Ascending)
        .take(limit)
        .collect::<StdResult<Vec<_>>>()?;

    Ok(DuesListResponse { dues })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    // Set contract to version to latest
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::default())
}

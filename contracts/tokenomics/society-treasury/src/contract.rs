#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    coins, to_json_binary, BankMsg, Binary, Deps, DepsMut, Env, Event, MessageInfo, Order,
    Response, StdResult, Timestamp, Uint128,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;
use cw_utils::must_pay;
use society_treasury::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use society_treasury::types::{
    BalanceResponse, Config, CurrentOperationResponse, DepositListResponse, DepositRecord,
    ScheduledOperation,
};

use crate::error::ContractError;
use crate::state::{
    append_deposit, validate_config, CONFIG, DEFAULT_LIMIT, DEPOSITS, MAX_ETA_SECONDS, MAX_LIMIT,
    OPERATION,
};

pub(crate) const CONTRACT_NAME: &str = "crates.io:society-treasury";
pub(crate) const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

//--------------------------------------------------------------------------------------------------
// Instantiation
//--------------------------------------------------------------------------------------------------

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        governor: deps.api.addr_validate(&msg.governor)?,
        denom: msg.denom,
    };
    validate_config(&config)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("governor", config.governor)
        .add_attribute("denom", config.denom))
}

//--------------------------------------------------------------------------------------------------
// Executions
//--------------------------------------------------------------------------------------------------

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // permissionless
        ExecuteMsg::Deposit { note } => execute_deposit(deps, env, info, note),
        // permissioned - governor
        ExecuteMsg::SchedulePayout {
            recipient,
            amount,
            eta,
            note,
        } => execute_schedule_payout(deps, env, info, recipient, amount, eta, note),
        // permissionless
        ExecuteMsg::ExecutePayout {} => execute_execute_payout(deps, env, info),
    }
}

pub fn execute_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    note: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let amount = must_pay(&info, &config.denom)?;

    let record = DepositRecord {
        depositor: info.sender.clone(),
        amount,
        note,
        timestamp: env.block.time,
    };
    let deposit_id = append_deposit(deps.storage, &record)?;

    Ok(Response::new()
        .add_event(
            Event::new("deposit")
                .add_attribute("deposit_id", deposit_id.to_string())
                .add_attribute("depositor", record.depositor)
                .add_attribute("amount", record.amount)
                .add_attribute("note", record.note)
                .add_attribute("timestamp", record.timestamp.seconds().to_string()),
        )
        .add_attribute("action", "deposit")
        .add_attribute("sender", info.sender))
}

pub fn execute_schedule_payout(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
    eta: u64,
    note: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if info.sender != config.governor {
        return Err(ContractError::Unauthorized {});
    }

    if eta > MAX_ETA_SECONDS {
        return Err(ContractError::InvalidEta {
            eta,
            max: MAX_ETA_SECONDS,
        });
    }
    let eta = Timestamp::from_seconds(eta);
    if eta <= env.block.time {
        return Err(ContractError::EtaInPast {
            eta,
            now: env.block.time,
        });
    }

    let operation = ScheduledOperation {
        recipient: deps.api.addr_validate(&recipient)?,
        amount,
        note,
        eta,
        executed: false,
    };

    let mut response = Response::new();

    // There is exactly one slot: an unexecuted payout is replaced, and the
    // replacement is reported so it can't go unnoticed.
    if let Some(previous) = OPERATION.may_load(deps.storage)? {
        if !previous.executed {
            response = response.add_event(
                Event::new("payout_overwritten")
                    .add_attribute("recipient", previous.recipient)
                    .add_attribute("amount", previous.amount)
                    .add_attribute("eta", previous.eta.seconds().to_string())
                    .add_attribute("note", previous.note),
            );
        }
    }

    OPERATION.save(deps.storage, &operation)?;

    Ok(response
        .add_attribute("action", "schedule_payout")
        .add_attribute("sender", info.sender)
        .add_attribute("recipient", operation.recipient)
        .add_attribute("amount", operation.amount)
        .add_attribute("eta", operation.eta.seconds().to_string()))
}

pub fn execute_execute_payout(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let mut operation = OPERATION
        .may_load(deps.storage)?
        .ok_or(ContractError::NoScheduledOperation {})?;

    if !operation.is_mature(env.block.time) {
        return Err(ContractError::TooEarly {
            eta: operation.eta,
            now: env.block.time,
        });
    }

    if operation.executed {
        return Err(ContractError::AlreadyExecuted {});
    }

    let balance = deps
        .querier
        .query_balance(env.contract.address, config.denom.clone())?;
    if balance.amount < operation.amount {
        return Err(ContractError::InsufficientBalance {
            balance: balance.amount,
            amount: operation.amount,
        });
    }

    operation.executed = true;
    OPERATION.save(deps.storage, &operation)?;

    Ok(Response::new()
        .add_message(BankMsg::Send {
            to_address: operation.recipient.to_string(),
            amount: coins(operation.amount.u128(), config.denom),
        })
        .add_attribute("action", "execute_payout")
        .add_attribute("sender", info.sender)
        .add_attribute("recipient", operation.recipient)
        .add_attribute("amount", operation.amount))
}

//--------------------------------------------------------------------------------------------------
// Queries
//--------------------------------------------------------------------------------------------------

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&CONFIG.load(deps.storage)?),
        QueryMsg::CurrentOperation {} => to_json_binary(&query_current_operation(deps)?),
        QueryMsg::Balance {} => to_json_binary(&query_balance(deps, env)?),
        QueryMsg::ListDeposits { start_after, limit } => {
            to_json_binary(&query_list_deposits(deps, start_after, limit)?)
        }
    }
}

pub fn query_current_operation(deps: Deps) -> StdResult<CurrentOperationResponse> {
    Ok(CurrentOperationResponse {
        operation: OPERATION.may_load(deps.storage)?,
    })
}

pub fn query_balance(deps: Deps, env: Env) -> StdResult<BalanceResponse> {
    let config = CONFIG.load(deps.storage)?;
    let balance = deps
        .querier
        .query_balance(env.contract.address, config.denom)?;
    Ok(BalanceResponse { balance })
}

pub fn query_list_deposits(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<DepositListResponse> {
    let min = start_after.map(Bound::exclusive);
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let deposits = DEPOSITS
        .range(deps.storage, min, None, Order::Ascending)
        .take(limit)
        .collect::<StdResult<Vec<_>>>()?;

    Ok(DepositListResponse { deposits })
}

//--------------------------------------------------------------------------------------------------
// Migration
//--------------------------------------------------------------------------------------------------

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    // Set contract to version to latest
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::default())
}

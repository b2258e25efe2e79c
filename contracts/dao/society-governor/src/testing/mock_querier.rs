use std::marker::PhantomData;

use cosmwasm_std::{
    from_json,
    testing::{MockApi, MockQuerier, MockStorage},
    to_json_binary, Addr, ContractResult, Empty, OwnedDeps, Querier, QuerierResult, QueryRequest,
    SystemError, SystemResult, WasmQuery,
};
use society_membership::msg::QueryMsg as MembershipQuery;
use society_membership::types::IsMemberResponse;

pub const MOCK_MEMBERSHIP_CONTRACT: &str = "membership";

pub fn mock_dependencies() -> OwnedDeps<MockStorage, MockApi, WasmMockQuerier> {
    let api = MockApi::default();
    let custom_querier = WasmMockQuerier::new(
        MockQuerier::new(&[]),
        api.addr_make(MOCK_MEMBERSHIP_CONTRACT),
    );

    OwnedDeps {
        storage: MockStorage::default(),
        api,
        querier: custom_querier,
        custom_query_type: PhantomData,
    }
}

/// Answers `IsMember` for the mock membership contract from a plain list.
pub struct WasmMockQuerier {
    base: MockQuerier,
    membership: Addr,
    members: Vec<Addr>,
}

impl Querier for WasmMockQuerier {
    fn raw_query(&self, bin_request: &[u8]) -> QuerierResult {
        let request: QueryRequest<Empty> = match from_json(bin_request) {
            Ok(v) => v,
            Err(e) => {
                return QuerierResult::Err(SystemError::InvalidRequest {
                    error: format!("Parsing query request: {}", e),
                    request: bin_request.into(),
                });
            }
        };
        self.handle_query(&request)
    }
}

impl WasmMockQuerier {
    pub fn handle_query(&self, request: &QueryRequest<Empty>) -> QuerierResult {
        match &request {
            QueryRequest::Wasm(WasmQuery::Smart { contract_addr, msg }) => {
                if *contract_addr != self.membership.as_str() {
                    return SystemResult::Err(SystemError::NoSuchContract {
                        addr: contract_addr.to_string(),
                    });
                }
                let query: MembershipQuery = from_json(msg).unwrap();
                match query {
                    MembershipQuery::IsMember { address } => {
                        let is_member = self.members.iter().any(|m| m.as_str() == address);
                        SystemResult::Ok(ContractResult::from(to_json_binary(
                            &IsMemberResponse { is_member },
                        )))
                    }
                    _ => SystemResult::Err(SystemError::UnsupportedRequest {
                        kind: "membership query".to_string(),
                    }),
                }
            }
            _ => self.base.handle_query(request),
        }
    }

    pub fn membership(&self) -> &Addr {
        &self.membership
    }

    pub fn add_member(&mut self, member: &Addr) {
        self.members.push(member.clone());
    }

    pub fn remove_member(&mut self, member: &Addr) {
        self.members.retain(|m| m != member);
    }
}

impl WasmMockQuerier {
    pub fn new(base: MockQuerier, membership: Addr) -> Self {
        WasmMockQuerier {
            base,
            membership,
            members: vec![],
        }
    }
}

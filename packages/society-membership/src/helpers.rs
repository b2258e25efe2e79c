use cosmwasm_std::{Addr, QuerierWrapper, StdResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::msg::QueryMsg;
use crate::types::IsMemberResponse;

/// Handle to a membership registry contract.
///
/// Every call goes to the registry; answers are never cached, so a
/// revoke takes effect on the very next check.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct MembershipContract(pub Addr);

impl MembershipContract {
    pub fn new(addr: Addr) -> Self {
        MembershipContract(addr)
    }

    pub fn is_member(&self, querier: &QuerierWrapper, address: &Addr) -> StdResult<bool> {
        let res: IsMemberResponse = querier.query_wasm_smart(
            self.0.to_string(),
            &QueryMsg::IsMember {
                address: address.to_string(),
            },
        )?;
        Ok(res.is_member)
    }
}

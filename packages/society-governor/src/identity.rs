use std::fmt;

use cosmwasm_std::{HexBinary, StdError, StdResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::types::ProposalAction;

/// Length in bytes of both a proposal id and a description hash.
pub const DIGEST_LENGTH: usize = 32;

/// Identifier of a proposal, derived only from the proposed actions and
/// the description hash. It can be computed before the proposal is
/// submitted and is the sole lookup key for it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct ProposalId(HexBinary);

impl ProposalId {
    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl From<[u8; DIGEST_LENGTH]> for ProposalId {
    fn from(digest: [u8; DIGEST_LENGTH]) -> Self {
        ProposalId(HexBinary::from(digest))
    }
}

impl fmt::Display for ProposalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

/// SHA-256 of the free-text description.
pub fn hash_description(description: &str) -> [u8; DIGEST_LENGTH] {
    Sha256::digest(description.as_bytes()).into()
}

/// Converts a caller supplied description hash into a fixed size digest.
pub fn description_hash_from_binary(hash: &HexBinary) -> StdResult<[u8; DIGEST_LENGTH]> {
    hash.to_array().map_err(|_| {
        StdError::generic_err(format!(
            "description hash must be {} bytes, got {}",
            DIGEST_LENGTH,
            hash.len()
        ))
    })
}

/// Computes the proposal id of an action bundle.
///
/// The encoding is ordered and length-prefixed: reordering the actions,
/// changing any field, or moving bytes between a target and its call all
/// produce a different id.
pub fn hash_proposal(
    actions: &[ProposalAction],
    description_hash: &[u8; DIGEST_LENGTH],
) -> ProposalId {
    let mut hasher = Sha256::new();
    hasher.update((actions.len() as u64).to_be_bytes());
    for action in actions {
        update_prefixed(&mut hasher, action.target.as_bytes());
        hasher.update(action.value.u128().to_be_bytes());
        update_prefixed(&mut hasher, action.msg.as_slice());
    }
    hasher.update(description_hash);
    let digest: [u8; DIGEST_LENGTH] = hasher.finalize().into();
    ProposalId::from(digest)
}

fn update_prefixed(hasher: &mut Sha256, bytes: &[u8]) {
    hasher.update((bytes.len() as u64).to_be_bytes());
    hasher.update(bytes);
}

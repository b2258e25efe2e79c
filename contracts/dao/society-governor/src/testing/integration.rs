use cosmwasm_std::{coins, to_json_binary, Addr, Empty, HexBinary, Uint128};
use cw_multi_test::{App, AppResponse, BankSudo, Contract, ContractWrapper, Executor, SudoMsg};
use society_governor::identity::{hash_description, hash_proposal, ProposalId};
use society_governor::msg::{
    ExecuteMsg as GovernorExecuteMsg, InstantiateMsg as GovernorInstantiateMsg,
    QueryMsg as GovernorQueryMsg,
};
use society_governor::types::{ProposalAction, ProposalStatus, Vote};
use society_membership::msg::{
    ExecuteMsg as MembershipExecuteMsg, InstantiateMsg as MembershipInstantiateMsg,
};
use society_treasury::msg::{
    ExecuteMsg as TreasuryExecuteMsg, InstantiateMsg as TreasuryInstantiateMsg,
    QueryMsg as TreasuryQueryMsg,
};
use society_treasury::types::CurrentOperationResponse;
use society_treasury_contract::ContractError as TreasuryError;

use crate::ContractError;

const DENOM: &str = "usoc";
const TREASURY_FUNDS: u128 = 1_000_000;
const PAYOUT: u128 = 50_000;
const SECONDS_PER_BLOCK: u64 = 5;

fn membership_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        society_membership_contract::contract::execute,
        society_membership_contract::contract::instantiate,
        society_membership_contract::contract::query,
    );
    Box::new(contract)
}

fn governor_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        crate::contract::execute,
        crate::contract::instantiate,
        crate::contract::query,
    );
    Box::new(contract)
}

fn treasury_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        society_treasury_contract::contract::execute,
        society_treasury_contract::contract::instantiate,
        society_treasury_contract::contract::query,
    );
    Box::new(contract)
}

struct Suite {
    app: App,
    admin: Addr,
    alice: Addr,
    bob: Addr,
    carol: Addr,
    builder: Addr,
    membership: Addr,
    governor: Addr,
    treasury: Addr,
}

impl Suite {
    fn new() -> Self {
        let mut app = App::default();
        let admin = app.api().addr_make("admin");
        let alice = app.api().addr_make("alice");
        let bob = app.api().addr_make("bob");
        let carol = app.api().addr_make("carol");
        let builder = app.api().addr_make("builder");

        let membership_id = app.store_code(membership_contract());
        let governor_id = app.store_code(governor_contract());
        let treasury_id = app.store_code(treasury_contract());

        let membership = app
            .instantiate_contract(
                membership_id,
                admin.clone(),
                &MembershipInstantiateMsg {
                    admin: admin.to_string(),
                    members: vec![alice.to_string(), bob.to_string(), carol.to_string()],
                    dues_denom: DENOM.to_string(),
                },
                &[],
                "membership",
                None,
            )
            .unwrap();

        let governor = app
            .instantiate_contract(
                governor_id,
                admin.clone(),
                &GovernorInstantiateMsg {
                    membership: membership.to_string(),
                    denom: DENOM.to_string(),
                    voting_delay: 1,
                    voting_period: 5,
                    quorum: 2,
                    proposal_expiry: None,
                    admin: Some(admin.to_string()),
                },
                &[],
                "governor",
                None,
            )
            .unwrap();

        let treasury = app
            .instantiate_contract(
                treasury_id,
                admin.clone(),
                &TreasuryInstantiateMsg {
                    governor: governor.to_string(),
                    denom: DENOM.to_string(),
                },
                &[],
                "treasury",
                None,
            )
            .unwrap();

        app.sudo(SudoMsg::Bank(BankSudo::Mint {
            to_address: alice.to_string(),
            amount: coins(TREASURY_FUNDS, DENOM),
        }))
        .unwrap();
        app.execute_contract(
            alice.clone(),
            treasury.clone(),
            &TreasuryExecuteMsg::Deposit {
                note: "seed".to_string(),
            },
            &coins(TREASURY_FUNDS, DENOM),
        )
        .unwrap();

        Suite {
            app,
            admin,
            alice,
            bob,
            carol,
            builder,
            membership,
            governor,
            treasury,
        }
    }

    fn now(&self) -> u64 {
        self.app.block_info().time.seconds()
    }

    fn advance_blocks(&mut self, blocks: u64) {
        self.app.update_block(|block| {
            block.height += blocks;
            block.time = block.time.plus_seconds(blocks * SECONDS_PER_BLOCK);
        });
    }

    fn advance_seconds(&mut self, seconds: u64) {
        self.app.update_block(|block| {
            block.time = block.time.plus_seconds(seconds);
        });
    }

    fn payout_actions(&self, recipient: &Addr, amount: u128, eta: u64) -> Vec<ProposalAction> {
        vec![ProposalAction {
            target: self.treasury.to_string(),
            value: Uint128::zero(),
            msg: to_json_binary(&TreasuryExecuteMsg::SchedulePayout {
                recipient: recipient.to_string(),
                amount: Uint128::new(amount),
                eta,
                note: "Grant".to_string(),
            })
            .unwrap(),
        }]
    }

    fn propose(
        &mut self,
        proposer: &Addr,
        actions: &[ProposalAction],
        description: &str,
    ) -> anyhow::Result<ProposalId> {
        self.app.execute_contract(
            proposer.clone(),
            self.governor.clone(),
            &GovernorExecuteMsg::Propose {
                actions: actions.to_vec(),
                description: description.to_string(),
            },
            &[],
        )?;
        Ok(hash_proposal(actions, &hash_description(description)))
    }

    fn vote(
        &mut self,
        voter: &Addr,
        proposal_id: &ProposalId,
        support: Vote,
    ) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            voter.clone(),
            self.governor.clone(),
            &GovernorExecuteMsg::CastVote {
                proposal_id: proposal_id.clone(),
                support,
            },
            &[],
        )
    }

    fn execute(
        &mut self,
        actions: &[ProposalAction],
        description: &str,
    ) -> anyhow::Result<AppResponse> {
        let anyone = self.app.api().addr_make("anyone");
        self.app.execute_contract(
            anyone,
            self.governor.clone(),
            &GovernorExecuteMsg::Execute {
                actions: actions.to_vec(),
                description_hash: HexBinary::from(hash_description(description)),
            },
            &[],
        )
    }

    fn execute_payout(&mut self) -> anyhow::Result<AppResponse> {
        let anyone = self.app.api().addr_make("anyone");
        self.app.execute_contract(
            anyone,
            self.treasury.clone(),
            &TreasuryExecuteMsg::ExecutePayout {},
            &[],
        )
    }

    fn state(&self, proposal_id: &ProposalId) -> ProposalStatus {
        self.app
            .wrap()
            .query_wasm_smart(
                &self.governor,
                &GovernorQueryMsg::State {
                    proposal_id: proposal_id.clone(),
                },
            )
            .unwrap()
    }

    fn current_operation(&self) -> CurrentOperationResponse {
        self.app
            .wrap()
            .query_wasm_smart(&self.treasury, &TreasuryQueryMsg::CurrentOperation {})
            .unwrap()
    }

    fn balance(&self, address: &Addr) -> u128 {
        self.app
            .wrap()
            .query_balance(address, DENOM)
            .unwrap()
            .amount
            .u128()
    }

    /// Runs a payout proposal through voting until it has succeeded.
    fn pass(&mut self, actions: &[ProposalAction], description: &str) -> ProposalId {
        let proposer = self.alice.clone();
        let id = self.propose(&proposer, actions, description).unwrap();
        self.advance_blocks(1);
        let (alice, bob) = (self.alice.clone(), self.bob.clone());
        self.vote(&alice, &id, Vote::For).unwrap();
        self.vote(&bob, &id, Vote::For).unwrap();
        self.advance_blocks(6);
        assert_eq!(self.state(&id), ProposalStatus::Succeeded);
        id
    }
}

#[test]
fn test_scheduled_payout_flow() {
    let mut suite = Suite::new();
    let eta = suite.now() + 100;
    let builder = suite.builder.clone();
    let actions = suite.payout_actions(&builder, PAYOUT, eta);

    let id = suite.pass(&actions, "Pay the builder");
    assert!(suite.current_operation().operation.is_none());

    suite.execute(&actions, "Pay the builder").unwrap();
    assert_eq!(suite.state(&id), ProposalStatus::Executed);

    let operation = suite.current_operation().operation.unwrap();
    assert_eq!(operation.recipient, suite.builder);
    assert_eq!(operation.amount, Uint128::new(PAYOUT));
    assert!(!operation.executed);

    let err = suite.execute_payout().unwrap_err();
    assert!(matches!(
        err.downcast::<TreasuryError>().unwrap(),
        TreasuryError::TooEarly { .. }
    ));

    let now = suite.now();
    suite.advance_seconds(eta - now);
    suite.execute_payout().unwrap();

    assert_eq!(suite.balance(&suite.treasury), TREASURY_FUNDS - PAYOUT);
    assert_eq!(suite.balance(&suite.builder), PAYOUT);
    assert!(suite.current_operation().operation.unwrap().executed);

    let err = suite.execute(&actions, "Pay the builder").unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::AlreadyExecuted {}
    );
}

#[test]
fn test_non_member_cannot_propose() {
    let mut suite = Suite::new();
    let outsider = suite.app.api().addr_make("outsider");
    let eta = suite.now() + 100;
    let actions = suite.payout_actions(&outsider, PAYOUT, eta);

    let err = suite
        .propose(&outsider, &actions, "Pay me")
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::NotAMember { address: outsider }
    );

    let count: u64 = suite
        .app
        .wrap()
        .query_wasm_smart(&suite.governor, &GovernorQueryMsg::ProposalCount {})
        .unwrap();
    assert_eq!(count, 0);
    assert!(suite.current_operation().operation.is_none());
    assert_eq!(suite.balance(&suite.treasury), TREASURY_FUNDS);
}

#[test]
fn test_tied_vote_is_defeated() {
    let mut suite = Suite::new();
    let eta = suite.now() + 100;
    let builder = suite.builder.clone();
    let actions = suite.payout_actions(&builder, PAYOUT, eta);
    let alice = suite.alice.clone();
    let bob = suite.bob.clone();

    let id = suite.propose(&alice, &actions, "Contested grant").unwrap();
    suite.advance_blocks(1);
    suite.vote(&alice, &id, Vote::For).unwrap();
    suite.vote(&bob, &id, Vote::Against).unwrap();
    suite.advance_blocks(6);
    assert_eq!(suite.state(&id), ProposalStatus::Defeated);

    let err = suite.execute(&actions, "Contested grant").unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::ProposalNotSucceeded {
            status: ProposalStatus::Defeated
        }
    );
    assert!(suite.current_operation().operation.is_none());
}

#[test]
fn test_failed_action_reverts_execution() {
    let mut suite = Suite::new();
    // Voting takes longer than this, so the treasury rejects the eta.
    let eta = suite.now() + 10;
    let builder = suite.builder.clone();
    let actions = suite.payout_actions(&builder, PAYOUT, eta);

    let id = suite.pass(&actions, "Late grant");
    let err = suite.execute(&actions, "Late grant").unwrap_err();
    assert!(matches!(
        err.root_cause().downcast_ref::<TreasuryError>(),
        Some(TreasuryError::EtaInPast { .. })
    ));

    assert_eq!(suite.state(&id), ProposalStatus::Succeeded);
    assert!(suite.current_operation().operation.is_none());
}

#[test]
fn test_second_payout_overwrites_first() {
    let mut suite = Suite::new();
    let carol = suite.carol.clone();
    let builder = suite.builder.clone();
    let eta = suite.now() + 1_000;
    let first = suite.payout_actions(&builder, PAYOUT, eta);
    let second = suite.payout_actions(&carol, 20_000, eta + 10);

    suite.pass(&first, "First grant");
    suite.execute(&first, "First grant").unwrap();

    suite.pass(&second, "Second grant");
    let res = suite.execute(&second, "Second grant").unwrap();
    let overwritten = res
        .events
        .iter()
        .find(|event| event.ty == "wasm-payout_overwritten")
        .unwrap();
    assert!(overwritten
        .attributes
        .iter()
        .any(|attr| attr.key == "recipient" && attr.value == builder.to_string()));

    // Only the second payout is left to run.
    let now = suite.now();
    suite.advance_seconds(eta + 10 - now);
    suite.execute_payout().unwrap();
    assert_eq!(suite.balance(&carol), 20_000);
    assert_eq!(suite.balance(&builder), 0);

    let err = suite.execute_payout().unwrap_err();
    assert_eq!(
        err.downcast::<TreasuryError>().unwrap(),
        TreasuryError::AlreadyExecuted {}
    );
}

#[test]
fn test_revoked_member_cannot_vote() {
    let mut suite = Suite::new();
    let eta = suite.now() + 100;
    let builder = suite.builder.clone();
    let actions = suite.payout_actions(&builder, PAYOUT, eta);
    let (admin, alice, carol) = (suite.admin.clone(), suite.alice.clone(), suite.carol.clone());

    let id = suite.propose(&alice, &actions, "Grant").unwrap();
    suite.advance_blocks(1);

    let membership = suite.membership.clone();
    suite
        .app
        .execute_contract(
            admin,
            membership,
            &MembershipExecuteMsg::Revoke {
                address: carol.to_string(),
            },
            &[],
        )
        .unwrap();

    let err = suite.vote(&carol, &id, Vote::For).unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::NotAMember { address: carol }
    );
}

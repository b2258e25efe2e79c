pub mod helpers;
pub mod msg;
pub mod types;

pub use helpers::MembershipContract;

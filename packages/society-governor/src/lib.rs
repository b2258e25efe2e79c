pub mod identity;
pub mod msg;
pub mod types;

pub mod msg;
pub mod types;

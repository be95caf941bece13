pub mod contractors;
pub mod permits;

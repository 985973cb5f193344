pub mod clipboard;
pub mod cli;
pub mod config;
pub mod errors;
pub mod gateway;
pub mod generator;
pub mod session;
pub mod store;
pub mod version_check;

#[cfg(feature = "audit-log")]
pub mod audit;

#[cfg(feature = "keyring-store")]
pub mod keyring;

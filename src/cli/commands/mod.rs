//! One module per subcommand.

pub mod add;
pub mod completions;
pub mod delete;
pub mod edit;
pub mod generate;
pub mod get;
pub mod list;
pub mod login;
pub mod logout;
pub mod status;
pub mod version;

#[cfg(feature = "audit-log")]
pub mod audit_cmd;

pub mod initialize_registry;
pub mod link_account;
pub mod create_delegation;
pub mod execute_migration;
pub mod pause_automation;
pub mod revoke_delegation;
pub mod get_config;
pub mod get_stats;

pub use initialize_registry::*;
pub use link_account::*;
pub use create_delegation::*;
pub use execute_migration::*;
pub use pause_automation::*;
pub use revoke_delegation::*;
pub use get_config::*;
pub use get_stats::*;

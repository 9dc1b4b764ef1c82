//! # Config Commands
//!
//! Read-only access to the store configuration.

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current application configuration.
///
/// ## When Used
/// - Shell startup (banner and footer)
/// - Currency formatting
/// - The `config` shell command
///
/// ## Returns
/// Complete configuration state. The admin password is never serialized.
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

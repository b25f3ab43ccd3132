//! # Config Commands
//!
//! Commands for retrieving terminal configuration.

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current terminal configuration.
///
/// ## When Used
/// - Session startup (to pick the renderer)
/// - The `:config` line, to show what was loaded
///
/// ## Returns
/// Complete configuration state (read-only)
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_returns_copy() {
        let config = ConfigState {
            max_digits: 9,
            ..ConfigState::default()
        };
        assert_eq!(get_config(&config), config);
    }
}

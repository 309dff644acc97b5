//! Output configuration types

use crate::identity::{IdentityResolver, NumericIdentities, SystemIdentities};

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Print numeric uid/gid instead of user and group names.
    pub numeric_ids: bool,
}

impl OutputConfig {
    /// Build the identity resolver this configuration asks for.
    pub fn identity_resolver(&self) -> Box<dyn IdentityResolver> {
        if self.numeric_ids {
            Box::new(NumericIdentities)
        } else {
            Box::new(SystemIdentities::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_ids_resolver() {
        let config = OutputConfig { numeric_ids: true };
        let ids = config.identity_resolver();
        assert_eq!(ids.user_name(0), "0");
        assert_eq!(ids.group_name(42), "42");
    }

    #[test]
    fn test_default_resolves_names() {
        let ids = OutputConfig::default().identity_resolver();
        assert_eq!(ids.user_name(0), "root");
    }
}

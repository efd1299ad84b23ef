//! Site-wide two-factor requirement setting.

use serde::{Deserialize, Serialize};

/// Settings-store key under which the requirement is persisted.
pub const SETTING_KEY: &str = "2fa";

/// How strictly second-factor enrollment is enforced, site-wide.
///
/// The value is configurable by an administrator at runtime and may
/// change between requests without a restart. The gate reads it once
/// per request and uses that single value for the whole decision; no
/// cross-request consistency is required.
///
/// # Storage Shape
///
/// Persisted as an integer under [`SETTING_KEY`]: `0` disabled, `1`
/// administrators only, `2` everyone. Unknown or missing values decode
/// as [`Disabled`](Self::Disabled) so the read path stays total.
///
/// # Example
///
/// ```
/// use moray_guard::TwoFactorRequirement;
///
/// assert_eq!(TwoFactorRequirement::from_setting(Some(2)), TwoFactorRequirement::Everyone);
/// assert_eq!(TwoFactorRequirement::from_setting(None), TwoFactorRequirement::Disabled);
/// assert_eq!(TwoFactorRequirement::from_setting(Some(99)), TwoFactorRequirement::Disabled);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwoFactorRequirement {
    /// No enforcement. The default.
    #[default]
    Disabled,
    /// Only root administrators are gated.
    AdminsOnly,
    /// Every authenticated user is gated until enrolled.
    Everyone,
}

impl TwoFactorRequirement {
    /// Decodes the stored setting value.
    #[must_use]
    pub fn from_setting(value: Option<i64>) -> Self {
        match value {
            Some(1) => Self::AdminsOnly,
            Some(2) => Self::Everyone,
            _ => Self::Disabled,
        }
    }

    /// Encodes this requirement for the settings store.
    #[must_use]
    pub fn as_setting(self) -> i64 {
        match self {
            Self::Disabled => 0,
            Self::AdminsOnly => 1,
            Self::Everyone => 2,
        }
    }
}

impl std::fmt::Display for TwoFactorRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Disabled => "disabled",
            Self::AdminsOnly => "admins-only",
            Self::Everyone => "everyone",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_disabled() {
        assert_eq!(TwoFactorRequirement::default(), TwoFactorRequirement::Disabled);
    }

    #[test]
    fn setting_codec_round_trips() {
        for requirement in [
            TwoFactorRequirement::Disabled,
            TwoFactorRequirement::AdminsOnly,
            TwoFactorRequirement::Everyone,
        ] {
            assert_eq!(
                TwoFactorRequirement::from_setting(Some(requirement.as_setting())),
                requirement
            );
        }
    }

    #[test]
    fn unknown_values_decode_as_disabled() {
        assert_eq!(
            TwoFactorRequirement::from_setting(Some(-1)),
            TwoFactorRequirement::Disabled
        );
        assert_eq!(
            TwoFactorRequirement::from_setting(Some(3)),
            TwoFactorRequirement::Disabled
        );
        assert_eq!(
            TwoFactorRequirement::from_setting(None),
            TwoFactorRequirement::Disabled
        );
    }

    #[test]
    fn serde_uses_snake_case_names() {
        assert_eq!(
            serde_json::to_string(&TwoFactorRequirement::AdminsOnly).expect("serialize"),
            r#""admins_only""#
        );
    }
}

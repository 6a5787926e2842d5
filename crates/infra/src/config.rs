//! Warranty policy configuration.
//!
//! The policy is read from a JSON document. Missing fields fall back to the
//! defaults; decimal fields may be given as strings (`"0.2"`) or numbers.
//!
//! ```json
//! { "premium_threshold": "500000", "premium_rate": "0.2", "premium_days": 200 }
//! ```

use std::path::Path;

use anyhow::{Context, Result};

use warrantyerp_warranty::WarrantyPolicy;

/// Environment variable naming the policy file.
pub const POLICY_FILE_ENV: &str = "WARRANTY_POLICY_FILE";

pub struct PolicyConfig;

impl PolicyConfig {
    /// Load from `$WARRANTY_POLICY_FILE`, or the default policy when unset.
    pub fn from_env() -> Result<WarrantyPolicy> {
        match std::env::var_os(POLICY_FILE_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => {
                tracing::info!("{POLICY_FILE_ENV} not set; using default warranty policy");
                Ok(WarrantyPolicy::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<WarrantyPolicy> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read warranty policy {}", path.display()))?;
        Self::from_json_str(&raw)
            .with_context(|| format!("invalid warranty policy in {}", path.display()))
    }

    pub fn from_json_str(raw: &str) -> Result<WarrantyPolicy> {
        let policy: WarrantyPolicy =
            serde_json::from_str(raw).context("failed to parse warranty policy JSON")?;
        policy.validate()?;
        Ok(policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_document_is_the_default_policy() {
        let policy = PolicyConfig::from_json_str("{}").unwrap();
        assert_eq!(policy, WarrantyPolicy::default());
    }

    #[test]
    fn partial_document_overrides_only_given_fields() {
        let policy = PolicyConfig::from_json_str(
            r#"{ "premium_threshold": "1000000", "premium_rate": "0.15", "premium_days": 365 }"#,
        )
        .unwrap();

        assert_eq!(policy.premium_threshold, dec!(1000000));
        assert_eq!(policy.premium_rate, dec!(0.15));
        assert_eq!(policy.premium_days, 365);
        assert_eq!(policy.standard_rate, dec!(0.1));
        assert_eq!(policy.standard_days, 100);
        assert_eq!(policy.ineligible_vowel_count, 3);
    }

    #[test]
    fn invalid_policy_is_rejected() {
        let err = PolicyConfig::from_json_str(r#"{ "standard_rate": "2" }"#).unwrap_err();
        assert!(err.to_string().contains("standard_rate"), "{err:#}");
    }

    #[test]
    fn premium_duration_equal_to_standard_is_rejected() {
        let err = PolicyConfig::from_json_str(r#"{ "premium_days": 100 }"#).unwrap_err();
        assert!(err.to_string().contains("must differ"), "{err:#}");
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = PolicyConfig::from_json_str("{ not json").unwrap_err();
        assert!(err.to_string().contains("failed to parse warranty policy JSON"));
    }

    #[test]
    fn reads_policy_file() {
        let path = std::env::temp_dir().join(format!(
            "warranty-policy-{}-{}.json",
            std::process::id(),
            line!()
        ));
        std::fs::write(&path, r#"{ "standard_days": 90 }"#).unwrap();

        let policy = PolicyConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(policy.standard_days, 90);
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = std::env::temp_dir().join("warranty-policy-does-not-exist.json");
        let err = PolicyConfig::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("failed to read warranty policy"));
    }
}

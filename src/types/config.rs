use crate::error::{IndexError, Result};
use crate::policy::ScoringPolicy;
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndexConfig {
    pub policy: Option<PolicyConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    #[serde(default = "default_revision")]
    pub revision: String,
    #[serde(default = "default_transitional_overrides")]
    pub transitional_overrides: bool,
}

fn default_revision() -> String {
    "current".to_string()
}

fn default_transitional_overrides() -> bool {
    true
}

impl IndexConfig {
    /// Parses and validates policy settings. Where the text comes from is
    /// up to the caller.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let cfg: IndexConfig = toml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn scoring_policy(&self) -> Result<ScoringPolicy> {
        match &self.policy {
            Some(policy) => policy.revision.parse(),
            None => Ok(ScoringPolicy::CURRENT),
        }
    }

    pub fn transitional_overrides(&self) -> bool {
        self.policy
            .as_ref()
            .map(|policy| policy.transitional_overrides)
            .unwrap_or_else(default_transitional_overrides)
    }

    pub fn validate(&self) -> Result<()> {
        self.validate_as_of(chrono::Local::now().date_naive())
    }

    pub fn validate_as_of(&self, today: NaiveDate) -> Result<()> {
        let policy = self.scoring_policy().map_err(|err| match err {
            IndexError::UnknownPolicy(name) => IndexError::ConfigParse(format!(
                "unsupported policy.revision: {name} (expected v1, v2, v3 or current)"
            )),
            other => other,
        })?;

        if self.transitional_overrides() {
            for pinned in policy.transitional_overrides() {
                if pinned.is_overdue(today) {
                    tracing::warn!(
                        policy = %policy,
                        access_level = ?pinned.access_level,
                        review_by = pinned.review_by,
                        "transitional override is past its review date: {}",
                        pinned.reason
                    );
                }
            }
        }

        Ok(())
    }
}

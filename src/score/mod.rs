pub mod combine;
pub mod completeness;
pub mod easiness;

use crate::error::Result;
use crate::policy::ScoringPolicy;
use crate::types::config::IndexConfig;
use crate::types::metadata::MetadataRecord;
use crate::types::scoring::Score;

/// Stateless scorer bound to one policy revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreCalculator {
    policy: ScoringPolicy,
    transitional_overrides: bool,
}

impl Default for ScoreCalculator {
    fn default() -> Self {
        Self::current()
    }
}

impl ScoreCalculator {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self {
            policy,
            transitional_overrides: true,
        }
    }

    pub fn current() -> Self {
        Self::new(ScoringPolicy::CURRENT)
    }

    pub fn from_config(config: &IndexConfig) -> Result<Self> {
        Ok(Self::new(config.scoring_policy()?)
            .with_transitional_overrides(config.transitional_overrides()))
    }

    pub fn with_transitional_overrides(mut self, enabled: bool) -> Self {
        self.transitional_overrides = enabled;
        self
    }

    pub fn policy(&self) -> ScoringPolicy {
        self.policy
    }

    pub fn transitional_overrides(&self) -> bool {
        self.transitional_overrides
    }

    pub fn compute_completeness_score(&self, record: &MetadataRecord) -> f64 {
        completeness::completeness_score(record, self.policy)
    }

    pub fn compute_easiness_score(&self, record: &MetadataRecord) -> f64 {
        easiness::easiness_score(record, self.policy, self.transitional_overrides)
    }

    pub fn compute_score(&self, record: &MetadataRecord) -> Score {
        let completeness = self.compute_completeness_score(record);
        let easiness = self.compute_easiness_score(record);
        let score = combine::combine(self.policy.combination(), completeness, easiness);
        tracing::debug!(
            policy = %self.policy,
            completeness = score.completeness_score,
            easiness = score.easiness_score,
            score = score.score,
            "computed transparency score"
        );
        score
    }
}

pub fn compute_completeness_score(record: &MetadataRecord) -> f64 {
    ScoreCalculator::current().compute_completeness_score(record)
}

pub fn compute_easiness_score(record: &MetadataRecord) -> f64 {
    ScoreCalculator::current().compute_easiness_score(record)
}

pub fn compute_score(record: &MetadataRecord) -> Score {
    ScoreCalculator::current().compute_score(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::metadata::{AccessLevel, DetailLevel};

    fn fully_detailed() -> MetadataRecord {
        MetadataRecord {
            has_registration_number: true,
            has_position: true,
            has_department: true,
            base_salary_detail: DetailLevel::Detailed,
            other_earnings_detail: DetailLevel::Detailed,
            expenses_detail: DetailLevel::Detailed,
            ..MetadataRecord::default()
        }
    }

    #[test]
    fn default_record_scores_zero() {
        assert_eq!(compute_score(&MetadataRecord::default()), Score::zero());
    }

    #[test]
    fn perfect_record_scores_one() {
        let record = MetadataRecord {
            access_level: AccessLevel::DirectAccess,
            consistent_format: true,
            strictly_tabular: true,
            open_format: true,
            ..fully_detailed()
        };
        assert_eq!(compute_score(&record), Score::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn complete_but_inaccessible_source_scores_zero() {
        let record = MetadataRecord {
            access_level: AccessLevel::RequiresUserSimulation,
            ..fully_detailed()
        };
        let score = compute_score(&record);
        assert_eq!(score.completeness_score, 1.0);
        assert_eq!(score.easiness_score, 0.0);
        assert_eq!(score.score, 0.0);
    }

    #[test]
    fn v1_reproduces_arithmetic_mean_scores() {
        let record = MetadataRecord {
            no_login_required: true,
            no_captcha_required: true,
            access_level: AccessLevel::DirectAccess,
            consistent_format: true,
            strictly_tabular: true,
            ..fully_detailed()
        };
        let score = ScoreCalculator::new(ScoringPolicy::V1).compute_score(&record);
        assert_eq!(score, Score::new(1.0, 1.0, 1.0));

        let one_sided = ScoreCalculator::new(ScoringPolicy::V1).compute_score(&fully_detailed());
        assert_eq!(one_sided.score, 0.5);
    }

    #[test]
    fn disabling_overrides_changes_only_deprecated_category() {
        let record = MetadataRecord {
            access_level: AccessLevel::ScrapingFriendly,
            open_format: true,
            ..fully_detailed()
        };
        let with = ScoreCalculator::current().compute_score(&record);
        let without = ScoreCalculator::current()
            .with_transitional_overrides(false)
            .compute_score(&record);
        assert_eq!(with.easiness_score, 0.5);
        assert_eq!(without.easiness_score, 0.25);
        assert_eq!(with.completeness_score, without.completeness_score);
    }

    #[test]
    fn from_config_selects_revision_and_override_flag() {
        let config = IndexConfig::from_toml_str(
            r#"
[policy]
revision = "v2"
transitional_overrides = false
"#,
        )
        .expect("config should load");
        let calculator = ScoreCalculator::from_config(&config).expect("calculator should build");
        assert_eq!(calculator.policy(), ScoringPolicy::V2);
        assert!(!calculator.transitional_overrides());
    }

    #[test]
    fn from_config_rejects_unknown_revision() {
        let config: IndexConfig = toml::from_str(
            r#"
[policy]
revision = "latest-and-greatest"
"#,
        )
        .expect("config should parse");
        assert!(ScoreCalculator::from_config(&config).is_err());
    }
}

use crate::policy::ScoringPolicy;
use crate::types::metadata::{AccessLevel, MetadataRecord};

pub fn easiness_score(record: &MetadataRecord, policy: ScoringPolicy, overrides: bool) -> f64 {
    let criteria = policy.easiness_criteria();
    if criteria.is_empty() {
        return 0.0;
    }
    let total: f64 = criteria
        .iter()
        .map(|criterion| {
            criterion.value(record, |level| access_score(level, policy, overrides))
        })
        .sum();
    (total / criteria.len() as f64).clamp(0.0, 1.0)
}

/// Transitional overrides win over the general scale while enabled.
pub fn access_score(level: AccessLevel, policy: ScoringPolicy, overrides: bool) -> f64 {
    if overrides {
        if let Some(pinned) = policy
            .transitional_overrides()
            .iter()
            .find(|o| o.applies_to(level))
        {
            tracing::debug!(
                policy = %policy,
                access_level = ?level,
                weight = pinned.pinned_weight,
                "applying transitional access override"
            );
            return pinned.pinned_weight;
        }
    }
    policy.access_weight(level)
}

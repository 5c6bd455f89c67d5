use crate::policy::ScoringPolicy;
use crate::types::metadata::MetadataRecord;

pub fn completeness_score(record: &MetadataRecord, policy: ScoringPolicy) -> f64 {
    let criteria = policy.completeness_criteria();
    if criteria.is_empty() {
        return 0.0;
    }
    let total: f64 = criteria
        .iter()
        .map(|criterion| criterion.value(record))
        .sum();
    (total / criteria.len() as f64).clamp(0.0, 1.0)
}

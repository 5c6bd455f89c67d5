use crate::types::metadata::{AccessLevel, MetadataRecord};

/// Disclosure checks averaged into the completeness sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletenessCriterion {
    RegistrationNumber,
    Department,
    Position,
    BaseSalaryDetail,
    OtherEarningsDetail,
    ExpensesDetail,
}

impl CompletenessCriterion {
    pub fn value(self, record: &MetadataRecord) -> f64 {
        match self {
            Self::RegistrationNumber => flag(record.has_registration_number),
            Self::Department => flag(record.has_department),
            Self::Position => flag(record.has_position),
            Self::BaseSalaryDetail => record.base_salary_detail.weight(),
            Self::OtherEarningsDetail => record.other_earnings_detail.weight(),
            Self::ExpensesDetail => record.expenses_detail.weight(),
        }
    }
}

/// Accessibility checks averaged into the easiness sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EasinessCriterion {
    NoLoginRequired,
    NoCaptchaRequired,
    /// Scored through the policy's access scale rather than a flag.
    AccessLevel,
    ConsistentFormat,
    StrictlyTabular,
    OpenFormat,
}

impl EasinessCriterion {
    /// `access` is the policy's access scale, consulted only by
    /// [`EasinessCriterion::AccessLevel`].
    pub fn value(self, record: &MetadataRecord, access: impl Fn(AccessLevel) -> f64) -> f64 {
        match self {
            Self::NoLoginRequired => flag(record.no_login_required),
            Self::NoCaptchaRequired => flag(record.no_captcha_required),
            Self::AccessLevel => access(record.access_level),
            Self::ConsistentFormat => flag(record.consistent_format),
            Self::StrictlyTabular => flag(record.strictly_tabular),
            Self::OpenFormat => flag(record.open_format),
        }
    }
}

fn flag(present: bool) -> f64 {
    if present {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::metadata::DetailLevel;

    #[test]
    fn completeness_criteria_read_their_own_field() {
        let record = MetadataRecord {
            has_department: true,
            other_earnings_detail: DetailLevel::Summarized,
            ..MetadataRecord::default()
        };
        assert_eq!(CompletenessCriterion::Department.value(&record), 1.0);
        assert_eq!(CompletenessCriterion::Position.value(&record), 0.0);
        assert_eq!(CompletenessCriterion::OtherEarningsDetail.value(&record), 0.5);
        assert_eq!(CompletenessCriterion::ExpensesDetail.value(&record), 0.0);
    }

    #[test]
    fn access_criterion_scores_through_access_scale() {
        let record = MetadataRecord {
            access_level: AccessLevel::ScrapingDifficult,
            ..MetadataRecord::default()
        };
        let scale = |level: AccessLevel| match level {
            AccessLevel::ScrapingDifficult => 0.5,
            _ => 0.0,
        };
        assert_eq!(EasinessCriterion::AccessLevel.value(&record, scale), 0.5);
    }

    #[test]
    fn flag_criteria_ignore_access_scale() {
        let record = MetadataRecord {
            open_format: true,
            ..MetadataRecord::default()
        };
        let scale = |_: AccessLevel| -> f64 { panic!("flag criteria must not consult access") };
        assert_eq!(EasinessCriterion::OpenFormat.value(&record, scale), 1.0);
        assert_eq!(EasinessCriterion::StrictlyTabular.value(&record, scale), 0.0);
    }
}

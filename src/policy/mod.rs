//! Versioned weighting policies.
//!
//! A revision fixes its easiness criteria, access-level scale, combination
//! rule and transitional overrides together, so historical scores can be
//! reproduced by naming the revision that produced them. Revisions are
//! never merged.

pub mod criteria;
pub mod transitional;

use crate::error::IndexError;
use crate::types::metadata::AccessLevel;
use criteria::{CompletenessCriterion, EasinessCriterion};
use std::fmt;
use std::str::FromStr;
use transitional::{TransitionalOverride, SCRAPING_FRIENDLY_AS_DIRECT};

const COMPLETENESS: [CompletenessCriterion; 6] = [
    CompletenessCriterion::RegistrationNumber,
    CompletenessCriterion::Department,
    CompletenessCriterion::Position,
    CompletenessCriterion::BaseSalaryDetail,
    CompletenessCriterion::OtherEarningsDetail,
    CompletenessCriterion::ExpensesDetail,
];

const EASINESS_V1: [EasinessCriterion; 5] = [
    EasinessCriterion::NoLoginRequired,
    EasinessCriterion::NoCaptchaRequired,
    EasinessCriterion::AccessLevel,
    EasinessCriterion::ConsistentFormat,
    EasinessCriterion::StrictlyTabular,
];

const EASINESS_V2: [EasinessCriterion; 3] = [
    EasinessCriterion::AccessLevel,
    EasinessCriterion::ConsistentFormat,
    EasinessCriterion::StrictlyTabular,
];

const EASINESS_V3: [EasinessCriterion; 4] = [
    EasinessCriterion::AccessLevel,
    EasinessCriterion::ConsistentFormat,
    EasinessCriterion::StrictlyTabular,
    EasinessCriterion::OpenFormat,
];

const OVERRIDES: [TransitionalOverride; 1] = [SCRAPING_FRIENDLY_AS_DIRECT];

/// How the two sub-scores fold into the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combination {
    ArithmeticMean,
    HarmonicMean,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoringPolicy {
    /// Five easiness criteria, linear access scale, arithmetic mean.
    V1,
    /// Three easiness criteria, harmonic mean.
    V2,
    /// Adds open format to V2.
    V3,
}

impl ScoringPolicy {
    pub const CURRENT: ScoringPolicy = ScoringPolicy::V3;
    pub const ALL: [ScoringPolicy; 3] =
        [ScoringPolicy::V1, ScoringPolicy::V2, ScoringPolicy::V3];

    pub fn version(self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
            Self::V3 => "v3",
        }
    }

    pub fn completeness_criteria(self) -> &'static [CompletenessCriterion] {
        &COMPLETENESS
    }

    /// The easiness divisor is the length of this slice.
    pub fn easiness_criteria(self) -> &'static [EasinessCriterion] {
        match self {
            Self::V1 => &EASINESS_V1,
            Self::V2 => &EASINESS_V2,
            Self::V3 => &EASINESS_V3,
        }
    }

    /// General access scale, before any transitional override.
    pub fn access_weight(self, level: AccessLevel) -> f64 {
        match self {
            Self::V1 => match level {
                AccessLevel::DirectAccess => 1.0,
                AccessLevel::ScrapingFriendly => 0.5,
                AccessLevel::ScrapingDifficult => 0.25,
                AccessLevel::RequiresUserSimulation | AccessLevel::Unknown => 0.0,
            },
            Self::V2 | Self::V3 => match level {
                AccessLevel::DirectAccess => 1.0,
                AccessLevel::ScrapingDifficult => 0.5,
                AccessLevel::ScrapingFriendly
                | AccessLevel::RequiresUserSimulation
                | AccessLevel::Unknown => 0.0,
            },
        }
    }

    pub fn combination(self) -> Combination {
        match self {
            Self::V1 => Combination::ArithmeticMean,
            Self::V2 | Self::V3 => Combination::HarmonicMean,
        }
    }

    pub fn transitional_overrides(self) -> &'static [TransitionalOverride] {
        match self {
            Self::V1 => &[],
            Self::V2 | Self::V3 => &OVERRIDES,
        }
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self::CURRENT
    }
}

impl fmt::Display for ScoringPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.version())
    }
}

impl FromStr for ScoringPolicy {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v1" => Ok(Self::V1),
            "v2" => Ok(Self::V2),
            "v3" => Ok(Self::V3),
            "current" => Ok(Self::CURRENT),
            _ => Err(IndexError::UnknownPolicy(s.to_string())),
        }
    }
}

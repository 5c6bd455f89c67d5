use serde::Deserialize;

/// How much of a payroll component a source discloses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DetailLevel {
    #[default]
    Absent,
    Summarized,
    Detailed,
    #[serde(other)]
    Unknown,
}

impl DetailLevel {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "ABSENT" => Self::Absent,
            "SUMMARIZED" => Self::Summarized,
            "DETAILED" => Self::Detailed,
            _ => Self::Unknown,
        }
    }

    /// DETAILED counts fully, SUMMARIZED half; anything else scores nothing.
    pub fn weight(self) -> f64 {
        match self {
            Self::Detailed => 1.0,
            Self::Summarized => 0.5,
            Self::Absent | Self::Unknown => 0.0,
        }
    }
}

/// How a collector reaches the published data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessLevel {
    DirectAccess,
    /// Deprecated category, still present in older records.
    ScrapingFriendly,
    ScrapingDifficult,
    RequiresUserSimulation,
    #[default]
    #[serde(other)]
    Unknown,
}

impl AccessLevel {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "DIRECT_ACCESS" => Self::DirectAccess,
            "SCRAPING_FRIENDLY" => Self::ScrapingFriendly,
            "SCRAPING_DIFFICULT" => Self::ScrapingDifficult,
            "REQUIRES_USER_SIMULATION" => Self::RequiresUserSimulation,
            _ => Self::Unknown,
        }
    }
}

/// Publication metadata for one data source, as produced by the collection
/// pipeline. Scoring only ever borrows it.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct MetadataRecord {
    pub has_registration_number: bool,
    pub has_position: bool,
    pub has_department: bool,
    pub no_login_required: bool,
    pub no_captcha_required: bool,
    pub consistent_format: bool,
    pub strictly_tabular: bool,
    pub open_format: bool,
    pub base_salary_detail: DetailLevel,
    pub other_earnings_detail: DetailLevel,
    pub expenses_detail: DetailLevel,
    pub access_level: AccessLevel,
}

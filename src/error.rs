use strum::IntoStaticStr;
use thiserror::Error;

/// The reason a candidate was rejected. Each variant corresponds to one step of the
/// decode pipeline, and the pipeline stops at the first one that fails.
#[derive(Debug, Clone, PartialEq, Eq, Error, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum CnpError {
    #[error("expected 13 characters, found {length}")]
    InvalidLength { length: usize },

    #[error("non-digit character at position {position}")]
    NonDigit { position: usize },

    #[error("the first digit must be between 1 and 9")]
    InvalidSexCode,

    #[error("birth year {year} is outside of 1800-2099")]
    YearOutOfRange { year: i32 },

    #[error("invalid birth month {month}")]
    InvalidMonth { month: u32 },

    #[error("invalid birth day {day} for the decoded month and year")]
    InvalidDay { day: u32 },

    #[error("unknown county code {code:02}")]
    UnknownCounty { code: u8 },

    /// Bucharest sectors 7 and 8 were dissolved at the end of 1979
    #[error("county code {code:02} was not assigned after 1979-12-19")]
    DefunctCounty { code: u8 },

    #[error("check digit is {actual}, expected {expected}")]
    ChecksumMismatch { expected: u32, actual: u32 },
}

impl CnpError {
    /// Stable identifier of the failing step, used as a metric label.
    pub fn reason(&self) -> &'static str {
        self.into()
    }
}

use crate::config::DecodeConfig;
use crate::decoder::Decoder;
use crate::error::CnpError;
use crate::record::{DecodedCnp, Sex};
use chrono::NaiveDate;
use std::fmt::Write;

const IDENTITY_CARD_AGE: u32 = 14;
const ADULT_AGE: u32 = 18;

/// The outcome of decoding a single candidate.
///
/// Queries never fail: when the candidate was rejected, every accessor returns the
/// default supplied by the caller and every age predicate is `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct Cnp {
    record: Result<DecodedCnp, CnpError>,
    config: DecodeConfig,
}

impl Cnp {
    /// Decodes `candidate` with the default configuration.
    pub fn new(candidate: impl AsRef<str>) -> Self {
        Decoder::default().decode(candidate)
    }

    pub(crate) fn from_parts(record: Result<DecodedCnp, CnpError>, config: DecodeConfig) -> Self {
        Self { record, config }
    }

    pub fn is_valid(&self) -> bool {
        self.record.is_ok()
    }

    pub fn record(&self) -> Option<&DecodedCnp> {
        self.record.as_ref().ok()
    }

    /// Why the candidate was rejected, if it was.
    pub fn error(&self) -> Option<&CnpError> {
        self.record.as_ref().err()
    }

    pub fn into_result(self) -> Result<DecodedCnp, CnpError> {
        self.record
    }

    /// Formats the birth date with a chrono `strftime` pattern, e.g. `"%Y-%m-%d"`.
    /// An unsupported pattern yields `default` as well.
    pub fn birth_date(&self, format: &str, default: &str) -> String {
        let Some(record) = self.record() else {
            return default.to_owned();
        };

        let mut formatted = String::new();
        match write!(formatted, "{}", record.birth_date().format(format)) {
            Ok(()) => formatted,
            Err(_) => default.to_owned(),
        }
    }

    pub fn sex<'a>(&self, male: &'a str, female: &'a str, default: &'a str) -> &'a str {
        match self.record().and_then(DecodedCnp::sex) {
            Some(Sex::Male) => male,
            Some(Sex::Female) => female,
            None => default,
        }
    }

    pub fn birth_county<'a>(&self, default: &'a str) -> &'a str {
        match self.record() {
            Some(record) => record.county().name,
            None => default,
        }
    }

    pub fn serial_number<'a>(&'a self, default: &'a str) -> &'a str {
        self.record()
            .map(DecodedCnp::serial_number)
            .unwrap_or(default)
    }

    /// Age in whole years as of the configured reference date (or today).
    pub fn age(&self) -> Option<u32> {
        self.age_on(self.config.today())
    }

    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        self.record()?.age_on(today)
    }

    pub fn is_adult(&self) -> bool {
        self.is_adult_on(self.config.today())
    }

    pub fn is_adult_on(&self, today: NaiveDate) -> bool {
        self.age_on(today).is_some_and(|age| age >= ADULT_AGE)
    }

    /// Identity cards are issued once the holder turns 14.
    pub fn has_identity_card_eligibility(&self) -> bool {
        self.has_identity_card_eligibility_on(self.config.today())
    }

    pub fn has_identity_card_eligibility_on(&self, today: NaiveDate) -> bool {
        self.age_on(today)
            .is_some_and(|age| age >= IDENTITY_CARD_AGE)
    }
}

impl From<&str> for Cnp {
    fn from(candidate: &str) -> Self {
        Cnp::new(candidate)
    }
}

impl From<String> for Cnp {
    fn from(candidate: String) -> Self {
        Cnp::new(candidate)
    }
}

impl From<u64> for Cnp {
    fn from(candidate: u64) -> Self {
        Cnp::new(candidate.to_string())
    }
}

impl From<i64> for Cnp {
    fn from(candidate: i64) -> Self {
        Cnp::new(candidate.to_string())
    }
}

/// Returns whether `candidate` is a valid CNP under the default configuration.
pub fn validate(candidate: impl AsRef<str>) -> bool {
    Cnp::new(candidate).is_valid()
}

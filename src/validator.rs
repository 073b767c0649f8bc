use crate::checksum::compute_check_digit;
use crate::config::DecodeConfig;
use crate::record::{DecodedCnp, CNP_LENGTH};

/// A yes/no check over a candidate string, the shape expected by scanners and form
/// validation adapters.
pub trait Validator: Send + Sync {
    fn is_valid_match(&self, candidate: &str) -> bool;
}

/// Runs the full decode pipeline with the default configuration.
pub struct RomanianPersonalNumericCode;

impl Validator for RomanianPersonalNumericCode {
    fn is_valid_match(&self, candidate: &str) -> bool {
        DecodedCnp::decode(candidate, &DecodeConfig::default()).is_ok()
    }
}

/// Only verifies the check digit. Separators between digits (spaces, dashes, ...) are
/// skipped, which suits loosely formatted matches found in free text.
pub struct CnpChecksum;

impl Validator for CnpChecksum {
    fn is_valid_match(&self, candidate: &str) -> bool {
        let digits: Vec<u32> = candidate.chars().filter_map(|c| c.to_digit(10)).collect();
        if digits.len() != CNP_LENGTH {
            return false;
        }

        compute_check_digit(digits.iter().copied()) == digits.last().copied()
    }
}

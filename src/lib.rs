// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

//! Validation and decoding of Romanian personal numeric codes (CNP).
//!
//! ```
//! use dd_cnp::Cnp;
//!
//! let cnp = Cnp::new("6140101070075");
//! assert!(cnp.is_valid());
//! assert_eq!(cnp.birth_date("%Y-%m-%d", ""), "2014-01-01");
//! assert_eq!(cnp.sex("M", "F", ""), "F");
//! assert_eq!(cnp.birth_county(""), "Botosani");
//!
//! assert!(!dd_cnp::validate("22222"));
//! ```

mod checksum;
mod cnp;
mod config;
mod county;
mod decoder;
mod error;
mod observability;
mod record;
mod validator;

// This is the public API of the CNP library
pub use checksum::{compute_check_digit, CHECKSUM_WEIGHTS};
pub use cnp::{validate, Cnp};
pub use config::{DecodeConfig, RuleSet};
pub use county::County;
pub use decoder::{Decoder, DecoderBuilder};
pub use error::CnpError;
pub use observability::labels::Labels;
pub use record::{Citizenship, DecodedCnp, Sex, CNP_LENGTH};
pub use validator::{CnpChecksum, RomanianPersonalNumericCode, Validator};

use crate::checksum::compute_check_digit;
use crate::config::DecodeConfig;
use crate::county::County;
use crate::error::CnpError;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const CNP_LENGTH: usize = 13;

const MIN_BIRTH_YEAR: i32 = 1800;
const MAX_BIRTH_YEAR: i32 = 2099;

/// Residents and foreigners born less than this many years before the reference date
/// are assumed to belong to the previous century.
const CENTURY_INFERENCE_AGE: i32 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Citizenship {
    Romanian,
    Resident,
    Foreign,
}

/// A CNP that passed every check. It can only be obtained through [DecodedCnp::decode]
/// (or `parse`), so holding one means the number is valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DecodedCnp {
    sex_code: u8,
    birth_date: NaiveDate,
    county: County,
    serial_number: String,
    check_digit: u8,
}

impl DecodedCnp {
    /// Runs the full decode pipeline, stopping at the first failing check.
    pub fn decode(candidate: &str, config: &DecodeConfig) -> Result<Self, CnpError> {
        let candidate = candidate.trim();

        let length = candidate.chars().count();
        if length != CNP_LENGTH {
            return Err(CnpError::InvalidLength { length });
        }

        let mut digits = [0; CNP_LENGTH];
        for (position, c) in candidate.chars().enumerate() {
            digits[position] = c.to_digit(10).ok_or(CnpError::NonDigit { position })?;
        }

        let sex_code = digits[0];
        if sex_code == 0 {
            return Err(CnpError::InvalidSexCode);
        }

        let year = birth_year(sex_code, number(&digits[1..3]), config.today().year());
        if !(MIN_BIRTH_YEAR..=MAX_BIRTH_YEAR).contains(&year) {
            return Err(CnpError::YearOutOfRange { year });
        }

        let month = number(&digits[3..5]);
        if !(1..=12).contains(&month) {
            return Err(CnpError::InvalidMonth { month });
        }

        // chrono rejects days that don't exist in the month, leap years included
        let day = number(&digits[5..7]);
        let birth_date =
            NaiveDate::from_ymd_opt(year, month, day).ok_or(CnpError::InvalidDay { day })?;

        let county_code = number(&digits[7..9]) as u8;
        let county = County::lookup_in(config.rule_set, county_code)
            .ok_or(CnpError::UnknownCounty { code: county_code })?;
        if !county.is_assignable(birth_date) {
            return Err(CnpError::DefunctCounty { code: county_code });
        }

        let expected = compute_check_digit(digits.iter().copied())
            .ok_or(CnpError::InvalidLength { length })?;
        let actual = digits[CNP_LENGTH - 1];
        if expected != actual {
            return Err(CnpError::ChecksumMismatch { expected, actual });
        }

        Ok(DecodedCnp {
            sex_code: sex_code as u8,
            birth_date,
            county,
            serial_number: candidate[9..12].to_owned(),
            check_digit: actual as u8,
        })
    }

    pub fn sex_code(&self) -> u8 {
        self.sex_code
    }

    /// Foreign citizens (sex code 9) have no sex encoded in their number.
    pub fn sex(&self) -> Option<Sex> {
        match self.sex_code {
            1 | 3 | 5 | 7 => Some(Sex::Male),
            2 | 4 | 6 | 8 => Some(Sex::Female),
            _ => None,
        }
    }

    pub fn citizenship(&self) -> Citizenship {
        match self.sex_code {
            7 | 8 => Citizenship::Resident,
            9 => Citizenship::Foreign,
            _ => Citizenship::Romanian,
        }
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn county(&self) -> County {
        self.county
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    pub fn check_digit(&self) -> u8 {
        self.check_digit
    }

    /// Age in whole years on `today`, or `None` if `today` is before the birth date.
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        today.years_since(self.birth_date)
    }
}

impl FromStr for DecodedCnp {
    type Err = CnpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DecodedCnp::decode(s, &DecodeConfig::default())
    }
}

impl Display for DecodedCnp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{:02}{:02}{:02}{:02}{}{}",
            self.sex_code,
            self.birth_date.year() % 100,
            self.birth_date.month(),
            self.birth_date.day(),
            self.county.code,
            self.serial_number,
            self.check_digit
        )
    }
}

/// Interprets a slice of decimal digits as a single number.
fn number(digits: &[u32]) -> u32 {
    digits.iter().fold(0, |acc, digit| acc * 10 + digit)
}

fn birth_year(sex_code: u32, two_digit_year: u32, reference_year: i32) -> i32 {
    let two_digit_year = two_digit_year as i32;
    match sex_code {
        1 | 2 => 1900 + two_digit_year,
        3 | 4 => 1800 + two_digit_year,
        5 | 6 => 2000 + two_digit_year,
        7..=9 => {
            let year = 2000 + two_digit_year;
            if year > reference_year - CENTURY_INFERENCE_AGE {
                year - 100
            } else {
                year
            }
        }
        _ => 0,
    }
}

#[cfg(test)]
mod test {
    use crate::config::{DecodeConfig, RuleSet};
    use crate::error::CnpError;
    use crate::record::{birth_year, Citizenship, DecodedCnp, Sex};
    use chrono::NaiveDate;

    fn config_on(year: i32, month: u32, day: u32) -> DecodeConfig {
        DecodeConfig::new().reference_date(NaiveDate::from_ymd_opt(year, month, day).unwrap())
    }

    fn decode(candidate: &str) -> Result<DecodedCnp, CnpError> {
        DecodedCnp::decode(candidate, &config_on(2026, 10, 18))
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_valid_matches() {
        let valid_matches = vec![
            ("6140101070075", date(2014, 1, 1), Some(Sex::Female), "Botosani", "007"),
            ("2331214442371", date(1933, 12, 14), Some(Sex::Female), "Bucuresti Sector 4", "237"),
            ("3970908055828", date(1897, 9, 8), Some(Sex::Male), "Bihor", "582"),
            ("1960911123653", date(1996, 9, 11), Some(Sex::Male), "Cluj", "365"),
            ("4010228349590", date(1801, 2, 28), Some(Sex::Female), "Teleorman", "959"),
            ("1480809214609", date(1948, 8, 9), Some(Sex::Male), "Ialomita", "460"),
            ("8001005376996", date(2000, 10, 5), Some(Sex::Female), "Vaslui", "699"),
            ("2890905230065", date(1989, 9, 5), Some(Sex::Female), "Ilfov", "006"),
            ("5110102441483", date(2011, 1, 2), Some(Sex::Male), "Bucuresti Sector 4", "148"),
        ];
        for (cnp, birth_date, sex, county, serial) in valid_matches {
            let decoded = decode(cnp).unwrap_or_else(|err| panic!("{cnp} should be valid: {err}"));
            assert_eq!(decoded.birth_date(), birth_date, "{cnp}");
            assert_eq!(decoded.sex(), sex, "{cnp}");
            assert_eq!(decoded.county().name, county, "{cnp}");
            assert_eq!(decoded.serial_number(), serial, "{cnp}");
            assert_eq!(decoded.to_string(), cnp);
        }
    }

    #[test]
    fn test_invalid_matches() {
        let invalid_matches = vec![
            ("22222", CnpError::InvalidLength { length: 5 }),
            ("", CnpError::InvalidLength { length: 0 }),
            ("19605234567890", CnpError::InvalidLength { length: 14 }),
            ("397090805582I", CnpError::NonDigit { position: 12 }),
            ("614010107007A ", CnpError::NonDigit { position: 12 }),
            ("-196091112365", CnpError::NonDigit { position: 0 }),
            ("0500101040008", CnpError::InvalidSexCode),
            ("1501301040008", CnpError::InvalidMonth { month: 13 }),
            ("1500100040007", CnpError::InvalidDay { day: 0 }),
            ("1500431040007", CnpError::InvalidDay { day: 31 }),
            ("1500101490004", CnpError::UnknownCounty { code: 49 }),
            ("1500101000000", CnpError::UnknownCounty { code: 0 }),
            ("1791220479953", CnpError::DefunctCounty { code: 47 }),
            (
                "1960911123655",
                CnpError::ChecksumMismatch {
                    expected: 3,
                    actual: 5,
                },
            ),
        ];
        for (cnp, expected) in invalid_matches {
            assert_eq!(decode(cnp), Err(expected), "{cnp}");
        }
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let decoded = decode(" 6140101070075\n").unwrap();
        assert_eq!(decoded.to_string(), "6140101070075");
    }

    #[test]
    fn non_ascii_digits_are_rejected() {
        // Arabic-Indic digit seven in the 13th position
        assert_eq!(
            decode("614010107007\u{0667}"),
            Err(CnpError::NonDigit { position: 12 })
        );
    }

    #[test]
    fn leap_days() {
        // 2000 is a leap year, 1900 and 2001 are not
        assert_eq!(decode("5000229040001").unwrap().birth_date(), date(2000, 2, 29));
        assert_eq!(decode("1000229040004"), Err(CnpError::InvalidDay { day: 29 }));
        assert_eq!(decode("6010229040001"), Err(CnpError::InvalidDay { day: 29 }));
        assert_eq!(decode("1500229040006"), Err(CnpError::InvalidDay { day: 29 }));
    }

    #[test]
    fn defunct_sectors() {
        assert_eq!(
            decode("1791219479952").unwrap().county().name,
            "Bucuresti Sector 7 (now defunct)"
        );
        assert_eq!(
            decode("2520619474609").unwrap().birth_date(),
            date(1952, 6, 19)
        );
        assert_eq!(
            decode("1791219480005").unwrap().county().name,
            "Bucuresti Sector 8 (now defunct)"
        );
        assert_eq!(
            decode("1791220480006"),
            Err(CnpError::DefunctCounty { code: 48 })
        );
    }

    #[test]
    fn first_rule_set_has_no_defunct_sectors() {
        let config = config_on(2026, 10, 18).rule_set(RuleSet::V1);
        assert_eq!(
            DecodedCnp::decode("1791219479952", &config),
            Err(CnpError::UnknownCounty { code: 47 })
        );
        assert!(DecodedCnp::decode("6140101070075", &config).is_ok());
    }

    #[test]
    fn residents_and_foreigners_century_inference() {
        // On 2026-10-18 the threshold year is 2012
        let on_reference_year = decode("7120101040001").unwrap();
        assert_eq!(on_reference_year.birth_date(), date(2012, 1, 1));
        assert_eq!(on_reference_year.citizenship(), Citizenship::Resident);

        let after_reference_year = decode("7130101040001").unwrap();
        assert_eq!(after_reference_year.birth_date(), date(1913, 1, 1));

        // the same number decoded a year earlier falls into the previous century
        let earlier = DecodedCnp::decode("7120101040001", &config_on(2025, 1, 1)).unwrap();
        assert_eq!(earlier.birth_date(), date(1912, 1, 1));
    }

    #[test]
    fn century_per_sex_code() {
        assert_eq!(birth_year(1, 50, 2026), 1950);
        assert_eq!(birth_year(4, 50, 2026), 1850);
        assert_eq!(birth_year(6, 50, 2026), 2050);
        assert_eq!(birth_year(7, 12, 2026), 2012);
        assert_eq!(birth_year(8, 13, 2026), 1913);
        assert_eq!(birth_year(9, 0, 2026), 2000);
        assert_eq!(birth_year(0, 50, 2026), 0);
    }

    #[test]
    fn foreign_citizens_have_no_sex() {
        let decoded = decode("9500101470004").unwrap();
        assert_eq!(decoded.birth_date(), date(1950, 1, 1));
        assert_eq!(decoded.sex(), None);
        assert_eq!(decoded.citizenship(), Citizenship::Foreign);
    }

    #[test]
    fn age_in_whole_years() {
        let decoded = decode("2890905230065").unwrap();
        assert_eq!(decoded.age_on(date(2007, 9, 4)), Some(17));
        assert_eq!(decoded.age_on(date(2007, 9, 5)), Some(18));
        assert_eq!(decoded.age_on(date(1989, 9, 5)), Some(0));
        assert_eq!(decoded.age_on(date(1989, 9, 4)), None);
    }

    #[test]
    fn from_str_uses_default_config() {
        let decoded: DecodedCnp = "3970908055828".parse().unwrap();
        assert_eq!(decoded.sex_code(), 3);
        assert_eq!(decoded.check_digit(), 8);
        assert_eq!("123".parse::<DecodedCnp>(), Err(CnpError::InvalidLength { length: 3 }));
    }

    #[test]
    fn serialize_decoded_record() {
        let decoded = decode("6140101070075").unwrap();
        let json = serde_json::to_value(&decoded).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "sex_code": 6,
                "birth_date": "2014-01-01",
                "county": {"code": 7, "name": "Botosani"},
                "serial_number": "007",
                "check_digit": 5,
            })
        );
    }
}

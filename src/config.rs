use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;
use strum::{Display, EnumIter, EnumString};

/// Versions of the county rules applied while decoding.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RuleSet {
    /// Counties 01-46, 51 and 52. Bucharest sectors 7 and 8 are rejected.
    V1,
    /// Adds Bucharest sectors 7 and 8, valid for births up to 1979-12-19.
    #[default]
    V2,
}

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DecodeConfig {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub rule_set: RuleSet,

    /// The date treated as "today" for century inference and age checks.
    /// When unset, the local system date is read on every use.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
}

impl DecodeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule_set(&self, rule_set: RuleSet) -> Self {
        self.mutate_clone(|x| x.rule_set = rule_set)
    }

    pub fn reference_date(&self, reference_date: NaiveDate) -> Self {
        self.mutate_clone(|x| x.reference_date = Some(reference_date))
    }

    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}

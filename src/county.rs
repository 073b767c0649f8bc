use crate::config::RuleSet;
use chrono::NaiveDate;
use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::BTreeMap;

/// A county (or Bucharest sector) that can appear in digits 8-9 of a CNP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct County {
    pub code: u8,
    pub name: &'static str,
}

const DEFUNCT_SECTORS: &[u8] = &[47, 48];

lazy_static! {
    static ref COUNTIES: BTreeMap<u8, &'static str> = BTreeMap::from([
        (1, "Alba"),
        (2, "Arad"),
        (3, "Arges"),
        (4, "Bacau"),
        (5, "Bihor"),
        (6, "Bistrita-Nasaud"),
        (7, "Botosani"),
        (8, "Brasov"),
        (9, "Braila"),
        (10, "Buzau"),
        (11, "Caras-Severin"),
        (12, "Cluj"),
        (13, "Constanta"),
        (14, "Covasna"),
        (15, "Dambovita"),
        (16, "Dolj"),
        (17, "Galati"),
        (18, "Gorj"),
        (19, "Harghita"),
        (20, "Hunedoara"),
        (21, "Ialomita"),
        (22, "Iasi"),
        (23, "Ilfov"),
        (24, "Maramures"),
        (25, "Mehedinti"),
        (26, "Mures"),
        (27, "Neamt"),
        (28, "Olt"),
        (29, "Prahova"),
        (30, "Satu Mare"),
        (31, "Salaj"),
        (32, "Sibiu"),
        (33, "Suceava"),
        (34, "Teleorman"),
        (35, "Timis"),
        (36, "Tulcea"),
        (37, "Vaslui"),
        (38, "Valcea"),
        (39, "Vrancea"),
        (40, "Bucuresti"),
        (41, "Bucuresti Sector 1"),
        (42, "Bucuresti Sector 2"),
        (43, "Bucuresti Sector 3"),
        (44, "Bucuresti Sector 4"),
        (45, "Bucuresti Sector 5"),
        (46, "Bucuresti Sector 6"),
        (47, "Bucuresti Sector 7 (now defunct)"),
        (48, "Bucuresti Sector 8 (now defunct)"),
        (51, "Calarasi"),
        (52, "Giurgiu"),
    ]);

    // Last day on which sectors 7 and 8 were assigned
    static ref DEFUNCT_SECTORS_CUTOFF: NaiveDate =
        NaiveDate::from_ymd_opt(1979, 12, 19).unwrap();
}

impl County {
    /// Looks up a county code in the full table, regardless of rule set or birth date.
    pub fn lookup(code: u8) -> Option<County> {
        COUNTIES.get(&code).map(|&name| County { code, name })
    }

    /// Looks up a county code among the counties known to `rule_set`.
    pub fn lookup_in(rule_set: RuleSet, code: u8) -> Option<County> {
        County::lookup(code).filter(|county| match rule_set {
            RuleSet::V1 => !county.is_defunct(),
            RuleSet::V2 => true,
        })
    }

    /// Every known county, ordered by code.
    pub fn all() -> impl Iterator<Item = County> {
        COUNTIES.iter().map(|(&code, &name)| County { code, name })
    }

    pub fn is_defunct(&self) -> bool {
        DEFUNCT_SECTORS.contains(&self.code)
    }

    /// Whether this county could have been assigned to someone born on `birth_date`.
    pub fn is_assignable(&self, birth_date: NaiveDate) -> bool {
        !self.is_defunct() || birth_date <= *DEFUNCT_SECTORS_CUTOFF
    }
}

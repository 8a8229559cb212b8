//! Mozambican public holidays (from 1975).
//!
//! With `observed`, every holiday falling on a Sunday is followed by a
//! "ponte" (bridge) day off on the Monday.

use hol_core::errors::Result;
use hol_core::{JurisdictionConfig, Year};
use hol_time::{easter_sunday, Weekday};

use crate::holiday::HolidayEntry;
use crate::observed::{ObservedPolicy, RawDate, ShiftLabel};
use crate::rule_set::{RuleSet, YearBuilder};

/// Mozambique.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mozambique;

const FIXED: &[(u8, u8, &str)] = &[
    (2, 3, "Dia dos Heróis Moçambicanos"),
    (4, 7, "Dia da Mulher Moçambicana"),
    (5, 1, "Dia Mundial do Trabalho"),
    (6, 25, "Dia da Independência Nacional"),
    (9, 7, "Dia da Vitória"),
    (9, 25, "Dia das Forças Armadas"),
    (10, 4, "Dia da Paz e Reconciliação"),
    (12, 25, "Dia de Natal e da Família"),
];

fn ponte() -> ObservedPolicy {
    ObservedPolicy::new(RawDate::Omit).shift(Weekday::Sunday, 1, ShiftLabel::Suffix(" (PONTE)"))
}

impl RuleSet for Mozambique {
    fn name(&self) -> &str {
        "Mozambique"
    }

    fn codes(&self) -> &'static [&'static str] {
        &["MZ", "MOZ"]
    }

    fn populate_year(&self, year: Year, config: &JurisdictionConfig) -> Result<Vec<HolidayEntry>> {
        let mut h = YearBuilder::new(year, config);
        if year <= 1974 {
            return Ok(h.finish());
        }

        h.add_fixed(1, 1, "Ano novo")?;
        let easter = easter_sunday(year)?;
        h.add(easter - 2, "Sexta-feira Santa");
        // Shrove Tuesday.
        h.add(easter - 47, "Carnaval");
        for &(month, day, label) in FIXED {
            h.add_fixed(month, day, label)?;
        }

        let policy = ponte();
        let raw: Vec<HolidayEntry> = h.entries().to_vec();
        for entry in raw {
            h.add_observed(&policy, entry.date, &entry.label);
        }

        Ok(h.finish())
    }
}

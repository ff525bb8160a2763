//! Frequency categories, all below [`super::base::FREQUENCY`].
//!
//! Each category covers an inclusive percentage range; the ranges do not overlap and together
//! cover `0..=100`.

use super::{lookup_in, Entry};
use hpotk_term_id::TermId;

/// Present in 100% of cases.
pub const OBLIGATE: &str = "HP:0040280";
/// 80% to 99%.
pub const VERY_FREQUENT: &str = "HP:0040281";
/// 30% to 79%.
pub const FREQUENT: &str = "HP:0040282";
/// 5% to 29%.
pub const OCCASIONAL: &str = "HP:0040283";
/// 1% to 4%.
pub const VERY_RARE: &str = "HP:0040284";
/// Never present.
pub const EXCLUDED: &str = "HP:0040285";

pub const TABLE: &[Entry] = &[
    ("OBLIGATE", OBLIGATE),
    ("VERY_FREQUENT", VERY_FREQUENT),
    ("FREQUENT", FREQUENT),
    ("OCCASIONAL", OCCASIONAL),
    ("VERY_RARE", VERY_RARE),
    ("EXCLUDED", EXCLUDED),
];

/// A frequency term with its inclusive percentage bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrequencyCategory {
    pub symbol: &'static str,
    pub curie: &'static str,
    pub lower_percent: u8,
    pub upper_percent: u8,
}

impl FrequencyCategory {
    pub fn term_id(&self) -> Option<TermId> {
        TermId::parse(self.curie).ok()
    }

    /// Lower bound as a fraction in `0.0..=1.0`.
    pub fn lower_bound(&self) -> f64 {
        f64::from(self.lower_percent) / 100.0
    }

    pub fn upper_bound(&self) -> f64 {
        f64::from(self.upper_percent) / 100.0
    }

    /// Midpoint of the range as a fraction.
    pub fn frequency(&self) -> f64 {
        (self.lower_bound() + self.upper_bound()) / 2.0
    }
}

/// Most to least frequent.
pub const CATEGORIES: &[FrequencyCategory] = &[
    FrequencyCategory {
        symbol: "OBLIGATE",
        curie: OBLIGATE,
        lower_percent: 100,
        upper_percent: 100,
    },
    FrequencyCategory {
        symbol: "VERY_FREQUENT",
        curie: VERY_FREQUENT,
        lower_percent: 80,
        upper_percent: 99,
    },
    FrequencyCategory {
        symbol: "FREQUENT",
        curie: FREQUENT,
        lower_percent: 30,
        upper_percent: 79,
    },
    FrequencyCategory {
        symbol: "OCCASIONAL",
        curie: OCCASIONAL,
        lower_percent: 5,
        upper_percent: 29,
    },
    FrequencyCategory {
        symbol: "VERY_RARE",
        curie: VERY_RARE,
        lower_percent: 1,
        upper_percent: 4,
    },
    FrequencyCategory {
        symbol: "EXCLUDED",
        curie: EXCLUDED,
        lower_percent: 0,
        upper_percent: 0,
    },
];

pub fn lookup(symbol: &str) -> Option<TermId> {
    lookup_in(TABLE, symbol)
}

/// Category whose curie equals `curie`.
pub fn category_for_curie(curie: &str) -> Option<&'static FrequencyCategory> {
    CATEGORIES.iter().find(|c| c.curie == curie)
}

/// Category covering `percent`, rounded to the nearest whole percent.
///
/// Any positive value maps to at least 1%, so a phenotype that is present is never reported as
/// excluded; likewise anything short of 100% stays below obligate. Returns `None` for values
/// outside `0.0..=100.0` or NaN.
pub fn category_for_percentage(percent: f64) -> Option<&'static FrequencyCategory> {
    if !(0.0..=100.0).contains(&percent) {
        return None;
    }
    let rounded = match percent.round() as u8 {
        0 if percent > 0.0 => 1,
        100 if percent < 100.0 => 99,
        whole => whole,
    };
    CATEGORIES
        .iter()
        .find(|c| (c.lower_percent..=c.upper_percent).contains(&rounded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_match_table() {
        assert_eq!(CATEGORIES.len(), TABLE.len());
        for (category, (symbol, curie)) in CATEGORIES.iter().zip(TABLE) {
            assert_eq!(category.symbol, *symbol);
            assert_eq!(category.curie, *curie);
            assert!(category.term_id().is_some());
        }
    }

    #[test]
    fn test_ranges_cover_every_percentage() {
        for percent in 0..=100u8 {
            let hits = CATEGORIES
                .iter()
                .filter(|c| (c.lower_percent..=c.upper_percent).contains(&percent))
                .count();
            assert_eq!(hits, 1, "percentage {percent}");
        }
    }

    #[test]
    fn test_category_for_percentage() {
        assert_eq!(category_for_percentage(100.0).unwrap().curie, OBLIGATE);
        assert_eq!(category_for_percentage(38.46).unwrap().curie, FREQUENT);
        assert_eq!(category_for_percentage(4.4).unwrap().curie, VERY_RARE);
        assert_eq!(category_for_percentage(0.0).unwrap().curie, EXCLUDED);
        assert!(category_for_percentage(100.5).is_none());
    }

    #[test]
    fn test_category_for_percentage_keeps_presence() {
        assert_eq!(category_for_percentage(0.4).unwrap().curie, VERY_RARE);
        assert_eq!(category_for_percentage(f64::MIN_POSITIVE).unwrap().curie, VERY_RARE);
        assert_eq!(category_for_percentage(99.6).unwrap().curie, VERY_FREQUENT);
        assert!(category_for_percentage(f64::NAN).is_none());
    }

    #[test]
    fn test_category_for_curie() {
        let occasional = category_for_curie(OCCASIONAL).expect("known curie");
        assert_eq!((occasional.lower_percent, occasional.upper_percent), (5, 29));
        assert!((occasional.frequency() - 0.17).abs() < 1e-9);
        assert!(category_for_curie("HP:0000001").is_none());
    }
}

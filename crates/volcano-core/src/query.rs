// crates/volcano-core/src/query.rs
use crate::model::{Volcano, NO_TSUNAMI};
use serde::{Deserialize, Serialize};

/// Conjunctive filter used by
/// [`VolcanoDataset::names_matching_all_of`](crate::VolcanoDataset::names_matching_all_of).
///
/// A record matches when every bound holds:
/// `year > year_after`, `tsunami == tsunami_equals`,
/// `latitude < latitude_below` and `vei == vei_equals`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchCriteria {
    pub year_after: i32,
    pub tsunami_equals: String,
    pub latitude_below: f64,
    pub vei_equals: i32,
}

impl MatchCriteria {
    pub fn new(
        year_after: i32,
        tsunami_equals: impl Into<String>,
        latitude_below: f64,
        vei_equals: i32,
    ) -> Self {
        Self {
            year_after,
            tsunami_equals: tsunami_equals.into(),
            latitude_below,
            vei_equals,
        }
    }

    /// VEI 5 eruptions south of the equator after 1800 with no tsunami on record.
    pub fn quiet_southern_vei5_since_1800() -> Self {
        Self::new(1800, NO_TSUNAMI, 0.0, 5)
    }

    pub fn matches(&self, v: &Volcano) -> bool {
        v.year() > self.year_after
            && v.tsunami() == self.tsunami_equals
            && v.latitude() < self.latitude_below
            && v.vei() == self.vei_equals
    }
}

/// `matching / total * 100`, or 0 for an empty collection.
pub(crate) fn percent_of(matching: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    matching as f64 / total as f64 * 100.0
}

/// Arithmetic mean, or 0 for an empty input.
pub(crate) fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let n = values.len();
    if n == 0 {
        return 0.0;
    }
    values.sum::<f64>() / n as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collections_yield_zero() {
        assert_eq!(percent_of(0, 0), 0.0);
        assert_eq!(mean(std::iter::empty::<f64>()), 0.0);
    }

    #[test]
    fn percent_and_mean() {
        assert_eq!(percent_of(1, 4), 25.0);
        assert_eq!(mean([1.0, 2.0, 6.0].into_iter()), 3.0);
    }

    #[test]
    fn criteria_bounds_are_strict() {
        let on_bounds: Volcano = serde_json::from_str(
            r#"{"Name":"Edge","Country":"X","Type":"T","Year":1800,"Latitude":0,"VEI":5,"TSU":""}"#,
        )
        .unwrap();
        let inside: Volcano = serde_json::from_str(
            r#"{"Name":"In","Country":"X","Type":"T","Year":1801,"Latitude":-0.5,"VEI":5,"TSU":""}"#,
        )
        .unwrap();
        let criteria = MatchCriteria::quiet_southern_vei5_since_1800();
        assert!(!criteria.matches(&on_bounds));
        assert!(criteria.matches(&inside));
    }
}

use crate::env_or;

/// Inclusive range of academic years accepted for ratings and module
/// instances.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RatingConfig {
    pub min_year: i64,
    pub max_year: i64,
}

impl RatingConfig {
    pub const DEFAULT_MIN_YEAR: i64 = 2000;
    pub const DEFAULT_MAX_YEAR: i64 = 2025;

    /// Loads `RATING_MIN_YEAR` and `RATING_MAX_YEAR`. A reversed pair is
    /// swapped rather than producing an empty range.
    pub fn from_env() -> Self {
        let min_year = env_or("RATING_MIN_YEAR", Self::DEFAULT_MIN_YEAR);
        let max_year = env_or("RATING_MAX_YEAR", Self::DEFAULT_MAX_YEAR);

        Self {
            min_year: min_year.min(max_year),
            max_year: min_year.max(max_year),
        }
    }

    pub fn contains_year(&self, year: i64) -> bool {
        (self.min_year..=self.max_year).contains(&year)
    }
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            min_year: Self::DEFAULT_MIN_YEAR,
            max_year: Self::DEFAULT_MAX_YEAR,
        }
    }
}

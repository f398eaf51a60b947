//! In-process result shaping for operations whose output is not a plain
//! row sequence.

use serde::Serialize;

/// Rows at the minimum and maximum age of a result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeExtremes<T> {
    pub youngest: Vec<T>,
    pub oldest: Vec<T>,
}

impl<T> AgeExtremes<T> {
    pub fn empty() -> Self {
        Self {
            youngest: Vec::new(),
            oldest: Vec::new(),
        }
    }

    /// True when neither group holds a row.
    pub fn is_empty(&self) -> bool {
        self.youngest.is_empty() && self.oldest.is_empty()
    }
}

/// Partition rows into those at the minimum and those at the maximum age.
///
/// Rows whose age is `None` are dropped first. Every row tied at an extreme
/// is kept, in input order. When all remaining rows share one age, that age
/// is both the minimum and the maximum and every row lands in both groups.
pub fn split_by_age_extremes<T, F>(rows: Vec<T>, age: F) -> AgeExtremes<T>
where
    T: Clone,
    F: Fn(&T) -> Option<i32>,
{
    let aged: Vec<(i32, T)> = rows
        .into_iter()
        .filter_map(|row| age(&row).map(|a| (a, row)))
        .collect();

    let (Some(min), Some(max)) = (
        aged.iter().map(|(a, _)| *a).min(),
        aged.iter().map(|(a, _)| *a).max(),
    ) else {
        return AgeExtremes::empty();
    };

    let youngest = aged
        .iter()
        .filter(|(a, _)| *a == min)
        .map(|(_, row)| row.clone())
        .collect();
    let oldest = aged
        .into_iter()
        .filter(|(a, _)| *a == max)
        .map(|(_, row)| row)
        .collect();

    AgeExtremes { youngest, oldest }
}

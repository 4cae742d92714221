//! Aggregation primitives shared by every page.
//!
//! All functions are pure and total: an empty input yields zero, and a zero
//! denominator yields `0.0` instead of NaN or infinity.

/// Number of members for one key of a grouping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCount<K> {
    /// Group key
    pub key: K,
    /// Members in the group
    pub count: usize,
}

/// Accumulated totals for one key of a grouping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSum<K, V> {
    /// Group key
    pub key: K,
    /// Accumulated value
    pub total: V,
}

/// Counts the items matching `predicate`.
pub fn count_matching<I, F>(items: I, predicate: F) -> usize
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> bool,
{
    items.into_iter().filter(predicate).count()
}

/// Sums `value` over the items matching `predicate`. Empty input sums to 0.
pub fn sum_by<I, P, V>(items: I, mut predicate: P, mut value: V) -> u64
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
    V: FnMut(&I::Item) -> u64,
{
    items
        .into_iter()
        .filter(|item| predicate(item))
        .map(|item| value(&item))
        .sum()
}

/// Rounds `value` half away from zero to `decimals` places.
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    (value * factor).round() / factor
}

/// `part / whole` as a percentage rounded to `decimals` places.
///
/// An empty denominator yields `0.0`.
#[must_use]
pub fn percentage(part: usize, whole: usize, decimals: u32) -> f64 {
    #[allow(clippy::cast_precision_loss)] // record counts are far below 2^52
    ratio(part as f64 * 100.0, whole as f64, decimals)
}

/// `numerator / denominator` rounded to `decimals` places; zero denominator yields `0.0`.
#[must_use]
pub fn ratio(numerator: f64, denominator: f64, decimals: u32) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    round_to(numerator / denominator, decimals)
}

/// Relative change from `first` to `last` as a percentage; a zero base yields `0.0`.
#[must_use]
pub fn growth_percent(first: u64, last: u64, decimals: u32) -> f64 {
    #[allow(clippy::cast_precision_loss)] // amounts are far below 2^52
    let (first, last) = (first as f64, last as f64);
    ratio((last - first) * 100.0, first, decimals)
}

/// Mean of `values` rounded to `decimals` places; empty input yields `0.0`.
#[must_use]
pub fn mean(values: &[f64], decimals: u32) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    ratio(values.iter().sum(), values.len() as f64, decimals)
}

/// Groups items by `key` and counts members, in order of first occurrence.
pub fn group_count<I, K, F>(items: I, mut key: F) -> Vec<GroupCount<K>>
where
    I: IntoIterator,
    K: PartialEq,
    F: FnMut(&I::Item) -> K,
{
    let mut groups: Vec<GroupCount<K>> = Vec::new();
    for item in items {
        let key = key(&item);
        match groups.iter_mut().find(|group| group.key == key) {
            Some(group) => group.count += 1,
            None => groups.push(GroupCount { key, count: 1 }),
        }
    }
    groups
}

/// Groups items by `key` and folds each group with `add`, in order of first occurrence.
pub fn group_sum<I, K, V, F, A>(items: I, mut key: F, mut add: A) -> Vec<GroupSum<K, V>>
where
    I: IntoIterator,
    K: PartialEq,
    V: Default,
    F: FnMut(&I::Item) -> K,
    A: FnMut(&mut V, &I::Item),
{
    let mut groups: Vec<GroupSum<K, V>> = Vec::new();
    for item in items {
        let key = key(&item);
        let index = match groups.iter().position(|group| group.key == key) {
            Some(index) => index,
            None => {
                groups.push(GroupSum {
                    key,
                    total: V::default(),
                });
                groups.len() - 1
            }
        };
        add(&mut groups[index].total, &item);
    }
    groups
}

//! Group -> reduce -> select-top-N stages shared by the aggregation views

use std::hash::Hash;

use indexmap::IndexMap;
use vg_core::Record;

/// Grouped values keyed in first-seen order
pub type Groups<K, V> = IndexMap<K, V, ahash::RandomState>;

fn groups<K, V>() -> Groups<K, V> {
    IndexMap::with_hasher(ahash::RandomState::new())
}

/// Sum `value` per key
pub fn sum_by<'a, K, F, V>(
    records: impl IntoIterator<Item = &'a Record>,
    key: F,
    value: V,
) -> Groups<K, f64>
where
    K: Hash + Eq,
    F: Fn(&'a Record) -> K,
    V: Fn(&'a Record) -> f64,
{
    let mut sums = groups();
    for record in records {
        *sums.entry(key(record)).or_insert(0.0) += value(record);
    }
    sums
}

/// Count records per key
pub fn count_by<'a, K, F>(records: impl IntoIterator<Item = &'a Record>, key: F) -> Groups<K, usize>
where
    K: Hash + Eq,
    F: Fn(&'a Record) -> K,
{
    let mut counts = groups();
    for record in records {
        *counts.entry(key(record)).or_insert(0) += 1;
    }
    counts
}

/// The `n` groups with the largest sums, largest first. Equal sums are
/// ordered by key ascending so the cut is deterministic.
pub fn top_n<K: Ord + Clone>(sums: &Groups<K, f64>, n: usize) -> Vec<(K, f64)> {
    let mut ranked: Vec<(K, f64)> = sums.iter().map(|(k, v)| (k.clone(), *v)).collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::five_record_dataset;

    #[test]
    fn test_sum_by_keeps_first_seen_order() {
        let dataset = five_record_dataset();
        let sums = sum_by(&dataset, |r| r.genre.as_str(), |r| r.sales_global);

        let keys: Vec<_> = sums.keys().copied().collect();
        assert_eq!(keys, vec!["Action", "Sports"]);
        assert_eq!(sums["Action"], 35.0);
        assert_eq!(sums["Sports"], 7.0);
    }

    #[test]
    fn test_count_by() {
        let dataset = five_record_dataset();
        let counts = count_by(&dataset, |r| r.year);

        assert_eq!(counts[&2001], 2);
        assert_eq!(counts[&2002], 2);
        assert_eq!(counts[&2003], 1);
    }

    #[test]
    fn test_top_n_breaks_ties_by_key() {
        let mut sums = groups();
        sums.insert("Gamma", 5.0);
        sums.insert("Beta", 5.0);
        sums.insert("Alpha", 1.0);
        sums.insert("Delta", 9.0);

        let top = top_n(&sums, 3);
        assert_eq!(top, vec![("Delta", 9.0), ("Beta", 5.0), ("Gamma", 5.0)]);
    }

    #[test]
    fn test_top_n_with_fewer_groups() {
        let mut sums = groups();
        sums.insert("Only", 2.0);

        assert_eq!(top_n(&sums, 10), vec![("Only", 2.0)]);
        assert!(top_n(&Groups::<&str, f64>::default(), 3).is_empty());
    }
}

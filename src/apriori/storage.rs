use super::itemset::{Item, Itemset};
use std::collections::btree_map::{self, BTreeMap};

/// Itemset-to-count table for a single level, iterated in itemset order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemsetTable {
    counts: BTreeMap<Itemset, usize>,
    pub itemset_size: usize,
}

/// C[k]: every candidate of size k with its occurrence count.
pub type CandidateTable = ItemsetTable;

/// L[k]: the candidates of C[k] that met the minimum support.
pub type FrequentTable = ItemsetTable;

impl ItemsetTable {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            counts: BTreeMap::new(),
            itemset_size,
        }
    }

    /// Inserts or overwrites the count of `itemset`.
    pub fn insert(&mut self, itemset: Itemset, count: usize) -> Option<usize> {
        debug_assert_eq!(itemset.len(), self.itemset_size);
        self.counts.insert(itemset, count)
    }

    pub fn increment(&mut self, itemset: Itemset) {
        debug_assert_eq!(itemset.len(), self.itemset_size);
        *self.counts.entry(itemset).or_insert(0) += 1;
    }

    pub fn count(&self, items: &[Item]) -> Option<usize> {
        self.counts.get(items).copied()
    }

    pub fn contains(&self, items: &[Item]) -> bool {
        self.counts.contains_key(items)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Itemset, usize)> {
        self.counts.iter().map(|(itemset, &count)| (itemset, count))
    }

    pub fn itemsets(&self) -> impl Iterator<Item = &Itemset> {
        self.counts.keys()
    }

    pub(crate) fn counts_mut(&mut self) -> impl Iterator<Item = (&Itemset, &mut usize)> {
        self.counts.iter_mut()
    }
}

impl IntoIterator for ItemsetTable {
    type Item = (Itemset, usize);
    type IntoIter = btree_map::IntoIter<Itemset, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

/// Every non-empty frequent level of a mining run, plus the database size
/// that all percentages are taken against.
///
/// `levels[k - 1]` holds L[k]. Levels are appended in order by the level loop
/// and kept until rule generation is done with them.
#[derive(Debug, Clone, Default)]
pub struct FrequentItemsets {
    levels: Vec<FrequentTable>,
    num_transactions: usize,
}

impl FrequentItemsets {
    pub fn new(num_transactions: usize) -> Self {
        Self {
            levels: Vec::new(),
            num_transactions,
        }
    }

    pub(crate) fn push_level(&mut self, level: FrequentTable) {
        debug_assert_eq!(level.itemset_size, self.levels.len() + 1);
        debug_assert!(!level.is_empty());
        self.levels.push(level);
    }

    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    /// L[k], or `None` past the last non-empty level.
    pub fn level(&self, k: usize) -> Option<&FrequentTable> {
        k.checked_sub(1).and_then(|idx| self.levels.get(idx))
    }

    pub fn levels(&self) -> &[FrequentTable] {
        &self.levels
    }

    /// Size of the largest frequent itemset, 0 when nothing was frequent.
    pub fn max_level(&self) -> usize {
        self.levels.len()
    }

    /// Support count of `items` taken from L[|items|], 0 when absent.
    pub fn support(&self, items: &[Item]) -> usize {
        self.level(items.len())
            .and_then(|level| level.count(items))
            .unwrap_or(0)
    }

    /// Total number of frequent itemsets across all levels.
    pub fn len(&self) -> usize {
        self.levels.iter().map(ItemsetTable::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Itemset, usize)> {
        self.levels.iter().flat_map(|level| level.iter())
    }
}

use std::borrow::Borrow;
use std::fmt;

/// Item identifier as it appears in the transaction file.
pub type Item = i32;

/// Sorted, duplicate-free set of items.
///
/// Ordering between itemsets is lexicographic over the sorted items, which is
/// what fixes iteration order of every level table and therefore rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Itemset {
    items: Vec<Item>,
}

impl Itemset {
    /// Builds an itemset from arbitrary items, sorting and removing duplicates.
    pub fn new(mut items: Vec<Item>) -> Self {
        items.sort_unstable();
        items.dedup();
        Self { items }
    }

    pub fn singleton(item: Item) -> Self {
        Self { items: vec![item] }
    }

    pub(crate) fn from_sorted(items: Vec<Item>) -> Self {
        debug_assert!(items.windows(2).all(|w| w[0] < w[1]));
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Number of items present in both sets, found with a two-pointer walk.
    pub fn overlap(&self, other: &Itemset) -> usize {
        overlap(&self.items, &other.items)
    }

    /// Joins two equal-size itemsets that differ in exactly one item each.
    ///
    /// Returns `None` when the sizes differ or the overlap is not `len - 1`,
    /// which also rejects joining an itemset with itself.
    pub fn merge(&self, other: &Itemset) -> Option<Itemset> {
        let k = self.len();
        if k == 0 || other.len() != k || self.overlap(other) != k - 1 {
            return None;
        }

        let (a, b) = (&self.items, &other.items);
        let mut merged = Vec::with_capacity(k + 1);
        let (mut i, mut j) = (0, 0);

        while i < a.len() || j < b.len() {
            if i == a.len() || (j < b.len() && b[j] < a[i]) {
                merged.push(b[j]);
                j += 1;
            } else if j == b.len() || a[i] < b[j] {
                merged.push(a[i]);
                i += 1;
            } else {
                merged.push(a[i]);
                i += 1;
                j += 1;
            }
        }

        Some(Self::from_sorted(merged))
    }

    /// Copy of this itemset without the item at `index`.
    pub fn remove_at(&self, index: usize) -> Itemset {
        let mut items = self.items.clone();
        items.remove(index);
        Self { items }
    }

    /// True when every item of `self` is also in `other`.
    pub fn is_subset_of(&self, other: &Itemset) -> bool {
        self.len() <= other.len() && self.overlap(other) == self.len()
    }
}

fn overlap(a: &[Item], b: &[Item]) -> usize {
    let mut count = 0;
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if a[i] == b[j] {
            count += 1;
            i += 1;
            j += 1;
        } else if a[i] < b[j] {
            i += 1;
        } else {
            j += 1;
        }
    }

    count
}

impl Borrow<[Item]> for Itemset {
    fn borrow(&self) -> &[Item] {
        &self.items
    }
}

impl From<Vec<Item>> for Itemset {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

impl FromIterator<Item> for Itemset {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Itemset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (idx, item) in self.items.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str("}")
    }
}

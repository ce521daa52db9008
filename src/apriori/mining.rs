use super::candidates::{first_level_candidates, next_level_candidates};
use super::counting::{count_support, filter_frequent};
use super::database::TransactionDatabase;
use super::storage::FrequentItemsets;
use crate::error::{AprioriError, Result, SupportValueIssue};
use std::num::NonZeroUsize;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone)]
pub struct MiningConfig {
    /// Minimum support as a percentage of all transactions, 0 ~ 100.
    pub min_support: f64,
    pub parallel_counting: bool,
    /// Last level to mine. `None` runs until a level comes back empty.
    pub max_level: Option<NonZeroUsize>,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: 1.0,
            parallel_counting: true,
            max_level: None,
        }
    }
}

impl MiningConfig {
    pub fn new(min_support: f64) -> Self {
        Self {
            min_support,
            ..Self::default()
        }
    }

    pub fn with_parallel_counting(mut self, parallel: bool) -> Self {
        self.parallel_counting = parallel;
        self
    }

    pub fn with_max_level(mut self, max_level: NonZeroUsize) -> Self {
        self.max_level = Some(max_level);
        self
    }

    pub fn validate(&self) -> Result<()> {
        let reason = if self.min_support.is_nan() {
            SupportValueIssue::NotANumber
        } else if !(0.0..=100.0).contains(&self.min_support) {
            SupportValueIssue::OutOfRange
        } else {
            return Ok(());
        };

        Err(AprioriError::InvalidSupportValue {
            value: self.min_support.to_string(),
            reason,
        })
    }

    fn reached_max_level(&self, level: usize) -> bool {
        self.max_level.is_some_and(|max| level >= max.get())
    }
}

/// Level-wise Apriori: count C[1], filter to L[1], then join, prune, count and
/// filter each next level until one comes back empty.
#[instrument(skip_all, fields(transactions = database.len(), min_support = config.min_support))]
pub fn apriori_algorithm(
    database: &TransactionDatabase,
    config: &MiningConfig,
) -> Result<FrequentItemsets> {
    config.validate()?;

    let num_transactions = database.len();
    let mut result = FrequentItemsets::new(num_transactions);
    let mut candidates = first_level_candidates(database);

    loop {
        let level = candidates.itemset_size;
        let num_candidates = candidates.len();
        let frequent = filter_frequent(candidates, num_transactions, config.min_support);

        debug!(level, candidates = num_candidates, frequent = frequent.len(), "level counted");

        if frequent.is_empty() {
            break;
        }

        if config.reached_max_level(level) {
            result.push_level(frequent);
            debug!(level, "level cap reached");
            break;
        }

        let mut next = next_level_candidates(&frequent);
        result.push_level(frequent);
        count_support(&mut next, database, config.parallel_counting);
        candidates = next;
    }

    info!(
        levels = result.max_level(),
        frequent_itemsets = result.len(),
        "frequent itemset mining finished"
    );

    Ok(result)
}

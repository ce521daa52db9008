pub mod apriori;
pub mod config;
pub mod error;
pub mod io;
pub mod logging;

pub use apriori::{
    apriori_algorithm, generate_rules, AssociationRule, FrequentItemsets, Itemset, MiningConfig,
    TransactionDatabase,
};
pub use config::{Config, ParseOutcome};
pub use error::{AprioriError, Result};

use tracing::{info, instrument};

/// Counts from a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub transactions: usize,
    pub levels: usize,
    pub frequent_itemsets: usize,
    pub rules: usize,
}

/// Loads the input, mines it, then writes every rule to the output file.
///
/// The output file is only created once mining has finished.
#[instrument(skip_all, fields(input = %config.input.display(), output = %config.output.display()))]
pub fn run(config: &Config) -> Result<RunSummary> {
    let database = io::load_transactions(&config.input)?;
    let frequent = apriori_algorithm(&database, &config.mining)?;

    let writer = io::create_output(&config.output)?;
    let rules = io::write_rules(&frequent, writer)?;
    info!(rules, "rules written");

    Ok(RunSummary {
        transactions: database.len(),
        levels: frequent.max_level(),
        frequent_itemsets: frequent.len(),
        rules,
    })
}

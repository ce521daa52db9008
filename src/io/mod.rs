pub mod reader;
pub mod writer;

pub use reader::{load_transactions, parse_transaction, read_transactions};
pub use writer::{create_output, write_rules, RuleWriter};

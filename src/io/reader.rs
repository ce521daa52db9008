use crate::apriori::{Item, TransactionDatabase};
use crate::error::{AprioriError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

/// Parse one tab-separated transaction line (`line_number` is 1-based)
pub fn parse_transaction(line: &str, line_number: usize) -> Result<Vec<Item>> {
    line.split('\t')
        .map(|token| {
            token
                .trim()
                .parse::<Item>()
                .map_err(|_| AprioriError::MalformedTransactionLine {
                    line: line_number,
                    token: token.to_string(),
                })
        })
        .collect()
}

/// Read transactions from a line-oriented stream, skipping blank lines
pub fn read_transactions<R: BufRead>(reader: R) -> Result<TransactionDatabase> {
    let mut database = TransactionDatabase::new();

    for (idx, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes?;
        let line = std::str::from_utf8(&bytes).map_err(|_| undecodable_line(&bytes, idx + 1))?;
        if line.trim().is_empty() {
            continue;
        }
        database.push(parse_transaction(line, idx + 1)?);
    }

    Ok(database)
}

/// Reports the first tab-separated token that is not valid UTF-8.
fn undecodable_line(bytes: &[u8], line_number: usize) -> AprioriError {
    let token = bytes
        .split(|&byte| byte == b'\t')
        .find(|token| std::str::from_utf8(token).is_err())
        .unwrap_or(bytes);

    AprioriError::MalformedTransactionLine {
        line: line_number,
        token: String::from_utf8_lossy(token).trim().to_string(),
    }
}

/// Open `path` and load every transaction in it
pub fn load_transactions(path: &Path) -> Result<TransactionDatabase> {
    let file = File::open(path).map_err(|source| AprioriError::InputFileUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let database = read_transactions(BufReader::new(file))?;

    info!(path = %path.display(), transactions = database.len(), "transactions loaded");
    if database.duplicates_dropped() > 0 {
        warn!(
            duplicates = database.duplicates_dropped(),
            "repeated items within a transaction were counted once"
        );
    }

    Ok(database)
}

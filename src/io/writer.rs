use crate::apriori::{try_for_each_rule, AssociationRule, FrequentItemsets};
use crate::error::{AprioriError, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes rules one record per line.
pub struct RuleWriter<W: Write> {
    inner: W,
    rules_written: usize,
}

impl<W: Write> RuleWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            rules_written: 0,
        }
    }

    pub fn write_rule(&mut self, rule: &AssociationRule) -> io::Result<()> {
        writeln!(self.inner, "{}", rule)?;
        self.rules_written += 1;
        Ok(())
    }

    pub fn rules_written(&self) -> usize {
        self.rules_written
    }

    /// Flushes and hands back the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

pub fn create_output(path: &Path) -> Result<RuleWriter<BufWriter<File>>> {
    let file = File::create(path).map_err(|source| AprioriError::OutputFileUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(RuleWriter::new(BufWriter::new(file)))
}

/// Streams every rule of `frequent` into `writer` and returns how many were written.
pub fn write_rules<W: Write>(frequent: &FrequentItemsets, mut writer: RuleWriter<W>) -> Result<usize> {
    try_for_each_rule(frequent, |rule| writer.write_rule(&rule))?;
    let written = writer.rules_written();
    writer.finish()?;
    Ok(written)
}

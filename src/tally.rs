use std::io::{self, Write};

use indexmap::IndexMap;

#[derive(clap::ArgEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Format {
    /// One `count: type` line per type
    #[default]
    Text,
    /// Pretty-printed JSON object of type to count
    Json,
}

/// Occurrence count per distinct type string, in first-seen order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TypeTally {
    counts: IndexMap<String, u64>,
}

impl TypeTally {
    pub fn add(&mut self, ty: impl Into<String>) {
        *self.counts.entry(ty.into()).or_insert(0) += 1;
    }

    pub fn get(&self, ty: &str) -> u64 {
        self.counts.get(ty).copied().unwrap_or(0)
    }

    /// Number of distinct types.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// `(count, type)` pairs, largest count first. Equal counts are ordered
    /// by type name, also descending.
    pub fn sorted(&self) -> Vec<(u64, String)> {
        let mut pairs: Vec<(u64, String)> = self
            .counts
            .iter()
            .map(|(ty, &count)| (count, ty.clone()))
            .collect();
        pairs.sort_by(|a, b| b.cmp(a));
        pairs
    }
}

impl<S: Into<String>> FromIterator<S> for TypeTally {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tally = TypeTally::default();
        for ty in iter {
            tally.add(ty);
        }
        tally
    }
}

pub fn tally<I>(types: I) -> TypeTally
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    types.into_iter().collect()
}

/// Writes the sorted tally to `out` in the given format.
pub fn report(tally: &TypeTally, format: Format, mut out: impl Write) -> io::Result<()> {
    let sorted = tally.sorted();

    match format {
        Format::Text => {
            for (count, ty) in &sorted {
                writeln!(out, "{}: {}", count, ty)?;
            }
        }
        Format::Json => {
            let counts: IndexMap<&str, u64> = sorted
                .iter()
                .map(|(count, ty)| (ty.as_str(), *count))
                .collect();
            serde_json::to_writer_pretty(&mut out, &counts)?;
            writeln!(out)?;
        }
    }

    out.flush()
}

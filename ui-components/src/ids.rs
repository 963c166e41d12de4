//! Element identifier generation
//!
//! Ids keep repeated components on one page apart (radio groups, modals,
//! tables, charts). Each render call gets a fresh generator from its
//! [`IdStrategy`], so ids are unique within the call and a sequential
//! generator makes the whole output reproducible.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Source of element identifiers for one render call
pub trait IdGenerator: Send {
    /// Next identifier, formatted as `{prefix}-{suffix}`
    fn next_id(&mut self, prefix: &str) -> String;
}

/// Random 48-bit hexadecimal suffixes
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self, prefix: &str) -> String {
        let suffix: u64 = rand::thread_rng().r#gen::<u64>() & 0xffff_ffff_ffff;
        format!("{prefix}-{suffix:012x}")
    }
}

/// Counter suffixes starting at 1
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    issued: u64,
}

impl SequentialIds {
    /// Fresh counter
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self, prefix: &str) -> String {
        self.issued += 1;
        format!("{prefix}-{}", self.issued)
    }
}

/// How a registry creates the generator for each render call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Random suffixes, for serving
    #[default]
    Random,
    /// Deterministic counters, for previews and tests
    Sequential,
}

impl IdStrategy {
    /// New generator for one render call
    pub fn generator(self) -> Box<dyn IdGenerator> {
        match self {
            IdStrategy::Random => Box::new(RandomIds),
            IdStrategy::Sequential => Box::new(SequentialIds::new()),
        }
    }
}

//! Before/after structural checks guarding every rewrite.

use crate::error::{PruneError, Result};

/// Whole-file counts compared across a transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuralCounters {
    /// Occurrences of the class-introducing keyword.
    pub class_keywords: usize,
    /// `{` count minus `}` count.
    pub brace_balance: i64,
}

impl StructuralCounters {
    pub fn measure(content: &str, class_keyword: &str) -> Self {
        let (open, close) = content.chars().fold((0i64, 0i64), |(o, c), ch| match ch {
            '{' => (o + 1, c),
            '}' => (o, c + 1),
            _ => (o, c),
        });
        Self {
            class_keywords: content.matches(class_keyword).count(),
            brace_balance: open - close,
        }
    }
}

/// Reject `after` unless it keeps the class count and net brace balance of
/// `before`.
pub fn verify(before: &str, after: &str, class_keyword: &str) -> Result<StructuralCounters> {
    let old = StructuralCounters::measure(before, class_keyword);
    let new = StructuralCounters::measure(after, class_keyword);
    if old.class_keywords != new.class_keywords {
        return Err(PruneError::StructuralMismatch {
            before: old.class_keywords,
            after: new.class_keywords,
        });
    }
    if old.brace_balance != new.brace_balance {
        return Err(PruneError::BraceImbalance {
            before: old.brace_balance,
            after: new.brace_balance,
        });
    }
    Ok(new)
}

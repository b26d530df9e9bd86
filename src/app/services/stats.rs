use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::app::domain::document::DocumentEngine;
use crate::app::services::notifier::SubscriptionId;

/// Word and character counts for one snapshot of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocumentStats {
    pub words: usize,
    pub chars: usize,
}

impl DocumentStats {
    /// Words are maximal runs of non-separator characters once leading and
    /// trailing control characters and spaces (everything up to U+0020) are
    /// trimmed. Characters are UTF-16 code units of the untrimmed content, the
    /// same unit the RTF export escapes in.
    pub fn compute(content: &str) -> Self {
        let trimmed = content.trim_matches(|c: char| c <= ' ');
        let words = trimmed
            .split(is_word_separator)
            .filter(|word| !word.is_empty())
            .count();

        Self {
            words,
            chars: content.encode_utf16().count(),
        }
    }
}

/// ASCII whitespace including vertical tab. Non-breaking and other Unicode
/// spaces are part of a word.
fn is_word_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

impl fmt::Display for DocumentStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LIVE STATISTICS : {} words | {} characters", self.words, self.chars)
    }
}

/// Keeps the statistics of the latest published content.
#[derive(Debug, Default)]
pub struct StatisticsView {
    latest: Cell<DocumentStats>,
}

impl StatisticsView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute from scratch and remember the result.
    pub fn recompute(&self, content: &str) -> DocumentStats {
        let stats = DocumentStats::compute(content);
        self.latest.set(stats);
        stats
    }

    pub fn latest(&self) -> DocumentStats {
        self.latest.get()
    }

    /// Subscribe this view to `engine` and seed it with the current content.
    pub fn attach(self: &Rc<Self>, engine: &DocumentEngine) -> SubscriptionId {
        self.recompute(&engine.content());
        let view = Rc::clone(self);
        engine.subscribe(move |content: &str| {
            view.recompute(content);
        })
    }
}

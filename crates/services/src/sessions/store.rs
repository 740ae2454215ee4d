use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use quiz_core::model::Question;

/// Holds a session's question records and partitions them into the unasked
/// draw queue and the asked set.
///
/// Identity is the full (text, answer) pair. Invariant: after loading, every
/// stored record sits in exactly one of `unasked` / `asked`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionStore {
    /// Insertion order, deduped by identity. Lookup scans walk this.
    records: Vec<Question>,
    /// Pending draw queue; the front is asked next.
    unasked: Vec<Question>,
    asked: HashSet<Question>,
}

impl QuestionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-loads records, preserving first-seen order.
    pub fn from_questions(questions: impl IntoIterator<Item = Question>) -> Self {
        let mut store = Self::new();
        for question in questions {
            store.add(question);
        }
        store
    }

    /// Inserts a record and queues it for asking.
    ///
    /// Identity covers the whole record, so re-adding an identical pair
    /// changes nothing and never duplicates queue membership.
    pub fn add(&mut self, question: Question) {
        if self.records.contains(&question) {
            return;
        }
        self.unasked.push(question.clone());
        self.records.push(question);
    }

    /// Removes a record and whichever partition entry holds it.
    ///
    /// A missing record is a no-op, not an error.
    pub fn remove(&mut self, text: &str, answer: &str) {
        self.records.retain(|q| !q.matches(text, answer));
        self.unasked.retain(|q| !q.matches(text, answer));
        self.asked.retain(|q| !q.matches(text, answer));
    }

    /// First stored answer for the given question text.
    ///
    /// Texts may repeat with different answers; the scan walks records in
    /// insertion order and the first match wins.
    #[must_use]
    pub fn lookup_answer(&self, text: &str) -> Option<&str> {
        self.records
            .iter()
            .find(|q| q.text() == text)
            .map(Question::answer)
    }

    /// Shuffles the pending draw queue.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.unasked.shuffle(rng);
    }

    /// Moves the next unasked question into the asked set and returns it.
    pub fn draw(&mut self) -> Option<Question> {
        if self.unasked.is_empty() {
            return None;
        }
        let question = self.unasked.remove(0);
        self.asked.insert(question.clone());
        Some(question)
    }

    #[must_use]
    pub fn contains(&self, text: &str, answer: &str) -> bool {
        self.records.iter().any(|q| q.matches(text, answer))
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of questions not yet asked.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.unasked.len()
    }

    /// Number of questions already asked.
    #[must_use]
    pub fn asked_len(&self) -> usize {
        self.asked.len()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

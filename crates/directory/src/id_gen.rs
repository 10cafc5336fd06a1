//! Identifier generation
//!
//! A counter that persists across calls. Each attempt formats the counter as
//! a decimal string and advances it; a candidate already in use is skipped.
//! The search always terminates because the set of taken keys is finite.
//!
//! When the counter outgrows the identifier length limit, the search restarts
//! from 1 so identifiers freed by deletes are handed out again.

use tracing::debug;

/// Monotonic decimal identifier generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    /// Generator whose first candidate is `first`
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Return the first candidate for which `is_taken` is false
    ///
    /// Every candidate tried, including the returned one, is consumed.
    pub fn next_free(&mut self, mut is_taken: impl FnMut(&str) -> bool) -> String {
        loop {
            let candidate = self.next.to_string();
            self.next = self.next.wrapping_add(1);
            if !is_taken(&candidate) {
                return candidate;
            }
            debug!(target: "contactbook::directory", id = %candidate, "Generated id already taken, skipping");
        }
    }

    /// Return the first free candidate of at most `max_len` characters
    ///
    /// If the counter has passed `max_len` digits, the search restarts from 1.
    /// Returns `None` when every candidate that fits is taken.
    pub fn next_free_within(
        &mut self,
        max_len: usize,
        mut is_taken: impl FnMut(&str) -> bool,
    ) -> Option<String> {
        let candidate = self.next_free(&mut is_taken);
        if candidate.chars().count() <= max_len {
            return Some(candidate);
        }

        debug!(target: "contactbook::directory", id = %candidate, max_len, "Generated id too long, restarting from 1");
        self.next = 1;
        let candidate = self.next_free(&mut is_taken);
        (candidate.chars().count() <= max_len).then_some(candidate)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

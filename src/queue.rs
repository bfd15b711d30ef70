//! Recommendation queue — FIFO of recommendation messages
//!
//! Filled alongside the result sequence and drained once for display.
//! Dequeuing an empty queue yields `None`; it is not an error.

use crate::error::Result;
use std::collections::VecDeque;
use std::io::Write;

/// First-in-first-out recommendation messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationQueue {
    items: VecDeque<String>,
}

impl RecommendationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message at the back
    pub fn enqueue(&mut self, message: impl Into<String>) {
        self.items.push_back(message.into());
    }

    /// Remove and return the front message
    pub fn dequeue(&mut self) -> Option<String> {
        self.items.pop_front()
    }

    /// Front message without removing it
    pub fn peek(&self) -> Option<&str> {
        self.items.front().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Dequeue everything, front first
    pub fn drain(&mut self) -> impl Iterator<Item = String> + '_ {
        std::iter::from_fn(move || self.dequeue())
    }

    /// Drain to `out` as `-> {message}` lines
    pub fn write_drain<W: Write>(&mut self, out: &mut W) -> Result<()> {
        while let Some(message) = self.dequeue() {
            writeln!(out, "-> {}", message)?;
        }
        Ok(())
    }
}

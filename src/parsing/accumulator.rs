//! Multi-line message reconstruction.
//!
//! [`Accumulator`] is the state threaded through a fold over the normalized
//! lines. It holds at most one open message. A header closes the open
//! message and opens a new one; any other line extends the open message
//! unless it reads like a system notice, in which case it is dropped.

use crate::message::Message;
use crate::parsing::classify::is_system_notice;

/// What happened to a line fed into the [`Accumulator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEffect {
    /// The line was a header and opened a new message.
    Opened,
    /// The line was appended to the open message.
    Continued,
    /// The line was discarded.
    Dropped,
}

/// Fold state: closed messages so far plus the currently open one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accumulator {
    closed: Vec<Message>,
    open: Option<Message>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes one line.
    ///
    /// `header` is the message opened by the line when it matched a header
    /// rule, or `None` when no rule won.
    pub fn step(mut self, line: &str, header: Option<Message>) -> (Self, LineEffect) {
        if let Some(message) = header {
            if let Some(previous) = self.open.replace(message) {
                self.closed.push(previous);
            }
            return (self, LineEffect::Opened);
        }

        let effect = match self.open.as_mut() {
            Some(open) if !is_system_notice(line) => {
                open.append_line(line);
                LineEffect::Continued
            }
            _ => LineEffect::Dropped,
        };
        (self, effect)
    }

    /// Currently open message, if any.
    pub fn open(&self) -> Option<&Message> {
        self.open.as_ref()
    }

    /// Number of messages closed so far.
    pub fn closed_len(&self) -> usize {
        self.closed.len()
    }

    /// Closes the open message and returns every message in input order.
    pub fn finish(mut self) -> Vec<Message> {
        if let Some(last) = self.open.take() {
            self.closed.push(last);
        }
        self.closed
    }
}

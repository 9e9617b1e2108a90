//! Diagnostic types written to the error sink.
//!
//! Every failure the book or parser can produce is soft: it is rendered
//! here and written out, never propagated as a `Result` error out of
//! `process`.

use crate::OrderId;

/// A line that failed to parse per the wire grammar.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Bad message: {reason} : {truncated_input}")]
pub struct ParseError {
    pub reason: String,
    pub truncated_input: String,
}

impl ParseError {
    /// Diagnostics echo at most this many characters of the offending line.
    const MAX_ECHOED_LEN: usize = 50;

    pub fn new(reason: impl Into<String>, input: &str) -> Self {
        Self {
            reason: reason.into(),
            truncated_input: input.chars().take(Self::MAX_ECHOED_LEN).collect(),
        }
    }
}

/// A request that the book rejected without changing state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProcessError {
    #[error("Unable to process: Order id is being repeated: {0}")]
    DuplicateOrderId(OrderId),
    #[error("No such order with id: {0}")]
    UnknownOrderId(OrderId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display() {
        let err = ParseError::new("unknown message type", "9,1,2,3");
        assert_eq!(format!("{}", err), "Bad message: unknown message type : 9,1,2,3");
    }

    #[test]
    fn parse_error_truncates_long_input() {
        let long = "0,".to_string() + &"9".repeat(100);
        let err = ParseError::new("unparseable numeric", &long);
        assert_eq!(err.truncated_input.chars().count(), 50);
    }

    #[test]
    fn duplicate_order_id_display() {
        let err = ProcessError::DuplicateOrderId(OrderId(1111));
        assert_eq!(
            format!("{}", err),
            "Unable to process: Order id is being repeated: 1111"
        );
    }

    #[test]
    fn unknown_order_id_display() {
        let err = ProcessError::UnknownOrderId(OrderId(999));
        assert_eq!(format!("{}", err), "No such order with id: 999");
    }
}

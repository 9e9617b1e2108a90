//! Wire-level request and event types.

use std::fmt;

use crate::{OrderId, Price, Quantity, Side};

/// A parsed input line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Request {
    AddOrder {
        id: OrderId,
        side: Side,
        quantity: Quantity,
        price: Price,
    },
    CancelOrder {
        id: OrderId,
    },
}

/// An output line produced by a matching pass.
///
/// Variants carry exactly the fields spec'd for the wire format; there is
/// no richer internal `Trade`/`Order` record behind these — they are
/// written out as soon as they're produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// `2,<quantity>,<price>` — the resting (maker) order's price.
    Trade { quantity: Quantity, price: Price },
    /// `3,<order_id>` — this order's residual quantity reached zero.
    FullyFilled { id: OrderId },
    /// `4,<order_id>,<remaining>` — remaining > 0.
    PartiallyFilled { id: OrderId, remaining: Quantity },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Trade { quantity, price } => write!(f, "2,{},{}", quantity, price),
            Event::FullyFilled { id } => write!(f, "3,{}", id),
            Event::PartiallyFilled { id, remaining } => write!(f, "4,{},{}", id, remaining),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trade_display() {
        let event = Event::Trade {
            quantity: 15,
            price: Price(11.0),
        };
        assert_eq!(format!("{}", event), "2,15,11");
    }

    #[test]
    fn fully_filled_display() {
        let event = Event::FullyFilled { id: OrderId(1112) };
        assert_eq!(format!("{}", event), "3,1112");
    }

    #[test]
    fn partially_filled_display() {
        let event = Event::PartiallyFilled {
            id: OrderId(1112),
            remaining: 5,
        };
        assert_eq!(format!("{}", event), "4,1112,5");
    }

    #[test]
    fn trade_display_preserves_fraction() {
        let event = Event::Trade {
            quantity: 1,
            price: Price(15.5),
        };
        assert_eq!(format!("{}", event), "2,1,15.5");
    }
}

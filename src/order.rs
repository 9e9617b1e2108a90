//! Order representation and lifecycle.

use crate::{OrderId, Price, Quantity, Side};

/// An order, resting or in the middle of being matched.
///
/// Identity (`id`, `side`, `price`) is immutable once created; only
/// `quantity` ever changes, and only by a matching pass reducing it. The
/// order is removed from the book the instant `quantity` reaches zero or a
/// cancel names its id — there is no historical record kept around, since
/// the id index must hold exactly the resting orders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub side: Side,
    pub price: Price,
    pub quantity: Quantity,
}

impl Order {
    pub fn new(id: OrderId, side: Side, price: Price, quantity: Quantity) -> Self {
        Self {
            id,
            side,
            price,
            quantity,
        }
    }

    /// Reduce the order's resting quantity by `amount`.
    ///
    /// # Panics
    ///
    /// Panics if `amount` exceeds the current quantity. The matching loop
    /// never computes a fill larger than `min(incoming, resting)`, so this
    /// would indicate a bug in the caller, not a reachable input.
    pub fn reduce(&mut self, amount: Quantity) {
        assert!(
            amount <= self.quantity,
            "fill amount {} exceeds order {} quantity {}",
            amount,
            self.id,
            self.quantity
        );
        self.quantity -= amount;
    }

    #[inline]
    pub fn is_filled(&self) -> bool {
        self.quantity == 0
    }
}

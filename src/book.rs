//! OrderBook: the complete order book with both sides and order storage.
//!
//! This is the core data structure that combines:
//! - Bids (buy orders) sorted high -> low
//! - Asks (sell orders) sorted low -> high
//! - Central order storage for O(1) lookup by OrderId

use rustc_hash::FxHashMap;

use crate::{Order, OrderId, Price, PriceLevels, Quantity, Side};

/// The complete order book.
///
/// Maintains both sides of the book plus a central index of currently
/// resting orders. An order's presence in `orders` and in its price level
/// is the only state it has — there is no historical record kept once an
/// order terminates (fully filled or cancelled).
#[derive(Clone, Debug)]
pub struct OrderBook {
    /// Buy orders, sorted by price descending (best = highest)
    bids: PriceLevels,
    /// Sell orders, sorted by price ascending (best = lowest)
    asks: PriceLevels,
    /// Currently resting orders, indexed by ID
    orders: FxHashMap<OrderId, Order>,
}

impl OrderBook {
    /// Create a new empty order book.
    pub fn new() -> Self {
        Self {
            bids: PriceLevels::new(Side::Buy),
            asks: PriceLevels::new(Side::Sell),
            orders: FxHashMap::default(),
        }
    }

    // === Order access ===

    /// Get a resting order by ID.
    pub fn get_order(&self, order_id: OrderId) -> Option<&Order> {
        self.orders.get(&order_id)
    }

    /// Get a mutable reference to a resting order by ID.
    pub fn get_order_mut(&mut self, order_id: OrderId) -> Option<&mut Order> {
        self.orders.get_mut(&order_id)
    }

    /// Check whether an order with this ID is currently resting.
    pub fn contains_order(&self, order_id: OrderId) -> bool {
        self.orders.contains_key(&order_id)
    }

    /// Returns the number of currently resting orders.
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    // === Book access ===

    /// Get the bids side (buy orders).
    pub fn bids(&self) -> &PriceLevels {
        &self.bids
    }

    /// Get the asks side (sell orders).
    pub fn asks(&self) -> &PriceLevels {
        &self.asks
    }

    /// Get mutable access to bids.
    pub fn bids_mut(&mut self) -> &mut PriceLevels {
        &mut self.bids
    }

    /// Get mutable access to asks.
    pub fn asks_mut(&mut self) -> &mut PriceLevels {
        &mut self.asks
    }

    /// Get the appropriate side for an order.
    pub fn side(&self, side: Side) -> &PriceLevels {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    /// Get mutable access to the appropriate side.
    pub fn side_mut(&mut self, side: Side) -> &mut PriceLevels {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }

    /// Get the opposite side (for matching).
    pub fn opposite_side(&self, side: Side) -> &PriceLevels {
        self.side(side.opposite())
    }

    /// Get mutable access to the opposite side.
    pub fn opposite_side_mut(&mut self, side: Side) -> &mut PriceLevels {
        self.side_mut(side.opposite())
    }

    // === Best prices ===

    /// Get the best bid price (highest buy price).
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.best_price()
    }

    /// Get the best ask price (lowest sell price).
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.best_price()
    }

    /// Get both best bid and best ask.
    pub fn best_bid_ask(&self) -> (Option<Price>, Option<Price>) {
        (self.best_bid(), self.best_ask())
    }

    /// Get the spread (best ask - best bid), if both sides are non-empty.
    pub fn spread(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask.0 - bid.0),
            _ => None,
        }
    }

    /// Check if the book is crossed (best bid >= best ask).
    ///
    /// Should never be true after a matching pass completes.
    pub fn is_crossed(&self) -> bool {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => bid >= ask,
            _ => false,
        }
    }

    // === Order management ===

    /// Add a new order to the book.
    ///
    /// # Panics
    ///
    /// Panics if an order with the same ID is already resting. Callers are
    /// expected to have already checked for a duplicate id before building
    /// the `Order` (this is an internal consistency check, not the place
    /// the duplicate-id diagnostic is produced).
    pub fn add_order(&mut self, order: Order) {
        assert!(
            !self.orders.contains_key(&order.id),
            "order {} already exists",
            order.id
        );

        let side = order.side;
        let price = order.price;
        let quantity = order.quantity;
        let order_id = order.id;

        self.orders.insert(order_id, order);
        self.side_mut(side).insert_order(price, order_id, quantity);
    }

    /// Remove an order from the book entirely (cancel, or full fill).
    ///
    /// Removes it from both the central index and its price level. Returns
    /// the order as it stood at the moment of removal, or `None` if no such
    /// order is resting.
    pub fn remove_order(&mut self, order_id: OrderId) -> Option<Order> {
        let order = self.orders.remove(&order_id)?;
        self.side_mut(order.side)
            .remove_order(order.price, order_id, order.quantity);
        Some(order)
    }

    /// Cancel a resting order, removing it from the book.
    ///
    /// Returns the quantity that was resting at time of cancel, or `None`
    /// if no order with this id is currently resting.
    pub fn cancel_order(&mut self, order_id: OrderId) -> Option<Quantity> {
        self.remove_order(order_id).map(|o| o.quantity)
    }
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}

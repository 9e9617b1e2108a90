//! The matching algorithm: `process_add` and `process_cancel` on [`OrderBook`].

use crate::{Event, Order, OrderBook, OrderId, Price, ProcessError, Quantity, Side};

impl OrderBook {
    /// Process an incoming add-order request, appending events to `events`
    /// for every trade and fill produced.
    ///
    /// Returns `Err` with no state change if `id` is already resting.
    pub fn process_add(
        &mut self,
        id: OrderId,
        side: Side,
        quantity: Quantity,
        price: Price,
        events: &mut Vec<Event>,
    ) -> Result<(), ProcessError> {
        if self.contains_order(id) {
            return Err(ProcessError::DuplicateOrderId(id));
        }

        let mut remaining = quantity;

        while remaining > 0 {
            let opp_price = match self.opposite_side(side).best_price() {
                Some(p) if crosses(side, price, p) => p,
                _ => break,
            };

            let resting_id = match self.opposite_side(side).get_level(opp_price) {
                Some(level) => match level.front() {
                    Some(id) => id,
                    None => break,
                },
                None => break,
            };

            let resting_qty = self
                .get_order(resting_id)
                .expect("id index consistent with level contents")
                .quantity;
            let fill_qty = remaining.min(resting_qty);

            events.push(Event::Trade {
                quantity: fill_qty,
                price: opp_price,
            });

            remaining -= fill_qty;
            if remaining == 0 {
                events.push(Event::FullyFilled { id });
            } else {
                events.push(Event::PartiallyFilled { id, remaining });
            }

            if fill_qty == resting_qty {
                events.push(Event::FullyFilled { id: resting_id });
                self.remove_order(resting_id);
            } else {
                self.get_order_mut(resting_id)
                    .expect("resting order still present")
                    .reduce(fill_qty);
                self.opposite_side_mut(side)
                    .get_level_mut(opp_price)
                    .expect("level still holds the partially filled order")
                    .decrease_quantity(fill_qty);
                events.push(Event::PartiallyFilled {
                    id: resting_id,
                    remaining: resting_qty - fill_qty,
                });
            }
        }

        if remaining > 0 {
            self.add_order(Order::new(id, side, price, remaining));
        }

        Ok(())
    }

    /// Process a cancel request. Emits no events; returns `Err` with no
    /// state change if `id` is not currently resting.
    pub fn process_cancel(&mut self, id: OrderId) -> Result<(), ProcessError> {
        if self.cancel_order(id).is_none() {
            return Err(ProcessError::UnknownOrderId(id));
        }
        Ok(())
    }
}

/// Whether a resting order at `resting_price` can trade against an
/// incoming `side` order at `incoming_price`.
fn crosses(side: Side, incoming_price: Price, resting_price: Price) -> bool {
    match side {
        Side::Buy => resting_price <= incoming_price,
        Side::Sell => resting_price >= incoming_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(book: &mut OrderBook, id: u64, side: Side, qty: Quantity, price: f64) -> Vec<Event> {
        let mut events = Vec::new();
        book.process_add(OrderId(id), side, qty, Price(price), &mut events)
            .unwrap();
        events
    }

    #[test]
    fn resting_order_with_no_cross() {
        let mut book = OrderBook::new();
        let events = add(&mut book, 1, Side::Buy, 10, 100.0);

        assert!(events.is_empty());
        assert_eq!(book.best_bid(), Some(Price(100.0)));
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut book = OrderBook::new();
        add(&mut book, 1, Side::Buy, 10, 100.0);

        let mut events = Vec::new();
        let err = book
            .process_add(OrderId(1), Side::Sell, 5, Price(99.0), &mut events)
            .unwrap_err();

        assert_eq!(err, ProcessError::DuplicateOrderId(OrderId(1)));
        assert!(events.is_empty());
        assert_eq!(book.order_count(), 1);
    }

    #[test]
    fn two_sided_cross_both_fully_filled() {
        let mut book = OrderBook::new();
        add(&mut book, 1111, Side::Sell, 15, 11.0);
        let events = add(&mut book, 1112, Side::Buy, 15, 12.0);

        assert_eq!(
            events,
            vec![
                Event::Trade {
                    quantity: 15,
                    price: Price(11.0)
                },
                Event::FullyFilled { id: OrderId(1112) },
                Event::FullyFilled { id: OrderId(1111) },
            ]
        );
        assert_eq!(book.order_count(), 0);
    }

    #[test]
    fn resting_fully_filled_incoming_partially_filled() {
        let mut book = OrderBook::new();
        add(&mut book, 1111, Side::Sell, 15, 11.0);
        let events = add(&mut book, 1112, Side::Buy, 20, 12.0);

        assert_eq!(
            events,
            vec![
                Event::Trade {
                    quantity: 15,
                    price: Price(11.0)
                },
                Event::PartiallyFilled {
                    id: OrderId(1112),
                    remaining: 5
                },
                Event::FullyFilled { id: OrderId(1111) },
            ]
        );
        assert!(book.asks().is_empty());
        assert_eq!(book.bids().level_count(), 1);
        assert_eq!(book.get_order(OrderId(1112)).unwrap().quantity, 5);
    }

    #[test]
    fn incoming_fully_filled_against_part_of_resting() {
        let mut book = OrderBook::new();
        add(&mut book, 1111, Side::Sell, 15, 11.0);
        let events = add(&mut book, 1112, Side::Buy, 5, 12.0);

        assert_eq!(
            events,
            vec![
                Event::Trade {
                    quantity: 5,
                    price: Price(11.0)
                },
                Event::FullyFilled { id: OrderId(1112) },
                Event::PartiallyFilled {
                    id: OrderId(1111),
                    remaining: 10
                },
            ]
        );
        assert_eq!(book.get_order(OrderId(1111)).unwrap().quantity, 10);
    }

    #[test]
    fn multi_level_sweep_by_incoming_buy() {
        let mut book = OrderBook::new();
        add(&mut book, 1111, Side::Sell, 15, 11.0);
        add(&mut book, 1113, Side::Sell, 5, 10.0);
        let events = add(&mut book, 1112, Side::Buy, 20, 12.0);

        assert_eq!(
            events,
            vec![
                Event::Trade {
                    quantity: 5,
                    price: Price(10.0)
                },
                Event::PartiallyFilled {
                    id: OrderId(1112),
                    remaining: 15
                },
                Event::FullyFilled { id: OrderId(1113) },
                Event::Trade {
                    quantity: 15,
                    price: Price(11.0)
                },
                Event::FullyFilled { id: OrderId(1112) },
                Event::FullyFilled { id: OrderId(1111) },
            ]
        );
        assert!(book.asks().is_empty());
        assert!(book.bids().is_empty());
    }

    #[test]
    fn fifo_same_price() {
        let mut book = OrderBook::new();
        add(&mut book, 1, Side::Sell, 10, 100.0);
        add(&mut book, 2, Side::Sell, 10, 100.0);

        let events = add(&mut book, 3, Side::Buy, 10, 100.0);

        assert_eq!(
            events,
            vec![
                Event::Trade {
                    quantity: 10,
                    price: Price(100.0)
                },
                Event::FullyFilled { id: OrderId(3) },
                Event::FullyFilled { id: OrderId(1) },
            ]
        );
        // order 2 still resting; order 1 was first in FIFO and matched first.
        assert!(book.contains_order(OrderId(2)));
    }

    #[test]
    fn price_priority_buy_sweeps_cheapest_ask_first() {
        let mut book = OrderBook::new();
        add(&mut book, 1, Side::Sell, 10, 101.0);
        add(&mut book, 2, Side::Sell, 10, 100.0);

        let events = add(&mut book, 3, Side::Buy, 10, 101.0);

        assert_eq!(
            events[0],
            Event::Trade {
                quantity: 10,
                price: Price(100.0)
            }
        );
        assert!(book.contains_order(OrderId(1)));
        assert!(!book.contains_order(OrderId(2)));
    }

    #[test]
    fn price_improvement_trade_price_is_makers() {
        let mut book = OrderBook::new();
        add(&mut book, 1, Side::Sell, 10, 100.0);

        let events = add(&mut book, 2, Side::Buy, 10, 105.0);

        assert_eq!(
            events[0],
            Event::Trade {
                quantity: 10,
                price: Price(100.0)
            }
        );
    }

    #[test]
    fn no_cross_rests_on_own_side() {
        let mut book = OrderBook::new();
        add(&mut book, 1, Side::Sell, 10, 105.0);

        let events = add(&mut book, 2, Side::Buy, 10, 100.0);

        assert!(events.is_empty());
        assert_eq!(book.best_bid(), Some(Price(100.0)));
        assert_eq!(book.best_ask(), Some(Price(105.0)));
    }

    #[test]
    fn cancel_unknown_id_errors() {
        let mut book = OrderBook::new();
        let err = book.process_cancel(OrderId(999)).unwrap_err();
        assert_eq!(err, ProcessError::UnknownOrderId(OrderId(999)));
    }

    #[test]
    fn cancel_resting_order() {
        let mut book = OrderBook::new();
        add(&mut book, 1, Side::Buy, 10, 100.0);

        book.process_cancel(OrderId(1)).unwrap();

        assert_eq!(book.order_count(), 0);
        assert_eq!(book.best_bid(), None);
    }

    #[test]
    fn cancel_between_adds_removes_level() {
        let mut book = OrderBook::new();
        add(&mut book, 1, Side::Sell, 10, 100.0);
        add(&mut book, 2, Side::Sell, 10, 100.0);

        book.process_cancel(OrderId(1)).unwrap();

        assert_eq!(book.asks().level_count(), 1);
        assert_eq!(book.asks().total_quantity(), 10);
    }
}

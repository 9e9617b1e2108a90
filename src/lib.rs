//! # matchcore
//!
//! A deterministic, single-threaded limit-order matching engine: a
//! price-time priority order book driven by a strict line-oriented wire
//! protocol.
//!
//! ## Quick start
//!
//! ```
//! use matchcore::{Engine};
//!
//! let mut engine = Engine::new();
//! let input = b"0,1111,1,15,11\n0,1112,0,15,12\n".as_slice();
//! let mut output = Vec::new();
//! let mut errors = Vec::new();
//!
//! engine.run(input, &mut output, &mut errors).unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(output).unwrap(),
//!     "2,15,11\n3,1112\n3,1111\n",
//! );
//! ```
//!
//! ## Price-time priority
//!
//! Orders at the best price match first; within a price level, the order
//! that arrived earliest matches first:
//!
//! ```
//! use matchcore::{OrderBook, OrderId, Price, Side};
//!
//! let mut book = OrderBook::new();
//! let mut events = Vec::new();
//!
//! book.process_add(OrderId(1), Side::Sell, 10, Price(101.0), &mut events).unwrap();
//! book.process_add(OrderId(2), Side::Sell, 10, Price(100.0), &mut events).unwrap();
//!
//! events.clear();
//! book.process_add(OrderId(3), Side::Buy, 10, Price(101.0), &mut events).unwrap();
//!
//! // Order 2 (the cheaper ask) trades first, even though it arrived second.
//! assert_eq!(events[0], matchcore::Event::Trade { quantity: 10, price: Price(100.0) });
//! ```
//!
//! ## Cancellation
//!
//! ```
//! use matchcore::{OrderBook, OrderId, Price, Side};
//!
//! let mut book = OrderBook::new();
//! let mut events = Vec::new();
//! book.process_add(OrderId(1), Side::Buy, 10, Price(99.0), &mut events).unwrap();
//!
//! book.process_cancel(OrderId(1)).unwrap();
//! assert_eq!(book.order_count(), 0);
//!
//! // Cancelling an unknown id is a soft, reported error, not a panic.
//! assert!(book.process_cancel(OrderId(1)).is_err());
//! ```

mod book;
mod engine;
mod error;
mod level;
mod matching;
mod message;
mod order;
mod parser;
mod price_levels;
mod side;
mod types;

pub use book::OrderBook;
pub use engine::{AlreadyStarted, Engine};
pub use error::{ParseError, ProcessError};
pub use level::Level;
pub use message::{Event, Request};
pub use order::Order;
pub use parser::parse_line;
pub use price_levels::PriceLevels;
pub use side::Side;
pub use types::{OrderId, Price, Quantity};

//! Line parser: converts one input line into a [`Request`] or a [`ParseError`].
//!
//! The grammar is strict and whitespace-intolerant everywhere. `str::parse`
//! alone is more permissive than the grammar requires (it accepts a leading
//! `+` and `inf`/`nan` literals for `f64`), so those are rejected explicitly.

use crate::{OrderId, ParseError, Price, Quantity, Request, Side};

/// Parse a single line (no trailing newline) into a [`Request`].
pub fn parse_line(line: &str) -> Result<Request, ParseError> {
    let fields: Vec<&str> = line.split(',').collect();
    match fields.first() {
        Some(&"0") => parse_add(&fields, line),
        Some(&"1") => parse_cancel(&fields, line),
        _ => Err(ParseError::new("unknown message type", line)),
    }
}

fn parse_add(fields: &[&str], line: &str) -> Result<Request, ParseError> {
    if fields.len() != 5 {
        return Err(ParseError::new("wrong number of fields for add order", line));
    }

    let id = parse_uint(fields[1]).ok_or_else(|| ParseError::new("invalid order id", line))?;
    let side = match fields[2] {
        "0" => Side::Buy,
        "1" => Side::Sell,
        _ => return Err(ParseError::new("invalid side, expected 0 or 1", line)),
    };
    let quantity =
        parse_uint(fields[3]).ok_or_else(|| ParseError::new("invalid quantity", line))?;
    if quantity == 0 {
        return Err(ParseError::new("quantity must be greater than zero", line));
    }
    let price = parse_price(fields[4]).map_err(|reason| ParseError::new(reason, line))?;

    Ok(Request::AddOrder {
        id: OrderId(id),
        side,
        quantity,
        price: Price(price),
    })
}

fn parse_cancel(fields: &[&str], line: &str) -> Result<Request, ParseError> {
    if fields.len() != 2 {
        return Err(ParseError::new(
            "wrong number of fields for cancel order",
            line,
        ));
    }

    let id = parse_uint(fields[1]).ok_or_else(|| ParseError::new("invalid order id", line))?;
    Ok(Request::CancelOrder { id: OrderId(id) })
}

/// Strict `uint`: one or more ASCII digits, nothing else.
fn parse_uint(s: &str) -> Option<Quantity> {
    if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse::<u64>().ok()
    } else {
        None
    }
}

fn parse_price(s: &str) -> Result<f64, &'static str> {
    if s.is_empty() {
        return Err("price field is empty");
    }
    if s.starts_with('+') {
        return Err("price must not have a leading '+'");
    }
    let lower = s.to_ascii_lowercase();
    if lower.contains("inf") || lower.contains("nan") {
        return Err("price must be a finite number");
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        Ok(_) => Err("price must be a positive finite number"),
        Err(_) => Err("unparseable price"),
    }
}

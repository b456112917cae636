//! Record codec
//!
//! Converts between `Item` and a single text line.

use std::borrow::Cow;

use crate::catalog::Item;
use crate::error::{Result, StockError};

/// Fields per record: name, category, price, stock
pub const FIELD_COUNT: usize = 4;

// =============================================================================
// Record Encoding/Decoding
// =============================================================================

/// Format an item as one line (no trailing newline)
///
/// Price uses the shortest representation that parses back to the same
/// value, so no precision is lost.
pub fn format_record(item: &Item) -> String {
    format!(
        "{} {} {} {}",
        encode_field(&item.name),
        encode_field(&item.category),
        item.price,
        item.stock
    )
}

/// Parse one line into an item
///
/// `line_no` is 1-based and only used for error messages. Blank lines
/// yield `Ok(None)`.
pub fn parse_record(line: &str, line_no: usize) -> Result<Option<Item>> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.is_empty() {
        return Ok(None);
    }
    if fields.len() != FIELD_COUNT {
        return Err(malformed(
            line_no,
            format!("expected {} fields, got {}", FIELD_COUNT, fields.len()),
        ));
    }

    let name = decode_field(fields[0]).map_err(|reason| malformed(line_no, reason))?;
    let category = decode_field(fields[1]).map_err(|reason| malformed(line_no, reason))?;

    let price: f64 = fields[2]
        .parse()
        .map_err(|_| malformed(line_no, format!("price is not a number: {}", fields[2])))?;
    if !price.is_finite() || price < 0.0 {
        return Err(malformed(
            line_no,
            format!("price must be non-negative: {}", fields[2]),
        ));
    }

    let stock: u32 = fields[3].parse().map_err(|_| {
        malformed(
            line_no,
            format!("stock must be a non-negative integer: {}", fields[3]),
        )
    })?;

    Ok(Some(Item::new(name, category, price, stock)))
}

// =============================================================================
// Field Escaping
// =============================================================================

/// Percent-encode whitespace and `%` inside a field
pub fn encode_field(field: &str) -> Cow<'_, str> {
    if !field.chars().any(needs_escape) {
        return Cow::Borrowed(field);
    }

    let mut out = String::with_capacity(field.len() + 8);
    let mut buf = [0u8; 4];
    for c in field.chars() {
        if needs_escape(c) {
            for byte in c.encode_utf8(&mut buf).bytes() {
                out.push_str(&format!("%{:02X}", byte));
            }
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

/// Reverse `encode_field`
pub fn decode_field(field: &str) -> std::result::Result<String, String> {
    if !field.contains('%') {
        return Ok(field.to_string());
    }

    let bytes = field.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut pos = 0;
    while pos < bytes.len() {
        if bytes[pos] == b'%' {
            let hex = field
                .get(pos + 1..pos + 3)
                .ok_or_else(|| format!("truncated escape in {}", field))?;
            let byte = Some(hex)
                .filter(|h| h.bytes().all(|b| b.is_ascii_hexdigit()))
                .and_then(|h| u8::from_str_radix(h, 16).ok())
                .ok_or_else(|| format!("bad escape %{} in {}", hex, field))?;
            out.push(byte);
            pos += 3;
        } else {
            out.push(bytes[pos]);
            pos += 1;
        }
    }

    String::from_utf8(out).map_err(|_| format!("escape in {} is not valid UTF-8", field))
}

fn needs_escape(c: char) -> bool {
    c == '%' || c.is_whitespace()
}

fn malformed(line: usize, reason: String) -> StockError {
    StockError::Record { line, reason }
}

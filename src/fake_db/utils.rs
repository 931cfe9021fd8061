//! # Pagination and ID Generation
//!
//! ```text
//! paginate_array([10, 20, 30, 40, 50], per_page = 2, page = 2)
//!
//!   page 1     page 2     page 3
//! ┌────────┐ ┌────────┐ ┌────┐
//! │ 10  20 │ │ 30  40 │ │ 50 │
//! └────────┘ └────────┘ └────┘
//!              ▲ returned
//! ```
//!
//! `gen_id` assumes records are append-only and sorted by ascending id. It is
//! a convenience for mock data, not an allocator: nothing guards against
//! out-of-order mutation.

use serde_json::Value;

// ============================================================================
// Pagination
// ============================================================================

/// Returns the records on `page` (1-based), at most `per_page` of them.
///
/// Out-of-range pages yield an empty slice, as do `page == 0` and
/// `per_page == 0`.
pub fn paginate_array<T>(items: &[T], per_page: usize, page: usize) -> &[T] {
    if page == 0 || per_page == 0 {
        return &[];
    }

    let start = (page - 1).saturating_mul(per_page).min(items.len());
    let end = page.saturating_mul(per_page).min(items.len());
    &items[start..end]
}

/// Number of pages needed to show `len` records, `per_page` at a time.
pub fn page_count(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    len.div_ceil(per_page)
}

// ============================================================================
// ID Generation
// ============================================================================

/// A stored record whose identifier can be read as a number.
pub trait Record {
    /// The record's id coerced to a number. `None` when the id is missing
    /// or cannot be read as a number.
    fn numeric_id(&self) -> Option<f64>;
}

impl Record for Value {
    fn numeric_id(&self) -> Option<f64> {
        self.get("id").and_then(coerce_number)
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn numeric_id(&self) -> Option<f64> {
        (**self).numeric_id()
    }
}

/// Returns the id a new record appended to `items` should get.
///
/// The last record's id plus one. Falls back to `items.len() + 1` when the
/// list is empty or when that sum is zero, not a number, or not a whole
/// number. Note an id of `-1` lands on zero and takes the fallback.
pub fn gen_id<R: Record>(items: &[R]) -> i64 {
    let fallback = items.len() as i64 + 1;

    let Some(last) = items.last() else {
        return fallback;
    };

    match last.numeric_id().map(|id| id + 1.0) {
        Some(next) if is_usable_id(next) => next as i64,
        _ => fallback,
    }
}

fn is_usable_id(value: f64) -> bool {
    value.is_finite()
        && value != 0.0
        && value.fract() == 0.0
        && value >= i64::MIN as f64
        && value < i64::MAX as f64
}

/// Reads a JSON value as a number the way loosely typed mock data expects.
///
/// | value              | result          |
/// |--------------------|-----------------|
/// | number             | itself          |
/// | `"  42 "`          | `42.0`          |
/// | `""`               | `0.0`           |
/// | `"0x10"` / `"0b11"` / `"0o17"` | `16.0` / `3.0` / `15.0` |
/// | `"abc"`            | `None`          |
/// | `true` / `false`   | `1.0` / `0.0`   |
/// | `null`             | `0.0`           |
/// | array / object     | `None`          |
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => coerce_str(s),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null => Some(0.0),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn coerce_str(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }

    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some(value) = coerce_radix(trimmed) {
        return value;
    }

    // Rust's float parser also takes "inf" and "NaN", which are not numeric ids.
    let is_decimal = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'));
    if !is_decimal {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Unsigned `0x`, `0b` and `0o` literals. `None` when `s` has no such prefix;
/// `Some(None)` when it has one but the digits don't parse.
fn coerce_radix(s: &str) -> Option<Option<f64>> {
    let (radix, digits) = match s.get(..2)? {
        "0x" | "0X" => (16, &s[2..]),
        "0b" | "0B" => (2, &s[2..]),
        "0o" | "0O" => (8, &s[2..]),
        _ => return None,
    };
    // from_str_radix accepts a leading sign, radix literals do not
    if digits.starts_with(['+', '-']) {
        return Some(None);
    }
    Some(u64::from_str_radix(digits, radix).ok().map(|n| n as f64))
}

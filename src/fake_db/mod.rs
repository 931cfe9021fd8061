//! # Fake Backend Helpers
//!
//! Utilities shared by the mock data layer that stands in for a real API
//! while the dashboard is developed.
//!
//! - [`utils::paginate_array`]: 1-based page slicing
//! - [`utils::gen_id`]: next identifier after the last record
//!
//! Both are pure. They never fail; malformed input degrades to a fallback
//! value instead.

pub mod utils;

pub use utils::{Record, coerce_number, gen_id, page_count, paginate_array};

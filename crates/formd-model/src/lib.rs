//! Record and value types for Form D field normalization.
//!
//! This crate holds the shapes that flow through normalization:
//!
//! - [`FieldValue`] / [`RawRecord`]: one raw input row
//! - [`NormalizedRecord`]: the cleaned row, with `None` as the null marker
//! - [`CellValue`]: a sanitized cell from loosely typed ingestion
//! - [`FieldKind`]: the field vocabulary the default rules know about
//! - [`ConfigurationHistory`]: a bounded history of recent configurations

pub mod cell;
pub mod error;
pub mod field;
pub mod history;
pub mod record;

pub use cell::CellValue;
pub use error::{ModelError, Result};
pub use field::FieldKind;
pub use history::{ConfigurationHistory, DEFAULT_HISTORY_CAPACITY, EvictionPolicy};
pub use record::{FieldValue, NormalizedRecord, NormalizedValue, RawRecord};

//! Failure signaling for scanners that hit input they cannot classify.
//!
//! The crate exposes a single failure value, [`ScanError`], built by whatever
//! upstream component (a tokenizer, a table-driven scanner) reads an input
//! fragment no rule accepts. The value owns the offending fragment and
//! derives a human-readable diagnostic embedding it between guillemets,
//! e.g. `Unknown character «~»`.
//!
//! Propagation is the caller's business: return the value through
//! [`ScanResult`] and let `?` carry it upward. The value is immutable and
//! owns no shared resource, so it moves freely across threads.
//!
//! When the `serde` feature is enabled, [`ScanError`] also implements
//! [`serde::Serialize`] and [`serde::Deserialize`]; see [`error::ser`].

pub mod error;
pub use error::{ScanError, ScanResult};

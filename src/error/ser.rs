//! Serialization support for [`ScanError`](crate::ScanError).
//!
//! When the `serde` feature is enabled, [`ScanError`](crate::ScanError)
//! implements [`serde::Serialize`] and [`serde::Deserialize`] via derive
//! macros, so a caller can persist or forward the failure in JSON, YAML, or
//! any other format supported by serde.
//!
//! ## Example
//!
//! ```ignore
//! use scanerr::ScanError;
//!
//! let err = ScanError::unknown_character("~");
//! let json = serde_json::to_string(&err).unwrap();
//! let parsed: ScanError = serde_json::from_str(&json).unwrap();
//! assert_eq!(err, parsed);
//! ```

#[cfg(feature = "serde")]
pub use serde::{Deserialize, Serialize};

#[cfg(all(test, feature = "serde"))]
mod tests {
    use crate::ScanError;

    #[test]
    fn roundtrip_json() {
        let err = ScanError::unknown_character("~");
        let json = serde_json::to_string(&err).unwrap();
        let deserialized: ScanError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }

    #[test]
    fn json_format_is_readable() {
        let err = ScanError::unknown_character("~");
        let json = serde_json::to_string_pretty(&err).unwrap();

        assert!(json.contains("UnknownCharacter"));
        assert!(json.contains("fragment"));
        assert!(json.contains("~"));
    }

    #[test]
    fn yaml_format_is_readable() {
        let err = ScanError::unknown_character("§");
        let yaml = serde_yml::to_string(&err).unwrap();

        assert!(yaml.contains("UnknownCharacter"));
        assert!(yaml.contains("fragment"));
        assert!(yaml.contains("§"));
    }
}

//! Identity key mappings with a closed key-union companion.
//!
//! [`EnumLike`] turns a set of string keys into a frozen key-to-key mapping:
//! every key maps to itself, entries keep their input order, and nothing can
//! be mutated after construction. The [`key_union!`] macro declares the
//! matching fieldless enum so the compiler rejects values outside the key
//! set, and `is_valid_key`/`require` cover the boundaries where keys arrive
//! as plain runtime strings.
//!
//! ```
//! use enumlike_core::EnumLike;
//!
//! let status = EnumLike::from_keys(["pending", "completed", "failed"]);
//! assert_eq!(status.get("pending"), Some("pending"));
//! assert!(!status.is_valid_key("invalid"));
//! ```

pub mod core;
pub mod union;

pub use crate::core::map::EnumLike;
pub use crate::core::types::{Key, KeyError};
pub use crate::union::KeyUnion;

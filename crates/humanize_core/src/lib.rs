//! Locale-style number formatting and human-readable file sizes.
//!
//! ```
//! use humanize_core::prelude::*;
//!
//! assert_eq!(number_format(1234.5678, Some(2), Some("."), Some("")), "1234.57");
//! assert_eq!(filesizeformat(2048, None), "2 KB");
//! ```

pub mod strings;

pub mod prelude {
    pub use super::strings::*;
}

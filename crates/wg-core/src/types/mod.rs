//! Domain types shared across the workspace.
//!
//! - `FileKind` - File vs directory selection for searches
//!
//! All public types are re-exported here and at the crate root:
//!
//! ```
//! use wg_core::FileKind;
//! use wg_core::types::FileKind as SameKind;
//! ```

mod kind;

pub use kind::FileKind;

//! Theme registry: token scales, shorthand aliases, macros, variants, and
//! per-property resolution rules. Re-exported from the `mailframe_theme`
//! member crate.

pub use mailframe_theme::*;

//! The decomposition pipeline: macro/variant/shorthand expansion followed by
//! token and unit resolution into attributes, styles, and mobile CSS.

use indexmap::IndexMap;

use crate::theme::PropValue;

/// A flat map of author-facing props, in author order.
pub type Props = IndexMap<String, PropValue>;

mod explode;
pub use explode::*;

mod decompose;
pub use decompose::*;

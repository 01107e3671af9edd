//! Theme registry for the mailframe engine: scalar values, token scales,
//! shorthand/macro/variant tables, per-property resolution rules, and the
//! built-in preset theme.

mod value;
pub use value::*;

mod scale;
pub use scale::*;

pub mod units;

mod schema;
pub use schema::*;

mod deserializers;

mod merge;
pub use merge::*;

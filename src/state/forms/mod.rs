//! Form engine: typed fields, declarative rules, submit flow

mod field;
mod options;
mod rules;
mod survey;
mod values;

pub use field::*;
pub use options::*;
pub use rules::*;
pub use survey::*;
pub use values::*;

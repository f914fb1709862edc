//! Command implementations

mod check;
mod convert;
mod count;
mod input;
mod tokenize;

pub use check::check;
pub use convert::convert;
pub use count::count;
pub use tokenize::tokenize;

pub mod aggregate;
pub mod domain;
mod util;

pub use aggregate::*;
pub use domain::*;
pub use util::*;

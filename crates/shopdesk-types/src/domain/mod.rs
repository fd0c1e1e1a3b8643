mod customer;
mod order;
mod product;
mod returns;
mod seller;
mod status;

pub use customer::*;
pub use order::*;
pub use product::*;
pub use returns::*;
pub use seller::*;
pub use status::*;

//! Shared domain types.

mod cart;
mod id;
mod price;

pub use cart::{CartLine, Product};
pub use id::{ProductId, UserId};
pub use price::Price;

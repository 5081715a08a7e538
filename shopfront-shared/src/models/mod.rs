pub mod auth;
pub mod cart;
pub mod errors;

pub use auth::{LoginRequest, LoginResponse};
pub use cart::{CartLine, CartResponse, Product, format_price};
pub use errors::CartFetchError;

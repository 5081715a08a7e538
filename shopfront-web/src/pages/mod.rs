mod cart;
mod error;
mod home;
pub mod login;

pub use cart::CartPage;
pub use error::ErrorPage;
pub use home::HomePage;
pub use login::LoginPage;

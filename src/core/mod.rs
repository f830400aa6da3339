pub mod card;
pub mod error;

pub use card::CardBrand;
pub use error::{AppError, Result};

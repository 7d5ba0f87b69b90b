pub mod cart_service;
pub mod use_cases;

pub use cart_service::*;
pub use use_cases::*;

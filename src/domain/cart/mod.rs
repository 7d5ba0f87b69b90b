//! Cart subdomain: the cart snapshot and its derived display totals.

pub mod entities;
pub mod services;

pub use entities::*;
pub use services::*;

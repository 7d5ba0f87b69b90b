pub mod cms_client;
pub mod commerce_client;
pub mod dto;

pub use cms_client::{CmsClient, CmsConfig};
pub use commerce_client::{CommerceClient, CommerceConfig};

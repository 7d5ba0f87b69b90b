use crate::domain::content::{HeroBanner, NavLink, fallback_nav};
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::http::CmsClient;

/// Use case: load the marketing content the storefront shell needs.
pub struct LoadContentUseCase {
    client: CmsClient,
}

impl LoadContentUseCase {
    pub fn new(client: CmsClient) -> Self {
        Self { client }
    }

    /// Hero and navigation together. Content is decorative, so failures
    /// degrade: an empty hero and the built-in fallback navigation.
    pub async fn load(&self) -> (HeroBanner, Vec<NavLink>) {
        let (hero, nav) =
            futures::join!(self.client.fetch_hero_banner(), self.client.fetch_nav_links());

        let hero = hero.unwrap_or_else(|e| {
            get_logger().warn(
                LogComponent::Application("LoadContent"),
                &format!("⚠️ Hero banner unavailable: {e}"),
            );
            HeroBanner::default()
        });

        let nav = match nav {
            Ok(links) if !links.is_empty() => links,
            Ok(_) => fallback_nav(),
            Err(e) => {
                get_logger().warn(
                    LogComponent::Application("LoadContent"),
                    &format!("⚠️ Navigation unavailable: {e}"),
                );
                fallback_nav()
            }
        };

        (hero, nav)
    }
}

use gloo_net::http::Request;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::content::{HeroBanner, NavLink};
use crate::domain::errors::NetworkError;
use crate::domain::logging::{LogComponent, get_logger};

const HERO_QUERY: &str =
    r#"*[_type == "heroBanner"][0]{heading, subheading, "imageUrl": image.asset->url, ctaLabel, ctaHref}"#;

const NAV_QUERY: &str = r#"*[_type == "navigation"][0].links[]{label, href}"#;

/// CMS query endpoint coordinates.
#[derive(Clone, Debug)]
pub struct CmsConfig {
    pub base_url: String,
    pub dataset: String,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://cms.kalakosa.example".to_string(),
            dataset: "production".to_string(),
        }
    }
}

/// Read-only client for the headless CMS. Content queries only; the
/// storefront never writes to the CMS.
#[derive(Clone)]
pub struct CmsClient {
    config: CmsConfig,
}

/// The CMS wraps every query response in a `result` envelope.
#[derive(Debug, Deserialize)]
struct CmsResult<T> {
    result: Option<T>,
}

impl CmsClient {
    pub fn new(config: CmsConfig) -> Self {
        Self { config }
    }

    pub fn query_url(&self) -> String {
        format!("{}/v1/data/query/{}", self.config.base_url, self.config.dataset)
    }

    async fn query<T: DeserializeOwned>(&self, query: &str) -> Result<Option<T>, NetworkError> {
        let response = Request::get(&self.query_url())
            .query([("query", query)])
            .send()
            .await
            .map_err(|e| NetworkError::HttpRequestFailed(format!("{e:?}")))?;

        if !response.ok() {
            return Err(NetworkError::UnexpectedStatus(response.status()));
        }

        let parsed: CmsResult<T> = response
            .json()
            .await
            .map_err(|e| NetworkError::DecodeFailed(format!("{e:?}")))?;
        Ok(parsed.result)
    }

    /// Landing-page hero. A missing document degrades to the empty
    /// banner rather than an error.
    pub async fn fetch_hero_banner(&self) -> Result<HeroBanner, NetworkError> {
        get_logger().info(LogComponent::Infrastructure("CMS"), "🖼️ Fetching hero banner");
        let dto: Option<HeroBannerDto> = self.query(HERO_QUERY).await?;
        Ok(dto.map(|d| d.to_domain()).unwrap_or_default())
    }

    pub async fn fetch_nav_links(&self) -> Result<Vec<NavLink>, NetworkError> {
        get_logger().info(LogComponent::Infrastructure("CMS"), "🧭 Fetching navigation");
        let dto: Option<Vec<NavLinkDto>> = self.query(NAV_QUERY).await?;
        Ok(dto
            .unwrap_or_default()
            .into_iter()
            .map(|link| link.to_domain())
            .collect())
    }
}

/// DTO for the hero document; every field is optional in the CMS schema
#[derive(Debug, Deserialize)]
struct HeroBannerDto {
    heading: Option<String>,
    subheading: Option<String>,
    #[serde(rename = "imageUrl")]
    image_url: Option<String>,
    #[serde(rename = "ctaLabel")]
    cta_label: Option<String>,
    #[serde(rename = "ctaHref")]
    cta_href: Option<String>,
}

impl HeroBannerDto {
    fn to_domain(self) -> HeroBanner {
        HeroBanner {
            heading: self.heading.unwrap_or_default(),
            subheading: self.subheading.unwrap_or_default(),
            image_url: self.image_url.unwrap_or_default(),
            cta_label: self.cta_label.unwrap_or_default(),
            cta_href: self.cta_href.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct NavLinkDto {
    label: Option<String>,
    href: Option<String>,
}

impl NavLinkDto {
    fn to_domain(self) -> NavLink {
        NavLink {
            label: self.label.unwrap_or_default(),
            href: self.href.unwrap_or_default(),
        }
    }
}

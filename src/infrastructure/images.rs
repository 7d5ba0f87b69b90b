//! Image CDN URL heuristics used by the lazy image component.
//!
//! The CDN scales an asset when a `width` query parameter is present.
//! Anything that is not an http(s) URL (inline data/blob previews) and
//! any URL that already carries a width pass through untouched.

/// Default responsive breakpoints for product imagery.
pub const PRODUCT_IMAGE_WIDTHS: [u32; 3] = [360, 720, 1080];

/// Append a `width` parameter for the CDN scaler.
pub fn optimized_url(url: &str, width: u32) -> String {
    if !is_optimizable(url) || url.contains("width=") {
        return url.to_string();
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}width={width}")
}

/// `srcset` attribute value covering the given breakpoints.
pub fn srcset(url: &str, widths: &[u32]) -> String {
    widths
        .iter()
        .map(|w| format!("{} {w}w", optimized_url(url, *w)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn is_optimizable(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_width_with_question_mark() {
        assert_eq!(
            optimized_url("https://cdn.example.com/diyas.jpg", 720),
            "https://cdn.example.com/diyas.jpg?width=720"
        );
    }

    #[test]
    fn appends_width_with_ampersand_when_query_present() {
        assert_eq!(
            optimized_url("https://cdn.example.com/diyas.jpg?v=42", 360),
            "https://cdn.example.com/diyas.jpg?v=42&width=360"
        );
    }

    #[test]
    fn leaves_data_urls_untouched() {
        let data_url = "data:image/png;base64,iVBORw0KGgo=";
        assert_eq!(optimized_url(data_url, 720), data_url);
    }

    #[test]
    fn leaves_already_sized_urls_untouched() {
        let sized = "https://cdn.example.com/diyas.jpg?width=1080";
        assert_eq!(optimized_url(sized, 360), sized);
    }

    #[test]
    fn builds_srcset_descriptors() {
        assert_eq!(
            srcset("https://cdn.example.com/diyas.jpg", &[360, 720]),
            "https://cdn.example.com/diyas.jpg?width=360 360w, https://cdn.example.com/diyas.jpg?width=720 720w"
        );
    }
}

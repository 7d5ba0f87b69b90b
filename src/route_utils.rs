/// Breadcrumb entry derived from the current path.
#[derive(Clone, Debug, PartialEq)]
pub struct Crumb {
    pub label: String,
    pub href: String,
}

/// Derive the breadcrumb trail for a storefront path.
///
/// `/collections/wall-decor` -> Home / Collections / Wall Decor
pub fn breadcrumb_trail(path: &str) -> Vec<Crumb> {
    let mut crumbs = vec![Crumb { label: "Home".to_string(), href: "/".to_string() }];
    let mut href = String::new();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        href.push('/');
        href.push_str(segment);
        crumbs.push(Crumb { label: humanize_slug(segment), href: href.clone() });
    }
    crumbs
}

/// `wall-decor` -> `Wall Decor`
pub fn humanize_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::humanize_slug;

    #[test]
    fn humanizes_slugs() {
        assert_eq!(humanize_slug("wall-decor"), "Wall Decor");
        assert_eq!(humanize_slug("hand-painted-diyas"), "Hand Painted Diyas");
        assert_eq!(humanize_slug("sarees"), "Sarees");
    }
}

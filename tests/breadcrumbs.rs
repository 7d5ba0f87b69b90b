use craft_storefront_wasm::route_utils::{Crumb, breadcrumb_trail};

#[test]
fn collection_path_builds_a_three_crumb_trail() {
    let trail = breadcrumb_trail("/collections/wall-decor");

    assert_eq!(
        trail,
        vec![
            Crumb { label: "Home".to_string(), href: "/".to_string() },
            Crumb { label: "Collections".to_string(), href: "/collections".to_string() },
            Crumb { label: "Wall Decor".to_string(), href: "/collections/wall-decor".to_string() },
        ]
    );
}

#[test]
fn root_path_is_just_home() {
    assert_eq!(breadcrumb_trail("/"), vec![Crumb {
        label: "Home".to_string(),
        href: "/".to_string()
    }]);
}

#[test]
fn trailing_slash_adds_no_empty_crumb() {
    let trail = breadcrumb_trail("/collections/textiles/");
    assert_eq!(trail.len(), 3);
    assert_eq!(trail[2].label, "Textiles");
}

use super::*;

#[test]
fn only_menus_rises_from_an_offset() {
    for page in PagePreset::ALL {
        let cfg = page.config();
        let expected = if page == PagePreset::Menus { 50.0 } else { 0.0 };
        assert_eq!(cfg.y_offset, expected, "{page}");
        assert_eq!(cfg.scale_range, None);
    }
}

#[test]
fn names_and_routes_parse() {
    assert_eq!("History".parse::<PagePreset>().unwrap(), PagePreset::History);
    assert_eq!("/contact".parse::<PagePreset>().unwrap(), PagePreset::Contact);
    assert!("jobs".parse::<PagePreset>().is_err());
    for page in PagePreset::ALL {
        assert_eq!(page.route().parse::<PagePreset>().unwrap(), page);
    }
}

#[test]
fn overrides_replace_builtins_and_add_pages() {
    let site = SiteConfig::from_json(
        r#"{ "pages": {
            "Menus": { "yOffset": 80, "scaleRange": [1, 0.8] },
            "jobs": { "section2ClassName": "bg-white" }
        } }"#,
    )
    .unwrap();
    assert_eq!(site.page("menus").unwrap().y_offset, 80.0);
    assert_eq!(site.page("menus").unwrap().scale_range, Some([1.0, 0.8]));
    assert_eq!(site.page("/jobs").unwrap().section2_class_name, "bg-white");
    assert_eq!(
        site.page("events").unwrap(),
        &PagePreset::Events.config()
    );
}

#[test]
fn unknown_page_is_a_config_error() {
    let err = SiteConfig::builtin().page("gallery").unwrap_err();
    assert!(matches!(err, ScrollFxError::Config(_)));
}

#[test]
fn bad_json_is_a_serde_error() {
    let err = SiteConfig::from_json("{ pages: ").unwrap_err();
    assert!(matches!(err, ScrollFxError::Serde(_)));
}

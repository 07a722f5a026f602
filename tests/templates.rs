use tera::Tera;

fn templates() -> Tera {
    Tera::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*"))
        .expect("templates should parse")
}

#[test]
fn test_templates_parse() {
    let tera = templates();

    for name in [
        "base.html",
        "products/index.html",
        "products/_list.html",
        "products/form.html",
    ] {
        assert!(
            tera.get_template_names().any(|loaded| loaded == name),
            "missing template {name}"
        );
    }
}

#[test]
fn test_search_script_leaves_redirects_to_the_page_load() {
    let source = std::fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/templates/products/index.html"
    ))
    .expect("index template should be readable");

    // A followed redirect would consume the flash cookie inside fetch.
    assert!(source.contains(r#"redirect: "manual""#));
    assert!(source.contains(r#"response.type === "opaqueredirect""#));
    assert!(!source.contains("response.redirected"));
}

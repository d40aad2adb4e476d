use apichecklist::utils::*;

#[test]
fn test_composite_key() {
    assert_eq!(composite_key("GET", "/pets"), "GET_/pets");
    assert_eq!(composite_key("DELETE", "/users/{name}"), "DELETE_/users/{name}");
}

#[test]
fn test_normalize_fragment_strips_all_leading_separators() {
    assert_eq!(normalize_fragment("/pets/list"), "pets/list");
    assert_eq!(normalize_fragment("///pets/list"), "pets/list");
    assert_eq!(normalize_fragment("Pets/listPets"), "Pets/listPets");
    assert_eq!(normalize_fragment(""), "");
    // only leading separators go
    assert_eq!(normalize_fragment("/pets/"), "pets/");
}

#[test]
fn test_doc_link_keeps_single_boundary() {
    let base = "/swagger-ui/index.html#/";
    assert_eq!(doc_link(base, "/pets/list"), "/swagger-ui/index.html#/pets/list");
    assert_eq!(doc_link(base, "//pets/list"), "/swagger-ui/index.html#/pets/list");
    assert_eq!(doc_link(base, "pets/list"), "/swagger-ui/index.html#/pets/list");
}

#[test]
fn test_doc_link_adds_separator_when_base_lacks_one() {
    let base = "/swagger-ui/index.html#";
    assert_eq!(doc_link(base, "/pets/list"), "/swagger-ui/index.html#/pets/list");
    assert_eq!(doc_link(base, "pets/list"), "/swagger-ui/index.html#/pets/list");
    assert_eq!(doc_link(base, ""), "/swagger-ui/index.html#/");
    assert_eq!(
        doc_link("/swagger-ui/index.html#//", "/pets/list"),
        "/swagger-ui/index.html#/pets/list"
    );
}

#[test]
fn test_doc_link_with_missing_fragment_is_base() {
    let base = "/swagger-ui/index.html#/";
    assert_eq!(doc_link(base, ""), base);
}

#[test]
fn test_format_api_text() {
    assert_eq!(
        format_api_text("GET", "/pets", "list pets"),
        "GET | /pets - list pets"
    );
}

#[test]
fn test_unix_now_is_recent() {
    // 2020-01-01T00:00:00Z
    assert!(unix_now() > 1_577_836_800);
}

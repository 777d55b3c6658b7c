use super::*;

#[test]
fn new_trims_trailing_slashes() {
    let cfg = ApiConfig::new("https://api.example.test/");
    assert_eq!(cfg.base_url, "https://api.example.test");

    let cfg = ApiConfig::new("  https://api.example.test//  ");
    assert_eq!(cfg.base_url, "https://api.example.test");
}

#[test]
fn default_is_same_origin() {
    assert_eq!(ApiConfig::default().base_url, DEFAULT_API_URL);
    assert_eq!(ApiConfig::default().url_for("/user/me"), "/user/me");
}

#[test]
fn url_for_joins_paths() {
    let cfg = ApiConfig::new("http://localhost:8000");
    assert_eq!(cfg.url_for("/user/me"), "http://localhost:8000/user/me");
    assert_eq!(cfg.url_for("user/me"), "http://localhost:8000/user/me");
}

#[test]
fn resolve_prefers_runtime_over_build() {
    assert_eq!(resolve_base_url(Some("http://rt"), Some("http://build")), "http://rt");
}

#[test]
fn resolve_falls_back_to_build_then_default() {
    assert_eq!(resolve_base_url(None, Some("http://build")), "http://build");
    assert_eq!(resolve_base_url(Some("   "), Some("http://build")), "http://build");
    assert_eq!(resolve_base_url(None, None), DEFAULT_API_URL);
    assert_eq!(resolve_base_url(Some(""), Some("")), DEFAULT_API_URL);
}

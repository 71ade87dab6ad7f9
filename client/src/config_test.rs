use super::*;
use portal_session::types::endpoints;

#[test]
fn new_trims_whitespace_and_trailing_slashes() {
    let config = ApiConfig::new("  http://localhost:8000//  ");
    assert_eq!(config.base_url(), "http://localhost:8000");
}

#[test]
fn url_joins_endpoint() {
    let config = ApiConfig::new("https://api.example.com/");
    assert_eq!(config.url(endpoints::LOGIN), "https://api.example.com/api/login");
}

#[test]
fn empty_base_targets_same_origin() {
    let config = ApiConfig::default();
    assert_eq!(config.url(endpoints::USER), "/api/user");
}

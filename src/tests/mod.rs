mod mock;


pub const TEST_BASE_URI: &str = "http://addons.test/api/v2/";

pub const CATALOG: &str = r#"[{"id":1,"name":"Foo"},{"id":5927,"name":"World of Warcraft"}]"#;

pub fn config() -> crate::config::ClientConfig {
    crate::config::ClientConfig::default()
        .with_base_uri(TEST_BASE_URI)
}

pub fn url(path: &str) -> String {
    format!("{TEST_BASE_URI}{path}")
}

use log::Level;

#[cfg(debug_assertions)]
pub fn site_url() -> &'static str {
    "http://localhost:8080"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn site_url() -> &'static str {
    "https://www.sunilbogati.com.np"
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Joins a root-relative asset path onto the site url.
pub fn absolute_url(path: &str) -> String {
    format!("{}/{}", site_url().trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_url_has_single_separator() {
        let url = absolute_url("/gallery/img9.jpeg");
        assert!(url.starts_with(site_url()));
        assert!(url.ends_with("/gallery/img9.jpeg"));
        assert!(!url.contains("//gallery"));
    }
}

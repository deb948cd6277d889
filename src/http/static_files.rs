//! Static asset serving.

use std::path::Path;

use tower_http::services::{ServeDir, ServeFile};

use crate::config::SiteConfig;

/// Create the service behind `/static`, reading from the configured static
/// directory. Missing files answer 404.
pub fn create_static_service(site: &SiteConfig) -> ServeDir {
    ServeDir::new(&site.static_dir)
}

/// Service for a single file at the root of the static directory, for paths
/// browsers request without a prefix such as `/favicon.svg`.
pub fn create_file_service(site: &SiteConfig, name: &str) -> ServeFile {
    ServeFile::new(Path::new(&site.static_dir).join(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_services() {
        let site = SiteConfig {
            static_dir: "/srv/sapunoa/static".to_string(),
            ..SiteConfig::default()
        };
        // Just verify construction - actual file serving tested in integration
        let _service = create_static_service(&site);
        let _file = create_file_service(&site, "favicon.svg");
    }
}

use std::path::Path;

use tera::Tera;

use crate::config::{HOME_TEMPLATE, TEMPLATE_GLOB};
use crate::error::AppError;

/// Home page compiled into the binary, used when the template directory has none
const BUILTIN_HOME: &str = include_str!("../html/index.html");

/// Initialize the Tera template engine from `template_dir`.
///
/// A missing directory is not an error: the built-in home page is registered instead,
/// so the service can run from a bare container image.
pub fn init_templates(template_dir: &str) -> Result<Tera, AppError> {
    let dir = Path::new(template_dir);

    let mut tera = if dir.is_dir() {
        let glob = dir.join(TEMPLATE_GLOB);
        Tera::new(&glob.to_string_lossy())?
    } else {
        tracing::warn!(dir = %template_dir, "Template directory not found, using built-in templates");
        Tera::default()
    };

    if !tera.get_template_names().any(|name| name == HOME_TEMPLATE) {
        tera.add_raw_template(HOME_TEMPLATE, BUILTIN_HOME)?;
    }

    Ok(tera)
}

/// Render the home page with the application name and current time.
pub fn render_home(tera: &Tera, app_name: &str, current_time: &str) -> Result<String, tera::Error> {
    let mut context = tera::Context::new();
    context.insert("app_name", app_name);
    context.insert("current_time", current_time);
    tera.render(HOME_TEMPLATE, &context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dir_uses_builtin() {
        let tera = init_templates("/nonexistent/templates").unwrap();
        let html = render_home(&tera, "ping-pong", "2024-01-01 00:00:00 UTC").unwrap();
        assert!(html.contains("ping-pong"));
        assert!(html.contains("2024-01-01 00:00:00 UTC"));
    }

    #[test]
    fn test_dir_template_overrides_builtin() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("index.html"),
            "<p>{{ app_name }} at {{ current_time }}</p>",
        )
        .unwrap();

        let tera = init_templates(&dir.path().to_string_lossy()).unwrap();
        let html = render_home(&tera, "custom", "now").unwrap();
        assert_eq!(html, "<p>custom at now</p>");
    }

    #[test]
    fn test_empty_dir_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let tera = init_templates(&dir.path().to_string_lossy()).unwrap();
        assert!(render_home(&tera, "ping-pong", "now").is_ok());
    }

    #[test]
    fn test_app_name_is_escaped() {
        let tera = init_templates("/nonexistent/templates").unwrap();
        let html = render_home(&tera, "<script>", "now").unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}

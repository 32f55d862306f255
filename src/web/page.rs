//! HTML page shell around a server-rendered component.
//!
//! Interactive pages embed the component's props as JSON next to a module
//! script that loads the client bundle; the client reads the same JSON back so
//! its first render matches the server markup. Static pages carry neither.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::component::Component;
use crate::config::{Config, RenderMode};
use crate::constants::{DATA_ELEMENT_ID, ROOT_ELEMENT_ID};
use crate::markup;

/// Page-level settings for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageShell<'a> {
    /// Document title.
    pub title: &'a str,
    /// Whether hydration data and the client bundle are included.
    pub mode: RenderMode,
    /// URL of the client JS module.
    pub bundle_url: &'a str,
}

impl<'a> PageShell<'a> {
    /// Takes the title and bundle URL from the configuration.
    #[must_use]
    pub fn from_config(config: &'a Config, mode: RenderMode) -> Self {
        Self {
            title: &config.page.title,
            mode,
            bundle_url: &config.client.bundle_url,
        }
    }

    /// Renders a full HTML document with `component` inside the root element.
    ///
    /// # Errors
    ///
    /// Returns an error if the component's props cannot be serialized.
    pub fn render<C>(&self, component: &C) -> Result<String>
    where
        C: Component,
        C::Props: Serialize,
    {
        let mut html = String::from("<!doctype html>");
        html.push_str(r#"<html><head><meta charset="utf-8">"#);
        html.push_str(&format!("<title>{}</title>", markup::escape_text(self.title)));

        if self.mode.is_interactive() {
            let data = markup::json_for_script(&component.props())
                .context("Failed to serialize hydration data")?;
            let bundle = markup::json_for_script(self.bundle_url)
                .context("Failed to serialize bundle URL")?;

            html.push_str(&format!(
                r#"<script type="application/json" id="{DATA_ELEMENT_ID}">{data}</script>"#
            ));
            html.push_str(&format!(
                r#"<script type="module">import init, {{ hydrate }} from {bundle};init().then(() => hydrate());</script>"#
            ));
        }

        html.push_str("</head><body>");
        html.push_str(&format!(
            r#"<div id="{ROOT_ELEMENT_ID}">{}</div>"#,
            component.render()
        ));
        html.push_str("</body></html>");

        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{StroopProps, StroopView};

    fn shell(mode: RenderMode) -> PageShell<'static> {
        PageShell {
            title: "Stroop",
            mode,
            bundle_url: "/pkg/stroop.js",
        }
    }

    #[test]
    fn test_interactive_page() {
        let view = StroopView::new(StroopProps::new("blue", "green"));
        let html = shell(RenderMode::Interactive).render(&view).unwrap();

        assert!(html.starts_with("<!doctype html><html>"));
        assert!(html.contains(
            r#"<script type="application/json" id="stroop-data">{"name":"blue","color":"green"}</script>"#
        ));
        assert!(html.contains(r#"from "/pkg/stroop.js""#));
        assert!(html.contains(&format!(r#"<div id="app">{}</div>"#, view.render())));
        assert!(html.ends_with("</body></html>"));
    }

    #[test]
    fn test_static_page_has_no_client() {
        let view = StroopView::new(StroopProps::new("blue", "green"));
        let html = shell(RenderMode::Static).render(&view).unwrap();

        assert!(!html.contains("<script"));
        assert!(!html.contains("stroop-data"));
        assert!(html.contains(&format!(r#"<div id="app">{}</div>"#, view.render())));
    }

    #[test]
    fn test_hydration_data_cannot_close_script() {
        let view = StroopView::new(StroopProps::new("</script><b>", "red"));
        let html = shell(RenderMode::Interactive).render(&view).unwrap();

        // Only the two real script elements are closed
        assert_eq!(html.matches("</script>").count(), 2);
    }

    #[test]
    fn test_title_and_bundle_are_escaped() {
        let view = StroopView::default();
        let page = PageShell {
            title: "<Stroop>",
            mode: RenderMode::Interactive,
            bundle_url: "/pkg/</script>.js",
        };
        let html = page.render(&view).unwrap();

        assert!(html.contains("<title>&lt;Stroop&gt;</title>"));
        assert_eq!(html.matches("</script>").count(), 2);
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::new();
        config.client.bundle_url = "http://localhost:3001/pkg/stroop.js".to_string();
        let page = PageShell::from_config(&config, RenderMode::Static);

        assert_eq!(page.title, "Stroop");
        assert_eq!(page.bundle_url, "http://localhost:3001/pkg/stroop.js");
        assert_eq!(page.mode, RenderMode::Static);
    }
}

//! HTML rendering for a [`PageModel`].

pub mod html;
pub mod sections;
pub mod skills;
pub mod style;

use crate::core::viewport::{Viewport, COMPACT_BREAKPOINT_PX};
use crate::domain::model::{PageModel, ViewMode};
use html::{escape_html, AssetResolver};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget {
    /// 兩種技能版面都輸出，由瀏覽器端腳本依寬度切換
    Responsive,
    /// 以固定寬度輸出單一版面
    Snapshot { width: u32 },
}

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions<'a> {
    pub target: RenderTarget,
    pub breakpoint: u32,
    pub asset_prefix: &'a str,
}

impl Default for RenderOptions<'_> {
    fn default() -> Self {
        Self {
            target: RenderTarget::Responsive,
            breakpoint: COMPACT_BREAKPOINT_PX,
            asset_prefix: "",
        }
    }
}

impl RenderOptions<'_> {
    /// `None` means the page carries both paths.
    pub fn fixed_mode(&self) -> Option<ViewMode> {
        match self.target {
            RenderTarget::Responsive => None,
            RenderTarget::Snapshot { width } => {
                Some(Viewport::with_breakpoint(width, self.breakpoint).mode())
            }
        }
    }
}

pub fn render_page(page: &PageModel, options: &RenderOptions<'_>) -> String {
    let resolver = AssetResolver::new(options.asset_prefix);
    let mode = options.fixed_mode();

    let html_class = match mode {
        Some(ViewMode::Compact) => " class=\"compact\"",
        _ => "",
    };

    let mut html = String::with_capacity(16 * 1024);
    html.push_str("<!DOCTYPE html>");
    html.push_str(&format!(
        "<html lang=\"{}\"{}>",
        escape_html(&page.lang),
        html_class
    ));
    html.push_str("<head><meta charset=\"utf-8\">");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
    html.push_str(&format!("<title>{}</title>", escape_html(&page.site_title)));
    html.push_str(&format!("<style>{}</style>", style::PAGE_CSS));
    if mode.is_none() {
        html.push_str(&format!(
            "<script>{}</script>",
            style::compact_mode_script(options.breakpoint)
        ));
    }
    html.push_str("</head><body><main class=\"page\"><div class=\"container\">");

    if let Some(personal) = &page.personal {
        html.push_str(&sections::render_profile(&resolver, personal));
    }
    for section in &page.sections {
        html.push_str(&sections::render_section(&resolver, section));
    }
    html.push_str(&sections::render_projects(&resolver, &page.projects));
    if let Some(skills) = &page.skills {
        html.push_str(&skills::render_skills(&resolver, skills, mode));
    }
    html.push_str(&sections::render_footer(
        page.generated_year,
        page.personal.as_ref(),
    ));

    html.push_str("</div></main></body></html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{IconSkill, Personal, SkillsView};

    fn page() -> PageModel {
        let with_logos = vec![IconSkill::new("Rust", "/logos/rust.svg")];
        PageModel {
            site_title: "Ada <Portfolio>".to_string(),
            lang: "en".to_string(),
            personal: Some(Personal {
                name: Some("Ada".to_string()),
                ..Default::default()
            }),
            skills: Some(SkillsView {
                ring_set: crate::core::rings::compute_default_rings(&with_logos),
                with_logos,
                without_logos: vec![],
            }),
            generated_year: 2026,
            ..Default::default()
        }
    }

    #[test]
    fn test_responsive_page_has_script() {
        let html = render_page(&page(), &RenderOptions::default());
        assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\">"));
        assert!(html.contains("<title>Ada &lt;Portfolio&gt;</title>"));
        assert!(html.contains("var bp=768;"));
        assert!(html.contains("<div class=\"view-compact\">"));
        assert!(html.contains("<div class=\"view-wide\">"));
    }

    #[test]
    fn test_snapshot_compact() {
        let options = RenderOptions {
            target: RenderTarget::Snapshot { width: 500 },
            ..Default::default()
        };
        let html = render_page(&page(), &options);
        assert!(html.contains("<html lang=\"en\" class=\"compact\">"));
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<div class=\"orbit-stage\">"));
        assert!(html.contains("<div class=\"skill-grid skill-grid--compact\">"));
    }

    #[test]
    fn test_snapshot_wide() {
        let options = RenderOptions {
            target: RenderTarget::Snapshot { width: 1024 },
            ..Default::default()
        };
        let html = render_page(&page(), &options);
        assert!(html.contains("<div class=\"orbit-stage\">"));
        assert!(!html.contains("<div class=\"view-compact\">"));
    }

    #[test]
    fn test_asset_prefix_applies() {
        let options = RenderOptions {
            asset_prefix: "/p7",
            ..Default::default()
        };
        let html = render_page(&page(), &options);
        assert!(html.contains("src=\"/p7/logos/rust.svg\""));
    }

    #[test]
    fn test_custom_breakpoint() {
        let options = RenderOptions {
            target: RenderTarget::Snapshot { width: 900 },
            breakpoint: 1000,
            asset_prefix: "",
        };
        assert_eq!(options.fixed_mode(), Some(ViewMode::Compact));
    }
}

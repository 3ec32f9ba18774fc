//! Skills section: ring stage for wide viewports, icon grid for compact ones.

use crate::domain::model::{IconSkill, Ring, SkillsView, ViewMode};
use crate::render::html::{escape_html, img_tag, AssetResolver};

const COMPACT_ICON_SIZE: u32 = 32;
const REMAINING_ICON_SIZE: u32 = 40;

fn skill_tile(resolver: &AssetResolver<'_>, skill: &IconSkill, size: u32) -> String {
    format!(
        "<div class=\"skill-tile\">{}<span class=\"skill-name\">{}</span></div>",
        img_tag(resolver, &skill.logo, &skill.name, size, ""),
        escape_html(&skill.name)
    )
}

fn render_ring(resolver: &AssetResolver<'_>, ring: &Ring, mode: ViewMode) -> String {
    let radius = ring.radius.pick(mode);
    let icon_size = ring.icon_size.pick(mode);
    let class = if ring.reverse {
        "orbit orbit--reverse"
    } else {
        "orbit"
    };

    let mut html = format!(
        "<div class=\"{class}\" style=\"--radius:{radius}px;--duration:{}s;--icon-size:{icon_size}px\">\
<div class=\"orbit-path\"></div>",
        ring.rotation_period_secs
    );

    let count = ring.members.len();
    for (index, skill) in ring.members.iter().enumerate() {
        let angle = 360.0 * index as f64 / count as f64;
        html.push_str(&format!(
            "<div class=\"orbit-icon\" style=\"--angle:{angle:.2}deg\" title=\"{}\">{}</div>",
            escape_html(&skill.name),
            img_tag(resolver, &skill.logo, &skill.name, icon_size, "")
        ));
    }

    html.push_str("</div>");
    html
}

/// 窄版：所有有圖示的技能排成三欄網格
pub fn render_compact_path(resolver: &AssetResolver<'_>, skills: &SkillsView) -> String {
    if skills.with_logos.is_empty() {
        return String::new();
    }

    let mut html = String::from("<div class=\"view-compact\"><div class=\"skill-grid skill-grid--compact\">");
    for skill in &skills.with_logos {
        html.push_str(&skill_tile(resolver, skill, COMPACT_ICON_SIZE));
    }
    html.push_str("</div></div>");
    html
}

/// 寬版：軌道圈，加上超出上限的技能網格
pub fn render_wide_path(resolver: &AssetResolver<'_>, skills: &SkillsView, mode: ViewMode) -> String {
    let ring_set = &skills.ring_set;
    let has_orbiting = ring_set.orbiting_len() > 0;
    let has_remaining = !ring_set.remaining.is_empty();
    if !has_orbiting && !has_remaining {
        return String::new();
    }

    let mut html = String::from("<div class=\"view-wide\">");

    if has_orbiting {
        html.push_str("<div class=\"orbit-stage\">");
        for ring in &ring_set.rings {
            html.push_str(&render_ring(resolver, ring, mode));
        }
        html.push_str("</div>");
    }

    if has_remaining {
        html.push_str(
            "<div class=\"skills-extra\"><h3>Additional Technologies</h3>\
<div class=\"skill-grid skill-grid--remaining\">",
        );
        for skill in &ring_set.remaining {
            html.push_str(&skill_tile(resolver, skill, REMAINING_ICON_SIZE));
        }
        html.push_str("</div></div>");
    }

    html.push_str("</div>");
    html
}

fn render_other(skills: &SkillsView) -> String {
    if skills.without_logos.is_empty() {
        return String::new();
    }

    let mut html =
        String::from("<div class=\"skills-extra\"><h3>Other Technologies</h3><div class=\"skill-pills\">");
    for skill in &skills.without_logos {
        html.push_str(&format!(
            "<span class=\"skill-pill\">{}</span>",
            escape_html(&skill.name)
        ));
    }
    html.push_str("</div></div>");
    html
}

/// `mode` 為 `None` 時兩條版面都輸出，由 `compact` class 切換
pub fn render_skills(
    resolver: &AssetResolver<'_>,
    skills: &SkillsView,
    mode: Option<ViewMode>,
) -> String {
    let mut html = String::from(
        "<section id=\"skills\" class=\"skills\"><div class=\"section-heading\"><h2>Technical Skills</h2></div>",
    );

    match mode {
        Some(ViewMode::Compact) => html.push_str(&render_compact_path(resolver, skills)),
        Some(ViewMode::Wide) => html.push_str(&render_wide_path(resolver, skills, ViewMode::Wide)),
        None => {
            html.push_str(&render_compact_path(resolver, skills));
            html.push_str(&render_wide_path(resolver, skills, ViewMode::Wide));
        }
    }

    html.push_str(&render_other(skills));
    html.push_str("</section>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rings::compute_default_rings;
    use crate::domain::model::Skill;

    fn view(with_logos: usize, without_logos: usize) -> SkillsView {
        let with_logos: Vec<IconSkill> = (0..with_logos)
            .map(|i| IconSkill::new(format!("tech-{}", i), format!("/logos/{}.svg", i)))
            .collect();
        let without_logos = (0..without_logos)
            .map(|i| Skill {
                name: format!("plain-{}", i),
                logo: None,
            })
            .collect();
        SkillsView {
            ring_set: compute_default_rings(&with_logos),
            with_logos,
            without_logos,
        }
    }

    #[test]
    fn test_compact_mode_renders_grid_only() {
        let resolver = AssetResolver::new("");
        let html = render_skills(&resolver, &view(10, 0), Some(ViewMode::Compact));
        assert!(html.contains("skill-grid--compact"));
        assert!(!html.contains("orbit-stage"));
        assert_eq!(html.matches("width=\"32\"").count(), 10);
    }

    #[test]
    fn test_wide_mode_renders_rings() {
        let resolver = AssetResolver::new("");
        let html = render_skills(&resolver, &view(10, 0), Some(ViewMode::Wide));
        assert!(html.contains("orbit-stage"));
        assert!(!html.contains("skill-grid--compact"));
        assert_eq!(html.matches("class=\"orbit\"").count(), 1);
        assert_eq!(html.matches("class=\"orbit orbit--reverse\"").count(), 1);
        assert!(html.contains("--radius:220px;--duration:20s;--icon-size:40px"));
        assert!(html.contains("class=\"orbit orbit--reverse\""));
        assert!(!html.contains("Additional Technologies"));
    }

    #[test]
    fn test_remaining_grid_only_in_wide_mode() {
        let resolver = AssetResolver::new("");
        let skills = view(40, 0);
        let wide = render_skills(&resolver, &skills, Some(ViewMode::Wide));
        assert!(wide.contains("Additional Technologies"));
        assert_eq!(wide.matches("skill-tile").count(), 4);

        let compact = render_skills(&resolver, &skills, Some(ViewMode::Compact));
        assert!(!compact.contains("Additional Technologies"));
        assert_eq!(compact.matches("skill-tile").count(), 40);
    }

    #[test]
    fn test_other_technologies_in_every_mode() {
        let resolver = AssetResolver::new("");
        let skills = view(3, 2);
        for mode in [Some(ViewMode::Compact), Some(ViewMode::Wide), None] {
            let html = render_skills(&resolver, &skills, mode);
            assert!(html.contains("Other Technologies"));
            assert!(html.contains("<span class=\"skill-pill\">plain-1</span>"));
        }
    }

    #[test]
    fn test_responsive_renders_both_paths() {
        let resolver = AssetResolver::new("");
        let html = render_skills(&resolver, &view(5, 0), None);
        assert!(html.contains("view-compact"));
        assert!(html.contains("view-wide"));
    }

    #[test]
    fn test_empty_skills_keeps_heading() {
        let resolver = AssetResolver::new("");
        let html = render_skills(&resolver, &view(0, 0), None);
        assert!(html.contains("<h2>Technical Skills</h2>"));
        assert!(!html.contains("<div class=\"view-wide\">"));
        assert!(!html.contains("Other Technologies"));
    }

    #[test]
    fn test_compact_ring_values_use_mobile_alternative() {
        let resolver = AssetResolver::new("");
        let skills = view(4, 0);
        let html = render_ring(&resolver, &skills.ring_set.rings[0], ViewMode::Compact);
        assert!(html.contains("--radius:120px"));
        assert!(html.contains("--icon-size:32px"));
    }
}

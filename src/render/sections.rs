//! Profile header, item sections and project cards.

use crate::domain::model::{CustomLink, DisplayItem, LayoutType, Personal, Project, Section};
use crate::render::html::{escape_html, img_tag, slugify, AssetResolver};

const ITEM_LOGO_SIZE: u32 = 48;
const AVATAR_SIZE: u32 = 128;

fn link_anchor(resolver: &AssetResolver<'_>, label: &str, url: &str) -> String {
    format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        resolver.resolve_attr(url),
        escape_html(label)
    )
}

/// 沒有 url 的連結不輸出；沒有名稱時以網址作為文字
pub fn render_links(resolver: &AssetResolver<'_>, links: &[CustomLink]) -> String {
    let anchors: Vec<String> = links
        .iter()
        .filter_map(|link| {
            let url = link.url.as_deref()?;
            let label = link.name.as_deref().unwrap_or(url);
            Some(link_anchor(resolver, label, url))
        })
        .collect();

    if anchors.is_empty() {
        String::new()
    } else {
        format!("<nav class=\"links\">{}</nav>", anchors.concat())
    }
}

pub fn render_profile(resolver: &AssetResolver<'_>, personal: &Personal) -> String {
    if personal.is_empty() {
        return String::new();
    }

    let mut html = String::from("<header class=\"profile\">");

    if let Some(avatar) = &personal.avatar {
        let alt = personal.name.as_deref().unwrap_or("Avatar");
        html.push_str(&img_tag(resolver, avatar, alt, AVATAR_SIZE, "profile-avatar"));
    }
    if let Some(name) = &personal.name {
        html.push_str(&format!("<h1>{}</h1>", escape_html(name)));
    }
    if let Some(title) = &personal.title {
        html.push_str(&format!("<p class=\"profile-title\">{}</p>", escape_html(title)));
    }
    if let Some(location) = &personal.location {
        html.push_str(&format!(
            "<p class=\"profile-location\">{}</p>",
            escape_html(location)
        ));
    }
    if let Some(bio) = &personal.bio {
        html.push_str(&format!("<p class=\"profile-bio\">{}</p>", escape_html(bio)));
    }

    let mut links = Vec::new();
    if let Some(email) = &personal.email {
        links.push(CustomLink {
            name: Some(email.clone()),
            url: Some(format!("mailto:{}", email)),
        });
    }
    if let Some(custom) = &personal.custom_links {
        links.extend(custom.iter().cloned());
    }
    html.push_str(&render_links(resolver, &links));

    html.push_str("</header>");
    html
}

fn render_item_body(resolver: &AssetResolver<'_>, item: &DisplayItem) -> String {
    let mut html = String::from("<div class=\"item-body\"><div class=\"item-header\">");

    if let Some(title) = &item.primary_title {
        html.push_str(&format!("<h3>{}</h3>", escape_html(title)));
    }
    if let Some(date) = &item.date_info {
        html.push_str(&format!("<span class=\"item-date\">{}</span>", escape_html(date)));
    }
    html.push_str("</div>");

    if let Some(secondary) = &item.secondary_title {
        html.push_str(&format!(
            "<p class=\"item-secondary\">{}</p>",
            escape_html(secondary)
        ));
    }
    if let Some(location) = &item.location {
        html.push_str(&format!(
            "<p class=\"item-location\">{}</p>",
            escape_html(location)
        ));
    }
    if let Some(description) = &item.description {
        html.push_str(&format!(
            "<p class=\"item-description\">{}</p>",
            escape_html(description)
        ));
    }
    if let Some(links) = &item.custom_links {
        html.push_str(&render_links(resolver, links));
    }

    html.push_str("</div>");
    html
}

fn render_item_logo(resolver: &AssetResolver<'_>, item: &DisplayItem) -> String {
    match &item.logo_url {
        Some(logo) => {
            let alt = item.primary_title.as_deref().unwrap_or("Logo");
            img_tag(resolver, logo, alt, ITEM_LOGO_SIZE, "item-logo")
        }
        None => String::new(),
    }
}

pub fn render_section(resolver: &AssetResolver<'_>, section: &Section) -> String {
    if section.items.is_empty() {
        return String::new();
    }

    let (layout_class, open, close, item_tag, item_class) = match section.layout_type {
        LayoutType::Card => ("section--card", "<div class=\"cards\">", "</div>", "article", "card"),
        LayoutType::List => ("section--list", "<ul class=\"item-list\">", "</ul>", "li", "list-item"),
        LayoutType::Timeline => (
            "section--timeline",
            "<ol class=\"timeline\">",
            "</ol>",
            "li",
            "timeline-item",
        ),
    };

    let mut html = format!(
        "<section id=\"{}\" class=\"section {}\"><h2>{}</h2>{}",
        slugify(&section.section_name),
        layout_class,
        escape_html(&section.section_name),
        open
    );

    for item in &section.items {
        html.push_str(&format!("<{item_tag} class=\"{item_class}\">"));
        if section.layout_type == LayoutType::Timeline {
            html.push_str("<span class=\"timeline-dot\"></span>");
        }
        html.push_str(&render_item_logo(resolver, item));
        html.push_str(&render_item_body(resolver, item));
        html.push_str(&format!("</{item_tag}>"));
    }

    html.push_str(close);
    html.push_str("</section>");
    html
}

fn render_project(resolver: &AssetResolver<'_>, project: &Project) -> String {
    let mut html = String::from("<article class=\"project-card\"><div class=\"project-card-inner\">");

    if let Some(image) = &project.image {
        let alt = project.name.as_deref().unwrap_or("Project");
        html.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\" class=\"project-image\" loading=\"lazy\">",
            resolver.resolve_attr(image),
            escape_html(alt)
        ));
    }
    if let Some(name) = &project.name {
        html.push_str(&format!("<h3>{}</h3>", escape_html(name)));
    }
    if let Some(description) = &project.description {
        html.push_str(&format!(
            "<p class=\"item-description\">{}</p>",
            escape_html(description)
        ));
    }
    if let Some(technologies) = project.technologies.as_ref().filter(|t| !t.is_empty()) {
        html.push_str("<ul class=\"tags\">");
        for tech in technologies {
            html.push_str(&format!("<li class=\"tag\">{}</li>", escape_html(tech)));
        }
        html.push_str("</ul>");
    }

    let mut links = Vec::new();
    if let Some(url) = &project.github_url {
        links.push(CustomLink {
            name: Some("GitHub".to_string()),
            url: Some(url.clone()),
        });
    }
    if let Some(url) = &project.live_url {
        links.push(CustomLink {
            name: Some("Live".to_string()),
            url: Some(url.clone()),
        });
    }
    if let Some(custom) = &project.custom_links {
        links.extend(custom.iter().cloned());
    }
    html.push_str(&render_links(resolver, &links));

    html.push_str("</div></article>");
    html
}

pub fn render_projects(resolver: &AssetResolver<'_>, projects: &[Project]) -> String {
    if projects.is_empty() {
        return String::new();
    }

    let mut html =
        String::from("<section id=\"projects\" class=\"section\"><h2>Projects</h2><div class=\"project-grid\">");
    for project in projects {
        html.push_str(&render_project(resolver, project));
    }
    html.push_str("</div></section>");
    html
}

pub fn render_footer(year: i32, personal: Option<&Personal>) -> String {
    let owner = personal.and_then(|p| p.name.as_deref());
    match owner {
        Some(name) => format!(
            "<footer class=\"footer\">&copy; {} {}</footer>",
            year,
            escape_html(name)
        ),
        None => format!("<footer class=\"footer\">&copy; {}</footer>", year),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> DisplayItem {
        DisplayItem {
            primary_title: Some("Acme".to_string()),
            secondary_title: Some("Engineer".to_string()),
            date_info: Some("2020 - 2022".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_absent_fields_produce_no_markup() {
        let resolver = AssetResolver::new("");
        let html = render_item_body(&resolver, &item());
        assert!(html.contains("<h3>Acme</h3>"));
        assert!(html.contains("2020 - 2022"));
        assert!(!html.contains("item-location"));
        assert!(!html.contains("item-description"));
        assert!(!html.contains("class=\"links\""));
    }

    #[test]
    fn test_section_layouts() {
        let resolver = AssetResolver::new("");
        let mut section = Section {
            section_name: "Work Experience".to_string(),
            layout_type: LayoutType::Card,
            items: vec![item()],
        };
        assert!(render_section(&resolver, &section).contains("<article class=\"card\">"));

        section.layout_type = LayoutType::List;
        assert!(render_section(&resolver, &section).contains("<ul class=\"item-list\">"));

        section.layout_type = LayoutType::Timeline;
        let html = render_section(&resolver, &section);
        assert!(html.contains("<ol class=\"timeline\">"));
        assert!(html.contains("timeline-dot"));
        assert!(html.starts_with("<section id=\"work-experience\""));
    }

    #[test]
    fn test_empty_section_is_omitted() {
        let resolver = AssetResolver::new("");
        let section = Section {
            section_name: "Education".to_string(),
            layout_type: LayoutType::Card,
            items: vec![],
        };
        assert!(render_section(&resolver, &section).is_empty());
    }

    #[test]
    fn test_links_without_url_are_skipped() {
        let resolver = AssetResolver::new("");
        let links = vec![
            CustomLink {
                name: Some("Broken".to_string()),
                url: None,
            },
            CustomLink {
                name: None,
                url: Some("https://example.com".to_string()),
            },
        ];
        let html = render_links(&resolver, &links);
        assert!(!html.contains("Broken"));
        assert!(html.contains(">https://example.com</a>"));
    }

    #[test]
    fn test_profile_with_email() {
        let resolver = AssetResolver::new("/p7");
        let personal = Personal {
            name: Some("Ada <Lovelace>".to_string()),
            email: Some("ada@example.com".to_string()),
            avatar: Some("/avatar.png".to_string()),
            ..Default::default()
        };
        let html = render_profile(&resolver, &personal);
        assert!(html.contains("<h1>Ada &lt;Lovelace&gt;</h1>"));
        assert!(html.contains("href=\"mailto:ada@example.com\""));
        assert!(html.contains("src=\"/p7/avatar.png\""));
        assert!(render_profile(&resolver, &Personal::default()).is_empty());
    }

    #[test]
    fn test_project_card() {
        let resolver = AssetResolver::new("");
        let project = Project {
            name: Some("folio".to_string()),
            technologies: Some(vec!["Rust".to_string(), "HTML".to_string()]),
            github_url: Some("https://github.com/x/folio".to_string()),
            ..Default::default()
        };
        let html = render_projects(&resolver, &[project]);
        assert!(html.contains("<h3>folio</h3>"));
        assert!(html.contains("<li class=\"tag\">Rust</li>"));
        assert!(html.contains(">GitHub</a>"));
        assert!(render_projects(&resolver, &[]).is_empty());
    }

    #[test]
    fn test_footer() {
        let personal = Personal {
            name: Some("Ada".to_string()),
            ..Default::default()
        };
        assert_eq!(
            render_footer(2026, Some(&personal)),
            "<footer class=\"footer\">&copy; 2026 Ada</footer>"
        );
        assert_eq!(render_footer(2026, None), "<footer class=\"footer\">&copy; 2026</footer>");
    }
}

use url::Url;

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// `Work Experience` -> `work-experience`
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Prefixes site-relative URLs with the build's base path.
#[derive(Debug, Clone, Copy)]
pub struct AssetResolver<'a> {
    prefix: &'a str,
}

impl<'a> AssetResolver<'a> {
    pub fn new(prefix: &'a str) -> Self {
        Self { prefix }
    }

    pub fn resolve(&self, src: &str) -> String {
        // 帶 scheme 的網址 (https:, data:, mailto:) 原樣輸出
        if Url::parse(src).is_ok() || src.starts_with("//") {
            return src.to_string();
        }

        if src.starts_with('/') && !self.prefix.is_empty() {
            format!("{}{}", self.prefix, src)
        } else {
            src.to_string()
        }
    }

    pub fn resolve_attr(&self, src: &str) -> String {
        escape_html(&self.resolve(src))
    }
}

pub fn img_tag(resolver: &AssetResolver<'_>, src: &str, alt: &str, size: u32, class: &str) -> String {
    let class_attr = if class.is_empty() {
        String::new()
    } else {
        format!(" class=\"{}\"", class)
    };
    format!(
        "<img src=\"{}\" alt=\"{}\" width=\"{size}\" height=\"{size}\"{class_attr} loading=\"lazy\">",
        resolver.resolve_attr(src),
        escape_html(alt)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<script>alert(\"x\" & 'y')</script>"),
            "&lt;script&gt;alert(&quot;x&quot; &amp; &#39;y&#39;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Work Experience"), "work-experience");
        assert_eq!(slugify("  C++ & Rust!  "), "c-rust");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_resolver_prefixes_site_relative() {
        let resolver = AssetResolver::new("/p7");
        assert_eq!(resolver.resolve("/logos/rust.svg"), "/p7/logos/rust.svg");
        assert_eq!(resolver.resolve("logos/rust.svg"), "logos/rust.svg");
        assert_eq!(resolver.resolve("//cdn.test/a.png"), "//cdn.test/a.png");
        assert_eq!(
            resolver.resolve("https://cdn.test/a.png"),
            "https://cdn.test/a.png"
        );
        assert_eq!(
            resolver.resolve("data:image/svg+xml;base64,AAAA"),
            "data:image/svg+xml;base64,AAAA"
        );
        assert_eq!(resolver.resolve("mailto:me@test.dev"), "mailto:me@test.dev");
    }

    #[test]
    fn test_resolver_without_prefix() {
        let resolver = AssetResolver::new("");
        assert_eq!(resolver.resolve("/logos/rust.svg"), "/logos/rust.svg");
    }

    #[test]
    fn test_img_tag_escapes() {
        let resolver = AssetResolver::new("");
        let tag = img_tag(&resolver, "/a.svg", "C\"++", 32, "icon");
        assert!(tag.contains("alt=\"C&quot;++\""));
        assert!(tag.contains("width=\"32\" height=\"32\""));
    }
}

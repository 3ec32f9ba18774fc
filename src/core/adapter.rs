//! Maps loosely-shaped experience and education records onto [`DisplayItem`].

use crate::domain::model::{CustomLink, DisplayItem, Education, WorkExperience};

const DATE_SEPARATOR: &str = " - ";

/// A source record that can be shown as a section item.
pub trait DisplayRecord {
    fn primary_title(&self) -> Option<&str>;
    fn secondary_title(&self) -> Option<&str>;
    /// 起訖日期，兩者皆可缺
    fn date_bounds(&self) -> (Option<&str>, Option<&str>);
    fn location(&self) -> Option<&str>;
    fn description(&self) -> Option<&str>;
    fn logo_url(&self) -> Option<&str>;
    fn custom_links(&self) -> Option<&[CustomLink]>;
}

/// 組合日期字串；只剩分隔符號或為空時視為缺值
pub fn compose_date_range(start: Option<&str>, end: Option<&str>) -> Option<String> {
    let joined = format!(
        "{}{}{}",
        start.unwrap_or_default(),
        DATE_SEPARATOR,
        end.unwrap_or_default()
    );
    let trimmed = joined.trim();

    if trimmed.is_empty() || trimmed == DATE_SEPARATOR.trim() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn to_display_item<R: DisplayRecord + ?Sized>(record: &R) -> DisplayItem {
    let (start, end) = record.date_bounds();

    DisplayItem {
        primary_title: record.primary_title().map(str::to_string),
        secondary_title: record.secondary_title().map(str::to_string),
        date_info: compose_date_range(start, end),
        location: record.location().map(str::to_string),
        description: record.description().map(str::to_string),
        logo_url: record.logo_url().map(str::to_string),
        custom_links: record.custom_links().map(<[CustomLink]>::to_vec),
    }
}

impl DisplayRecord for WorkExperience {
    fn primary_title(&self) -> Option<&str> {
        self.company.as_deref()
    }

    fn secondary_title(&self) -> Option<&str> {
        self.position.as_deref()
    }

    fn date_bounds(&self) -> (Option<&str>, Option<&str>) {
        (self.start_date.as_deref(), self.end_date.as_deref())
    }

    fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn logo_url(&self) -> Option<&str> {
        self.logo_url.as_deref()
    }

    fn custom_links(&self) -> Option<&[CustomLink]> {
        self.custom_links.as_deref()
    }
}

impl DisplayRecord for Education {
    fn primary_title(&self) -> Option<&str> {
        self.university.as_deref()
    }

    fn secondary_title(&self) -> Option<&str> {
        self.degree.as_deref()
    }

    fn date_bounds(&self) -> (Option<&str>, Option<&str>) {
        (self.start_year.as_deref(), self.end_year.as_deref())
    }

    fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn logo_url(&self) -> Option<&str> {
        self.logo_url.as_deref()
    }

    fn custom_links(&self) -> Option<&[CustomLink]> {
        self.custom_links.as_deref()
    }
}

impl From<&WorkExperience> for DisplayItem {
    fn from(record: &WorkExperience) -> Self {
        to_display_item(record)
    }
}

impl From<&Education> for DisplayItem {
    fn from(record: &Education) -> Self {
        to_display_item(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range_both_present() {
        assert_eq!(
            compose_date_range(Some("2020"), Some("2022")),
            Some("2020 - 2022".to_string())
        );
    }

    #[test]
    fn test_date_range_open_ended() {
        assert_eq!(compose_date_range(Some("2020"), None), Some("2020 -".to_string()));
        assert_eq!(compose_date_range(None, Some("2022")), Some("- 2022".to_string()));
    }

    #[test]
    fn test_date_range_absent() {
        assert_eq!(compose_date_range(None, None), None);
        assert_eq!(compose_date_range(Some(""), Some("")), None);
        assert_eq!(compose_date_range(Some("  "), None), None);
    }

    #[test]
    fn test_date_range_trims_padding() {
        assert_eq!(
            compose_date_range(Some(" Jan 2020"), Some("Present ")),
            Some("Jan 2020 - Present".to_string())
        );
    }

    #[test]
    fn test_work_experience_mapping() {
        let record = WorkExperience {
            company: Some("Acme".to_string()),
            position: Some("Engineer".to_string()),
            start_date: Some("2019".to_string()),
            end_date: Some("Present".to_string()),
            location: Some("Berlin".to_string()),
            description: None,
            logo_url: Some("/logos/acme.png".to_string()),
            custom_links: Some(vec![CustomLink {
                name: Some("Site".to_string()),
                url: Some("https://acme.test".to_string()),
            }]),
        };

        let item = DisplayItem::from(&record);
        assert_eq!(item.primary_title.as_deref(), Some("Acme"));
        assert_eq!(item.secondary_title.as_deref(), Some("Engineer"));
        assert_eq!(item.date_info.as_deref(), Some("2019 - Present"));
        assert_eq!(item.location.as_deref(), Some("Berlin"));
        assert_eq!(item.description, None);
        assert_eq!(item.logo_url.as_deref(), Some("/logos/acme.png"));
        assert_eq!(item.custom_links.map(|links| links.len()), Some(1));
    }

    #[test]
    fn test_empty_strings_are_preserved() {
        let record = Education {
            university: Some(String::new()),
            degree: Some(String::new()),
            ..Default::default()
        };

        let item = DisplayItem::from(&record);
        assert_eq!(item.primary_title.as_deref(), Some(""));
        assert_eq!(item.secondary_title.as_deref(), Some(""));
        assert_eq!(item.date_info, None);
        assert_eq!(item.custom_links, None);
    }
}

use serde::{Deserialize, Deserializer, Serialize};

/// `portfolio.json` 的頂層結構，所有區塊皆可省略
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    pub personal: Option<Personal>,
    pub work_experience: Option<Vec<WorkExperience>>,
    pub education: Option<Vec<Education>>,
    pub projects: Option<Vec<Project>>,
    pub skills: Option<Vec<Skill>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomLink {
    #[serde(alias = "label", alias = "title")]
    pub name: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Personal {
    pub name: Option<String>,
    pub title: Option<String>,
    #[serde(alias = "summary")]
    pub bio: Option<String>,
    #[serde(alias = "avatarUrl")]
    pub avatar: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub custom_links: Option<Vec<CustomLink>>,
}

impl Personal {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.title.is_none()
            && self.bio.is_none()
            && self.avatar.is_none()
            && self.email.is_none()
            && self.location.is_none()
            && self.custom_links.as_ref().map_or(true, Vec::is_empty)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub company: Option<String>,
    pub position: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub end_date: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "logoUrl")]
    pub logo_url: Option<String>,
    pub custom_links: Option<Vec<CustomLink>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub university: Option<String>,
    pub degree: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub start_year: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub end_year: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "logoUrl")]
    pub logo_url: Option<String>,
    pub custom_links: Option<Vec<CustomLink>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(alias = "title")]
    pub name: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    #[serde(alias = "imageUrl")]
    pub image: Option<String>,
    #[serde(alias = "githubUrl")]
    pub github_url: Option<String>,
    #[serde(alias = "liveUrl")]
    pub live_url: Option<String>,
    pub custom_links: Option<Vec<CustomLink>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
}

/// 已解析圖示的技能，可放入軌道圈
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconSkill {
    pub name: String,
    pub logo: String,
}

impl IconSkill {
    pub fn new(name: impl Into<String>, logo: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            logo: logo.into(),
        }
    }
}

/// 年份欄位可能是字串或數字 (例如 `"start_year": 2018`)
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(
        Option::<TextOrNumber>::deserialize(deserializer)?.map(|value| match value {
            TextOrNumber::Text(text) => text,
            TextOrNumber::Number(number) => number.to_string(),
        }),
    )
}

/// A normalized entry shown inside a card, list or timeline section.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_links: Option<Vec<CustomLink>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LayoutType {
    #[default]
    Card,
    List,
    Timeline,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub section_name: String,
    pub layout_type: LayoutType,
    pub items: Vec<DisplayItem>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    #[default]
    Development,
    Production,
}

impl BuildMode {
    /// 對應 `FOLIO_ENV`，只有 `production` 會切換模式
    pub fn from_env_value(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("production") {
            BuildMode::Production
        } else {
            BuildMode::Development
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Compact,
    Wide,
}

/// A value with a desktop and a mobile alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Responsive<T> {
    pub desktop: T,
    pub mobile: T,
}

impl<T: Copy> Responsive<T> {
    pub const fn new(desktop: T, mobile: T) -> Self {
        Self { desktop, mobile }
    }

    pub fn pick(&self, mode: ViewMode) -> T {
        match mode {
            ViewMode::Compact => self.mobile,
            ViewMode::Wide => self.desktop,
        }
    }
}

/// One concentric rotating group of skill icons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ring {
    pub members: Vec<IconSkill>,
    pub radius: Responsive<u32>,
    pub rotation_period_secs: u32,
    pub icon_size: Responsive<u32>,
    pub reverse: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RingSet {
    pub rings: Vec<Ring>,
    /// 超過上限的技能，依原順序顯示於備用網格
    pub remaining: Vec<IconSkill>,
}

impl RingSet {
    /// 所有圈的成員依序串接
    pub fn orbiting(&self) -> impl Iterator<Item = &IconSkill> {
        self.rings.iter().flat_map(|ring| ring.members.iter())
    }

    pub fn orbiting_len(&self) -> usize {
        self.rings.iter().map(|ring| ring.members.len()).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsView {
    pub with_logos: Vec<IconSkill>,
    pub without_logos: Vec<Skill>,
    pub ring_set: RingSet,
}

/// Everything the renderer needs, derived fresh from the source data.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageModel {
    pub site_title: String,
    pub lang: String,
    pub personal: Option<Personal>,
    pub sections: Vec<Section>,
    pub projects: Vec<Project>,
    pub skills: Option<SkillsView>,
    pub generated_year: i32,
}

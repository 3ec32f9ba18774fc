use crate::core::rings::compute_rings;
use crate::core::{ConfigProvider, PageModel, Pipeline, PortfolioData, Storage};
use crate::domain::model::{DisplayItem, IconSkill, LayoutType, Section, SkillsView};
use crate::render::{render_page, RenderOptions, RenderTarget};
use crate::utils::error::Result;
use chrono::Datelike;
use std::io::Write;
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub const INDEX_FILE: &str = "index.html";
pub const MODEL_FILE: &str = "page-model.json";
pub const ARCHIVE_FILE: &str = "site.zip";

pub struct PortfolioPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    generated_year: i32,
}

impl<S: Storage, C: ConfigProvider> PortfolioPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            generated_year: chrono::Local::now().year(),
        }
    }

    /// 固定頁尾年份，讓輸出可重現
    pub fn with_year(mut self, year: i32) -> Self {
        self.generated_year = year;
        self
    }

    fn output_file(&self, name: &str) -> String {
        Path::new(self.config.output_path())
            .join(name)
            .to_string_lossy()
            .into_owned()
    }

    fn render_options(&self) -> RenderOptions<'_> {
        let target = match self.config.viewport_width() {
            Some(width) => RenderTarget::Snapshot { width },
            None => RenderTarget::Responsive,
        };

        RenderOptions {
            target,
            breakpoint: self.config.compact_breakpoint(),
            asset_prefix: self.config.asset_prefix(),
        }
    }
}

fn build_section<'a, R>(name: &str, layout: LayoutType, records: Option<&'a [R]>) -> Option<Section>
where
    &'a R: Into<DisplayItem>,
{
    let records = records.filter(|records| !records.is_empty())?;
    Some(Section {
        section_name: name.to_string(),
        layout_type: layout,
        items: records.iter().map(Into::into).collect(),
    })
}

/// Splits skills by logo presence and lays out the ones with logos.
pub fn build_skills_view(skills: &[crate::domain::model::Skill], max_orbiting: usize) -> SkillsView {
    let (with, without): (Vec<_>, Vec<_>) =
        skills.iter().cloned().partition(|skill| skill.logo.is_some());

    let with_logos: Vec<IconSkill> = with
        .into_iter()
        .filter_map(|skill| skill.logo.map(|logo| IconSkill::new(skill.name, logo)))
        .collect();

    SkillsView {
        ring_set: compute_rings(&with_logos, max_orbiting),
        with_logos,
        without_logos: without,
    }
}

/// 由原始資料建立頁面模型，不涉及 IO
pub fn build_page_model<C: ConfigProvider + ?Sized>(
    data: &PortfolioData,
    config: &C,
    generated_year: i32,
) -> PageModel {
    let mut sections = Vec::new();
    sections.extend(build_section(
        "Work Experience",
        config.experience_layout(),
        data.work_experience.as_deref(),
    ));
    sections.extend(build_section(
        "Education",
        config.education_layout(),
        data.education.as_deref(),
    ));

    let personal = data.personal.clone().filter(|p| !p.is_empty());
    let site_title = match (config.site_title(), personal.as_ref().and_then(|p| p.name.as_deref())) {
        (Some(title), _) => title.to_string(),
        (None, Some(name)) => format!("{} | Portfolio", name),
        (None, None) => "Portfolio".to_string(),
    };

    // 只要有 `skills` 陣列 (即使為空) 就保留技能區塊
    let skills = data
        .skills
        .as_deref()
        .map(|skills| build_skills_view(skills, config.max_orbiting()));

    PageModel {
        site_title,
        lang: config.lang().to_string(),
        personal,
        sections,
        projects: data.projects.clone().unwrap_or_default(),
        skills,
        generated_year,
    }
}

fn build_archive(files: &[(&str, Vec<u8>)]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    for (name, data) in files {
        zip.start_file(*name, SimpleFileOptions::default())?;
        zip.write_all(data)?;
    }
    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for PortfolioPipeline<S, C> {
    async fn extract(&self) -> Result<PortfolioData> {
        tracing::debug!("Reading portfolio data from: {}", self.config.data_path());
        let raw = self.storage.read_file(self.config.data_path()).await?;
        let data: PortfolioData = serde_json::from_slice(&raw)?;
        Ok(data)
    }

    async fn transform(&self, data: PortfolioData) -> Result<PageModel> {
        let page = build_page_model(&data, &self.config, self.generated_year);

        if let Some(skills) = &page.skills {
            tracing::debug!(
                "Skills: {} with logos ({} rings, {} remaining), {} without logos",
                skills.with_logos.len(),
                skills.ring_set.rings.len(),
                skills.ring_set.remaining.len(),
                skills.without_logos.len()
            );
        }

        Ok(page)
    }

    async fn load(&self, page: PageModel) -> Result<String> {
        let options = self.render_options();
        tracing::debug!(
            "Rendering {:?} (breakpoint {}px, prefix '{}')",
            options.target,
            options.breakpoint,
            options.asset_prefix
        );

        let html = render_page(&page, &options);
        let mut files: Vec<(&str, Vec<u8>)> = vec![(INDEX_FILE, html.into_bytes())];
        if self.config.emit_model() {
            files.push((MODEL_FILE, serde_json::to_vec_pretty(&page)?));
        }

        for (name, data) in &files {
            tracing::debug!("Writing {} ({} bytes)", name, data.len());
            self.storage.write_file(&self.output_file(name), data).await?;
        }

        if self.config.archive() {
            let archive = build_archive(&files)?;
            tracing::debug!("Writing {} ({} bytes)", ARCHIVE_FILE, archive.len());
            self.storage
                .write_file(&self.output_file(ARCHIVE_FILE), &archive)
                .await?;
        }

        Ok(self.output_file(INDEX_FILE))
    }
}

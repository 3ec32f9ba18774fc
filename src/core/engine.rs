use crate::core::{PageModel, Pipeline};
use crate::utils::error::Result;
use std::time::Instant;

pub struct ExportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ExportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("Starting export...");

        let page = self.build().await?;

        tracing::info!("Rendering page...");
        let output_path = self.pipeline.load(page).await?;
        tracing::info!("Export finished in {:?}", started.elapsed());

        Ok(output_path)
    }

    /// 只執行 extract 與 transform，不寫入任何檔案
    pub async fn dry_run(&self) -> Result<PageModel> {
        let page = self.build().await?;

        tracing::info!("🔍 Dry run summary for '{}'", page.site_title);
        for section in &page.sections {
            tracing::info!(
                "  {} ({:?}): {} items",
                section.section_name,
                section.layout_type,
                section.items.len()
            );
        }
        tracing::info!("  Projects: {}", page.projects.len());
        if let Some(skills) = &page.skills {
            tracing::info!(
                "  Skills: {} orbiting in {} rings, {} remaining, {} without logos",
                skills.ring_set.orbiting_len(),
                skills.ring_set.rings.len(),
                skills.ring_set.remaining.len(),
                skills.without_logos.len()
            );
        }

        Ok(page)
    }

    async fn build(&self) -> Result<PageModel> {
        tracing::info!("Extracting portfolio data...");
        let data = self.pipeline.extract().await?;

        tracing::info!("Transforming portfolio data...");
        let page = self.pipeline.transform(data).await?;
        tracing::info!(
            "Built page model with {} sections and {} projects",
            page.sections.len(),
            page.projects.len()
        );

        Ok(page)
    }
}

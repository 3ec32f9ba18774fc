pub mod site_config;

#[cfg(feature = "cli")]
use crate::domain::model::LayoutType;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

/// 命令列參數；未指定的值沿用 `--config` 檔案或預設值
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "static-folio")]
#[command(about = "Export a static portfolio page from a JSON data file")]
pub struct CliConfig {
    /// Portfolio data file (JSON)
    #[arg(long)]
    pub data: Option<String>,

    #[arg(long)]
    pub output_path: Option<String>,

    /// Site config file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub lang: Option<String>,

    #[arg(long, help = "Production build: prefix site-relative URLs with the base path")]
    pub production: bool,

    #[arg(long)]
    pub base_path: Option<String>,

    #[arg(long, help = "Compact-mode breakpoint in logical pixels")]
    pub breakpoint: Option<u32>,

    #[arg(long)]
    pub max_orbiting: Option<usize>,

    #[arg(long, value_enum)]
    pub experience_layout: Option<LayoutType>,

    #[arg(long, value_enum)]
    pub education_layout: Option<LayoutType>,

    #[arg(long, help = "Render a single layout for this width instead of a responsive page")]
    pub viewport_width: Option<u32>,

    #[arg(long, help = "Also write page-model.json")]
    pub emit_model: bool,

    #[arg(long, help = "Also write site.zip")]
    pub archive: bool,

    #[arg(long, help = "Build the page model without writing files")]
    pub dry_run: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

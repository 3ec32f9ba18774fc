use crate::core::rings::MAX_ORBITING;
use crate::core::viewport::COMPACT_BREAKPOINT_PX;
use crate::domain::model::{BuildMode, LayoutType};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{FolioError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[cfg(feature = "cli")]
use crate::config::CliConfig;

pub const DEFAULT_DATA_PATH: &str = "portfolio.json";
pub const DEFAULT_OUTPUT_PATH: &str = "./out";
pub const DEFAULT_BASE_PATH: &str = "/p7";
/// 未在設定中指定模式時讀取此環境變數
pub const BUILD_MODE_ENV: &str = "FOLIO_ENV";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub input: InputConfig,
    pub output: OutputConfig,
    pub build: BuildConfig,
    pub layout: LayoutConfig,
    /// 僅能由命令列指定
    #[serde(skip)]
    pub viewport_width: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    pub title: Option<String>,
    pub lang: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: None,
            lang: "en".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub data_path: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            data_path: DEFAULT_DATA_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub output_path: String,
    pub emit_model: bool,
    pub archive: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            emit_model: false,
            archive: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub mode: Option<BuildMode>,
    pub base_path: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            mode: None,
            base_path: DEFAULT_BASE_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub compact_breakpoint: u32,
    pub max_orbiting: usize,
    pub experience_layout: LayoutType,
    pub education_layout: LayoutType,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            compact_breakpoint: COMPACT_BREAKPOINT_PX,
            max_orbiting: MAX_ORBITING,
            experience_layout: LayoutType::Card,
            education_layout: LayoutType::Card,
        }
    }
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${BASE_PATH})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FolioError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Applies flags given on the command line on top of this config.
    #[cfg(feature = "cli")]
    pub fn with_overrides(mut self, cli: &CliConfig) -> Self {
        if let Some(data) = &cli.data {
            self.input.data_path = data.clone();
        }
        if let Some(output_path) = &cli.output_path {
            self.output.output_path = output_path.clone();
        }
        if let Some(title) = &cli.title {
            self.site.title = Some(title.clone());
        }
        if let Some(lang) = &cli.lang {
            self.site.lang = lang.clone();
        }
        if cli.production {
            self.build.mode = Some(BuildMode::Production);
        }
        if let Some(base_path) = &cli.base_path {
            self.build.base_path = base_path.clone();
        }
        if let Some(breakpoint) = cli.breakpoint {
            self.layout.compact_breakpoint = breakpoint;
        }
        if let Some(max_orbiting) = cli.max_orbiting {
            self.layout.max_orbiting = max_orbiting;
        }
        if let Some(layout) = cli.experience_layout {
            self.layout.experience_layout = layout;
        }
        if let Some(layout) = cli.education_layout {
            self.layout.education_layout = layout;
        }
        if cli.viewport_width.is_some() {
            self.viewport_width = cli.viewport_width;
        }
        self.output.emit_model |= cli.emit_model;
        self.output.archive |= cli.archive;
        self
    }

    /// 讀取 `--config` 檔案 (若有) 並套用命令列覆蓋
    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        let base = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(cli))
    }

    /// 未明確指定模式時，依 `FOLIO_ENV` 決定
    pub fn resolved_build_mode(&self) -> BuildMode {
        self.build.mode.unwrap_or_else(|| {
            std::env::var(BUILD_MODE_ENV)
                .map(|value| BuildMode::from_env_value(&value))
                .unwrap_or_default()
        })
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_path("input.data_path", &self.input.data_path)?;
        validation::validate_path("output.output_path", &self.output.output_path)?;
        validation::validate_non_empty_string("site.lang", &self.site.lang)?;
        validation::validate_base_path("build.base_path", &self.build.base_path)?;
        validation::validate_range(
            "layout.compact_breakpoint",
            self.layout.compact_breakpoint,
            1,
            10_000,
        )?;
        validation::validate_range("layout.max_orbiting", self.layout.max_orbiting, 0, MAX_ORBITING)?;
        if let Some(width) = self.viewport_width {
            validation::validate_range("viewport_width", width, 1, 100_000)?;
        }
        Ok(())
    }
}

impl ConfigProvider for SiteConfig {
    fn data_path(&self) -> &str {
        &self.input.data_path
    }

    fn output_path(&self) -> &str {
        &self.output.output_path
    }

    fn site_title(&self) -> Option<&str> {
        self.site.title.as_deref()
    }

    fn lang(&self) -> &str {
        &self.site.lang
    }

    fn build_mode(&self) -> BuildMode {
        self.resolved_build_mode()
    }

    fn base_path(&self) -> &str {
        &self.build.base_path
    }

    fn compact_breakpoint(&self) -> u32 {
        self.layout.compact_breakpoint
    }

    fn max_orbiting(&self) -> usize {
        self.layout.max_orbiting
    }

    fn experience_layout(&self) -> LayoutType {
        self.layout.experience_layout
    }

    fn education_layout(&self) -> LayoutType {
        self.layout.education_layout
    }

    fn viewport_width(&self) -> Option<u32> {
        self.viewport_width
    }

    fn emit_model(&self) -> bool {
        self.output.emit_model
    }

    fn archive(&self) -> bool {
        self.output.archive
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

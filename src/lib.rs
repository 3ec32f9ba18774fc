pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::LocalStorage;
pub use config::site_config::SiteConfig;
pub use core::{engine::ExportEngine, pipeline::PortfolioPipeline};
pub use utils::error::{FolioError, Result};

pub mod adapter;
pub mod engine;
pub mod pipeline;
pub mod rings;
pub mod viewport;

pub use crate::domain::model::{PageModel, PortfolioData};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;

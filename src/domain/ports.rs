use crate::domain::model::{BuildMode, LayoutType, PageModel, PortfolioData};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn data_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn site_title(&self) -> Option<&str>;
    fn lang(&self) -> &str;
    fn build_mode(&self) -> BuildMode;
    fn base_path(&self) -> &str;
    fn compact_breakpoint(&self) -> u32;
    fn max_orbiting(&self) -> usize;
    fn experience_layout(&self) -> LayoutType;
    fn education_layout(&self) -> LayoutType;
    /// 指定寬度時輸出單一版面快照，否則輸出響應式頁面
    fn viewport_width(&self) -> Option<u32>;
    fn emit_model(&self) -> bool;
    fn archive(&self) -> bool;

    /// 只有 production 模式才套用基礎路徑
    fn asset_prefix(&self) -> &str {
        match self.build_mode() {
            BuildMode::Production => self.base_path(),
            BuildMode::Development => "",
        }
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<PortfolioData>;
    async fn transform(&self, data: PortfolioData) -> Result<PageModel>;
    async fn load(&self, page: PageModel) -> Result<String>;
}

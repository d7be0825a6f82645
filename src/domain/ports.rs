use crate::core::render::RenderOptions;
use crate::domain::model::{PlotSnapshot, PrimeSequence};
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn limit(&self) -> i64;
    fn alternate_limit(&self) -> i64;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn bundle_filename(&self) -> &str {
        "plot_output.zip"
    }
    fn render_options(&self) -> RenderOptions {
        RenderOptions::default()
    }
}

pub trait Pipeline: Send + Sync {
    fn generate(&self) -> Result<PrimeSequence>;
    fn group(&self, primes: PrimeSequence) -> Result<PlotSnapshot>;
    fn load(&self, snapshot: &PlotSnapshot) -> Result<String>;
}

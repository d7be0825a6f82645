use crate::core::render::{render, OutputFormat};
use crate::core::sieve::generate_primes;
use crate::core::stem_leaf::group_by_stem;
use crate::core::{ConfigProvider, Pipeline, PlotSnapshot, PrimeSequence, Storage};
use crate::utils::error::Result;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub struct PlotPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> PlotPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    fn selected_formats(&self) -> Result<Vec<OutputFormat>> {
        let mut formats = Vec::new();
        for name in self.config.output_formats() {
            let format: OutputFormat = name.parse()?;
            if !formats.contains(&format) {
                formats.push(format);
            }
        }
        Ok(formats)
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for PlotPipeline<S, C> {
    fn generate(&self) -> Result<PrimeSequence> {
        tracing::debug!("Sieving primes up to {}", self.config.limit());
        generate_primes(self.config.limit())
    }

    fn group(&self, primes: PrimeSequence) -> Result<PlotSnapshot> {
        let stem_leaf = group_by_stem(&primes);
        tracing::debug!(
            "Grouped {} primes into {} stems",
            primes.len(),
            stem_leaf.len()
        );
        Ok(PlotSnapshot {
            limit: self.config.limit(),
            primes,
            stem_leaf,
        })
    }

    fn load(&self, snapshot: &PlotSnapshot) -> Result<String> {
        let bundle_name = self.config.bundle_filename();
        let output_path = format!("{}/{}", self.config.output_path(), bundle_name);
        let formats = self.selected_formats()?;
        let options = self.config.render_options();

        tracing::debug!("Creating bundle with {} files", formats.len());

        let zip_data = {
            let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

            for format in formats {
                let content = render(format, snapshot, &options)?;
                zip.start_file::<_, ()>(format.file_name(), FileOptions::default())?;
                zip.write_all(content.as_bytes())?;
            }

            let cursor = zip.finish()?;
            cursor.into_inner()
        };

        tracing::debug!("Writing bundle ({} bytes) to storage", zip_data.len());
        self.storage.write_file(bundle_name, &zip_data)?;

        Ok(output_path)
    }
}

use crate::adapters::http::{temporary_image_name, ImageFetcher, TEMP_IMAGE_PREFIX};
use crate::config::AppConfig;
use crate::core::assignment::assign_students;
use crate::core::report::build_workbook;
use crate::core::roster::parse_roster;
use crate::core::seed::{read_seed_image, resolve_seed};
use crate::domain::model::{AssignmentResult, PreparedRun, SeedImage};
use crate::domain::ports::{Pipeline, Storage};
use crate::utils::error::{AssignerError, Result};
use std::path::PathBuf;

/// Reads the roster and seed image from `input`, writes the workbook to `output`.
pub struct AssignmentPipeline<S: Storage> {
    input: S,
    output: S,
    config: AppConfig,
    fetcher: ImageFetcher,
}

impl<S: Storage> AssignmentPipeline<S> {
    pub fn new(input: S, output: S, config: AppConfig) -> Self {
        let fetcher = ImageFetcher::new(config.image_endpoint.clone());
        Self {
            input,
            output,
            config,
            fetcher,
        }
    }

    async fn acquire_seed_image(&self) -> Result<SeedImage> {
        if let Some(path) = &self.config.image_path {
            tracing::info!("Using seed image: {}", path.display());
            return read_seed_image(path).await;
        }

        tracing::info!("No image given, fetching one from {}", self.fetcher.endpoint());
        let bytes = self.fetcher.fetch().await?;

        let name = temporary_image_name(chrono::Utc::now().timestamp());
        self.input.write_file(&name, &bytes).await?;
        let path = PathBuf::from(self.input.display_path(&name));
        tracing::debug!("Saved temporary seed image to {}", path.display());

        Ok(SeedImage {
            path,
            bytes,
            temporary: true,
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage> Pipeline for AssignmentPipeline<S> {
    async fn prepare(&self) -> Result<PreparedRun> {
        let seed_image = self.acquire_seed_image().await?;
        let seed = resolve_seed(self.config.seed, &seed_image);
        if self.config.seed.is_none() {
            tracing::warn!("Seed derived from image; image hashing is not implemented, using {}", seed);
        }

        let csv_name = &self.config.student_csv_file_name;
        tracing::debug!("Reading students from: {}", self.input.display_path(csv_name));
        let data = self
            .input
            .read_file(csv_name)
            .await
            .map_err(AssignerError::roster_read)?;
        let roster =
            parse_roster(&data, &self.config.roster).map_err(AssignerError::roster_read)?;

        Ok(PreparedRun {
            roster,
            seed,
            seed_image: Some(seed_image),
        })
    }

    async fn assign(&self, run: PreparedRun) -> Result<AssignmentResult> {
        let assignment = assign_students(&run.roster, run.seed, self.config.sessions.count);

        for (i, slot) in assignment.slots().iter().enumerate() {
            tracing::debug!(
                "{} {}: {} students",
                self.config.sessions.header_prefix,
                i + 1,
                slot.len()
            );
        }

        Ok(AssignmentResult {
            assignment,
            seed: run.seed,
            seed_image: run.seed_image,
        })
    }

    async fn publish(&self, result: AssignmentResult) -> Result<String> {
        let image = result.seed_image.as_ref().map(|i| i.bytes.as_slice());
        let workbook = build_workbook(
            &result.assignment,
            result.seed,
            image,
            &self.config.sessions,
        )?;

        let name = &self.config.output_xlsx_file_name;
        tracing::debug!("Writing workbook ({} bytes) to storage", workbook.len());
        self.output.write_file(name, &workbook).await?;

        Ok(self.output.display_path(name))
    }

    async fn cleanup(&self) -> Result<usize> {
        let names = self.input.list_files(TEMP_IMAGE_PREFIX).await?;

        let mut removed = 0;
        for name in names {
            match self.input.remove_file(&name).await {
                Ok(()) => {
                    tracing::debug!("Removed temporary image {}", name);
                    removed += 1;
                }
                Err(e) => tracing::warn!("Could not remove temporary image {}: {}", name, e),
            }
        }

        Ok(removed)
    }
}

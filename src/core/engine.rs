use crate::domain::model::RunOutcome;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

pub struct AssignmentEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> AssignmentEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs every stage, then cleanup regardless of the outcome.
    ///
    /// A stage error takes precedence over a cleanup error; a cleanup error
    /// after successful stages fails the run.
    pub async fn run(&self) -> Result<RunOutcome> {
        let outcome = self.run_stages().await;

        tracing::debug!("Cleaning up temporary files...");
        let cleanup = self.pipeline.cleanup().await;

        match (outcome, cleanup) {
            (Ok(outcome), Ok(removed)) => {
                tracing::debug!("Removed {} temporary files", removed);
                Ok(outcome)
            }
            (Ok(_), Err(e)) => {
                tracing::error!("Cleanup failed: {}", e);
                Err(e)
            }
            (Err(e), Ok(removed)) => {
                tracing::debug!("Removed {} temporary files after failure", removed);
                Err(e)
            }
            (Err(e), Err(cleanup_err)) => {
                tracing::warn!("Cleanup after failure also failed: {}", cleanup_err);
                Err(e)
            }
        }
    }

    async fn run_stages(&self) -> Result<RunOutcome> {
        tracing::info!("Preparing roster and seed...");
        let run = self.pipeline.prepare().await?;
        let seed = run.seed;
        tracing::info!("Loaded {} students, seed {}", run.roster.len(), seed);

        tracing::info!("Assigning students to sessions...");
        let result = self.pipeline.assign(run).await?;
        tracing::info!(
            "Assigned {} students to {} sessions",
            result.assignment.student_count(),
            result.assignment.slot_count()
        );

        tracing::info!("Writing report...");
        let output_path = self.pipeline.publish(result).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(RunOutcome { output_path, seed })
    }
}

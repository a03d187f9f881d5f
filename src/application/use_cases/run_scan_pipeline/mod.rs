use crate::ports::outbound::{CommandRunner, XrayPlatform};
use crate::scan_pipeline::domain::{
    image_push_commands, ApiRequest, ApplyWatchRequest, ArtifactRef, Credentials,
    IterationSummary, RepositoryConfig, RequestOutcome, SecurityPolicy, Session, SessionHeaders,
    TargetCoordinates, ViolationQuery, Watch,
};
use crate::scan_pipeline::policies::ResponseAcceptance;
use crate::scan_pipeline::services::RequestStatsCollector;
use crate::shared::Result;
use std::sync::Arc;
use std::time::Instant;

/// ScanPipelineUseCase - one pass of the scan scenario for one simulated user
///
/// Runs seven steps strictly in order:
/// 1. Create the Docker repository
/// 2. Push the image with the `docker` CLI
/// 3. Create the security policy
/// 4. Create the watch
/// 5. Apply the watch
/// 6. Check the scan status of the pushed manifest
/// 7. Fetch the violations of that manifest
///
/// A failing step never prevents the next one. Request outcomes go into
/// the shared statistics; a failed push is logged only.
///
/// # Type Parameters
/// * `P` - XrayPlatform implementation
/// * `C` - CommandRunner implementation
pub struct ScanPipelineUseCase<P, C> {
    platform: Arc<P>,
    command_runner: Arc<C>,
    target: Arc<TargetCoordinates>,
    stats: RequestStatsCollector,
}

impl<P, C> Clone for ScanPipelineUseCase<P, C> {
    fn clone(&self) -> Self {
        Self {
            platform: Arc::clone(&self.platform),
            command_runner: Arc::clone(&self.command_runner),
            target: Arc::clone(&self.target),
            stats: self.stats.clone(),
        }
    }
}

impl<P, C> ScanPipelineUseCase<P, C>
where
    P: XrayPlatform,
    C: CommandRunner,
{
    /// Creates a new ScanPipelineUseCase with injected dependencies
    pub fn new(
        platform: Arc<P>,
        command_runner: Arc<C>,
        target: Arc<TargetCoordinates>,
        stats: RequestStatsCollector,
    ) -> Self {
        Self {
            platform,
            command_runner,
            target,
            stats,
        }
    }

    pub fn stats(&self) -> &RequestStatsCollector {
        &self.stats
    }

    /// Runs one iteration of the scenario
    ///
    /// # Errors
    /// Only when a request payload cannot be serialized. Failed requests and
    /// a failed image push are part of the returned summary instead.
    pub async fn run_iteration(&self, session: &Session) -> Result<IterationSummary> {
        let headers = session.headers();
        let mut summary = IterationSummary::new();

        // Step 1: Create repository
        let request = RepositoryConfig::for_target(&self.target).to_request()?;
        self.send_and_record(headers, request, &mut summary).await;

        // Step 2: Push image
        if let Err(e) = self.push_image(session.credentials()).await {
            tracing::error!("Docker push failed: {:#}", e);
            summary.image_push_error = Some(format!("{:#}", e));
        }

        // Step 3: Create policy
        let request = SecurityPolicy::block_high().to_request()?;
        self.send_and_record(headers, request, &mut summary).await;

        // Step 4: Create watch
        let request = Watch::for_target(&self.target).to_request()?;
        self.send_and_record(headers, request, &mut summary).await;

        // Step 5: Apply watch
        let request = ApplyWatchRequest::now().to_request()?;
        self.send_and_record(headers, request, &mut summary).await;

        // Step 6: Check scan status
        let artifact = ArtifactRef::manifest_of(&self.target);
        let request = artifact.status_request()?;
        self.send_and_record(headers, request, &mut summary).await;

        // Step 7: Get violations
        let request = ViolationQuery::for_artifact(artifact).to_request()?;
        self.send_and_record(headers, request, &mut summary).await;

        Ok(summary)
    }

    /// Runs pull, login, tag and push, stopping at the first failure
    async fn push_image(&self, credentials: &Credentials) -> Result<()> {
        for command in image_push_commands(&self.target, credentials) {
            self.command_runner.run(&command).await?;
        }
        Ok(())
    }

    /// Sends one request, times it and records its outcome
    async fn send_and_record(
        &self,
        headers: &SessionHeaders,
        request: ApiRequest,
        summary: &mut IterationSummary,
    ) {
        let started = Instant::now();
        let result = self.platform.send(headers, &request).await;
        let elapsed = started.elapsed();

        let outcome = match &result {
            Ok(response) => ResponseAcceptance::evaluate(request.name, response),
            Err(e) => ResponseAcceptance::transport_error(e),
        };

        self.stats
            .record(request.name.as_str(), request.method, elapsed, &outcome);

        if let RequestOutcome::Failure(message) = &outcome {
            tracing::debug!(request = %request.name, failure = %message, "request failed");
        }

        summary.record(request.name, outcome);
    }
}

#[cfg(test)]
mod tests;

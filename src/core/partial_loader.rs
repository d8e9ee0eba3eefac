use crate::core::deferred::DeferredAction;
use crate::core::targets::TargetRegistry;
use crate::core::{ConfigProvider, FragmentSource, ViewHandle};
use crate::domain::model::{FragmentRequest, LoadOutcome, LoadReport, LoadState};
use chrono::Utc;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

pub const SPINNER_DELAY: Duration = Duration::from_millis(500);

pub const SPINNER_HTML: &str = r#"<div class="spinner">
    <div class="bounce1"></div>
    <div class="bounce2"></div>
    <div class="bounce3"></div>
    </div>"#;

pub const ERROR_HTML: &str = "Error: Retry operation";

fn replace(views: &[Arc<dyn ViewHandle>], html: &str) {
    for view in views {
        view.set_content(html);
    }
}

/// Loads server-rendered fragments into every view of a target label.
///
/// A spinner is shown only when the request outlives the configured delay,
/// and is always replaced by the fragment or the error markup once the
/// request settles. Fragment bodies are written verbatim: the server is
/// trusted to send safe markup.
///
/// Each load runs in its own task. Dropping the future returned by
/// [`PartialLoader::load`] stops waiting for the report but not the request,
/// so the views still settle on content or error markup.
pub struct PartialLoader<S: FragmentSource, C: ConfigProvider> {
    source: Arc<S>,
    config: Arc<C>,
}

impl<S, C> PartialLoader<S, C>
where
    S: FragmentSource + 'static,
    C: ConfigProvider + 'static,
{
    pub fn new(source: S, config: C) -> Self {
        Self {
            source: Arc::new(source),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub async fn load(
        &self,
        request: &FragmentRequest,
        views: &[Arc<dyn ViewHandle>],
    ) -> LoadReport {
        let handle = self.spawn_load(request.clone(), views.to_vec());
        match handle.await {
            Ok(report) => report,
            Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
            Err(e) => {
                // Only reachable while the runtime shuts down.
                tracing::warn!(endpoint = %request.endpoint, "Partial load task ended early: {}", e);
                LoadReport {
                    request: request.clone(),
                    outcome: LoadOutcome::Errored { status: None },
                    spinner_shown: false,
                    views_updated: 0,
                    started_at: Utc::now(),
                    elapsed: Duration::ZERO,
                }
            }
        }
    }

    pub async fn load_target(
        &self,
        registry: &TargetRegistry,
        request: &FragmentRequest,
    ) -> LoadReport {
        let views = registry.views(&request.target);
        self.load(request, &views).await
    }

    /// Starts the load and returns at once; await the handle for the report.
    pub fn spawn_load(
        &self,
        request: FragmentRequest,
        views: Vec<Arc<dyn ViewHandle>>,
    ) -> JoinHandle<LoadReport> {
        let source = Arc::clone(&self.source);
        let config = Arc::clone(&self.config);
        tokio::spawn(async move {
            run_load(source.as_ref(), config.as_ref(), &request, &views).await
        })
    }
}

async fn run_load<S: FragmentSource, C: ConfigProvider>(
    source: &S,
    config: &C,
    request: &FragmentRequest,
    views: &[Arc<dyn ViewHandle>],
) -> LoadReport {
    let started_at = Utc::now();
    let start = Instant::now();

    tracing::debug!(
        endpoint = %request.endpoint,
        target = %request.target,
        views = views.len(),
        state = ?LoadState::Requesting,
        "Requesting partial {}",
        request.path()
    );

    let spinner = {
        let views = views.to_vec();
        let html = config.spinner_html().to_string();
        let endpoint = request.endpoint.clone();
        DeferredAction::arm(config.spinner_delay(), move || {
            tracing::debug!(
                endpoint = %endpoint,
                state = ?LoadState::ShowingSpinner,
                "Partial is slow, showing spinner"
            );
            replace(&views, &html);
        })
    };

    let result = source.fetch(&request.endpoint).await;
    let spinner_shown = spinner.cancel();

    let outcome = match result {
        Ok(body) => {
            replace(views, &body);
            LoadOutcome::Loaded
        }
        Err(e) => {
            let status = e.status();
            replace(views, config.error_html());
            match status {
                Some(code) => tracing::warn!(
                    endpoint = %request.endpoint,
                    status = code,
                    "partial request to {} failed with code {}",
                    request.endpoint,
                    code
                ),
                None => tracing::warn!(
                    endpoint = %request.endpoint,
                    error = %e,
                    "partial request to {} failed: {}",
                    request.endpoint,
                    e
                ),
            }
            LoadOutcome::Errored { status }
        }
    };

    let elapsed = start.elapsed();
    tracing::debug!(
        endpoint = %request.endpoint,
        state = ?outcome.state(),
        spinner_shown,
        "Partial settled in {:?}",
        elapsed
    );

    LoadReport {
        request: request.clone(),
        outcome,
        spinner_shown,
        views_updated: views.len(),
        started_at,
        elapsed,
    }
}

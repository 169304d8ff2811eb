//! Privileged bridge context.
//!
//! The plugin core has no network access. It queues [`BridgeRequest`]s on a
//! channel; this worker performs the actual fetch against the trivia API and
//! relays the parsed payload back as a [`BridgeReply`]. The worker runs on
//! its own thread with a dedicated tokio runtime, mirroring the host
//! platform split between the sandboxed core and the embedded UI context.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use crossbeam_channel::{Receiver, Sender};
use reqwest::Client;
use shared::protocol::{BridgeReply, BridgeRequest, CategoryListPayload, QuestionBatchPayload};
use tracing::{debug, error, info};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Network seam. Production uses [`OpenTdbFetcher`]; tests substitute a fake.
#[async_trait]
pub trait TriviaFetcher: Send + Sync {
    async fn fetch_categories(&self) -> Result<CategoryListPayload>;
    async fn fetch_questions(&self, url: &str) -> Result<QuestionBatchPayload>;
}

/// Fetcher backed by the Open Trivia Database HTTP API.
pub struct OpenTdbFetcher {
    client: Client,
    category_url: String,
}

impl OpenTdbFetcher {
    pub fn new(category_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .context("failed to build bridge HTTP client")?;
        Ok(Self {
            client,
            category_url: category_url.into(),
        })
    }
}

#[async_trait]
impl TriviaFetcher for OpenTdbFetcher {
    async fn fetch_categories(&self) -> Result<CategoryListPayload> {
        ensure_fetchable(&self.category_url)?;
        self.client
            .get(&self.category_url)
            .send()
            .await
            .with_context(|| format!("category fetch failed: {}", self.category_url))?
            .error_for_status()
            .context("category endpoint returned an error status")?
            .json::<CategoryListPayload>()
            .await
            .context("category payload did not parse")
    }

    async fn fetch_questions(&self, url: &str) -> Result<QuestionBatchPayload> {
        ensure_fetchable(url)?;
        self.client
            .get(url)
            .send()
            .await
            .with_context(|| format!("question fetch failed: {url}"))?
            .error_for_status()
            .context("question endpoint returned an error status")?
            .json::<QuestionBatchPayload>()
            .await
            .context("question payload did not parse")
    }
}

/// Only plain http(s) endpoints may be fetched on the core's behalf.
fn ensure_fetchable(raw: &str) -> Result<()> {
    let parsed = url::Url::parse(raw).with_context(|| format!("invalid fetch url: {raw}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => bail!("scheme '{scheme}' is not allowed for bridge fetches"),
    }
}

/// Serve bridge requests until the core side hangs up.
///
/// A failed fetch is logged and produces no reply; the core's bounded wait
/// on the reply channel surfaces it. The worker keeps serving afterwards.
pub async fn serve(
    fetcher: &dyn TriviaFetcher,
    requests: Receiver<BridgeRequest>,
    replies: Sender<BridgeReply>,
) {
    while let Ok(request) = requests.recv() {
        debug!(kind = request.kind(), "bridge request received");
        let outcome = match &request {
            BridgeRequest::Category => fetcher.fetch_categories().await.map(BridgeReply::Category),
            BridgeRequest::Questions { url } => {
                fetcher.fetch_questions(url).await.map(BridgeReply::Questions)
            }
        };
        match outcome {
            Ok(reply) => {
                if replies.send(reply).is_err() {
                    info!("reply channel closed; bridge worker exiting");
                    return;
                }
            }
            Err(error) => error!(kind = request.kind(), "bridge fetch failed: {error:#}"),
        }
    }
    info!("request channel closed; bridge worker exiting");
}

/// Launch the bridge worker on its own thread with a dedicated runtime.
pub fn spawn(
    fetcher: impl TriviaFetcher + 'static,
    requests: Receiver<BridgeRequest>,
    replies: Sender<BridgeReply>,
) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
            Ok(runtime) => runtime,
            Err(err) => {
                error!("failed to build bridge runtime: {err}");
                return;
            }
        };
        runtime.block_on(serve(&fetcher, requests, replies));
    })
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

use crate::config::BotConfig;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::{Duration, Instant};

const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Everything the handlers need, constructed once in `main` and passed down
/// explicitly. Handlers share no mutable state beyond the gateway-ready flag.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<BotConfig>,
    pub ready: Arc<AtomicBool>,
    pub started: Instant,
    pub http: reqwest::Client,
}

impl AppContext {
    pub fn new(config: BotConfig, started: Instant) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(PROBE_TIMEOUT).build()?;
        Ok(Self {
            config: Arc::new(config),
            ready: Arc::new(AtomicBool::new(false)),
            started,
            http,
        })
    }
}

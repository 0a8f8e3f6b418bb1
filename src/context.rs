//! Application Context
//!
//! Shared, injected dependencies provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;
use planner_core::{HttpTravelApi, PlannerConfig, SessionContext, SharedClock, SystemClock};

/// App-wide services provided via context
#[derive(Clone)]
pub struct PlannerContext {
    /// Current identity; components subscribe for the lifetime of their view
    pub session: SessionContext,
    pub config: Arc<PlannerConfig>,
    pub clock: SharedClock,
}

impl PlannerContext {
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            session: SessionContext::new(),
            config: Arc::new(config),
            clock: Arc::new(SystemClock),
        }
    }

    /// Client for the travel API at the configured base URL
    pub fn api(&self) -> HttpTravelApi {
        HttpTravelApi::from_config(&self.config)
    }
}

/// Configuration for this build, with an optional API override baked in at compile time
pub fn load_config() -> PlannerConfig {
    let config = PlannerConfig::default();
    match option_env!("PACKUP_API_BASE_URL") {
        Some(url) if !url.trim().is_empty() => config.with_api_base_url(url),
        _ => config,
    }
}

pub fn use_planner() -> PlannerContext {
    expect_context::<PlannerContext>()
}

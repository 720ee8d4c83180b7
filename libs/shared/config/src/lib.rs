use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_port: u16,
    /// Offset in minutes applied to the simulated clock when the server
    /// runs in demo mode. `None` means wall-clock time.
    pub demo_clock_offset_minutes: Option<i64>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_port = env::var("PLANNING_API_PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or_else(|| {
                warn!("PLANNING_API_PORT not set or invalid, using default 3000");
                3000
            });

        let demo_clock_offset_minutes = env::var("DEMO_CLOCK_OFFSET_MINUTES")
            .ok()
            .and_then(|offset| offset.parse().ok());

        if demo_clock_offset_minutes.is_some() {
            warn!("Demo clock mode enabled - server time is offset from wall clock");
        }

        Self {
            bind_port,
            demo_clock_offset_minutes,
        }
    }
}

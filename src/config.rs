//! Panel Configuration
//!
//! Storage keys, server endpoints and timings. Endpoints can be overridden
//! at build time with `REACTOR_WS_URL` and `REACTOR_HTTP_URL`.

/// Local-storage slot holding the checklist blob
pub const CHECKLIST_STORAGE_KEY: &str = "struviteChecklistState_v1";

/// Local-storage slot holding the color theme
pub const THEME_STORAGE_KEY: &str = "color-theme";

const DEFAULT_WS_URL: &str = "wss://panel-reactor-servidor.onrender.com";
const DEFAULT_HTTP_URL: &str = "https://panel-reactor-servidor.onrender.com";

/// Delay before reconnecting a closed socket
pub const RECONNECT_DELAY_MS: u32 = 5_000;

/// How long a notice stays visible
pub const NOTICE_TIMEOUT_MS: u32 = 5_000;

/// Fade-out time before a notice is removed
pub const NOTICE_FADE_MS: u32 = 400;

/// Pause before rasterizing the checklist clone
pub const RENDER_SETTLE_MS: u32 = 200;

/// Readings kept on the chart
pub const MAX_CHART_POINTS: usize = 20;

pub fn ws_url() -> &'static str {
    option_env!("REACTOR_WS_URL").unwrap_or(DEFAULT_WS_URL)
}

/// Endpoint receiving the checklist PDF
pub fn send_url() -> String {
    let base = option_env!("REACTOR_HTTP_URL").unwrap_or(DEFAULT_HTTP_URL);
    format!("{}/enviar-checklist", base.trim_end_matches('/'))
}

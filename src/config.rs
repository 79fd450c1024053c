//! Build-time configuration for the planner frontend.

const DEFAULT_API_BASE_URL: &str = "https://budgetingapp-q0wr.onrender.com";

/// Base URL of the budgeting API. Set `BUDGET_API_BASE_URL` at build time to
/// point the app at another deployment.
pub const API_BASE_URL: &str = match option_env!("BUDGET_API_BASE_URL") {
    Some(url) => url,
    None => DEFAULT_API_BASE_URL,
};

/// Local storage key holding the saved budget profile.
pub const PROFILE_STORAGE_KEY: &str = "financeProfile";

/// Value the misc percentage field falls back to when a profile is cleared.
pub const DEFAULT_MISC_PCT: &str = "15";

/// Viewport width (px) at or below which the layout switches to mobile.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// How long a notification toast stays visible.
pub const NOTIFICATION_DURATION_MS: u32 = 3_000;

/// Horizontal scroll offset (px) after which a table wrapper counts as scrolled.
pub const TABLE_SCROLLED_OFFSET_PX: i32 = 20;

/// Distance (px) from the right edge at which a table wrapper counts as fully scrolled.
pub const TABLE_SCROLL_END_SLACK_PX: i32 = 10;

/// Income volatility (percent) above which a three-month buffer is advised.
pub const HIGH_VOLATILITY_PCT: f64 = 30.0;

/// Goal type sent with every streak-tracking request.
pub const STREAK_GOAL_TYPE: &str = "budget_adherence";

/// Most months the streak form will generate inputs for.
pub const MAX_STREAK_MONTHS: usize = 120;

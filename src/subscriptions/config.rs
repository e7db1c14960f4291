/// Route prefixes that require an active premium subscription.
///
/// The premium access middleware checks requests against these; the settings expose the list
/// as-is.
pub static PREMIUM_ENDPOINTS: &[&str] = &[
    "/api/signals/",
    "/api/pairs/",
    "/api/chart-analysis/",
];

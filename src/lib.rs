// Module roster for the hora-mexico library; the binary and the integration
// tests both build on these.

// Categorized fetch errors with user-facing messages
pub mod error;

// Pure display formatting (time, date, weekday names)
pub mod format;

// Cancellable periodic refresh task
pub mod refresh;

// Screen state and its reducer
pub mod state;

// WorldTimeAPI client and payload model
pub mod time_client;

//! Shared constants for end-to-end tests
//!
//! When the fixture tables change, update only this file and `fixtures.rs`.

#![allow(dead_code)]

// ============================================================================
// Test Directors
// ============================================================================

/// Directs "Dawn" (positive return) and "Dusk" (zero return), plus a crew row
/// pointing at a movie missing from the metadata table.
pub const DIRECTOR_1_NAME: &str = "Ava Kael";

/// Directs "Harbor" only.
pub const DIRECTOR_2_NAME: &str = "Bo Linde";

/// Appears in the crew table, but none of their movies join.
pub const DIRECTOR_3_NAME: &str = "Cy Orrin";

/// Not in the crew table at all.
pub const UNKNOWN_DIRECTOR_NAME: &str = "Nonexistent Person";

// ============================================================================
// Test Movies
// ============================================================================

pub const MOVIE_1_TITLE: &str = "Dawn";
pub const MOVIE_2_TITLE: &str = "Dusk";
pub const MOVIE_3_TITLE: &str = "Harbor";

/// Movie id referenced by the crew table with no metadata row.
pub const UNJOINED_MOVIE_ID: u64 = 99;

// ============================================================================
// Test Timeouts and Configuration
// ============================================================================

/// Maximum time to wait for server to become ready (milliseconds)
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Timeout for individual HTTP requests (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Polling interval when waiting for server ready (milliseconds)
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;

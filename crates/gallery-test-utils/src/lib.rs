//! Gallery Test Utils - per-test fixtures and entity assertions
//!
//! Core Concepts:
//! - [`FixtureSession`]: one test's seed, generator, store and cached fixtures
//! - [`assert_correct_user`]: compare a persisted user with its source record
//! - [`init_tracing`]: route crate logs to the test output
//!
//! # Example
//!
//! ```rust,ignore
//! use gallery_test_utils::{assert_correct_user, FixtureSession};
//!
//! let session = FixtureSession::from_env()?;
//! let user = session.user()?;
//! assert!(user.check_password(session.user_password()?));
//! ```

pub mod assert;
pub mod fixtures;

pub use assert::{assert_correct_picture, assert_correct_user, assert_matches, AssertionFailure};
pub use fixtures::{FixtureError, FixtureSession};

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Install a test-writer subscriber honoring `RUST_LOG`
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

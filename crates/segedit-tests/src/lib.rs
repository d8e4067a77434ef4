//! Integration test crate for SegEdit.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on the segedit crates to verify they work together.

#[cfg(test)]
mod editing;


#[cfg(test)]
mod refresh;

/// Install a test-friendly tracing subscriber once. `RUST_LOG` controls
/// the level; repeated calls are harmless.
#[cfg(test)]
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

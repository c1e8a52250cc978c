// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests of the `plarc` library: scripts written to temporary
//! directories and run through the filesystem module loader.
//!
//! - `run/` - running scripts, error reports, limits
//! - `imports/` - `importar` resolution on disk
//! - `common/` - shared fixtures

mod cli {
    pub mod common;
    mod imports;
    mod run;
}

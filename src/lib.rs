//! Fixgen - test fixture generation for a distributed job-execution platform
//!
//! This library manufactures the ephemeral artifacts integration tests need:
//! deterministic-content input files with collision-resistant random names,
//! and minimal single-class jar packages built on the fly from already
//! compiled test classes.

pub mod config;
pub mod error;
pub mod factory;
pub mod naming;

pub use config::{Settings, DEFAULT_SCRATCH_DIR, SCRATCH_DIR_KEY};
pub use error::{Error, Result};
pub use factory::FixtureFactory;

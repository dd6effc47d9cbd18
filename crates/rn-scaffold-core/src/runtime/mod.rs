//! External tools used after generation
//!
//! This module provides:
//! - Package manager availability checks and dependency installation
//! - Git repository initialization

pub mod git;
pub mod package_manager;

pub use git::try_git_init;
pub use package_manager::{check_availability, install, is_online};

//! Command implementations for rulekit-cli

pub mod install;
pub mod list;
pub mod validate;

pub use install::{InstallOptions, run_install};
pub use list::run_list_tools;
pub use validate::run_validate;

//! Shared test utilities for the rulekit workspace.
//!
//! This crate provides standardised fixtures so the crate test suites do
//! not each hand-roll template directories. It is a dev-dependency only,
//! never published.
//!
//! # Modules
//!
//! - [`templates`]: [`TestTemplates`] builder for a templates root plus a
//!   destination directory

pub mod templates;

pub use templates::TestTemplates;

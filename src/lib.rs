//! Yes/no symptom triage over a fixed binary decision tree.
//!
//! - [`domain`]: tree model, builder, the reference tree and the traversal [`domain::Session`]
//! - [`application`]: assessment history and daily tips
//! - [`config`]: layered settings
//! - [`cli`]: the `symcheck` command line

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

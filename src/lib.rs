//! Markdown changelog generation for a GitHub milestone.
//!
//! Closed issues of the milestone are fetched from the issue search API, grouped into
//! sections by label and rendered as a markdown release entry, which can be inserted into an
//! existing changelog file.

pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod output;
pub mod patcher;
pub mod renderer;
pub mod run;

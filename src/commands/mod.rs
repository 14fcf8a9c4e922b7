//! CLI commands for mazegraph

pub mod dispatch;
pub mod info;
pub mod render;
pub mod run;
pub mod source;
pub mod weight;

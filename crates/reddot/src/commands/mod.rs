//! CLI command implementations.

mod database;
pub(crate) mod import;
pub(crate) mod post;
pub(crate) mod project;
pub(crate) mod render;
pub(crate) mod serve;

pub(crate) use import::ImportArgs;
pub(crate) use post::PostCommand;
pub(crate) use project::ProjectCommand;
pub(crate) use render::RenderArgs;
pub(crate) use serve::ServeArgs;

//! HTTP request handlers.

pub(crate) mod blogs;
pub(crate) mod health;
pub(crate) mod projects;
pub(crate) mod sitemap;

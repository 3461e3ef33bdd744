pub mod models;
pub mod snippet;

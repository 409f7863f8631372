pub mod analytics;
pub mod mock;
pub mod models;
pub mod navigation;
pub mod pages;
pub mod roster;
pub mod session;

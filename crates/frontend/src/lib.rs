//! Tasklist browser front end

pub mod app;
pub mod client;
pub mod components;
pub mod config;
pub mod forms;
pub mod pages;
pub mod storage;

pub use app::{App, Route};

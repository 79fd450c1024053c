//! Browser frontend for the Smart Budget Planner API.

pub mod api;
pub mod app;
pub mod collect;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod features;
pub mod format;
pub mod models;
pub mod pages;
pub mod state;
pub mod storage;

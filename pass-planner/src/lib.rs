//! Travel pass purchase planner.
//!
//! Answers: "Given the days I will travel and the tickets on sale, which
//! purchases cover my trips for the least money?"

pub mod app;
pub mod domain;
pub mod input;
pub mod planner;
pub mod report;

pub use app::{Error, run};

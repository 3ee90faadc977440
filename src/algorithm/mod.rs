//! Algorithm implementations for the screening pipeline
//!
//! This module contains the rule engine and analytics that make up the
//! screening core: score normalization and risk classification,
//! recommendation mapping, trend detection, history statistics, follow-up
//! scheduling and parallel batch helpers.

pub mod batch;
pub mod classify;
pub mod followup;
pub mod recommend;
pub mod statistics;
pub mod trend;

//! Retention Hub core — deterministic churn-risk and revenue-impact
//! scoring with discount simulation.
//!
//! The crate is built around four pure operations:
//!   1. Base churn risk from tenure, plan tier, and support access
//!   2. Simulated risk under a retention discount
//!   3. Revenue-at-risk and revenue safeguarded over an LTV horizon
//!   4. Selection resolution against a swappable roster snapshot
//!
//! `session::EvaluationSession` wires them together for a hosting layer;
//! `roster::RosterGenerator` provides deterministic cohort datasets.

pub mod config;
pub mod error;
pub mod name_generator;
pub mod rng;
pub mod roster;
pub mod scoring;
pub mod selection;
pub mod session;
pub mod strategy;
pub mod types;

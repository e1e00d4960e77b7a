//! Core library components.
//!
//! This module contains the reconciliation logic: talking to the store through
//! `gh`, classifying ownership, planning and executing operations.

pub mod auth;
pub mod config;
pub mod constants;
pub mod domain;
pub mod executor;
pub mod fingerprint;
pub mod gh;
pub mod inventory;
pub mod ownership;
pub mod planner;
pub mod reconcile;
pub mod runner;
pub mod types;
pub mod validation;

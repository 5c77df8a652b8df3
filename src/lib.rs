//! Payroll ledger for a two-branch business.
//!
//! This crate computes weekly wages with the FNPF deduction, keeps a ledger
//! of wage records keyed by pay period, and exports them as BSP or BRED bank
//! transfer files and as a spreadsheet. An axum router exposes the
//! operations over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod auth;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod service;
pub mod storage;

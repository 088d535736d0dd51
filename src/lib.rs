//! Tax, Payroll and Loan Payoff Engine for Guyana
//!
//! This crate turns a salary profile into gross income, statutory deductions
//! (NIS and PAYE), net pay and gratuity projections under the Guyana 2026
//! schedule. It also estimates property tax and projects loan payoff under a
//! declining-balance model, with and without periodic extra payments.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;

//! Card Risk Dashboard
//!
//! Fraud and risk analytics over credit-card transaction datasets.
//!
//! The core is a dataset preparer (parse, clean, derive attributes) and a
//! set of pure metrics functions over read-only views of the prepared
//! table. Page reports, SVG charts and the `card-risk` CLI are built on
//! top of them.
//!
//! ## Getting Started
//!
//! ```bash
//! card-risk --source data/creditcard.csv dashboard --output-dir reports --charts charts
//! card-risk transactions --min-amount 100 --max-hour 6
//! ```

pub mod charts;
pub mod commands;
pub mod data;
pub mod metrics;
pub mod output;
pub mod report;
pub mod source;
pub mod utils;

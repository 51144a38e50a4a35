//! Dataset layer: types, preparation, filtering and caching.
//!
//! ```text
//!  source (path / URL)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader  │  parse → drop missing → drop duplicates → derive
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────────┐
//!   │ PreparedTable │  immutable, optionally memoized in DatasetCache
//!   └───────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter  │  amount / hour / class → TableView
//!   └──────────┘
//! ```

pub mod cache;
pub mod filter;
pub mod loader;
pub mod model;

// Re-export main types
pub use cache::DatasetCache;
pub use filter::TransactionFilter;
pub use loader::{load_and_prepare, parse_records, prepare, to_csv, RawRow, RawTable};
pub use model::{
    AmountCategory, PrepareSummary, PreparedTable, TableView, Transaction, TransactionType,
};

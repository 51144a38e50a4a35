use crate::data::TransactionFilter;
use crate::utils::config::{DEFAULT_SOURCE, HOURS_PER_DAY};
use std::fmt;
use std::path::{Path, PathBuf};

/// Dashboard pages, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Overview,
    Transactions,
    Fraud,
    Risk,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Overview,
        Page::Transactions,
        Page::Fraud,
        Page::Risk,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Overview => "overview",
            Page::Transactions => "transactions",
            Page::Fraud => "fraud",
            Page::Risk => "risk",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Arguments shared by the page commands
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct PageArgs {
    /// Dataset path or URL
    pub source: String,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Directory for SVG charts (optional)
    pub charts_dir: Option<PathBuf>,

    /// Transaction page amount bounds, inclusive
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,

    /// Transaction page hour bounds, inclusive
    pub min_hour: Option<f64>,
    pub max_hour: Option<f64>,
}

impl Default for PageArgs {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            output_json: None,
            charts_dir: None,
            min_amount: None,
            max_amount: None,
            min_hour: None,
            max_hour: None,
        }
    }
}

impl PageArgs {
    /// Filter built from the amount/hour bounds
    ///
    /// A range is only set when at least one of its bounds was given; the
    /// missing bound is open (0 below, unbounded or end of day above).
    pub fn filter(&self) -> TransactionFilter {
        let mut filter = TransactionFilter::new();

        if self.min_amount.is_some() || self.max_amount.is_some() {
            filter = filter.with_amount_range(
                self.min_amount.unwrap_or(0.0),
                self.max_amount.unwrap_or(f64::MAX),
            );
        }

        if self.min_hour.is_some() || self.max_hour.is_some() {
            filter = filter.with_hour_range(
                self.min_hour.unwrap_or(0.0),
                self.max_hour.unwrap_or(HOURS_PER_DAY),
            );
        }

        filter
    }

    /// JSON path for one page when writing a whole dashboard into a directory
    pub fn for_page_in(&self, page: Page, output_dir: Option<&Path>) -> PageArgs {
        PageArgs {
            output_json: output_dir.map(|dir| dir.join(format!("{}.json", page.name()))),
            ..self.clone()
        }
    }
}

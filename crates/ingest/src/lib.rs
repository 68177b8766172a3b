pub mod aggregate;
pub mod config;
pub mod export;
pub mod fetcher;
pub mod heading;
pub mod numeric;
pub mod page;
pub mod runner;
pub mod table;

pub use aggregate::{aggregate, AggregateError};
pub use config::ScrapeConfig;
pub use export::{write_csv, write_csv_file};
pub use fetcher::{retry_with_backoff, FetchError, HttpPageSource, PageSource};
pub use heading::{extract_constituency_name, name_from_heading};
pub use numeric::{normalize, normalize_cell};
pub use page::{parse_constituency_page, parse_document};
pub use runner::{scrape_all, scrape_constituency, ConstituencyOutcome, Harvest};
pub use table::{locate_candidate_table, resolve_columns, ColumnMap, Field};

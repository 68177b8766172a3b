use results_core::ResultRow;

use crate::config::ScrapeConfig;
use crate::fetcher::{FetchError, PageSource};
use crate::page::parse_constituency_page;

/// What a single constituency page produced.
#[derive(Debug)]
pub enum ConstituencyOutcome {
    Rows(Vec<ResultRow>),
    NoTable,
    FetchFailed(FetchError),
}

/// Rows and page counters accumulated over one sequential run.
#[derive(Debug, Default)]
pub struct Harvest {
    pub rows: Vec<ResultRow>,
    pub pages_with_rows: usize,
    pub pages_without_table: usize,
    pub fetch_failures: usize,
}

impl ConstituencyOutcome {
    /// Short label for progress lines.
    pub fn label(&self) -> &'static str {
        match self {
            ConstituencyOutcome::Rows(_) => "scraped",
            ConstituencyOutcome::NoTable => "no table",
            ConstituencyOutcome::FetchFailed(_) => "fetch failed",
        }
    }
}

impl Harvest {
    fn record(&mut self, constituency_id: u32, outcome: ConstituencyOutcome) {
        match outcome {
            ConstituencyOutcome::Rows(rows) => {
                self.pages_with_rows += 1;
                self.rows.extend(rows);
            }
            ConstituencyOutcome::NoTable => {
                tracing::warn!(constituency = constituency_id, "no candidate table found");
                self.pages_without_table += 1;
            }
            ConstituencyOutcome::FetchFailed(e) => {
                tracing::warn!(constituency = constituency_id, error = %e, "failed to fetch page");
                self.fetch_failures += 1;
            }
        }
    }
}

pub async fn scrape_constituency<S: PageSource>(
    source: &S,
    config: &ScrapeConfig,
    constituency_id: u32,
) -> ConstituencyOutcome {
    let url = config.page_url(constituency_id);

    let html = match source.fetch(&url).await {
        Ok(html) => html,
        Err(e) => return ConstituencyOutcome::FetchFailed(e),
    };

    match parse_constituency_page(&html, constituency_id, &url) {
        Some(rows) => ConstituencyOutcome::Rows(rows),
        None => ConstituencyOutcome::NoTable,
    }
}

/// Fetch and parse every configured constituency, one page at a time.
pub async fn scrape_all<S: PageSource>(source: &S, config: &ScrapeConfig) -> Harvest {
    let ids = config.constituency_ids();
    let total = ids.clone().count();
    let mut harvest = Harvest::default();

    for (done, constituency_id) in ids.enumerate() {
        if done > 0 && !config.request_delay.is_zero() {
            tokio::time::sleep(config.request_delay).await;
        }

        let outcome = scrape_constituency(source, config, constituency_id).await;
        tracing::info!(
            constituency = constituency_id,
            "[{}/{}] {}",
            done + 1,
            total,
            outcome.label()
        );
        harvest.record(constituency_id, outcome);
    }

    tracing::info!(
        rows = harvest.rows.len(),
        pages_with_rows = harvest.pages_with_rows,
        pages_without_table = harvest.pages_without_table,
        fetch_failures = harvest.fetch_failures,
        "scrape finished"
    );
    harvest
}

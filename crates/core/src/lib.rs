use serde::{Deserialize, Serialize};

pub const PROJECT_NAME: &str = "results-scrape";
pub const PROJECT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// One candidate's result within one assembly constituency.
///
/// Field renames fix the CSV column headers and their order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    #[serde(rename = "AC_No")]
    pub constituency_id: u32,
    #[serde(rename = "AC_Name")]
    pub constituency_name: String,
    #[serde(rename = "Candidate")]
    pub candidate: String,
    #[serde(rename = "Party")]
    pub party: String,
    #[serde(rename = "EVM_Votes")]
    pub evm_votes: f64,
    #[serde(rename = "Postal_Votes")]
    pub postal_votes: f64,
    #[serde(rename = "Total_Votes")]
    pub total_votes: f64,
    #[serde(rename = "Vote_Share_%")]
    pub vote_share_percent: f64,
    #[serde(rename = "Source_URL")]
    pub source_url: String,
    /// Unset until the rows of a constituency have been ranked together.
    #[serde(rename = "Rank_In_Constituency")]
    pub rank_in_constituency: Option<u32>,
}

impl ResultRow {
    /// Total as reported, or EVM plus postal when the page left it at zero.
    pub fn effective_total(&self) -> f64 {
        if self.total_votes == 0.0 {
            self.evm_votes + self.postal_votes
        } else {
            self.total_votes
        }
    }
}

pub const CSV_HEADERS: [&str; 10] = [
    "AC_No",
    "AC_Name",
    "Candidate",
    "Party",
    "EVM_Votes",
    "Postal_Votes",
    "Total_Votes",
    "Vote_Share_%",
    "Source_URL",
    "Rank_In_Constituency",
];

use results_core::ResultRow;
use scraper::Html;

use crate::heading::{element_text, extract_constituency_name};
use crate::numeric::normalize_cell;
use crate::table::{
    locate_candidate_table, resolve_columns, ColumnMap, Field, DATA_CELL, HEADER_CELL, ROW,
};

/// Parse one constituency results page into unranked candidate rows.
///
/// Returns `None` when the page has no candidate table. A table with only a
/// header yields `Some` of an empty vector.
pub fn parse_constituency_page(
    html: &str,
    constituency_id: u32,
    source_url: &str,
) -> Option<Vec<ResultRow>> {
    let document = Html::parse_document(html);
    parse_document(&document, constituency_id, source_url)
}

pub fn parse_document(
    document: &Html,
    constituency_id: u32,
    source_url: &str,
) -> Option<Vec<ResultRow>> {
    let constituency_name = extract_constituency_name(document);
    let table = locate_candidate_table(document)?;

    let mut rows = table.select(&ROW);
    let columns = match rows.next() {
        Some(header_row) => {
            let headers: Vec<String> = header_row.select(&HEADER_CELL).map(element_text).collect();
            resolve_columns(&headers)
        }
        None => ColumnMap::default(),
    };

    let mut results = Vec::new();
    for row in rows {
        let cells: Vec<String> = row.select(&DATA_CELL).map(element_text).collect();
        if cells.len() < 2 {
            continue;
        }

        let text = |field: Field| -> String {
            columns
                .get(field)
                .and_then(|i| cells.get(i))
                .cloned()
                .unwrap_or_default()
        };
        let number = |field: Field| -> f64 {
            normalize_cell(columns.get(field).and_then(|i| cells.get(i)).map(String::as_str))
        };

        results.push(ResultRow {
            constituency_id,
            constituency_name: constituency_name.clone(),
            candidate: text(Field::Candidate),
            party: text(Field::Party),
            evm_votes: number(Field::Evm),
            postal_votes: number(Field::Postal),
            total_votes: number(Field::Total),
            vote_share_percent: number(Field::VoteShare),
            source_url: source_url.to_string(),
            rank_in_constituency: None,
        });
    }

    tracing::debug!(
        constituency = constituency_id,
        name = %constituency_name,
        rows = results.len(),
        "parsed constituency page"
    );
    Some(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://results.example/ConstituencywiseS04195.htm";

    const PAGE: &str = r#"<html><head><title>Election Results</title></head><body>
        <h2><span>Assembly Constituency 195 - Maner (Bihar)</span></h2>
        <table class="table">
          <thead>
            <tr><th>S.N.</th><th>Candidate</th><th>Party</th><th>EVM Votes</th>
                <th>Postal Votes</th><th>Total Votes</th><th>% of Votes</th></tr>
          </thead>
          <tbody>
            <tr><td>1</td><td>BHAI VIRENDRA</td><td>Rashtriya Janata Dal</td>
                <td>1,02,310</td><td>812</td><td>1,03,122</td><td>47.91</td></tr>
            <tr><td>2</td><td>Shyam Yadav</td><td>Bharatiya Janata Party</td>
                <td>90,104</td><td>640</td><td>90,744</td><td>42.16</td></tr>
            <tr><td colspan="7">&nbsp;</td></tr>
            <tr><td>Total</td><td></td><td></td><td>1,92,414</td><td>1,452</td><td>1,93,866</td><td></td></tr>
          </tbody>
        </table>
    </body></html>"#;

    #[test]
    fn parses_candidate_rows() {
        let rows = parse_constituency_page(PAGE, 195, URL).unwrap();
        assert_eq!(rows.len(), 3);

        let first = &rows[0];
        assert_eq!(first.constituency_id, 195);
        assert_eq!(first.constituency_name, "Maner");
        assert_eq!(first.candidate, "BHAI VIRENDRA");
        assert_eq!(first.party, "Rashtriya Janata Dal");
        assert_eq!(first.evm_votes, 102310.0);
        assert_eq!(first.postal_votes, 812.0);
        assert_eq!(first.total_votes, 103122.0);
        assert_eq!(first.vote_share_percent, 47.91);
        assert_eq!(first.source_url, URL);
        assert_eq!(first.rank_in_constituency, None);

        assert_eq!(rows[1].candidate, "Shyam Yadav");
        // Summary rows with enough cells are kept as-is.
        assert_eq!(rows[2].candidate, "");
    }

    #[test]
    fn missing_columns_degrade_to_defaults() {
        let html = r#"<html><body><h2>Constituency: 12 Patna - Patna(1)</h2>
            <table>
              <tr><th>Candidate</th><th>Total</th></tr>
              <tr><td>Asha Devi</td><td>4,500</td></tr>
              <tr><td>Short</td></tr>
            </table></body></html>"#;
        let rows = parse_constituency_page(html, 12, URL).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].constituency_name, "Patna");
        assert_eq!(rows[0].party, "");
        assert_eq!(rows[0].evm_votes, 0.0);
        assert_eq!(rows[0].total_votes, 4500.0);
    }

    #[test]
    fn short_rows_default_out_of_range_cells() {
        let html = r#"<table>
              <tr><th>No</th><th>Candidate</th><th>Party</th><th>Total</th></tr>
              <tr><td>1</td><td>Only Name</td></tr>
            </table>"#;
        let rows = parse_constituency_page(html, 3, URL).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].candidate, "Only Name");
        assert_eq!(rows[0].party, "");
        assert_eq!(rows[0].total_votes, 0.0);
        assert_eq!(rows[0].constituency_name, "");
    }

    #[test]
    fn page_without_table_is_none() {
        let html = "<html><body><h2>Constituency: 9 Nowhere - X(1)</h2><p>Awaited</p></body></html>";
        assert!(parse_constituency_page(html, 9, URL).is_none());
    }

    #[test]
    fn header_only_table_is_empty() {
        let html = "<table><tr><th>Candidate</th><th>Total Votes</th></tr></table>";
        assert_eq!(parse_constituency_page(html, 4, URL), Some(Vec::new()));
    }
}

use std::collections::BTreeMap;

use results_core::ResultRow;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AggregateError {
    #[error("no data collected")]
    NoDataCollected,
}

/// Backfill missing totals, rank candidates within each constituency and
/// order the whole set by constituency then rank.
///
/// Ranking is dense over descending total votes: ties share a rank and the
/// next distinct total gets the following rank.
pub fn aggregate(rows: Vec<ResultRow>) -> Result<Vec<ResultRow>, AggregateError> {
    if rows.is_empty() {
        return Err(AggregateError::NoDataCollected);
    }

    let mut groups: BTreeMap<u32, Vec<ResultRow>> = BTreeMap::new();
    for mut row in rows {
        row.total_votes = row.effective_total();
        groups.entry(row.constituency_id).or_default().push(row);
    }

    let mut ranked = Vec::new();
    for (_, mut group) in groups {
        assign_dense_ranks(&mut group);
        group.sort_by_key(|row| row.rank_in_constituency);
        ranked.extend(group);
    }

    Ok(ranked)
}

fn assign_dense_ranks(group: &mut [ResultRow]) {
    let mut totals: Vec<f64> = group.iter().map(|row| row.total_votes).collect();
    totals.sort_by(|a, b| b.total_cmp(a));
    totals.dedup();

    for row in group.iter_mut() {
        let rank = totals
            .iter()
            .position(|total| *total == row.total_votes)
            .map(|i| i as u32 + 1);
        row.rank_in_constituency = rank;
    }
}

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::heading::element_text;

static TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("invalid selector: table"));
pub(crate) static ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("invalid selector: tr"));
pub(crate) static HEADER_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("th").expect("invalid selector: th"));
pub(crate) static DATA_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("invalid selector: td"));

/// First table whose header cells mention both "candidate" and "total".
pub fn locate_candidate_table(document: &Html) -> Option<ElementRef<'_>> {
    document.select(&TABLE).find(|table| {
        let header = table
            .select(&HEADER_CELL)
            .map(|th| element_text(th).to_lowercase())
            .collect::<Vec<_>>()
            .join(" ");
        header.contains("candidate") && header.contains("total")
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Candidate,
    Party,
    Evm,
    Postal,
    Total,
    VoteShare,
}

/// Header substrings per field, in priority order.
const FIELD_SYNONYMS: &[(Field, &[&str])] = &[
    (Field::Candidate, &["candidate"]),
    (Field::Party, &["party"]),
    (Field::Evm, &["evm"]),
    (Field::Postal, &["postal"]),
    (Field::Total, &["total"]),
    (Field::VoteShare, &["%", "share"]),
];

/// Column position of each field in a results table; `None` when absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub candidate: Option<usize>,
    pub party: Option<usize>,
    pub evm: Option<usize>,
    pub postal: Option<usize>,
    pub total: Option<usize>,
    pub vote_share: Option<usize>,
}

impl ColumnMap {
    pub fn get(&self, field: Field) -> Option<usize> {
        match field {
            Field::Candidate => self.candidate,
            Field::Party => self.party,
            Field::Evm => self.evm,
            Field::Postal => self.postal,
            Field::Total => self.total,
            Field::VoteShare => self.vote_share,
        }
    }

    fn set(&mut self, field: Field, index: Option<usize>) {
        let slot = match field {
            Field::Candidate => &mut self.candidate,
            Field::Party => &mut self.party,
            Field::Evm => &mut self.evm,
            Field::Postal => &mut self.postal,
            Field::Total => &mut self.total,
            Field::VoteShare => &mut self.vote_share,
        };
        *slot = index;
    }
}

/// Map each field to the first header cell (left to right) containing any
/// of its synonyms, case-insensitively.
pub fn resolve_columns<S: AsRef<str>>(headers: &[S]) -> ColumnMap {
    let lowered: Vec<String> = headers.iter().map(|h| h.as_ref().to_lowercase()).collect();

    let mut map = ColumnMap::default();
    for (field, synonyms) in FIELD_SYNONYMS {
        let index = lowered
            .iter()
            .position(|h| synonyms.iter().any(|s| h.contains(*s)));
        map.set(*field, index);
    }
    map
}

//! Kanji catalog: records plus the filter → sort → paginate pipeline.
//!
//! Everything here is pure. The list view-model calls [`derive`] whenever
//! it needs the visible page.

mod filter;
mod pagination;
mod record;

pub use filter::{FilterPatch, FilterState, SortKey, StrokeRange};
pub use pagination::{PaginationInfo, PaginationState};
pub use record::{
    English, Example, KanjiGlyph, KanjiRecord, Kunyomi, Onyomi, Radical, References, Strokes,
};

/// Highest grade kept at load time.
pub const MAX_GRADE: u32 = 6;

/// Visible page plus its pagination summary.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView<'a> {
    pub page: Vec<&'a KanjiRecord>,
    pub info: PaginationInfo,
}

/// Load-time cleanup of the upstream collection.
///
/// Drops records without a grade (or grade 0) and records above
/// [`MAX_GRADE`], then stable-sorts by grade.
pub fn prepare_collection(records: Vec<KanjiRecord>) -> Vec<KanjiRecord> {
    let mut kept: Vec<KanjiRecord> = records
        .into_iter()
        .filter(|record| matches!(record.grade, Some(grade) if (1..=MAX_GRADE).contains(&grade)))
        .collect();
    kept.sort_by_key(KanjiRecord::grade_value);
    kept
}

/// Records matching `filter`, sorted by its sort key.
pub fn filter_and_sort<'a>(records: &'a [KanjiRecord], filter: &FilterState) -> Vec<&'a KanjiRecord> {
    let mut matched: Vec<&KanjiRecord> = records
        .iter()
        .filter(|record| filter.matches(record))
        .collect();
    matched.sort_by(|a, b| filter.sort_key.compare(a, b));
    matched
}

pub fn derive<'a>(
    records: &'a [KanjiRecord],
    filter: &FilterState,
    pagination: &PaginationState,
) -> CatalogView<'a> {
    let filtered = filter_and_sort(records, filter);
    let info = pagination.info(filtered.len());
    let page = pagination.slice(&filtered).to_vec();
    CatalogView { page, info }
}

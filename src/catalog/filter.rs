//! Search, filter and sort criteria for the kanji list.

use std::cmp::Ordering;
use std::fmt;

use super::record::KanjiRecord;

/// Stroke-count bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeRange {
    OneToFive,
    SixToTen,
    ElevenToFifteen,
    SixteenPlus,
}

impl StrokeRange {
    pub const ALL: [StrokeRange; 4] = [
        StrokeRange::OneToFive,
        StrokeRange::SixToTen,
        StrokeRange::ElevenToFifteen,
        StrokeRange::SixteenPlus,
    ];

    /// Parse a bucket label (`1-5`, `6-10`, `11-15`, `16+`).
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "1-5" => Some(Self::OneToFive),
            "6-10" => Some(Self::SixToTen),
            "11-15" => Some(Self::ElevenToFifteen),
            "16+" => Some(Self::SixteenPlus),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneToFive => "1-5",
            Self::SixToTen => "6-10",
            Self::ElevenToFifteen => "11-15",
            Self::SixteenPlus => "16+",
        }
    }

    /// Inclusive bounds check.
    pub fn contains(&self, strokes: u32) -> bool {
        match self {
            Self::OneToFive => (1..=5).contains(&strokes),
            Self::SixToTen => (6..=10).contains(&strokes),
            Self::ElevenToFifteen => (11..=15).contains(&strokes),
            Self::SixteenPlus => strokes >= 16,
        }
    }
}

impl fmt::Display for StrokeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort order for the filtered list. Always ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Character,
    Grade,
    Strokes,
    Meaning,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Character,
        SortKey::Grade,
        SortKey::Strokes,
        SortKey::Meaning,
    ];

    /// Parse a sort label. Unknown labels sort by character.
    pub fn parse(label: &str) -> Self {
        match label {
            "grade" => Self::Grade,
            "strokes" => Self::Strokes,
            "meaning" => Self::Meaning,
            _ => Self::Character,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Grade => "grade",
            Self::Strokes => "strokes",
            Self::Meaning => "meaning",
        }
    }

    pub fn compare(&self, a: &KanjiRecord, b: &KanjiRecord) -> Ordering {
        match self {
            Self::Grade => a.grade_value().cmp(&b.grade_value()),
            Self::Strokes => a.stroke_count().cmp(&b.stroke_count()),
            Self::Meaning => collate(&a.meaning, &b.meaning),
            Self::Character => collate(a.character(), b.character()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive comparison with an ordinal tie-break.
fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Current search/filter/sort parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub search_term: String,
    /// Grade as typed; empty means no grade filter.
    pub grade: String,
    pub stroke_range: Option<StrokeRange>,
    pub sort_key: SortKey,
}

/// Partial update for [`FilterState`]. `None` leaves a field untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterPatch {
    pub search_term: Option<String>,
    pub grade: Option<String>,
    pub stroke_range: Option<Option<StrokeRange>>,
    pub sort_key: Option<SortKey>,
}

impl FilterState {
    /// True when any criterion differs from the defaults.
    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty()
            || !self.grade.is_empty()
            || self.stroke_range.is_some()
            || self.sort_key != SortKey::Character
    }

    pub fn apply(&mut self, patch: FilterPatch) {
        if let Some(term) = patch.search_term {
            self.search_term = term;
        }
        if let Some(grade) = patch.grade {
            self.grade = grade;
        }
        if let Some(range) = patch.stroke_range {
            self.stroke_range = range;
        }
        if let Some(key) = patch.sort_key {
            self.sort_key = key;
        }
    }

    /// All clauses ANDed.
    pub fn matches(&self, record: &KanjiRecord) -> bool {
        self.matches_search(record) && self.matches_grade(record) && self.matches_strokes(record)
    }

    fn matches_search(&self, record: &KanjiRecord) -> bool {
        let term = self.search_term.as_str();
        if term.is_empty() || record.character().contains(term) {
            return true;
        }
        let needle = term.to_lowercase();
        [
            record.meaning.as_str(),
            record.english_meaning(),
            record.kunyomi_romaji(),
            record.onyomi_romaji(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    // String comparison on purpose: "01" does not select grade 1.
    fn matches_grade(&self, record: &KanjiRecord) -> bool {
        if self.grade.is_empty() {
            return true;
        }
        record
            .grade
            .is_some_and(|grade| grade.to_string() == self.grade)
    }

    fn matches_strokes(&self, record: &KanjiRecord) -> bool {
        self.stroke_range
            .map_or(true, |range| range.contains(record.stroke_count()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(character: &str, meaning: &str, grade: u32, strokes: u32) -> KanjiRecord {
        let mut record = KanjiRecord {
            grade: Some(grade),
            kstroke: strokes,
            meaning: meaning.to_string(),
            ..KanjiRecord::default()
        };
        record.kanji.character = character.to_string();
        record.kanji.meaning.english = meaning.to_string();
        record
    }

    #[test]
    fn stroke_range_bounds_are_inclusive() {
        assert!(StrokeRange::OneToFive.contains(1));
        assert!(StrokeRange::OneToFive.contains(5));
        assert!(!StrokeRange::OneToFive.contains(6));
        assert!(!StrokeRange::OneToFive.contains(0));
        assert!(StrokeRange::SixToTen.contains(10));
        assert!(StrokeRange::ElevenToFifteen.contains(11));
        assert!(!StrokeRange::ElevenToFifteen.contains(16));
        assert!(StrokeRange::SixteenPlus.contains(29));
    }

    #[test]
    fn stroke_range_labels_parse_back() {
        for range in StrokeRange::ALL {
            assert_eq!(StrokeRange::parse(range.as_str()), Some(range));
        }
        assert_eq!(StrokeRange::parse("5-1"), None);
    }

    #[test]
    fn unknown_sort_label_falls_back_to_character() {
        assert_eq!(SortKey::parse("strokes"), SortKey::Strokes);
        assert_eq!(SortKey::parse("popularity"), SortKey::Character);
    }

    #[test]
    fn search_on_character_is_exact_substring() {
        let filter = FilterState {
            search_term: "水".to_string(),
            ..FilterState::default()
        };
        assert!(filter.matches(&record("水", "water", 1, 4)));
        assert!(!filter.matches(&record("火", "fire", 1, 4)));
    }

    #[test]
    fn search_on_text_fields_ignores_case() {
        let mut water = record("水", "", 1, 4);
        water.kanji.meaning.english = "water".to_string();
        let filter = FilterState {
            search_term: "WATER".to_string(),
            ..FilterState::default()
        };
        assert!(filter.matches(&water));
    }

    #[test]
    fn search_covers_readings() {
        let mut tree = record("木", "tree", 1, 4);
        tree.kanji.kunyomi.romaji = "ki".to_string();
        tree.kanji.onyomi.romaji = "moku".to_string();
        let by_onyomi = FilterState {
            search_term: "Moku".to_string(),
            ..FilterState::default()
        };
        assert!(by_onyomi.matches(&tree));
    }

    #[test]
    fn grade_filter_compares_strings() {
        let one = record("一", "one", 1, 1);
        let exact = FilterState {
            grade: "1".to_string(),
            ..FilterState::default()
        };
        let padded = FilterState {
            grade: "01".to_string(),
            ..FilterState::default()
        };
        assert!(exact.matches(&one));
        assert!(!padded.matches(&one));
    }

    #[test]
    fn stroke_filter_excludes_out_of_bucket() {
        let filter = FilterState {
            stroke_range: Some(StrokeRange::OneToFive),
            ..FilterState::default()
        };
        assert!(!filter.matches(&record("糸", "thread", 1, 6)));
        assert!(filter.matches(&record("一", "one", 1, 1)));
    }

    #[test]
    fn patch_only_touches_present_fields() {
        let mut filter = FilterState {
            search_term: "tree".to_string(),
            grade: "2".to_string(),
            ..FilterState::default()
        };
        filter.apply(FilterPatch {
            grade: Some(String::new()),
            sort_key: Some(SortKey::Meaning),
            ..FilterPatch::default()
        });
        assert_eq!(filter.search_term, "tree");
        assert_eq!(filter.grade, "");
        assert_eq!(filter.sort_key, SortKey::Meaning);
    }

    #[test]
    fn meaning_sort_ignores_case() {
        let apple = record("a", "apple", 1, 1);
        let banana = record("b", "Banana", 1, 1);
        assert_eq!(SortKey::Meaning.compare(&apple, &banana), Ordering::Less);
    }
}

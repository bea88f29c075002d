//! Kanji records as served by the upstream API.
//!
//! The upstream payload is wide and loosely typed, so every field defaults
//! when it is missing, `null` or of the wrong type. Nothing here validates
//! the shape; a record with blank fields still decodes and renders blank.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Decode a field, falling back to its default on `null` or a type mismatch.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// One kanji entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KanjiRecord {
    #[serde(deserialize_with = "lenient")]
    pub ka_id: String,
    /// School grade; absent for characters outside the grade curriculum.
    #[serde(deserialize_with = "lenient")]
    pub grade: Option<u32>,
    /// Stroke count.
    #[serde(deserialize_with = "lenient")]
    pub kstroke: u32,
    /// Short English gloss.
    #[serde(deserialize_with = "lenient")]
    pub meaning: String,
    /// Mnemonic hint (detail payload only).
    #[serde(deserialize_with = "lenient")]
    pub mn_hint: String,
    #[serde(deserialize_with = "lenient")]
    pub kanji: KanjiGlyph,
    #[serde(deserialize_with = "lenient")]
    pub radical: Radical,
    #[serde(deserialize_with = "lenient")]
    pub references: References,
    #[serde(deserialize_with = "lenient")]
    pub examples: Vec<Example>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KanjiGlyph {
    #[serde(deserialize_with = "lenient")]
    pub character: String,
    #[serde(deserialize_with = "lenient")]
    pub meaning: English,
    #[serde(deserialize_with = "lenient")]
    pub kunyomi: Kunyomi,
    #[serde(deserialize_with = "lenient")]
    pub onyomi: Onyomi,
    #[serde(deserialize_with = "lenient")]
    pub strokes: Strokes,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct English {
    #[serde(deserialize_with = "lenient")]
    pub english: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Kunyomi {
    #[serde(deserialize_with = "lenient")]
    pub hiragana: String,
    #[serde(deserialize_with = "lenient")]
    pub romaji: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Onyomi {
    #[serde(deserialize_with = "lenient")]
    pub katakana: String,
    #[serde(deserialize_with = "lenient")]
    pub romaji: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Strokes {
    #[serde(deserialize_with = "lenient")]
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Radical {
    #[serde(deserialize_with = "lenient")]
    pub character: String,
    #[serde(deserialize_with = "lenient")]
    pub strokes: u32,
    #[serde(deserialize_with = "lenient")]
    pub meaning: English,
    #[serde(deserialize_with = "lenient")]
    pub name: Kunyomi,
    #[serde(deserialize_with = "lenient")]
    pub position: Kunyomi,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct References {
    #[serde(deserialize_with = "lenient")]
    pub classic_nelson: String,
    #[serde(deserialize_with = "lenient")]
    pub kodansha: String,
    #[serde(deserialize_with = "lenient")]
    pub grade: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Example {
    #[serde(deserialize_with = "lenient")]
    pub japanese: String,
    #[serde(deserialize_with = "lenient")]
    pub meaning: English,
}

impl KanjiRecord {
    /// The glyph itself.
    pub fn character(&self) -> &str {
        &self.kanji.character
    }

    /// Identifier accepted by the detail endpoint.
    pub fn id(&self) -> &str {
        &self.kanji.character
    }

    pub fn english_meaning(&self) -> &str {
        &self.kanji.meaning.english
    }

    pub fn kunyomi_romaji(&self) -> &str {
        &self.kanji.kunyomi.romaji
    }

    pub fn onyomi_romaji(&self) -> &str {
        &self.kanji.onyomi.romaji
    }

    /// Stroke count, preferring the flat `kstroke` field.
    pub fn stroke_count(&self) -> u32 {
        if self.kstroke > 0 {
            self.kstroke
        } else {
            self.kanji.strokes.count
        }
    }

    /// Grade used for sorting; absent grades sort first.
    pub fn grade_value(&self) -> u32 {
        self.grade.unwrap_or(0)
    }
}

// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::fmt::Formatter;

use rusqlite::ToSql;
use rusqlite::types::FromSql;
use rusqlite::types::FromSqlResult;
use rusqlite::types::ToSqlOutput;
use rusqlite::types::ValueRef;
use serde::Serialize;

use crate::error::Fallible;
use crate::error::fail;
use crate::types::language::Language;
use crate::types::statistics::Statistics;

/// A card's identifier, unique within one user's deck.
#[derive(Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct CardId(u32);

impl CardId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Display for CardId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ToSql for CardId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0))
    }
}

impl FromSql for CardId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let id: u32 = FromSql::column_result(value)?;
        Ok(CardId(id))
    }
}

pub type Translations = BTreeMap<Language, String>;

#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub translations: Translations,
    pub statistics: Statistics,
}

impl Card {
    /// A card that has never been shown.
    pub fn new(id: CardId, translations: Translations) -> Self {
        Self {
            id,
            translations,
            statistics: Statistics::default(),
        }
    }

    pub fn translation(&self, lang: Language) -> Option<&str> {
        self.translations
            .get(&lang)
            .map(|text| text.as_str())
            .filter(|text| !text.is_empty())
    }

    /// Replace the text for one language.
    pub fn set_translation(&mut self, lang: Language, text: &str) -> Fallible<()> {
        let text = text.trim();
        if text.is_empty() {
            return fail("translation text is empty.");
        }
        self.translations.insert(lang, text.to_string());
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.translations.values().filter(|t| !t.is_empty()).count() >= 2
    }

    /// Whether the card has something to show on both sides.
    pub fn is_learnable(&self, front: &[Language], back: &[Language]) -> bool {
        let has_front = front.iter().any(|lang| self.translation(*lang).is_some());
        let has_back = back.iter().any(|lang| self.translation(*lang).is_some());
        has_front && has_back
    }

    /// One-line rendering such as `🇷🇺 кот | 🇬🇧 cat`.
    pub fn summary(&self) -> String {
        self.translations
            .iter()
            .filter(|(_, text)| !text.is_empty())
            .map(|(lang, text)| format!("{} {}", lang.flag(), text))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// Every language on its own line, with `-` for missing ones.
    pub fn detail(&self) -> String {
        Language::ALL
            .iter()
            .map(|lang| format!("{} {}", lang.flag(), self.translation(*lang).unwrap_or("-")))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Build a translation map from optional per-language inputs, dropping blanks.
pub fn collect_translations(
    pairs: impl IntoIterator<Item = (Language, Option<String>)>,
) -> Translations {
    pairs
        .into_iter()
        .filter_map(|(lang, text)| {
            let text = text?.trim().to_string();
            if text.is_empty() {
                None
            } else {
                Some((lang, text))
            }
        })
        .collect()
}

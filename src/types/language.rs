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

use std::fmt::Display;
use std::fmt::Formatter;

use clap::ValueEnum;
use rusqlite::ToSql;
use rusqlite::types::FromSql;
use rusqlite::types::FromSqlError;
use rusqlite::types::FromSqlResult;
use rusqlite::types::ToSqlOutput;
use rusqlite::types::ValueRef;
use serde::Deserialize;
use serde::Serialize;

use crate::error::ErrorReport;
use crate::error::fail;

/// The languages a card can carry, which double as interface languages.
#[derive(ValueEnum, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ru,
    En,
    Es,
    Ro,
}

impl Language {
    /// All languages, in display order.
    pub const ALL: [Language; 4] = [Language::Ru, Language::En, Language::Es, Language::Ro];

    pub fn code(self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
            Language::Es => "es",
            Language::Ro => "ro",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Language::Ru => "🇷🇺",
            Language::En => "🇬🇧",
            Language::Es => "🇪🇸",
            Language::Ro => "🇷🇴",
        }
    }

    /// Find the language whose flag appears in the given text.
    pub fn from_flag_in(text: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|lang| text.contains(lang.flag()))
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl TryFrom<&str> for Language {
    type Error = ErrorReport;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "ru" => Ok(Language::Ru),
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            "ro" => Ok(Language::Ro),
            _ => fail(format!("unknown language: {value}")),
        }
    }
}

/// Parse a comma-separated list of language codes, e.g. `en,es`.
pub fn parse_language_list(value: &str) -> Result<Vec<Language>, ErrorReport> {
    let mut langs = Vec::new();
    for code in value.split(',').filter(|code| !code.trim().is_empty()) {
        let lang = Language::try_from(code)?;
        if !langs.contains(&lang) {
            langs.push(lang);
        }
    }
    Ok(langs)
}

pub fn format_language_list(langs: &[Language]) -> String {
    langs
        .iter()
        .map(|lang| lang.code())
        .collect::<Vec<_>>()
        .join(",")
}

impl ToSql for Language {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.code()))
    }
}

impl FromSql for Language {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let string: String = FromSql::column_result(value)?;
        Language::try_from(string.as_str()).map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

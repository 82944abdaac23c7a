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

//! Parser for bulk card lists such as
//! `🇷🇺: кот | 🇬🇧: cat | 🇪🇸: gato | 🇷🇴: pisică`.

use crate::types::card::Translations;
use crate::types::deck::Deck;
use crate::types::language::Language;

/// Parse every line of `content` into a set of translations. Blank lines,
/// code fences and lines without any recognisable translation are skipped.
pub fn parse_cards(content: &str) -> Vec<Translations> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("```"))
        .map(parse_line)
        .filter(|translations| !translations.is_empty())
        .collect()
}

fn parse_line(line: &str) -> Translations {
    let mut translations = Translations::new();
    for part in line.split('|') {
        let part = part.trim();
        let Some((label, text)) = part.split_once(':') else {
            continue;
        };
        let lang = match Language::from_flag_in(label) {
            Some(lang) => Some(lang),
            None => Language::try_from(label).ok(),
        };
        let text = text.trim();
        if let Some(lang) = lang {
            if !text.is_empty() {
                translations.insert(lang, text.to_string());
            }
        }
    }
    translations
}

/// Parsed candidates sorted against an existing deck.
#[derive(Debug, Default, PartialEq)]
pub struct Sorted {
    pub new: Vec<Translations>,
    pub duplicates: Vec<Translations>,
    /// Candidates with fewer than two translations.
    pub incomplete: Vec<Translations>,
}

/// Split candidates into new cards, duplicates of cards already in `deck`
/// (or earlier in the batch), and incomplete ones.
pub fn sort_candidates(deck: &Deck, candidates: Vec<Translations>) -> Sorted {
    let mut sorted = Sorted::default();
    for candidate in candidates {
        let repeated = sorted.new.iter().any(|seen| same_text(seen, &candidate));
        if candidate.len() < 2 {
            sorted.incomplete.push(candidate);
        } else if repeated || deck.contains_same(&candidate) {
            sorted.duplicates.push(candidate);
        } else {
            sorted.new.push(candidate);
        }
    }
    sorted
}

fn same_text(a: &Translations, b: &Translations) -> bool {
    a.len() == b.len()
        && a.iter().all(|(lang, text)| {
            b.get(lang)
                .is_some_and(|other| other.to_lowercase() == text.to_lowercase())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_parse_flag_line() {
        let content = "🇷🇺: кот | 🇬🇧: cat | 🇪🇸: gato | 🇷🇴: pisică";
        let cards = parse_cards(content);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].get(&Language::Ru).map(String::as_str), Some("кот"));
        assert_eq!(cards[0].get(&Language::Ro).map(String::as_str), Some("pisică"));
        assert_eq!(cards[0].len(), 4);
    }

    #[test]
    fn test_parse_code_labels() {
        let cards = parse_cards("en: dog | es: perro");
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].get(&Language::Es).map(String::as_str), Some("perro"));
    }

    #[test]
    fn test_skips_fences_and_blank_lines() {
        let content = "```\n🇬🇧: bread | 🇪🇸: pan\n\n  \nno translations here\n🇬🇧: milk | 🇪🇸: leche\n```";
        let cards = parse_cards(content);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].get(&Language::En).map(String::as_str), Some("milk"));
    }

    #[test]
    fn test_text_with_colon_keeps_rest() {
        let cards = parse_cards("🇬🇧: time: noun | 🇪🇸: tiempo");
        assert_eq!(cards[0].get(&Language::En).map(String::as_str), Some("time: noun"));
    }

    #[test]
    fn test_sort_candidates() -> Fallible<()> {
        let mut deck = Deck::default();
        deck.add(Translations::from([
            (Language::En, "Bread".to_string()),
            (Language::Es, "Pan".to_string()),
        ]))?;
        let content = "🇬🇧: bread | 🇪🇸: pan\n🇬🇧: milk | 🇪🇸: leche\n🇬🇧: MILK | 🇪🇸: leche\n🇬🇧: water";
        let sorted = sort_candidates(&deck, parse_cards(content));
        assert_eq!(sorted.new.len(), 1);
        assert_eq!(sorted.duplicates.len(), 2);
        assert_eq!(sorted.incomplete.len(), 1);
        Ok(())
    }
}

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

use std::io::Write;

use crate::collection::Collection;
use crate::error::Fallible;
use crate::i18n::Message;
use crate::i18n::import_prompt;
use crate::i18n::text;
use crate::parser::parse_cards;
use crate::parser::sort_candidates;
use crate::types::card::Translations;
use crate::types::language::Language;

/// Print the prompt that asks an assistant for cards in the import format.
pub fn print_prompt(coll: &Collection, out: &mut impl Write) -> Fallible<()> {
    let lang = coll.profile()?.interface_language;
    writeln!(out, "{}\n", text(lang, Message::ImportInstruction))?;
    writeln!(out, "{}", import_prompt(lang))?;
    Ok(())
}

/// Add every new card found in `content`, reporting duplicates.
pub fn import_cards(coll: &mut Collection, content: &str, out: &mut impl Write) -> Fallible<()> {
    let mut profile = coll.profile()?;
    let lang = profile.interface_language;
    let sorted = sort_candidates(&profile.deck, parse_cards(content));

    writeln!(out, "{}", text(lang, Message::CardsFound(sorted.new.len())))?;
    for translations in &sorted.new {
        writeln!(out, "{}", preview(translations))?;
    }
    if !sorted.duplicates.is_empty() {
        writeln!(out, "\n{}:", text(lang, Message::DuplicateCardsWarning))?;
        for translations in &sorted.duplicates {
            writeln!(out, "{}", preview(translations))?;
        }
    }
    if !sorted.incomplete.is_empty() {
        writeln!(out, "\n{}:", text(lang, Message::NotEnoughTranslations))?;
        for translations in &sorted.incomplete {
            writeln!(out, "{}", preview(translations))?;
        }
    }

    if sorted.new.is_empty() {
        return Ok(());
    }
    let count = sorted.new.len();
    for translations in sorted.new {
        profile.deck.add(translations)?;
    }
    coll.save(&profile)?;
    log::debug!("Imported {count} cards.");
    writeln!(out, "\n{}", text(lang, Message::CardAdded))?;
    Ok(())
}

fn preview(translations: &Translations) -> String {
    Language::ALL
        .iter()
        .map(|lang| {
            let content = translations.get(lang).map(String::as_str).unwrap_or("-");
            format!("{} {content}", lang.flag())
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::profile::init;
    use crate::helper::create_tmp_directory;
    use crate::types::card::CardId;

    fn collection() -> Fallible<Collection> {
        let mut coll = Collection::new(Some(create_tmp_directory()?), None)?;
        init(&mut coll, Language::En, None, &mut Vec::new())?;
        Ok(coll)
    }

    #[test]
    fn test_import() -> Fallible<()> {
        let mut coll = collection()?;
        let content = "```\n🇷🇺: хлеб | 🇬🇧: bread | 🇪🇸: pan | 🇷🇴: pâine\n🇬🇧: milk | 🇪🇸: leche\n```\n";
        let mut out = Vec::new();
        import_cards(&mut coll, content, &mut out)?;
        assert_eq!(
            String::from_utf8_lossy(&out),
            "Found 2 new cards:\n🇷🇺 хлеб | 🇬🇧 bread | 🇪🇸 pan | 🇷🇴 pâine\n🇷🇺 - | 🇬🇧 milk | 🇪🇸 leche | 🇷🇴 -\n\nCard added!\n"
        );
        let profile = coll.profile()?;
        assert_eq!(profile.deck.len(), 2);
        assert_eq!(profile.deck.cards()[1].id, CardId::new(2));

        // A second import of the same text adds nothing.
        let mut out = Vec::new();
        import_cards(&mut coll, content, &mut out)?;
        let printed = String::from_utf8_lossy(&out).to_string();
        assert!(printed.starts_with("Found 0 new cards:\n\nThese cards already exist"));
        assert_eq!(coll.profile()?.deck.len(), 2);
        Ok(())
    }

    #[test]
    fn test_prompt() -> Fallible<()> {
        let coll = collection()?;
        let mut out = Vec::new();
        print_prompt(&coll, &mut out)?;
        let printed = String::from_utf8_lossy(&out).to_string();
        assert!(printed.contains("Food and Drinks"));
        assert!(printed.trim_end().ends_with(crate::i18n::IMPORT_LINE_FORMAT));
        Ok(())
    }
}

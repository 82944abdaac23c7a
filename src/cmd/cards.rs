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

use std::io::BufRead;
use std::io::Write;

use crate::collection::Collection;
use crate::error::Fallible;
use crate::error::fail;
use crate::i18n::Message;
use crate::i18n::text;
use crate::types::card::CardId;
use crate::types::card::Translations;
use crate::types::language::Language;

pub fn add_card(coll: &mut Collection, translations: Translations, out: &mut impl Write) -> Fallible<()> {
    let mut profile = coll.profile()?;
    let lang = profile.interface_language;
    if translations.len() < 2 {
        return fail(text(lang, Message::NotEnoughTranslations));
    }
    // Duplicates are only flagged; the card is still added.
    for (card_lang, content) in &translations {
        if let Some(existing) = profile.deck.find_duplicate(*card_lang, content) {
            writeln!(
                out,
                "{} {content} - ⚠️ {} (#{})",
                card_lang.flag(),
                text(lang, Message::DuplicateTranslation),
                existing.id
            )?;
        }
    }
    let id = profile.deck.add(translations)?;
    coll.save(&profile)?;
    log::debug!("Added card {id}.");
    writeln!(out, "{} (#{id})", text(lang, Message::CardAdded))?;
    Ok(())
}

pub fn list_cards(coll: &Collection, page: usize, out: &mut impl Write) -> Fallible<()> {
    let profile = coll.profile()?;
    let lang = profile.interface_language;
    let deck = &profile.deck;
    if deck.is_empty() {
        writeln!(out, "{}", text(lang, Message::MyCards))?;
        writeln!(out, "{}", text(lang, Message::NoCards))?;
        return Ok(());
    }
    let page_size = coll.config.page_size;
    let total_pages = deck.page_count(page_size);
    if page == 0 {
        writeln!(out, "{}", text(lang, Message::FirstPage))?;
        return Ok(());
    }
    if page > total_pages {
        writeln!(out, "{}", text(lang, Message::LastPage))?;
        return Ok(());
    }
    writeln!(
        out,
        "{} | {} | {}",
        text(lang, Message::MyCards),
        text(lang, Message::TotalCards(deck.len())),
        text(lang, Message::PageCounter(page, total_pages))
    )?;
    for card in deck.page(page, page_size) {
        writeln!(out, "{:>4}. {}", card.id.value(), card.summary())?;
    }
    Ok(())
}

pub fn show_card(coll: &Collection, id: CardId, out: &mut impl Write) -> Fallible<()> {
    let profile = coll.profile()?;
    let lang = profile.interface_language;
    let Some(card) = profile.deck.get(id) else {
        return fail(text(lang, Message::CardNotFound(id.value())));
    };
    writeln!(out, "#{}", card.id)?;
    writeln!(out, "{}", card.detail())?;
    let stats = &card.statistics;
    writeln!(
        out,
        "{}/{} ({:.0}%), streak {}",
        stats.correct_answers,
        stats.total_attempts,
        stats.accuracy_percent(),
        stats.correct_streak
    )?;
    Ok(())
}

pub fn edit_card(
    coll: &mut Collection,
    id: CardId,
    card_lang: Language,
    content: &str,
    out: &mut impl Write,
) -> Fallible<()> {
    let mut profile = coll.profile()?;
    let lang = profile.interface_language;
    let Some(card) = profile.deck.get_mut(id) else {
        return fail(text(lang, Message::CardNotFound(id.value())));
    };
    card.set_translation(card_lang, content)?;
    let detail = card.detail();
    coll.save(&profile)?;
    writeln!(out, "{detail}")?;
    Ok(())
}

/// Delete a card, asking for confirmation on `input` unless `confirmed`.
pub fn delete_card(
    coll: &mut Collection,
    id: CardId,
    confirmed: bool,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Fallible<()> {
    let mut profile = coll.profile()?;
    let lang = profile.interface_language;
    let Some(card) = profile.deck.get(id) else {
        return fail(text(lang, Message::CardNotFound(id.value())));
    };
    if !confirmed {
        writeln!(out, "{}\n\n{}", text(lang, Message::ConfirmDelete), card.detail())?;
        out.flush()?;
        let mut answer = String::new();
        input.read_line(&mut answer)?;
        if !answer.trim().eq_ignore_ascii_case("y") {
            return Ok(());
        }
    }
    profile.deck.remove(id);
    coll.save(&profile)?;
    log::debug!("Deleted card {id}.");
    writeln!(out, "{}", text(lang, Message::CardDeleted))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::cmd::profile::init;
    use crate::helper::create_tmp_directory;
    use crate::helper::create_tmp_directory_with_config;

    fn pair(en: &str, es: &str) -> Translations {
        Translations::from([
            (Language::En, en.to_string()),
            (Language::Es, es.to_string()),
        ])
    }

    fn collection_with(config: Option<&str>) -> Fallible<Collection> {
        let dir = match config {
            Some(config) => create_tmp_directory_with_config(config)?,
            None => create_tmp_directory()?,
        };
        let mut coll = Collection::new(Some(dir), None)?;
        init(&mut coll, Language::En, None, &mut Vec::new())?;
        Ok(coll)
    }

    fn output(out: Vec<u8>) -> String {
        String::from_utf8_lossy(&out).to_string()
    }

    #[test]
    fn test_add_and_warn_about_duplicates() -> Fallible<()> {
        let mut coll = collection_with(None)?;
        let mut out = Vec::new();
        add_card(&mut coll, pair("cat", "gato"), &mut out)?;
        assert_eq!(output(out), "Card added! (#1)\n");

        let mut out = Vec::new();
        add_card(&mut coll, pair("Cat", "minino"), &mut out)?;
        assert_eq!(
            output(out),
            "🇬🇧 Cat - ⚠️ This translation already exists (#1)\nCard added! (#2)\n"
        );
        assert_eq!(coll.profile()?.deck.len(), 2);
        Ok(())
    }

    #[test]
    fn test_add_needs_two_translations() -> Fallible<()> {
        let mut coll = collection_with(None)?;
        let one = Translations::from([(Language::En, "cat".to_string())]);
        let err = add_card(&mut coll, one, &mut Vec::new()).err();
        assert_eq!(
            err.map(|e| e.to_string()),
            Some("error: ⚠️ Add at least two translations".to_string())
        );
        Ok(())
    }

    #[test]
    fn test_list_pages() -> Fallible<()> {
        let mut coll = collection_with(Some("page_size = 2\n"))?;
        let mut out = Vec::new();
        list_cards(&coll, 1, &mut out)?;
        assert_eq!(output(out), "🎴 My Cards\n⚠️ You don't have any cards to learn yet\n");

        for (en, es) in [("cat", "gato"), ("dog", "perro"), ("bird", "pájaro")] {
            add_card(&mut coll, pair(en, es), &mut Vec::new())?;
        }
        let mut out = Vec::new();
        list_cards(&coll, 2, &mut out)?;
        assert_eq!(
            output(out),
            "🎴 My Cards | Total 3 cards | Page 2 of 2\n   3. 🇬🇧 bird | 🇪🇸 pájaro\n"
        );

        let mut out = Vec::new();
        list_cards(&coll, 3, &mut out)?;
        assert_eq!(output(out), "⚠️ This is the last page\n");
        let mut out = Vec::new();
        list_cards(&coll, 0, &mut out)?;
        assert_eq!(output(out), "⚠️ This is the first page\n");
        Ok(())
    }

    #[test]
    fn test_show_and_edit() -> Fallible<()> {
        let mut coll = collection_with(None)?;
        add_card(&mut coll, pair("cat", "gato"), &mut Vec::new())?;
        edit_card(&mut coll, CardId::new(1), Language::Ro, "pisică", &mut Vec::new())?;
        let mut out = Vec::new();
        show_card(&coll, CardId::new(1), &mut out)?;
        assert_eq!(
            output(out),
            "#1\n🇷🇺 -\n🇬🇧 cat\n🇪🇸 gato\n🇷🇴 pisică\n0/0 (0%), streak 0\n"
        );
        assert!(show_card(&coll, CardId::new(9), &mut Vec::new()).is_err());
        assert!(edit_card(&mut coll, CardId::new(9), Language::Ro, "x", &mut Vec::new()).is_err());
        Ok(())
    }

    #[test]
    fn test_delete_asks_for_confirmation() -> Fallible<()> {
        let mut coll = collection_with(None)?;
        add_card(&mut coll, pair("cat", "gato"), &mut Vec::new())?;
        add_card(&mut coll, pair("dog", "perro"), &mut Vec::new())?;

        delete_card(&mut coll, CardId::new(2), false, &mut Cursor::new("n\n"), &mut Vec::new())?;
        assert_eq!(coll.profile()?.deck.len(), 2);

        delete_card(&mut coll, CardId::new(2), false, &mut Cursor::new("y\n"), &mut Vec::new())?;
        assert_eq!(coll.profile()?.deck.len(), 1);

        // Deleting the last card restarts numbering.
        delete_card(&mut coll, CardId::new(1), true, &mut Cursor::new(""), &mut Vec::new())?;
        add_card(&mut coll, pair("bird", "pájaro"), &mut Vec::new())?;
        assert_eq!(coll.profile()?.deck.cards()[0].id, CardId::new(1));
        Ok(())
    }
}

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

use serde::Serialize;

use crate::error::Fallible;
use crate::error::fail;
use crate::types::card::Card;
use crate::types::card::CardId;
use crate::types::card::Translations;
use crate::types::card::collect_translations;
use crate::types::language::Language;

/// The number of cards on one page of the card list.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A user's cards, in insertion order, plus the id counter.
#[derive(Serialize, Clone, Default, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    cards: Vec<Card>,
    /// The highest id handed out so far. Zero when the deck is empty.
    last_card_id: u32,
}

impl Deck {
    /// Rebuild a deck from stored parts. The store validates the parts.
    pub fn from_parts(cards: Vec<Card>, last_card_id: u32) -> Self {
        Self {
            cards,
            last_card_id,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn last_card_id(&self) -> u32 {
        self.last_card_id
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Append a new card, assigning it the next id. Texts are trimmed and
    /// blank ones dropped.
    pub fn add(&mut self, translations: Translations) -> Fallible<CardId> {
        let translations =
            collect_translations(translations.into_iter().map(|(lang, text)| (lang, Some(text))));
        if translations.len() < 2 {
            return fail("a card needs at least two translations.");
        }
        self.last_card_id += 1;
        let id = CardId::new(self.last_card_id);
        self.cards.push(Card::new(id, translations));
        Ok(id)
    }

    /// Delete a card. Emptying the deck restarts ids at 1.
    pub fn remove(&mut self, id: CardId) -> Option<Card> {
        let index = self.cards.iter().position(|card| card.id == id)?;
        let card = self.cards.remove(index);
        if self.cards.is_empty() {
            self.last_card_id = 0;
        }
        Some(card)
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| card.id == id)
    }

    /// Find a card that already has `text` in `lang`, ignoring case.
    pub fn find_duplicate(&self, lang: Language, text: &str) -> Option<&Card> {
        let needle = text.trim().to_lowercase();
        self.cards.iter().find(|card| {
            card.translation(lang)
                .is_some_and(|t| t.to_lowercase() == needle)
        })
    }

    /// Whether some card matches `translations` in every language, ignoring
    /// case. Missing languages match missing languages.
    pub fn contains_same(&self, translations: &Translations) -> bool {
        self.cards.iter().any(|card| {
            Language::ALL.iter().all(|lang| {
                let theirs = card.translation(*lang).unwrap_or("").to_lowercase();
                let ours = translations
                    .get(lang)
                    .map(|t| t.trim().to_lowercase())
                    .unwrap_or_default();
                theirs == ours
            })
        })
    }

    pub fn page_count(&self, page_size: usize) -> usize {
        let page_size = page_size.max(1);
        self.cards.len().div_ceil(page_size).max(1)
    }

    /// The cards on a 1-based page. Out-of-range pages are empty.
    pub fn page(&self, page: usize, page_size: usize) -> &[Card] {
        let page_size = page_size.max(1);
        if page == 0 {
            return &[];
        }
        let start = (page - 1).saturating_mul(page_size);
        if start >= self.cards.len() {
            return &[];
        }
        let end = (start + page_size).min(self.cards.len());
        &self.cards[start..end]
    }

    /// Clones of the cards that can be shown with the given sides.
    pub fn learnable(&self, front: &[Language], back: &[Language]) -> Vec<Card> {
        self.cards
            .iter()
            .filter(|card| card.is_learnable(front, back))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(ru: &str, en: &str) -> Translations {
        Translations::from([
            (Language::Ru, ru.to_string()),
            (Language::En, en.to_string()),
        ])
    }

    #[test]
    fn test_add_assigns_increasing_ids() -> Fallible<()> {
        let mut deck = Deck::default();
        assert_eq!(deck.add(pair("кот", "cat"))?, CardId::new(1));
        assert_eq!(deck.add(pair("пёс", "dog"))?, CardId::new(2));
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.last_card_id(), 2);
        Ok(())
    }

    #[test]
    fn test_add_needs_two_translations() {
        let mut deck = Deck::default();
        let one = Translations::from([(Language::En, "cat".to_string())]);
        assert!(deck.add(one).is_err());
        assert!(deck.add(pair("кот", " ")).is_err());
        assert!(deck.is_empty());
        assert_eq!(deck.last_card_id(), 0);
    }

    #[test]
    fn test_add_drops_blank_translations() -> Fallible<()> {
        let mut deck = Deck::default();
        let mut translations = pair(" кот ", "cat");
        translations.insert(Language::Ro, "   ".to_string());
        let id = deck.add(translations)?;
        let card = deck.get(id);
        assert_eq!(card.and_then(|c| c.translation(Language::Ro)), None);
        assert_eq!(card.and_then(|c| c.translation(Language::Ru)), Some("кот"));
        assert_eq!(card.map(|c| c.translations.len()), Some(2));
        assert!(deck.learnable(&[Language::Ro], &[Language::En]).is_empty());
        Ok(())
    }

    #[test]
    fn test_ids_are_not_reused() -> Fallible<()> {
        let mut deck = Deck::default();
        deck.add(pair("кот", "cat"))?;
        let dog = deck.add(pair("пёс", "dog"))?;
        assert!(deck.remove(dog).is_some());
        assert_eq!(deck.add(pair("мышь", "mouse"))?, CardId::new(3));
        Ok(())
    }

    #[test]
    fn test_emptying_resets_counter() -> Fallible<()> {
        let mut deck = Deck::default();
        let cat = deck.add(pair("кот", "cat"))?;
        let dog = deck.add(pair("пёс", "dog"))?;
        deck.remove(cat);
        deck.remove(dog);
        assert_eq!(deck.last_card_id(), 0);
        assert_eq!(deck.add(pair("мышь", "mouse"))?, CardId::new(1));
        Ok(())
    }

    #[test]
    fn test_remove_missing() {
        let mut deck = Deck::default();
        assert!(deck.remove(CardId::new(7)).is_none());
    }

    #[test]
    fn test_duplicates() -> Fallible<()> {
        let mut deck = Deck::default();
        deck.add(pair("Кот", "Cat"))?;
        assert!(deck.find_duplicate(Language::En, " cat").is_some());
        assert!(deck.find_duplicate(Language::Es, "cat").is_none());
        assert!(deck.contains_same(&pair("кот", "CAT")));
        let mut more = pair("кот", "cat");
        more.insert(Language::Es, "gato".to_string());
        assert!(!deck.contains_same(&more));
        Ok(())
    }

    #[test]
    fn test_pagination() -> Fallible<()> {
        let mut deck = Deck::default();
        assert_eq!(deck.page_count(DEFAULT_PAGE_SIZE), 1);
        for i in 0..23 {
            deck.add(pair(&format!("слово {i}"), &format!("word {i}")))?;
        }
        assert_eq!(deck.page_count(DEFAULT_PAGE_SIZE), 3);
        assert_eq!(deck.page(1, DEFAULT_PAGE_SIZE).len(), 10);
        assert_eq!(deck.page(3, DEFAULT_PAGE_SIZE).len(), 3);
        assert_eq!(deck.page(3, DEFAULT_PAGE_SIZE)[0].id, CardId::new(21));
        assert!(deck.page(0, DEFAULT_PAGE_SIZE).is_empty());
        assert!(deck.page(4, DEFAULT_PAGE_SIZE).is_empty());
        Ok(())
    }

    #[test]
    fn test_learnable() -> Fallible<()> {
        let mut deck = Deck::default();
        deck.add(pair("кот", "cat"))?;
        deck.add(Translations::from([
            (Language::Es, "gato".to_string()),
            (Language::Ro, "pisică".to_string()),
        ]))?;
        let cards = deck.learnable(&[Language::En], &[Language::Ru]);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, CardId::new(1));
        Ok(())
    }
}

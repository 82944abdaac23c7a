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
use std::time::Instant;

use rusqlite::Connection;
use rusqlite::OptionalExtension;
use rusqlite::Transaction;
use rusqlite::config::DbConfig;

use crate::error::Fallible;
use crate::error::fail;
use crate::types::card::Card;
use crate::types::card::CardId;
use crate::types::card::Translations;
use crate::types::deck::Deck;
use crate::types::language::Language;
use crate::types::language::format_language_list;
use crate::types::language::parse_language_list;
use crate::types::profile::Profile;
use crate::types::profile::Settings;
use crate::types::statistics::Statistics;
use crate::types::timestamp::Timestamp;

/// Stores user profiles: settings, cards and card statistics.
pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn new(database_path: &str) -> Fallible<Self> {
        let conn = Connection::open(database_path)?;
        Self::setup(conn)
    }

    #[cfg(test)]
    pub fn in_memory() -> Fallible<Self> {
        Self::setup(Connection::open_in_memory()?)
    }

    fn setup(mut conn: Connection) -> Fallible<Self> {
        conn.set_db_config(DbConfig::SQLITE_DBCONFIG_ENABLE_FKEY, true)?;
        {
            let tx = conn.transaction()?;
            if !probe_schema_exists(&tx)? {
                log::debug!("Creating database schema.");
                tx.execute_batch(include_str!("schema.sql"))?;
                tx.commit()?;
            }
        }
        Ok(Self { conn })
    }

    /// The ids of all stored users.
    pub fn user_ids(&self) -> Fallible<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("select user_id from users order by user_id;")?;
        let mut rows = stmt.query([])?;
        let mut ids = Vec::new();
        while let Some(row) = rows.next()? {
            ids.push(row.get(0)?);
        }
        Ok(ids)
    }

    /// Load a user's profile. Returns `None` if the user is unknown.
    ///
    /// Cards whose statistics are inconsistent are rejected here, so the rest
    /// of the program can assume well-formed counters.
    pub fn load(&self, user_id: &str) -> Fallible<Option<Profile>> {
        let start = Instant::now();
        let sql = "select interface_language, front_languages, back_languages, last_card_id from users where user_id = ?;";
        let user: Option<UserRow> = self
            .conn
            .query_row(sql, [user_id], |row| {
                Ok(UserRow {
                    interface_language: row.get(0)?,
                    front_languages: row.get(1)?,
                    back_languages: row.get(2)?,
                    last_card_id: row.get(3)?,
                })
            })
            .optional()?;
        let Some(user) = user else {
            return Ok(None);
        };

        let mut translations = self.load_translations(user_id)?;
        let mut cards = Vec::new();
        let sql = "select card_id, total_attempts, correct_answers, wrong_answers, last_shown, last_result, correct_streak, wrong_streak from cards where user_id = ? order by position;";
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query([user_id])?;
        while let Some(row) = rows.next()? {
            let card_row = CardRow {
                card_id: row.get(0)?,
                total_attempts: row.get(1)?,
                correct_answers: row.get(2)?,
                wrong_answers: row.get(3)?,
                last_shown: row.get(4)?,
                last_result: row.get(5)?,
                correct_streak: row.get(6)?,
                wrong_streak: row.get(7)?,
            };
            let id = CardId::new(to_counter(user_id, card_row.card_id, card_row.card_id)?);
            let statistics = card_row.into_statistics(user_id)?;
            if id.value() == 0 || id.value() > user.last_card_id {
                return fail(format!(
                    "card {id} of user {user_id} is outside the id range 1..={}.",
                    user.last_card_id
                ));
            }
            let card = Card {
                id,
                translations: translations.remove(&id).unwrap_or_default(),
                statistics,
            };
            if !card.is_complete() {
                return fail(format!(
                    "card {id} of user {user_id} has fewer than two translations."
                ));
            }
            cards.push(card);
        }

        let profile = Profile {
            interface_language: Language::try_from(user.interface_language.as_str())?,
            settings: Settings {
                front_languages: parse_language_list(&user.front_languages)?,
                back_languages: parse_language_list(&user.back_languages)?,
            },
            deck: Deck::from_parts(cards, user.last_card_id),
        };
        log::debug!(
            "Loaded {} cards for user {user_id} in {}ms.",
            profile.deck.len(),
            start.elapsed().as_millis()
        );
        Ok(Some(profile))
    }

    fn load_translations(&self, user_id: &str) -> Fallible<BTreeMap<CardId, Translations>> {
        let sql = "select card_id, language, content from translations where user_id = ?;";
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query([user_id])?;
        let mut map: BTreeMap<CardId, Translations> = BTreeMap::new();
        while let Some(row) = rows.next()? {
            let card_id: CardId = row.get(0)?;
            let language: Language = row.get(1)?;
            let content: String = row.get(2)?;
            map.entry(card_id).or_default().insert(language, content);
        }
        Ok(map)
    }

    /// Replace everything stored for a user with `profile`, atomically.
    pub fn save(&mut self, user_id: &str, profile: &Profile) -> Fallible<()> {
        let start = Instant::now();
        let tx = self.conn.transaction()?;
        tx.execute("delete from users where user_id = ?;", [user_id])?;
        tx.execute(
            "insert into users (user_id, interface_language, front_languages, back_languages, last_card_id) values (?, ?, ?, ?, ?);",
            (
                user_id,
                profile.interface_language,
                format_language_list(&profile.settings.front_languages),
                format_language_list(&profile.settings.back_languages),
                profile.deck.last_card_id(),
            ),
        )?;
        for (position, card) in profile.deck.cards().iter().enumerate() {
            insert_card(&tx, user_id, position, card)?;
        }
        tx.commit()?;
        log::debug!(
            "Saved {} cards for user {user_id} in {}ms.",
            profile.deck.len(),
            start.elapsed().as_millis()
        );
        Ok(())
    }
}

struct UserRow {
    interface_language: String,
    front_languages: String,
    back_languages: String,
    last_card_id: u32,
}

/// A card row as stored. Counters are read signed so that corrupt values can
/// be reported instead of failing the conversion.
struct CardRow {
    card_id: i64,
    total_attempts: i64,
    correct_answers: i64,
    wrong_answers: i64,
    last_shown: Option<Timestamp>,
    last_result: Option<bool>,
    correct_streak: i64,
    wrong_streak: i64,
}

impl CardRow {
    fn into_statistics(self, user_id: &str) -> Fallible<Statistics> {
        let id = self.card_id;
        let stats = Statistics {
            total_attempts: to_counter(user_id, id, self.total_attempts)?,
            correct_answers: to_counter(user_id, id, self.correct_answers)?,
            wrong_answers: to_counter(user_id, id, self.wrong_answers)?,
            last_shown: self.last_shown,
            last_result: self.last_result,
            correct_streak: to_counter(user_id, id, self.correct_streak)?,
            wrong_streak: to_counter(user_id, id, self.wrong_streak)?,
        };
        let answered = stats.correct_answers.checked_add(stats.wrong_answers);
        if answered != Some(stats.total_attempts) {
            return fail(format!(
                "card {id} of user {user_id}: correct and wrong answers do not add up to the attempt count."
            ));
        }
        if stats.correct_streak > 0 && stats.wrong_streak > 0 {
            return fail(format!(
                "card {id} of user {user_id}: correct and wrong streaks are both nonzero."
            ));
        }
        Ok(stats)
    }
}

fn to_counter(user_id: &str, card_id: i64, value: i64) -> Fallible<u32> {
    match u32::try_from(value) {
        Ok(value) => Ok(value),
        Err(_) => fail(format!(
            "card {card_id} of user {user_id} has an invalid counter: {value}."
        )),
    }
}

fn insert_card(tx: &Transaction, user_id: &str, position: usize, card: &Card) -> Fallible<()> {
    let stats = &card.statistics;
    let sql = "insert into cards (user_id, card_id, position, total_attempts, correct_answers, wrong_answers, last_shown, last_result, correct_streak, wrong_streak) values (?, ?, ?, ?, ?, ?, ?, ?, ?, ?);";
    tx.execute(
        sql,
        (
            user_id,
            card.id,
            position as i64,
            stats.total_attempts,
            stats.correct_answers,
            stats.wrong_answers,
            stats.last_shown,
            stats.last_result,
            stats.correct_streak,
            stats.wrong_streak,
        ),
    )?;
    let sql = "insert into translations (user_id, card_id, language, content) values (?, ?, ?, ?);";
    for (language, content) in &card.translations {
        tx.execute(sql, (user_id, card.id, language, content))?;
    }
    Ok(())
}

fn probe_schema_exists(tx: &Transaction) -> Fallible<bool> {
    let sql = "select count(*) from sqlite_master where type='table' AND name=?;";
    let count: i64 = tx.query_row(sql, ["users"], |row| row.get(0))?;
    Ok(count > 0)
}

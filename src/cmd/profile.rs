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

use std::fs::read_to_string;
use std::io::Write;
use std::path::Path;

use serde::Deserialize;

use crate::collection::Collection;
use crate::error::Fallible;
use crate::error::fail;
use crate::i18n::Message;
use crate::i18n::text;
use crate::types::card::Translations;
use crate::types::language::Language;
use crate::types::language::format_language_list;
use crate::types::profile::Profile;
use crate::types::profile::Side;

/// A file of starter cards, e.g. `{"cards": [{"translations": {"en": "cat", "es": "gato"}}]}`.
#[derive(Deserialize)]
struct SeedFile {
    cards: Vec<SeedCard>,
}

#[derive(Deserialize)]
struct SeedCard {
    translations: Translations,
}

/// Create the user's profile, or change the interface language of an existing
/// one. Starter cards are only added to a new profile.
pub fn init(
    coll: &mut Collection,
    language: Language,
    seed: Option<&Path>,
    out: &mut impl Write,
) -> Fallible<()> {
    let profile = match coll.db.load(&coll.user_id)? {
        Some(mut profile) => {
            if seed.is_some() {
                log::warn!("Profile already exists, ignoring starter cards.");
            }
            profile.interface_language = language;
            profile
        }
        None => {
            let mut profile = Profile::new(language);
            if let Some(seed) = seed {
                let content = read_to_string(seed)?;
                let file: SeedFile = serde_json::from_str(&content)?;
                for card in file.cards {
                    profile.deck.add(card.translations)?;
                }
                log::debug!("Seeded {} cards.", profile.deck.len());
            }
            profile
        }
    };
    coll.save(&profile)?;
    writeln!(out, "{}", text(language, Message::LanguageSelected))?;
    Ok(())
}

/// Change the interface language.
pub fn set_language(coll: &mut Collection, language: Language, out: &mut impl Write) -> Fallible<()> {
    let mut profile = coll.profile()?;
    profile.interface_language = language;
    coll.save(&profile)?;
    writeln!(out, "{}", text(language, Message::LanguageSelected))?;
    Ok(())
}

/// Show the language settings, replacing either side first if requested.
pub fn settings(
    coll: &mut Collection,
    front: Option<Vec<Language>>,
    back: Option<Vec<Language>>,
    out: &mut impl Write,
) -> Fallible<()> {
    let mut profile = coll.profile()?;
    let lang = profile.interface_language;
    let changed = front.is_some() || back.is_some();
    if let Some(front) = front {
        if front.is_empty() {
            return fail("the front side needs at least one language.");
        }
        profile.settings.assign(Side::Front, front);
    }
    if let Some(back) = back {
        if back.is_empty() {
            return fail("the back side needs at least one language.");
        }
        profile.settings.assign(Side::Back, back);
    }
    if changed {
        coll.save(&profile)?;
        writeln!(out, "{}", text(lang, Message::SettingsSaved))?;
    }
    writeln!(out, "front: {}", format_language_list(&profile.settings.front_languages))?;
    writeln!(out, "back: {}", format_language_list(&profile.settings.back_languages))?;
    if !profile.settings.is_complete() {
        writeln!(out, "{}", text(lang, Message::SelectLanguagesWarning))?;
    }
    Ok(())
}

/// Print the id of every user stored in the data directory, marking the
/// current one.
pub fn list_users(coll: &Collection, out: &mut impl Write) -> Fallible<()> {
    for user_id in coll.db.user_ids()? {
        let marker = if user_id == coll.user_id { "*" } else { " " };
        writeln!(out, "{marker} {user_id}")?;
    }
    Ok(())
}

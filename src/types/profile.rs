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

use crate::types::deck::Deck;
use crate::types::language::Language;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    Front,
    Back,
}

/// Which languages go on each side of a card while learning.
#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub front_languages: Vec<Language>,
    pub back_languages: Vec<Language>,
}

impl Settings {
    /// The starting sides for a user who picked `interface` as their language:
    /// the native language goes on the back.
    pub fn for_interface(interface: Language) -> Self {
        let front = match interface {
            Language::En => Language::Es,
            Language::Ru | Language::Es | Language::Ro => Language::En,
        };
        Self {
            front_languages: vec![front],
            back_languages: vec![interface],
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.front_languages.is_empty() && !self.back_languages.is_empty()
    }

    /// Put `langs` on `side`. A language lives on one side only, so each of
    /// them is taken off the opposite side.
    pub fn assign(&mut self, side: Side, langs: Vec<Language>) {
        let (target, other) = match side {
            Side::Front => (&mut self.front_languages, &mut self.back_languages),
            Side::Back => (&mut self.back_languages, &mut self.front_languages),
        };
        other.retain(|lang| !langs.contains(lang));
        *target = langs;
    }
}

/// Everything stored for one user.
#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub interface_language: Language,
    pub settings: Settings,
    pub deck: Deck,
}

impl Profile {
    pub fn new(interface_language: Language) -> Self {
        Self {
            interface_language,
            settings: Settings::for_interface(interface_language),
            deck: Deck::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sides() {
        let cases = [
            (Language::Ru, Language::En),
            (Language::En, Language::Es),
            (Language::Es, Language::En),
            (Language::Ro, Language::En),
        ];
        for (interface, front) in cases {
            let settings = Settings::for_interface(interface);
            assert_eq!(settings.front_languages, vec![front]);
            assert_eq!(settings.back_languages, vec![interface]);
            assert!(settings.is_complete());
        }
    }

    #[test]
    fn test_incomplete_settings() {
        let settings = Settings {
            front_languages: vec![Language::En],
            back_languages: vec![],
        };
        assert!(!settings.is_complete());
    }

    #[test]
    fn test_assign_moves_languages_between_sides() {
        let mut settings = Settings::for_interface(Language::Ru);
        settings.assign(Side::Front, vec![Language::Ru, Language::Es]);
        assert_eq!(settings.front_languages, vec![Language::Ru, Language::Es]);
        assert!(settings.back_languages.is_empty());
        assert!(!settings.is_complete());

        settings.assign(Side::Back, vec![Language::Es, Language::En]);
        assert_eq!(settings.front_languages, vec![Language::Ru]);
        assert_eq!(settings.back_languages, vec![Language::Es, Language::En]);
        assert!(settings.is_complete());
    }

    #[test]
    fn test_new_profile_is_empty() {
        let profile = Profile::new(Language::Ro);
        assert!(profile.deck.is_empty());
        assert_eq!(profile.interface_language, Language::Ro);
    }
}

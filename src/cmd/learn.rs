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
use crate::i18n::Message;
use crate::i18n::text;
use crate::selector::Jitter;
use crate::selector::select_next;
use crate::types::card::Card;
use crate::types::card::CardId;
use crate::types::language::Language;
use crate::types::timestamp::Clock;

/// State carried between the steps of one learning run.
#[derive(Default, Debug)]
pub struct Session {
    pub last_shown: Option<CardId>,
}

impl Session {
    pub fn advance(&mut self, card_id: CardId) {
        self.last_shown = Some(card_id);
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Action {
    Reveal,
    Correct,
    Wrong,
    Quit,
}

impl Action {
    /// Interpret one line of input. `None` means the line is not a command.
    fn parse(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "" | "r" => Some(Action::Reveal),
            "y" => Some(Action::Correct),
            "n" => Some(Action::Wrong),
            "q" => Some(Action::Quit),
            _ => None,
        }
    }
}

/// Read the next action, or `Quit` at end of input.
fn read_action(input: &mut impl BufRead) -> Fallible<Action> {
    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(Action::Quit);
        }
        if let Some(action) = Action::parse(&line) {
            return Ok(action);
        }
    }
}

fn side_lines(card: &Card, langs: &[Language]) -> Vec<String> {
    langs
        .iter()
        .filter_map(|lang| {
            card.translation(*lang)
                .map(|t| format!("{} {t}", lang.flag()))
        })
        .collect()
}

/// Run the interactive learning loop until the user quits or input ends.
pub fn learn(
    coll: &mut Collection,
    clock: &impl Clock,
    jitter: &mut impl Jitter,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Fallible<()> {
    let mut profile = coll.profile()?;
    let lang = profile.interface_language;
    if !profile.settings.is_complete() {
        writeln!(out, "{}", text(lang, Message::SelectLanguagesWarning))?;
        return Ok(());
    }
    if profile.deck.is_empty() {
        writeln!(out, "{}", text(lang, Message::NoCards))?;
        return Ok(());
    }
    let front = profile.settings.front_languages.clone();
    let back = profile.settings.back_languages.clone();

    let mut session = Session::default();
    let mut reviewed = 0;
    loop {
        let learnable = profile.deck.learnable(&front, &back);
        if learnable.is_empty() {
            writeln!(out, "{}", text(lang, Message::NoCardsForSelectedLanguages))?;
            break;
        }
        let card = select_next(&learnable, session.last_shown, clock.now(), jitter)?;
        let id = card.id;

        writeln!(out, "\n{}", text(lang, Message::HowToTranslate))?;
        for line in side_lines(card, &front) {
            writeln!(out, "{line}")?;
        }
        out.flush()?;
        if read_action(input)? == Action::Quit {
            break;
        }

        writeln!(out, "{}:", text(lang, Message::Translation))?;
        for line in side_lines(card, &back) {
            writeln!(out, "{line}")?;
        }
        writeln!(out, "{}", text(lang, Message::LearnKeys))?;
        out.flush()?;
        let correct = loop {
            match read_action(input)? {
                Action::Correct => break Some(true),
                Action::Wrong => break Some(false),
                Action::Quit => break None,
                Action::Reveal => continue,
            }
        };
        let Some(correct) = correct else {
            break;
        };

        let Some(stored) = profile.deck.get_mut(id) else {
            break;
        };
        stored.statistics.record(correct, clock.now());
        let feedback = stored.statistics.feedback_line(correct);
        coll.save(&profile)?;
        log::debug!("Card {id} judged {}.", if correct { "correct" } else { "wrong" });
        reviewed += 1;

        let verdict = if correct { Message::Correct } else { Message::Wrong };
        writeln!(out, "{}", text(lang, verdict))?;
        writeln!(out, "{feedback}")?;
        session.advance(id);
    }
    log::debug!("Session ended after {reviewed} cards.");
    Ok(())
}

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
use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;

use crate::collection::Collection;
use crate::error::Fallible;
use crate::types::profile::Profile;

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum StatsFormat {
    /// Plain text output.
    Text,
    /// JSON output.
    Json,
}

impl Display for StatsFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsFormat::Text => write!(f, "text"),
            StatsFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Serialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    cards: usize,
    learnable_cards: usize,
    never_shown: usize,
    attempts: u32,
    correct: u32,
    wrong: u32,
    /// Percentage of correct answers over all attempts.
    accuracy: f64,
}

impl Stats {
    pub fn of(profile: &Profile) -> Self {
        let cards = profile.deck.cards();
        let settings = &profile.settings;
        let learnable_cards = cards
            .iter()
            .filter(|card| card.is_learnable(&settings.front_languages, &settings.back_languages))
            .count();
        let never_shown = cards.iter().filter(|card| card.statistics.is_new()).count();
        let attempts: u32 = cards.iter().map(|c| c.statistics.total_attempts).sum();
        let correct: u32 = cards.iter().map(|c| c.statistics.correct_answers).sum();
        let wrong: u32 = cards.iter().map(|c| c.statistics.wrong_answers).sum();
        let accuracy = if attempts == 0 {
            0.0
        } else {
            correct as f64 / attempts as f64 * 100.0
        };
        Self {
            cards: cards.len(),
            learnable_cards,
            never_shown,
            attempts,
            correct,
            wrong,
            accuracy,
        }
    }
}

pub fn print_stats(coll: &Collection, format: StatsFormat, out: &mut impl Write) -> Fallible<()> {
    let stats = Stats::of(&coll.profile()?);
    match format {
        StatsFormat::Text => {
            writeln!(out, "cards: {} ({} learnable)", stats.cards, stats.learnable_cards)?;
            writeln!(out, "never shown: {}", stats.never_shown)?;
            writeln!(
                out,
                "answers: {} correct, {} wrong ({:.0}%)",
                stats.correct, stats.wrong, stats.accuracy
            )?;
        }
        StatsFormat::Json => {
            let stats_json = serde_json::to_string_pretty(&stats)?;
            writeln!(out, "{stats_json}")?;
        }
    }
    Ok(())
}

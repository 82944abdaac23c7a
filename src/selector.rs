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

//! Picks the next card to show during a learning session.
//!
//! Every call scores the whole deck from scratch. A card's score is the sum
//! of a recency bonus, an error-rate bonus, a wrong-streak bonus and a random
//! jitter; the card shown last is excluded so it never comes up twice in a
//! row. There is no notion of an optimal review interval, only coarse
//! buckets.

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

use chrono::TimeDelta;
use rand::Rng;
use rand::rngs::ThreadRng;

use crate::error::ErrorReport;
use crate::types::card::Card;
use crate::types::card::CardId;
use crate::types::statistics::Statistics;
use crate::types::timestamp::Timestamp;

/// The largest value the jitter may add to a score.
pub const MAX_JITTER: u32 = 35;

/// A card's priority for one selection pass.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Score {
    /// The card was shown last and sits this round out.
    Ineligible,
    Scored(u32),
}

/// The random addend of a score. Implementations must return values in
/// `0..=MAX_JITTER`.
pub trait Jitter {
    fn draw(&mut self) -> u32;
}

/// Uniform jitter from a `rand` generator.
pub struct RandomJitter<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomJitter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomJitter<ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> Jitter for RandomJitter<R> {
    fn draw(&mut self) -> u32 {
        self.rng.random_range(0..=MAX_JITTER)
    }
}

/// Always the same jitter, for tests that need exact scores.
#[cfg(test)]
pub struct FixedJitter(pub u32);

#[cfg(test)]
impl Jitter for FixedJitter {
    fn draw(&mut self) -> u32 {
        self.0
    }
}

/// Selection was asked to pick from an empty deck.
#[derive(Debug, PartialEq)]
pub struct EmptyDeck;

impl Display for EmptyDeck {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "the deck is empty.")
    }
}

impl Error for EmptyDeck {}

impl From<EmptyDeck> for ErrorReport {
    fn from(value: EmptyDeck) -> Self {
        ErrorReport::new(value.to_string())
    }
}

fn recency_points(stats: &Statistics, now: Timestamp) -> u32 {
    match stats.last_shown {
        None => 30,
        Some(last_shown) => {
            let elapsed = now.elapsed_since(last_shown);
            if elapsed > TimeDelta::hours(12) {
                20
            } else if elapsed > TimeDelta::hours(1) {
                10
            } else {
                0
            }
        }
    }
}

fn error_rate_points(stats: &Statistics) -> u32 {
    match stats.error_rate() {
        None => 0,
        Some(rate) if rate > 0.5 => 30,
        Some(rate) if rate > 0.3 => 20,
        Some(rate) if rate > 0.1 => 10,
        Some(_) => 0,
    }
}

fn wrong_streak_points(stats: &Statistics) -> u32 {
    match stats.wrong_streak {
        0 => 0,
        1 => 7,
        _ => 15,
    }
}

/// The deterministic part of a card's score.
pub fn base_points(card: &Card, now: Timestamp) -> u32 {
    let stats = &card.statistics;
    recency_points(stats, now) + error_rate_points(stats) + wrong_streak_points(stats)
}

/// Score one card. Jitter is only drawn for cards that are not excluded.
pub fn score(
    card: &Card,
    excluded: Option<CardId>,
    now: Timestamp,
    jitter: &mut impl Jitter,
) -> Score {
    if excluded == Some(card.id) {
        return Score::Ineligible;
    }
    Score::Scored(base_points(card, now) + jitter.draw())
}

/// The highest-scoring eligible card. Ties go to the earlier card.
fn best<'a>(
    cards: &'a [Card],
    excluded: Option<CardId>,
    now: Timestamp,
    jitter: &mut impl Jitter,
) -> Option<(&'a Card, u32)> {
    let mut best: Option<(&Card, u32)> = None;
    for card in cards {
        if let Score::Scored(points) = score(card, excluded, now, jitter) {
            match best {
                Some((_, top)) if top >= points => {}
                _ => best = Some((card, points)),
            }
        }
    }
    best
}

/// Choose the next card to show, avoiding `last_shown` when there is any
/// alternative.
pub fn select_next<'a>(
    cards: &'a [Card],
    last_shown: Option<CardId>,
    now: Timestamp,
    jitter: &mut impl Jitter,
) -> Result<&'a Card, EmptyDeck> {
    match cards {
        [] => Err(EmptyDeck),
        [only] => Ok(only),
        _ => {
            if let Some((card, points)) = best(cards, last_shown, now, jitter) {
                log::debug!("Selected card {} with score {points}.", card.id);
                return Ok(card);
            }
            // Defensive: only reachable when every card carries the excluded
            // id, which a well-formed deck never does.
            log::debug!("Every card was excluded, rescoring without exclusion.");
            best(cards, None, now, jitter)
                .map(|(card, _)| card)
                .ok_or(EmptyDeck)
        }
    }
}

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

use crate::types::timestamp::Timestamp;

/// The streak length the feedback line counts towards.
pub const STREAK_GOAL: u32 = 15;

/// Review counters for a single card.
#[derive(Serialize, Clone, Default, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_attempts: u32,
    pub correct_answers: u32,
    pub wrong_answers: u32,
    /// When the card was last judged. `None` means it was never shown.
    pub last_shown: Option<Timestamp>,
    pub last_result: Option<bool>,
    pub correct_streak: u32,
    pub wrong_streak: u32,
}

impl Statistics {
    /// Record one judgment.
    pub fn record(&mut self, correct: bool, now: Timestamp) {
        self.total_attempts += 1;
        if correct {
            self.correct_answers += 1;
            self.correct_streak += 1;
            self.wrong_streak = 0;
        } else {
            self.wrong_answers += 1;
            self.wrong_streak += 1;
            self.correct_streak = 0;
        }
        self.last_shown = Some(now);
        self.last_result = Some(correct);
    }

    pub fn is_new(&self) -> bool {
        self.last_shown.is_none()
    }

    /// Share of wrong answers, or `None` if the card was never judged.
    pub fn error_rate(&self) -> Option<f64> {
        if self.total_attempts == 0 {
            None
        } else {
            Some(self.wrong_answers as f64 / self.total_attempts as f64)
        }
    }

    pub fn accuracy_percent(&self) -> f64 {
        if self.total_attempts == 0 {
            0.0
        } else {
            self.correct_answers as f64 / self.total_attempts as f64 * 100.0
        }
    }

    /// The one-line summary shown after answering, e.g.
    /// `✅ +1 | ⭐️⭐️⭐️□□ (60%) | 3/15`.
    pub fn feedback_line(&self, correct: bool) -> String {
        let accuracy = self.accuracy_percent();
        let stars = ((accuracy / 20.0).round_ties_even() as usize).min(5);
        let bar = format!("{}{}", "⭐️".repeat(stars), "□".repeat(5 - stars));
        let result = if correct { "✅ +1" } else { "❌ -1" };
        format!(
            "{result} | {bar} ({accuracy:.0}%) | {}/{STREAK_GOAL}",
            self.correct_streak
        )
    }
}

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
use std::io::Read;
use std::io::stdin;
use std::io::stdout;
use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

use crate::cmd::cards::add_card;
use crate::cmd::cards::delete_card;
use crate::cmd::cards::edit_card;
use crate::cmd::cards::list_cards;
use crate::cmd::cards::show_card;
use crate::cmd::export::export_profile;
use crate::cmd::import::import_cards;
use crate::cmd::import::print_prompt;
use crate::cmd::learn::learn;
use crate::cmd::profile::init;
use crate::cmd::profile::list_users;
use crate::cmd::profile::set_language;
use crate::cmd::profile::settings;
use crate::cmd::stats::StatsFormat;
use crate::cmd::stats::print_stats;
use crate::collection::Collection;
use crate::error::Fallible;
use crate::selector::RandomJitter;
use crate::types::card::CardId;
use crate::types::card::collect_translations;
use crate::types::language::Language;
use crate::types::timestamp::SystemClock;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the data directory. Defaults to the current directory.
    #[arg(long, global = true)]
    directory: Option<String>,
    /// Whose cards to use. Defaults to the `user` entry of the config file.
    #[arg(long, global = true)]
    user: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a profile, or change the interface language of an existing one.
    Init {
        /// Interface language.
        #[arg(long)]
        language: Language,
        /// JSON file with starter cards for a new profile.
        #[arg(long)]
        cards: Option<PathBuf>,
    },
    /// Change the interface language.
    Language { language: Language },
    /// List the users stored in the data directory.
    Users,
    /// Show or change which languages appear on each side of a card.
    Settings {
        /// Comma-separated languages for the front, e.g. `en,es`.
        #[arg(long, value_delimiter = ',')]
        front: Option<Vec<Language>>,
        /// Comma-separated languages for the back.
        #[arg(long, value_delimiter = ',')]
        back: Option<Vec<Language>>,
    },
    /// Add a card. At least two translations are required.
    Add {
        #[arg(long)]
        ru: Option<String>,
        #[arg(long)]
        en: Option<String>,
        #[arg(long)]
        es: Option<String>,
        #[arg(long)]
        ro: Option<String>,
    },
    /// List cards, one page at a time.
    List {
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Show one card with its statistics.
    Show { id: u32 },
    /// Replace one translation of a card.
    Edit {
        id: u32,
        language: Language,
        text: String,
    },
    /// Delete a card.
    Delete {
        id: u32,
        /// Skip the confirmation question.
        #[arg(long)]
        yes: bool,
    },
    /// Import cards from lines like `🇷🇺: кот | 🇬🇧: cat`.
    Import {
        /// File to read. Reads standard input when absent.
        #[arg(long)]
        file: Option<PathBuf>,
        /// Print a prompt for generating cards instead of importing.
        #[arg(long)]
        prompt: bool,
    },
    /// Learn cards interactively.
    Learn,
    /// Print deck statistics.
    Stats {
        #[arg(long, default_value_t = StatsFormat::Text)]
        format: StatsFormat,
    },
    /// Print the profile as JSON.
    Export,
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Cli = Cli::parse();
    let mut coll = Collection::new(cli.directory, cli.user)?;
    let mut out = stdout().lock();
    match cli.command {
        Command::Init { language, cards } => init(&mut coll, language, cards.as_deref(), &mut out),
        Command::Language { language } => set_language(&mut coll, language, &mut out),
        Command::Users => list_users(&coll, &mut out),
        Command::Settings { front, back } => settings(&mut coll, front, back, &mut out),
        Command::Add { ru, en, es, ro } => {
            let translations = collect_translations([
                (Language::Ru, ru),
                (Language::En, en),
                (Language::Es, es),
                (Language::Ro, ro),
            ]);
            add_card(&mut coll, translations, &mut out)
        }
        Command::List { page } => list_cards(&coll, page, &mut out),
        Command::Show { id } => show_card(&coll, CardId::new(id), &mut out),
        Command::Edit { id, language, text } => {
            edit_card(&mut coll, CardId::new(id), language, &text, &mut out)
        }
        Command::Delete { id, yes } => {
            delete_card(&mut coll, CardId::new(id), yes, &mut stdin().lock(), &mut out)
        }
        Command::Import { file, prompt } => {
            if prompt {
                return print_prompt(&coll, &mut out);
            }
            let content = match file {
                Some(path) => read_to_string(path)?,
                None => {
                    let mut content = String::new();
                    stdin().read_to_string(&mut content)?;
                    content
                }
            };
            import_cards(&mut coll, &content, &mut out)
        }
        Command::Learn => learn(
            &mut coll,
            &SystemClock,
            &mut RandomJitter::thread(),
            &mut stdin().lock(),
            &mut out,
        ),
        Command::Stats { format } => print_stats(&coll, format, &mut out),
        Command::Export => export_profile(&coll, &mut out),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_settings() {
        let cli = Cli::try_parse_from(["lingocards", "--user", "ana", "settings", "--front", "en,ro"]);
        let Ok(cli) = cli else {
            panic!("arguments did not parse");
        };
        assert_eq!(cli.user.as_deref(), Some("ana"));
        match cli.command {
            Command::Settings { front, back } => {
                assert_eq!(front, Some(vec![Language::En, Language::Ro]));
                assert_eq!(back, None);
            }
            _ => panic!("wrong command"),
        }
    }

    #[test]
    fn test_reject_unknown_language() {
        assert!(Cli::try_parse_from(["lingocards", "language", "de"]).is_err());
    }
}

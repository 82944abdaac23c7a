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
use std::path::Path;

use serde::Deserialize;

use crate::error::Fallible;
use crate::types::deck::DEFAULT_PAGE_SIZE;

/// The name of the optional configuration file in the data directory.
pub const CONFIG_FILE: &str = "lingocards.toml";

#[derive(Deserialize, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The user to act as when `--user` is not given.
    pub user: String,
    /// Cards per page in `list`.
    pub page_size: usize,
    /// Database file name, relative to the data directory.
    pub database: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user: "default".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            database: "lingocards.db".to_string(),
        }
    }
}

impl Config {
    /// Read the configuration from `directory`, falling back to defaults when
    /// there is no file.
    pub fn load(directory: &Path) -> Fallible<Self> {
        let path = directory.join(CONFIG_FILE);
        if !path.exists() {
            log::debug!("No configuration file, using defaults.");
            return Ok(Self::default());
        }
        let content = read_to_string(&path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Fallible<Self> {
        let mut config: Config = toml::from_str(content)?;
        config.page_size = config.page_size.max(1);
        Ok(config)
    }
}

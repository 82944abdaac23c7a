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

use std::env::current_dir;
use std::path::PathBuf;

use crate::config::Config;
use crate::db::Database;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;
use crate::types::profile::Profile;

/// A data directory opened for one user.
pub struct Collection {
    pub directory: PathBuf,
    pub config: Config,
    pub db: Database,
    pub user_id: String,
}

impl Collection {
    pub fn new(directory: Option<String>, user: Option<String>) -> Fallible<Self> {
        let directory: PathBuf = match directory {
            Some(dir) => PathBuf::from(dir),
            None => current_dir()?,
        };
        let directory = if directory.exists() {
            directory.canonicalize()?
        } else {
            return fail("directory does not exist.");
        };

        let config = Config::load(&directory)?;
        let db_path: PathBuf = directory.join(&config.database);
        let db_path: &str = db_path
            .to_str()
            .ok_or_else(|| ErrorReport::new("invalid path"))?;
        let db: Database = Database::new(db_path)?;
        let user_id = user.unwrap_or_else(|| config.user.clone());

        Ok(Self {
            directory,
            config,
            db,
            user_id,
        })
    }

    /// The current user's profile, or an error telling them to run `init`.
    pub fn profile(&self) -> Fallible<Profile> {
        match self.db.load(&self.user_id)? {
            Some(profile) => Ok(profile),
            None => fail(format!(
                "no profile for user {}. Run `lingocards init --language <code>` first.",
                self.user_id
            )),
        }
    }

    pub fn save(&mut self, profile: &Profile) -> Fallible<()> {
        self.db.save(&self.user_id, profile)
    }
}

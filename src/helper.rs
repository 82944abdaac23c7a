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

use std::fs::create_dir_all;
use std::fs::write;
use std::path::PathBuf;

use tempfile::tempdir;

use crate::error::Fallible;

/// Create an empty data directory that outlives the call.
pub fn create_tmp_directory() -> Fallible<String> {
    let target: PathBuf = tempdir()?.path().to_path_buf();
    create_dir_all(&target)?;
    let target = target.canonicalize()?;
    Ok(target.display().to_string())
}

/// Create a data directory with the given configuration file content.
pub fn create_tmp_directory_with_config(config: &str) -> Fallible<String> {
    let target = create_tmp_directory()?;
    write(PathBuf::from(&target).join(crate::config::CONFIG_FILE), config)?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tmp_directory() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        assert!(PathBuf::from(dir).is_dir());
        Ok(())
    }

    #[test]
    fn test_create_tmp_directory_with_config() -> Fallible<()> {
        let dir = create_tmp_directory_with_config("page_size = 3\n")?;
        let config = crate::config::Config::load(&PathBuf::from(dir))?;
        assert_eq!(config.page_size, 3);
        Ok(())
    }
}

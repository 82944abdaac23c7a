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

use std::io::Write;

use crate::collection::Collection;
use crate::error::Fallible;

/// Print the user's whole profile as JSON.
pub fn export_profile(coll: &Collection, out: &mut impl Write) -> Fallible<()> {
    let profile = coll.profile()?;
    let json: String = serde_json::to_string_pretty(&profile)?;
    writeln!(out, "{json}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::cmd::cards::add_card;
    use crate::cmd::profile::init;
    use crate::helper::create_tmp_directory;
    use crate::types::card::Translations;
    use crate::types::language::Language;

    #[test]
    fn test_export() -> Fallible<()> {
        let mut coll = Collection::new(Some(create_tmp_directory()?), Some("bob".to_string()))?;
        init(&mut coll, Language::Es, None, &mut Vec::new())?;
        let translations = Translations::from([
            (Language::En, "cat".to_string()),
            (Language::Es, "gato".to_string()),
        ]);
        add_card(&mut coll, translations, &mut Vec::new())?;

        let mut out = Vec::new();
        export_profile(&coll, &mut out)?;
        let json: Value = serde_json::from_slice(&out)?;
        assert_eq!(json["interfaceLanguage"], "es");
        assert_eq!(json["settings"]["frontLanguages"][0], "en");
        assert_eq!(json["deck"]["lastCardId"], 1);
        let card = &json["deck"]["cards"][0];
        assert_eq!(card["id"], 1);
        assert_eq!(card["translations"]["es"], "gato");
        assert_eq!(card["statistics"]["totalAttempts"], 0);
        assert_eq!(card["statistics"]["lastShown"], Value::Null);
        Ok(())
    }
}

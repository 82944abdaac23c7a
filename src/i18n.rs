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

//! User-facing text in each interface language.

use crate::types::language::Language;

/// The line format the importer understands, shown inside the import prompt.
pub const IMPORT_LINE_FORMAT: &str = "🇷🇺: [Слово] | 🇬🇧: [Word] | 🇪🇸: [Palabra] | 🇷🇴: [Cuvânt]";

#[derive(Clone, Copy, Debug)]
pub enum Message {
    LanguageSelected,
    NoCards,
    CardAdded,
    CardDeleted,
    ConfirmDelete,
    DuplicateTranslation,
    NotEnoughTranslations,
    CardNotFound(u32),
    MyCards,
    TotalCards(usize),
    PageCounter(usize, usize),
    FirstPage,
    LastPage,
    HowToTranslate,
    Translation,
    Correct,
    Wrong,
    SelectLanguagesWarning,
    NoCardsForSelectedLanguages,
    CardsFound(usize),
    DuplicateCardsWarning,
    ImportInstruction,
    LearnKeys,
    SettingsSaved,
}

/// Render `message` in `lang`.
pub fn text(lang: Language, message: Message) -> String {
    use Language::*;
    use Message::*;
    match (message, lang) {
        (LanguageSelected, Ru) => "✅ Язык успешно изменён!".into(),
        (LanguageSelected, En) => "✅ Language changed successfully!".into(),
        (LanguageSelected, Es) => "✅ ¡Idioma cambiado con éxito!".into(),
        (LanguageSelected, Ro) => "✅ Limba a fost schimbată cu succes!".into(),

        (NoCards, Ru) => "⚠️ У вас пока нет карточек для изучения".into(),
        (NoCards, En) => "⚠️ You don't have any cards to learn yet".into(),
        (NoCards, Es) => "⚠️ Aún no tienes tarjetas para aprender".into(),
        (NoCards, Ro) => "⚠️ Nu ai încă carduri pentru învățare".into(),

        (CardAdded, Ru) => "Карточка добавлена!".into(),
        (CardAdded, En) => "Card added!".into(),
        (CardAdded, Es) => "¡Tarjeta añadida!".into(),
        (CardAdded, Ro) => "Card adăugat!".into(),

        (CardDeleted, Ru) => "🗑️ Карточка удалена!".into(),
        (CardDeleted, En) => "🗑️ Card deleted!".into(),
        (CardDeleted, Es) => "🗑️ ¡Tarjeta eliminada!".into(),
        (CardDeleted, Ro) => "🗑️ Card șters!".into(),

        (ConfirmDelete, Ru) => "⚠️ Вы уверены, что хотите удалить карточку? [y/N]".into(),
        (ConfirmDelete, En) => "⚠️ Are you sure you want to delete this card? [y/N]".into(),
        (ConfirmDelete, Es) => "⚠️ ¿Está seguro de que desea eliminar esta tarjeta? [y/N]".into(),
        (ConfirmDelete, Ro) => "⚠️ Sigur doriți să ștergeți acest card? [y/N]".into(),

        (DuplicateTranslation, Ru) => "Такой перевод уже существует".into(),
        (DuplicateTranslation, En) => "This translation already exists".into(),
        (DuplicateTranslation, Es) => "Esta traducción ya existe".into(),
        (DuplicateTranslation, Ro) => "Această traducere există deja".into(),

        (NotEnoughTranslations, Ru) => "⚠️ Добавьте хотя бы два перевода".into(),
        (NotEnoughTranslations, En) => "⚠️ Add at least two translations".into(),
        (NotEnoughTranslations, Es) => "⚠️ Agregue al menos dos traducciones".into(),
        (NotEnoughTranslations, Ro) => "⚠️ Adăugați cel puțin două traduceri".into(),

        (CardNotFound(id), Ru) => format!("Карточка {id} не найдена"),
        (CardNotFound(id), En) => format!("Card {id} not found"),
        (CardNotFound(id), Es) => format!("Tarjeta {id} no encontrada"),
        (CardNotFound(id), Ro) => format!("Cardul {id} nu a fost găsit"),

        (MyCards, Ru) => "🎴 Мои карточки".into(),
        (MyCards, En) => "🎴 My Cards".into(),
        (MyCards, Es) => "🎴 Mis Tarjetas".into(),
        (MyCards, Ro) => "🎴 Cardurile Mele".into(),

        (TotalCards(n), Ru) => format!("Всего {n} карточек"),
        (TotalCards(n), En) => format!("Total {n} cards"),
        (TotalCards(n), Es) => format!("Total {n} tarjetas"),
        (TotalCards(n), Ro) => format!("Total {n} carduri"),

        (PageCounter(p, t), Ru) => format!("Страница {p} из {t}"),
        (PageCounter(p, t), En) => format!("Page {p} of {t}"),
        (PageCounter(p, t), Es) => format!("Página {p} de {t}"),
        (PageCounter(p, t), Ro) => format!("Pagina {p} din {t}"),

        (FirstPage, Ru) => "⚠️ Это первая страница".into(),
        (FirstPage, En) => "⚠️ This is the first page".into(),
        (FirstPage, Es) => "⚠️ Esta es la primera página".into(),
        (FirstPage, Ro) => "⚠️ Aceasta este prima pagină".into(),

        (LastPage, Ru) => "⚠️ Это последняя страница".into(),
        (LastPage, En) => "⚠️ This is the last page".into(),
        (LastPage, Es) => "⚠️ Esta es la última página".into(),
        (LastPage, Ro) => "⚠️ Aceasta este ultima pagină".into(),

        (HowToTranslate, Ru) => "Как переводится это слово?".into(),
        (HowToTranslate, En) => "How do you translate this word?".into(),
        (HowToTranslate, Es) => "¿Cómo se traduce esta palabra?".into(),
        (HowToTranslate, Ro) => "Cum se traduce acest cuvânt?".into(),

        (Translation, Ru) => "Перевод".into(),
        (Translation, En) => "Translation".into(),
        (Translation, Es) => "Traducción".into(),
        (Translation, Ro) => "Traducere".into(),

        (Correct, Ru) => "✅ Верно".into(),
        (Correct, En) => "✅ Correct".into(),
        (Correct, Es) => "✅ Correcto".into(),
        (Correct, Ro) => "✅ Corect".into(),

        (Wrong, Ru) => "❌ Неверно".into(),
        (Wrong, En) => "❌ Wrong".into(),
        (Wrong, Es) => "❌ Incorrecto".into(),
        (Wrong, Ro) => "❌ Greșit".into(),

        (SelectLanguagesWarning, Ru) => "⚠️ Пожалуйста, выберите языки для изучения в настройках".into(),
        (SelectLanguagesWarning, En) => "⚠️ Please select languages for learning in settings".into(),
        (SelectLanguagesWarning, Es) => "⚠️ Por favor, selecciona los idiomas para aprender en la configuración".into(),
        (SelectLanguagesWarning, Ro) => "⚠️ Te rog selectează limbile pentru învățare în setări".into(),

        (NoCardsForSelectedLanguages, Ru) => "⚠️ Нет карточек с выбранными языками.\nДобавьте карточки или измените настройки".into(),
        (NoCardsForSelectedLanguages, En) => "⚠️ No cards with selected languages.\nAdd cards or change language settings".into(),
        (NoCardsForSelectedLanguages, Es) => "⚠️ No hay tarjetas con los idiomas seleccionados.\nAgrega tarjetas o cambia la configuración de idiomas".into(),
        (NoCardsForSelectedLanguages, Ro) => "⚠️ Nu există carduri cu limbile selectate.\nAdaugă carduri sau modifică setările de limbă".into(),

        (CardsFound(n), Ru) => format!("Найдено {n} новых карточек:"),
        (CardsFound(n), En) => format!("Found {n} new cards:"),
        (CardsFound(n), Es) => format!("Se encontraron {n} tarjetas nuevas:"),
        (CardsFound(n), Ro) => format!("S-au găsit {n} carduri noi:"),

        (DuplicateCardsWarning, Ru) => "Эти карточки уже были, они не будут добавлены повторно".into(),
        (DuplicateCardsWarning, En) => "These cards already exist, they will not be added again".into(),
        (DuplicateCardsWarning, Es) => "Estas tarjetas ya existen, no se agregarán nuevamente".into(),
        (DuplicateCardsWarning, Ro) => "Aceste carduri există deja, nu vor fi adăugate din nou".into(),

        (ImportInstruction, Ru) => "Отправьте ассистенту этот запрос, затем передайте ответ в `lingocards import`:".into(),
        (ImportInstruction, En) => "Send this prompt to an assistant, then pipe its answer into `lingocards import`:".into(),
        (ImportInstruction, Es) => "Envía este prompt a un asistente y luego pasa su respuesta a `lingocards import`:".into(),
        (ImportInstruction, Ro) => "Trimite acest prompt unui asistent, apoi dă răspunsul lui către `lingocards import`:".into(),

        (LearnKeys, Ru) => "[Enter] показать  [y] верно  [n] неверно  [q] выйти".into(),
        (LearnKeys, En) => "[Enter] reveal  [y] correct  [n] wrong  [q] quit".into(),
        (LearnKeys, Es) => "[Enter] mostrar  [y] correcto  [n] incorrecto  [q] salir".into(),
        (LearnKeys, Ro) => "[Enter] arată  [y] corect  [n] greșit  [q] ieșire".into(),

        (SettingsSaved, Ru) => "⚙️ Настройки сохранены".into(),
        (SettingsSaved, En) => "⚙️ Settings saved".into(),
        (SettingsSaved, Es) => "⚙️ Ajustes guardados".into(),
        (SettingsSaved, Ro) => "⚙️ Setări salvate".into(),
    }
}

/// A prompt asking an assistant for a batch of cards in the import format.
pub fn import_prompt(lang: Language) -> String {
    let request = match lang {
        Language::Ru => {
            "Ты помощник для изучения языков. Составь 10 часто используемых слов из категории \"Еда и напитки\".\nОтвечай строго в формате ниже, без пояснений, внутри тройных обратных кавычек."
        }
        Language::En => {
            "You are a language learning assistant. List 10 commonly used words from the \"Food and Drinks\" category.\nAnswer strictly in the format below, without explanations, wrapped in triple backticks."
        }
        Language::Es => {
            "Eres un asistente para aprender idiomas. Enumera 10 palabras comunes de la categoría \"Comida y Bebidas\".\nResponde estrictamente en el formato de abajo, sin explicaciones, entre tres comillas invertidas."
        }
        Language::Ro => {
            "Ești un asistent pentru învățarea limbilor. Enumeră 10 cuvinte frecvente din categoria \"Mâncare și Băuturi\".\nRăspunde strict în formatul de mai jos, fără explicații, între trei ghilimele inverse."
        }
    };
    format!("{request}\n\n{IMPORT_LINE_FORMAT}")
}

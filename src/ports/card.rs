// src/ports/card.rs
use crate::domain::Note;

/// Renders fetched notes as text cards for the terminal.
///
/// A card shows name, description, the resolved image URL when one exists,
/// and the note id (the handle for `notekeep delete`). The raw storage key
/// is never rendered.
#[derive(Debug)]
pub struct CardPresenter;

impl CardPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, notes: &[Note]) -> String {
        if notes.is_empty() {
            return "No notes yet.\n".to_string();
        }

        let cards: Vec<String> = notes.iter().map(|note| self.render_card(note)).collect();
        format!(
            "{}\n{} note(s)\n",
            cards.join("--------------------------------\n"),
            notes.len()
        )
    }

    fn render_card(&self, note: &Note) -> String {
        let mut card = String::new();
        card.push_str(&format!("{}\n", note.name));
        card.push_str(&format!("  {}\n", note.description));
        if let Some(url) = note.image_url.as_deref().filter(|u| !u.is_empty()) {
            card.push_str(&format!("  image: {}\n", url));
        }
        card.push_str(&format!("  id: {}\n", note.id));
        card
    }
}

impl Default for CardPresenter {
    fn default() -> Self {
        Self::new()
    }
}

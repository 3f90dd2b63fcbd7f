//! Named prompt fields the host renders on demand.

use crate::history::HistoryStore;

/// A named, on-demand-computed prompt value.
///
/// Returning `None` means the field has nothing to display for this prompt.
pub trait PromptField {
    /// Field name the host refers to in its prompt template.
    fn name(&self) -> &str;

    /// Compute the field value for the prompt about to be rendered.
    fn render(&self, history: &dyn HistoryStore) -> Option<String>;
}

/// Registry the host consults on every prompt render.
#[derive(Default)]
pub struct PromptFieldRegistry {
    fields: Vec<Box<dyn PromptField>>,
}

impl PromptFieldRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field, replacing any previous field of the same name.
    pub fn register(&mut self, field: Box<dyn PromptField>) {
        self.fields.retain(|f| f.name() != field.name());
        self.fields.push(field);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name() == name)
    }

    /// Render the named field, or `None` when the field is unknown or has
    /// nothing to display.
    pub fn render(&self, name: &str, history: &dyn HistoryStore) -> Option<String> {
        self.fields
            .iter()
            .find(|f| f.name() == name)?
            .render(history)
    }
}

//! Host commands as pick-list entries.

use crate::field::FieldResolver;

/// Separator between a command's name and its description in labels.
pub const LABEL_SEPARATOR: &str = " - ";

/// A host command shown in the pick list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandEntry {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

impl CommandEntry {
    /// Command with no description.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// `name - description`, or just the name without a description.
    ///
    /// A command with an empty name is labelled by its id.
    #[must_use]
    pub fn label(&self) -> String {
        let mut label = self.sort_label().to_owned();
        if let Some(description) = self.description.as_deref()
            && !description.is_empty()
        {
            label.push_str(LABEL_SEPARATOR);
            label.push_str(description);
        }
        label
    }

    #[must_use]
    pub fn sort_label(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }

    /// Resolver ranking commands by `name`.
    pub fn name_field() -> FieldResolver<Self> {
        FieldResolver::new("name", |c: &Self| c.sort_label().to_owned())
    }

    /// Resolver ranking commands by the full `label`, description included.
    pub fn label_field() -> FieldResolver<Self> {
        FieldResolver::new("label", Self::label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_joins_description() {
        let cmd = CommandEntry::new("file.save", "Save").with_description("Save the active editor");
        assert_eq!(cmd.label(), "Save - Save the active editor");
        assert_eq!(cmd.sort_label(), "Save");
    }

    #[test]
    fn label_without_description() {
        assert_eq!(CommandEntry::new("file.save", "Save").label(), "Save");
        let blank = CommandEntry::new("file.save", "Save").with_description("");
        assert_eq!(blank.label(), "Save");
    }

    #[test]
    fn unnamed_command_uses_id() {
        let cmd = CommandEntry::new("file.revert", "");
        assert_eq!(cmd.label(), "file.revert");
        assert_eq!(CommandEntry::name_field().resolve(&cmd), "file.revert");
    }

    #[test]
    fn fields_resolve_entry_text() {
        let cmd = CommandEntry::new("edit.undo", "Undo").with_description("Revert last edit");
        assert_eq!(CommandEntry::label_field().field_id(), "label");
        assert_eq!(CommandEntry::label_field().resolve(&cmd), "Undo - Revert last edit");
    }
}

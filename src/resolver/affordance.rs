use rocket::serde::Serialize;

use crate::tags::{TagValue, ValueType};

/// the kind of editor the presentation layer should open for a tag
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(crate = "rocket::serde", tag = "kind", rename_all = "camelCase")]
pub enum EditorKind {
    /// a single line text input
    SingleLine,
    /// a calendar that only produces ISO `YYYY-MM-DD` strings
    DatePicker,
    /// a structured document editor that produces markup
    RichText,
    /// one column per entry, rows can be added and removed and every cell is edited as text
    TableGrid { columns: Vec<String> },
}

/// what happens when the editor is dismissed without saving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub enum SecondaryAction {
    /// the tag had a value, which gets removed
    Delete,
    /// the tag had no value, nothing is written
    Discard,
}

impl SecondaryAction {
    pub fn label(&self) -> &'static str {
        match self {
            SecondaryAction::Delete => "Delete",
            SecondaryAction::Discard => "Discard",
        }
    }
}

/// how a tag can be edited
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct Affordance {
    pub editor: EditorKind,
    /// the id of the existing value. `None` means saving will create it
    pub tag_id: Option<u32>,
    pub secondary_action: SecondaryAction,
    pub secondary_label: &'static str,
}

/// picks the editor from the value type alone
pub fn editor_for(value_type: ValueType, columns: &[String]) -> EditorKind {
    match value_type {
        ValueType::Text => EditorKind::SingleLine,
        ValueType::Date => EditorKind::DatePicker,
        ValueType::RichText => EditorKind::RichText,
        ValueType::Table => EditorKind::TableGrid {
            columns: columns.to_vec(),
        },
    }
}

pub fn affordance_for(
    value_type: ValueType,
    columns: &[String],
    existing: Option<&TagValue>,
) -> Affordance {
    let secondary_action = if existing.is_some() {
        SecondaryAction::Delete
    } else {
        SecondaryAction::Discard
    };
    Affordance {
        editor: editor_for(value_type, columns),
        tag_id: existing.map(|it| it.id),
        secondary_action,
        secondary_label: secondary_action.label(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::now;

    fn value(id: u32) -> TagValue {
        TagValue {
            id,
            tag_name: "name".to_string(),
            raw_value: Some("value".to_string()),
            created_at: now(),
            updated_at: now(),
        }
    }

    #[test]
    fn editor_depends_only_on_type() {
        let columns = vec!["Step".to_string()];
        assert_eq!(EditorKind::SingleLine, editor_for(ValueType::Text, &columns));
        assert_eq!(EditorKind::DatePicker, editor_for(ValueType::Date, &columns));
        assert_eq!(EditorKind::RichText, editor_for(ValueType::RichText, &[]));
        assert_eq!(
            EditorKind::TableGrid {
                columns: columns.clone()
            },
            editor_for(ValueType::Table, &columns)
        );
    }

    #[test]
    fn missing_value_offers_create_and_discard() {
        let affordance = affordance_for(ValueType::Text, &[], None);
        assert_eq!(None, affordance.tag_id);
        assert_eq!(SecondaryAction::Discard, affordance.secondary_action);
        assert_eq!("Discard", affordance.secondary_label);
    }

    #[test]
    fn existing_value_offers_update_and_delete() {
        let existing = value(7);
        let affordance = affordance_for(ValueType::Date, &[], Some(&existing));
        assert_eq!(Some(7), affordance.tag_id);
        assert_eq!(SecondaryAction::Delete, affordance.secondary_action);
        assert_eq!("Delete", affordance.secondary_label);
    }
}

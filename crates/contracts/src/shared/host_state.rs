use crate::shared::option_registry::{OptionItem, Scalar};
use crate::shared::widgets::{Interval, PropsUpdate};
use serde::{Deserialize, Serialize};

/// Widget variants the host knows how to persist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    GroupDropdown,
    EventSelection,
    EventRender,
    GroupSelection,
    IntervalLoader,
}

impl WidgetKind {
    /// Whether `update` has the shape this widget reports
    pub fn accepts(&self, update: &PropsUpdate) -> bool {
        matches!(
            (self, update),
            (WidgetKind::GroupDropdown, PropsUpdate::Group { .. })
                | (WidgetKind::EventSelection, PropsUpdate::Value { .. })
                | (WidgetKind::EventRender, PropsUpdate::Value { .. })
                | (WidgetKind::GroupSelection, PropsUpdate::Values { .. })
                | (WidgetKind::IntervalLoader, PropsUpdate::Data { .. })
        )
    }
}

/// Current value of a widget: scalar for single-select, list for multi-select
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WidgetValue {
    Many(Vec<Scalar>),
    One(Scalar),
}

impl WidgetValue {
    pub fn as_one(&self) -> Option<&Scalar> {
        match self {
            WidgetValue::One(v) => Some(v),
            WidgetValue::Many(_) => None,
        }
    }

    pub fn as_many(&self) -> &[Scalar] {
        match self {
            WidgetValue::Many(v) => v,
            WidgetValue::One(_) => &[],
        }
    }
}

/// Properties the host keeps for one widget and feeds back on every render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetRecord {
    pub id: String,
    pub kind: WidgetKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<WidgetValue>,
    #[serde(default, rename = "currentColor", skip_serializing_if = "Option::is_none")]
    pub current_color: Option<String>,
    #[serde(default)]
    pub options: Vec<OptionItem>,
    #[serde(default)]
    pub data: Vec<Interval>,
}

impl WidgetRecord {
    pub fn new(id: impl Into<String>, kind: WidgetKind) -> Self {
        Self {
            id: id.into(),
            kind,
            value: None,
            current_color: None,
            options: Vec::new(),
            data: Vec::new(),
        }
    }

    /// Merges a partial state into the record. Returns false, leaving the
    /// record untouched, when the update does not belong to this widget kind.
    pub fn apply(&mut self, update: PropsUpdate) -> bool {
        if !self.kind.accepts(&update) {
            return false;
        }
        match update {
            PropsUpdate::Group {
                value,
                current_color,
            } => {
                self.value = Some(WidgetValue::One(value));
                self.current_color = Some(current_color);
            }
            PropsUpdate::Value { value } => self.value = Some(WidgetValue::One(value)),
            PropsUpdate::Values { value } => self.value = Some(WidgetValue::Many(value)),
            PropsUpdate::Data { data } => self.data = data,
        }
        true
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListWidgetsResponse {
    pub widgets: Vec<WidgetRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_group_update() {
        let mut record = WidgetRecord::new("group-dropdown", WidgetKind::GroupDropdown);
        assert!(record.apply(PropsUpdate::Group {
            value: Scalar::Number(4),
            current_color: "yellow".into(),
        }));
        assert_eq!(record.value, Some(WidgetValue::One(Scalar::Number(4))));
        assert_eq!(record.current_color.as_deref(), Some("yellow"));
    }

    #[test]
    fn test_apply_rejects_foreign_shape() {
        let mut record = WidgetRecord::new("intervals", WidgetKind::IntervalLoader);
        assert!(!record.apply(PropsUpdate::Value {
            value: Scalar::text("x")
        }));
        assert_eq!(record.value, None);
    }

    #[test]
    fn test_record_json_uses_host_names() {
        let json = r#"{"id": "group-selection", "kind": "group_selection", "value": ["Recent"], "currentColor": "red"}"#;
        let record: WidgetRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.kind, WidgetKind::GroupSelection);
        assert_eq!(record.value.unwrap().as_many(), &[Scalar::text("Recent")]);
        assert!(record.options.is_empty());
    }
}

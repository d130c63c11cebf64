use crate::shared::option_registry::{OptionItem, Scalar};
use serde::{Deserialize, Serialize};

/// One entry of the interval list, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

/// Partial state a widget hands to its host whenever its observable value changes.
///
/// Serialized without a tag so the JSON matches the host property names
/// exactly: `{"value": ..}`, `{"value": .., "currentColor": ..}`, `{"data": [..]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropsUpdate {
    Group {
        value: Scalar,
        #[serde(rename = "currentColor")]
        current_color: String,
    },
    Values {
        value: Vec<Scalar>,
    },
    Value {
        value: Scalar,
    },
    Data {
        data: Vec<Interval>,
    },
}

/// Everything a single interaction wants to tell the host.
/// `props` goes to the value callback, `options` to the option-set callback.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outbound {
    pub props: Option<PropsUpdate>,
    pub options: Option<Vec<OptionItem>>,
}

impl Outbound {
    pub fn props(update: PropsUpdate) -> Self {
        Self {
            props: Some(update),
            options: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_none() && self.options.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_group_update_uses_host_property_names() {
        let update = PropsUpdate::Group {
            value: Scalar::Number(2),
            current_color: "blue".into(),
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"value": 2, "currentColor": "blue"})
        );
    }

    #[test]
    fn test_untagged_shapes_resolve() {
        let v: PropsUpdate = serde_json::from_value(json!({"value": "freezing"})).unwrap();
        assert_eq!(v, PropsUpdate::Value { value: Scalar::text("freezing") });

        let v: PropsUpdate = serde_json::from_value(json!({"value": ["Recent", "Lab"]})).unwrap();
        assert!(matches!(v, PropsUpdate::Values { value } if value.len() == 2));

        let v: PropsUpdate = serde_json::from_value(json!({"value": 1, "currentColor": "red"})).unwrap();
        assert!(matches!(v, PropsUpdate::Group { .. }));

        let v: PropsUpdate =
            serde_json::from_value(json!({"data": [{"start": 10.0, "end": 5.0}]})).unwrap();
        assert_eq!(
            v,
            PropsUpdate::Data {
                data: vec![Interval { start: 10.0, end: 5.0 }]
            }
        );
    }
}

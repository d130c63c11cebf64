use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Non-integer number compared by bit pattern, so it can act as a key
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Real(pub f64);

impl PartialEq for Real {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Real {}

impl Hash for Real {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

/// Key or value of an option: hosts send strings or numbers.
/// Integers land in `Number`, any other number in `Real`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(i64),
    Real(Real),
    Text(String),
}

impl Scalar {
    pub fn text(s: impl Into<String>) -> Self {
        Scalar::Text(s.into())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            Scalar::Number(_) | Scalar::Real(_) => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Real(r) => write!(f, "{}", r.0),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Number(n)
    }
}

/// Single selectable entry of an option set.
///
/// Every field except `text` is optional on the wire: hosts are allowed to
/// send partial entries and those are carried through untouched. Extra fields
/// (e.g. `label`) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<Scalar>,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl OptionItem {
    /// Option whose key, text and value are all `label`
    pub fn labelled(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            key: Some(Scalar::Text(label.clone())),
            text: label.clone(),
            value: Some(Scalar::Text(label)),
            color: None,
        }
    }

    pub fn numbered(n: i64, text: impl Into<String>) -> Self {
        Self {
            key: Some(Scalar::Number(n)),
            text: text.into(),
            value: Some(Scalar::Number(n)),
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// True when a non-empty color is already set
    pub fn has_color(&self) -> bool {
        self.color.as_deref().is_some_and(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_untagged_json() {
        let n: Scalar = serde_json::from_str("3").unwrap();
        let s: Scalar = serde_json::from_str("\"3\"").unwrap();
        assert_eq!(n, Scalar::Number(3));
        assert_eq!(s, Scalar::text("3"));
        assert_ne!(n, s);
    }

    #[test]
    fn test_fractional_numbers_are_accepted() {
        let item: OptionItem =
            serde_json::from_str(r#"{"key": 1.5, "text": "half", "value": 1.5}"#).unwrap();
        assert_eq!(item.key, Some(Scalar::Real(Real(1.5))));
        assert_eq!(item.value.as_ref().map(|v| v.to_string()), Some("1.5".to_string()));
        assert_ne!(item.key, Some(Scalar::Number(1)));
        assert_eq!(serde_json::to_string(&Scalar::Real(Real(1.5))).unwrap(), "1.5");
    }

    #[test]
    fn test_partial_option_deserializes() {
        let json = r#"{"label": "Shock", "text": "Shock", "key": "Shock", "color": null}"#;
        let item: OptionItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.key, Some(Scalar::text("Shock")));
        assert_eq!(item.value, None);
        assert!(!item.has_color());
    }

    #[test]
    fn test_empty_color_is_missing() {
        let item = OptionItem::labelled("a").with_color("");
        assert!(!item.has_color());
    }
}

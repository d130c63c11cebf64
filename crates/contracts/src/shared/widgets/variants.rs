//! Built-in option sets of the individual widgets

use crate::shared::option_registry::{palette_color, OptionItem, Scalar};

/// Reserved value that freezes the group dropdown while the host loads data
pub const LOADING_SENTINEL: &str = "loading";

pub const FREEZING: &str = "freezing";

pub fn loading_sentinel() -> Scalar {
    Scalar::text(LOADING_SENTINEL)
}

/// Group 1..4 with fixed colors, integer keys
pub fn group_options() -> Vec<OptionItem> {
    ["red", "blue", "green", "yellow"]
        .iter()
        .enumerate()
        .map(|(i, color)| {
            let n = i as i64 + 1;
            OptionItem::numbered(n, format!("Group {}", n)).with_color(*color)
        })
        .collect()
}

/// Experimental conditions every multi-select group list starts with
pub fn condition_options() -> Vec<OptionItem> {
    ["Recent", "Remote", "Control"]
        .iter()
        .enumerate()
        .map(|(i, label)| OptionItem::labelled(*label).with_color(palette_color(i)))
        .collect()
}

pub fn freezing_option() -> OptionItem {
    OptionItem::labelled(FREEZING).with_color("lightblue")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_options_are_numbered() {
        let options = group_options();
        assert_eq!(options.len(), 4);
        assert_eq!(options[0].key, Some(Scalar::Number(1)));
        assert_eq!(options[3].text, "Group 4");
        assert_eq!(options[3].color.as_deref(), Some("yellow"));
    }

    #[test]
    fn test_condition_options_use_first_palette_entries() {
        let options = condition_options();
        let colors: Vec<_> = options.iter().filter_map(|o| o.color.as_deref()).collect();
        assert_eq!(colors, vec!["#FFB3BA", "#FFDFBA", "#FFFFBA"]);
    }
}

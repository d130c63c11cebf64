//! Generated-input tests for the registry operations.
//!
//! Keys and values come from a tiny domain so duplicates and missing fields
//! show up in most cases.

use super::palette::palette_color;
use super::{add_option, initialize, lookup, toggle, DedupBy, KeyingConvention, OptionItem, Scalar};
use proptest::prelude::*;
use std::collections::HashSet;

fn scalar() -> impl Strategy<Value = Scalar> {
    prop_oneof![
        (0i64..5).prop_map(Scalar::Number),
        "[a-d]".prop_map(Scalar::Text),
    ]
}

fn option_item() -> impl Strategy<Value = OptionItem> {
    (
        proptest::option::of(scalar()),
        proptest::option::of(scalar()),
        proptest::option::of(prop_oneof![Just(String::new()), "#[0-9A-F]{6}"]),
    )
        .prop_map(|(key, value, color)| OptionItem {
            text: key.as_ref().map(|k| k.to_string()).unwrap_or_default(),
            key,
            value,
            color,
        })
}

fn option_set() -> impl Strategy<Value = Vec<OptionItem>> {
    prop::collection::vec(option_item(), 0..10)
}

fn dedup_by() -> impl Strategy<Value = DedupBy> {
    prop_oneof![Just(DedupBy::Key), Just(DedupBy::Value)]
}

/// Selection without repeated values, in generated order
fn selection() -> impl Strategy<Value = Vec<Scalar>> {
    prop::collection::vec(scalar(), 0..8).prop_map(|values| {
        let mut seen = HashSet::new();
        values.into_iter().filter(|v| seen.insert(v.clone())).collect()
    })
}

fn identity(item: &OptionItem, by: DedupBy) -> Option<&Scalar> {
    match by {
        DedupBy::Key => item.key.as_ref(),
        DedupBy::Value => item.value.as_ref(),
    }
}

proptest! {
    #[test]
    fn built_in_options_lead_the_merged_set(
        built_in in option_set(),
        external in option_set(),
        by in dedup_by(),
    ) {
        let merged = initialize(&built_in, &external, by);
        let prefix = initialize(&built_in, &[], by);
        prop_assert!(merged.len() >= prefix.len());
        prop_assert_eq!(&merged[..prefix.len()], &prefix[..]);
    }

    #[test]
    fn merged_identities_are_unique_and_missing_ones_pass(
        built_in in option_set(),
        external in option_set(),
        by in dedup_by(),
    ) {
        let merged = initialize(&built_in, &external, by);

        let mut seen = HashSet::new();
        for item in merged.iter().filter_map(|o| identity(o, by)) {
            prop_assert!(seen.insert(item.clone()), "duplicate identity {:?}", item);
        }

        let missing_in = built_in
            .iter()
            .chain(external.iter())
            .filter(|o| identity(o, by).is_none())
            .count();
        let missing_out = merged.iter().filter(|o| identity(o, by).is_none()).count();
        prop_assert_eq!(missing_in, missing_out);
        prop_assert!(merged.iter().all(|o| o.has_color()));
    }

    #[test]
    fn toggle_twice_restores_the_selection(selected in selection(), value in scalar()) {
        let twice = toggle(&toggle(&selected, &value), &value);
        if selected.contains(&value) {
            // removed then appended: same members, value moved last
            let mut expected: Vec<Scalar> =
                selected.iter().filter(|v| **v != value).cloned().collect();
            expected.push(value.clone());
            prop_assert_eq!(twice, expected);
        } else {
            prop_assert_eq!(twice, selected);
        }
    }

    #[test]
    fn toggle_is_symmetric_difference(selected in selection(), value in scalar()) {
        let once = toggle(&selected, &value);
        prop_assert_eq!(once.contains(&value), !selected.contains(&value));
        for other in selected.iter().filter(|v| **v != value) {
            prop_assert!(once.contains(other));
        }
    }

    #[test]
    fn lookup_finds_first_match_or_nothing(options in option_set(), value in scalar()) {
        let first = options.iter().position(|o| o.value.as_ref() == Some(&value));
        match (lookup(&options, &value), first) {
            (None, None) => {}
            (Some(found), Some(index)) => prop_assert!(std::ptr::eq(found, &options[index])),
            (found, index) => prop_assert!(false, "lookup {:?} vs position {:?}", found, index),
        }
    }

    #[test]
    fn blank_label_adds_nothing(current in option_set(), label in "[ \t\n]{0,5}") {
        for keying in [KeyingConvention::Label, KeyingConvention::Sequential] {
            let (next, created) = add_option(&current, &label, keying);
            prop_assert_eq!(&next, &current);
            prop_assert!(created.is_none());
        }
    }

    #[test]
    fn added_option_is_appended_with_cycled_color(
        current in option_set(),
        label in "[a-z]{1,6}",
    ) {
        let (next, created) = add_option(&current, &label, KeyingConvention::Label);
        let created = created.unwrap();
        prop_assert_eq!(next.len(), current.len() + 1);
        prop_assert_eq!(created.color.as_deref(), Some(palette_color(current.len())));
        prop_assert_eq!(next.last(), Some(&created));
        prop_assert_eq!(created.value, Some(Scalar::Text(label)));
    }

    #[test]
    fn sequential_key_is_never_taken(current in option_set(), label in "[a-z]{1,6}") {
        let (_, created) = add_option(&current, &label, KeyingConvention::Sequential);
        let key = created.unwrap().key;
        prop_assert!(current.iter().all(|o| o.key != key));
    }
}

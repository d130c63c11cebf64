use super::option::{OptionItem, Scalar};
use super::palette::palette_color;
use std::collections::HashSet;

/// Field that identifies an option when merging sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DedupBy {
    #[default]
    Key,
    Value,
}

impl DedupBy {
    fn identity<'a>(&self, item: &'a OptionItem) -> Option<&'a Scalar> {
        match self {
            DedupBy::Key => item.key.as_ref(),
            DedupBy::Value => item.value.as_ref(),
        }
    }
}

/// How keys are assigned to options created from free text.
/// A registry uses exactly one convention for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyingConvention {
    /// key = value = label
    #[default]
    Label,
    /// key = first free integer from option count + 1, value = label
    Sequential,
}

/// Fills missing colors from the palette by position within `items`
fn with_fallback_colors(items: &[OptionItem]) -> impl Iterator<Item = OptionItem> + '_ {
    items.iter().enumerate().map(|(index, item)| {
        let mut item = item.clone();
        if !item.has_color() {
            item.color = Some(palette_color(index).to_string());
        }
        item
    })
}

/// Keeps the first occurrence of every identity, preserving order.
/// Entries without the identity field are never dropped.
fn dedup(items: impl IntoIterator<Item = OptionItem>, by: DedupBy) -> Vec<OptionItem> {
    let mut seen: HashSet<Scalar> = HashSet::new();
    items
        .into_iter()
        .filter(|item| match by.identity(item) {
            Some(identity) => seen.insert(identity.clone()),
            None => true,
        })
        .collect()
}

/// Smallest integer key >= `current.len() + 1` not already taken
fn next_sequential_key(current: &[OptionItem]) -> i64 {
    let taken: HashSet<i64> = current
        .iter()
        .filter_map(|o| match o.key {
            Some(Scalar::Number(n)) => Some(n),
            _ => None,
        })
        .collect();
    let mut key = current.len() as i64 + 1;
    while taken.contains(&key) {
        key += 1;
    }
    key
}

/// Built-in options followed by external ones, colored and deduplicated.
///
/// Fallback colors are indexed by position inside each source sequence, so
/// the first external option without a color always gets `palette[0]`.
pub fn initialize(built_in: &[OptionItem], external: &[OptionItem], by: DedupBy) -> Vec<OptionItem> {
    dedup(
        with_fallback_colors(built_in).chain(with_fallback_colors(external)),
        by,
    )
}

/// Appends an option built from `label` to `current`.
///
/// Blank labels leave the set untouched and create nothing.
pub fn add_option(
    current: &[OptionItem],
    label: &str,
    keying: KeyingConvention,
) -> (Vec<OptionItem>, Option<OptionItem>) {
    if label.trim().is_empty() {
        return (current.to_vec(), None);
    }

    let key = match keying {
        KeyingConvention::Label => Scalar::Text(label.to_string()),
        KeyingConvention::Sequential => Scalar::Number(next_sequential_key(current)),
    };
    let created = OptionItem {
        key: Some(key),
        text: label.to_string(),
        value: Some(Scalar::Text(label.to_string())),
        color: Some(palette_color(current.len()).to_string()),
    };

    let mut next = current.to_vec();
    next.push(created.clone());
    (next, Some(created))
}

/// First option carrying `value`
pub fn lookup<'a>(options: &'a [OptionItem], value: &Scalar) -> Option<&'a OptionItem> {
    options.iter().find(|o| o.value.as_ref() == Some(value))
}

/// Removes `value` if selected, appends it otherwise
pub fn toggle(selected: &[Scalar], value: &Scalar) -> Vec<Scalar> {
    if selected.contains(value) {
        selected.iter().filter(|v| *v != value).cloned().collect()
    } else {
        let mut next = selected.to_vec();
        next.push(value.clone());
        next
    }
}

/// Authoritative option list of one widget instance
#[derive(Debug, Clone)]
pub struct OptionRegistry {
    built_in: Vec<OptionItem>,
    created: Vec<OptionItem>,
    options: Vec<OptionItem>,
    dedup: DedupBy,
    keying: KeyingConvention,
}

impl OptionRegistry {
    pub fn new(built_in: Vec<OptionItem>, external: &[OptionItem], dedup: DedupBy) -> Self {
        let options = initialize(&built_in, external, dedup);
        Self {
            built_in,
            created: Vec::new(),
            options,
            dedup,
            keying: KeyingConvention::default(),
        }
    }

    pub fn with_keying(mut self, keying: KeyingConvention) -> Self {
        self.keying = keying;
        self
    }

    pub fn options(&self) -> &[OptionItem] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Re-derives the set from the latest external input.
    /// Options created through this registry survive even if the host has
    /// not echoed them back yet.
    pub fn refresh(&mut self, external: &[OptionItem]) {
        let mut next = initialize(&self.built_in, external, self.dedup);
        for created in &self.created {
            let identity = self.dedup.identity(created);
            if !next.iter().any(|o| self.dedup.identity(o) == identity) {
                next.push(created.clone());
            }
        }
        self.options = next;
    }

    /// Creates an option from free text; `None` for blank labels
    pub fn add_option(&mut self, label: &str) -> Option<OptionItem> {
        let (next, created) = add_option(&self.options, label, self.keying);
        let created = created?;
        self.options = next;
        self.created.push(created.clone());
        Some(created)
    }

    pub fn lookup(&self, value: &Scalar) -> Option<&OptionItem> {
        lookup(&self.options, value)
    }
}

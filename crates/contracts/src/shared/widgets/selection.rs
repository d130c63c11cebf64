use super::dropdown::DropdownState;
use super::props::{Outbound, PropsUpdate};
use super::variants::{condition_options, freezing_option, group_options, loading_sentinel, FREEZING};
use crate::shared::option_registry::{
    toggle, DedupBy, KeyingConvention, OptionItem, OptionRegistry, Scalar, NEUTRAL_SWATCH,
};

/// Text and swatch color shown on the closed control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlLabel {
    pub text: String,
    pub color: String,
}

/// State of one single-select widget instance
#[derive(Debug, Clone)]
pub struct SingleSelect {
    registry: OptionRegistry,
    dropdown: DropdownState,
    value: Option<Scalar>,
    current_color: Option<String>,
    pending_label: String,
    placeholder: String,
    sentinel: Option<Scalar>,
    emits_color: bool,
    allows_creation: bool,
}

impl SingleSelect {
    pub fn new(registry: OptionRegistry, placeholder: impl Into<String>) -> Self {
        Self {
            registry,
            dropdown: DropdownState::new(),
            value: None,
            current_color: None,
            pending_label: String::new(),
            placeholder: placeholder.into(),
            sentinel: None,
            emits_color: false,
            allows_creation: false,
        }
    }

    /// Group 1..4 plus `additionalOptions`; reports `{value, currentColor}`
    /// and is frozen while `value` is the loading sentinel.
    pub fn group(additional: &[OptionItem], value: Option<Scalar>) -> Self {
        let mut widget = Self::new(
            OptionRegistry::new(group_options(), additional, DedupBy::Key),
            "Select group",
        );
        widget.sentinel = Some(loading_sentinel());
        widget.emits_color = true;
        widget.set_value(value);
        widget
    }

    /// Host-supplied events plus free-text creation
    pub fn event_selection(options: &[OptionItem], keying: KeyingConvention) -> Self {
        let mut widget = Self::new(
            OptionRegistry::new(Vec::new(), options, DedupBy::Key).with_keying(keying),
            "No event selected",
        );
        widget.allows_creation = true;
        widget
    }

    /// `freezing` always first, host events after it
    pub fn event_render(options: &[OptionItem]) -> Self {
        let mut widget = Self::new(
            OptionRegistry::new(vec![freezing_option()], options, DedupBy::Value),
            "Freezing",
        );
        widget.value = Some(Scalar::text(FREEZING));
        widget
    }

    pub fn value(&self) -> Option<&Scalar> {
        self.value.as_ref()
    }

    pub fn dropdown(&self) -> &DropdownState {
        &self.dropdown
    }

    pub fn pending_label(&self) -> &str {
        &self.pending_label
    }

    pub fn allows_creation(&self) -> bool {
        self.allows_creation
    }

    /// Inbound `value` from the host
    pub fn set_value(&mut self, value: Option<Scalar>) {
        let frozen = matches!((&value, &self.sentinel), (Some(v), Some(s)) if v == s);
        self.dropdown.set_disabled(frozen);
        self.value = value;
    }

    /// Inbound `currentColor` from the host
    pub fn set_current_color(&mut self, color: Option<String>) {
        self.current_color = color.filter(|c| !c.is_empty());
    }

    /// Inbound option list changed
    pub fn refresh(&mut self, external: &[OptionItem]) {
        self.registry.refresh(external);
    }

    /// Options offered in the open panel; the sentinel is never offered
    pub fn selectable_options(&self) -> Vec<&OptionItem> {
        self.registry
            .options()
            .iter()
            .filter(|o| self.sentinel.is_none() || o.value != self.sentinel)
            .collect()
    }

    pub fn click_control(&mut self) -> bool {
        self.dropdown.activate()
    }

    /// Picks `value` from the panel and closes it
    pub fn choose(&mut self, value: Scalar) -> Option<PropsUpdate> {
        if self.dropdown.is_disabled() || self.sentinel.as_ref() == Some(&value) {
            return None;
        }
        self.dropdown.close();

        let update = if self.emits_color {
            let color = self
                .registry
                .lookup(&value)
                .and_then(|o| o.color.clone())
                .unwrap_or_else(|| NEUTRAL_SWATCH.to_string());
            self.current_color = Some(color.clone());
            PropsUpdate::Group {
                value: value.clone(),
                current_color: color,
            }
        } else {
            PropsUpdate::Value {
                value: value.clone(),
            }
        };
        self.value = Some(value);
        Some(update)
    }

    pub fn set_pending_label(&mut self, label: impl Into<String>) {
        self.pending_label = label.into();
    }

    /// Turns the pending text into a new option, selects it and hands the
    /// widened option list to the host. Blank text changes nothing.
    pub fn submit_pending(&mut self) -> Outbound {
        if !self.allows_creation {
            return Outbound::default();
        }
        let Some(created) = self.registry.add_option(&self.pending_label) else {
            return Outbound::default();
        };
        self.pending_label.clear();

        let value = created
            .value
            .unwrap_or_else(|| Scalar::Text(created.text.clone()));
        self.value = Some(value.clone());
        Outbound {
            props: Some(PropsUpdate::Value { value }),
            options: Some(self.registry.options().to_vec()),
        }
    }

    /// Label of the closed control, falling back to the placeholder
    pub fn control_label(&self) -> ControlLabel {
        let found = self.value.as_ref().and_then(|v| self.registry.lookup(v));
        match found {
            Some(option) => {
                let color = self
                    .current_color
                    .clone()
                    .filter(|_| self.emits_color)
                    .or_else(|| option.color.clone())
                    .unwrap_or_else(|| NEUTRAL_SWATCH.to_string());
                let text = if option.text.is_empty() {
                    self.value.as_ref().map(|v| v.to_string()).unwrap_or_default()
                } else {
                    option.text.clone()
                };
                ControlLabel { text, color }
            }
            None => ControlLabel {
                text: self.placeholder.clone(),
                color: NEUTRAL_SWATCH.to_string(),
            },
        }
    }
}

/// State of one multi-select widget instance
#[derive(Debug, Clone)]
pub struct MultiSelect {
    registry: OptionRegistry,
    dropdown: DropdownState,
    selected: Vec<Scalar>,
}

impl MultiSelect {
    pub fn new(registry: OptionRegistry, selected: Vec<Scalar>) -> Self {
        Self {
            registry,
            dropdown: DropdownState::new(),
            selected,
        }
    }

    /// Recent/Remote/Control plus host groups, deduplicated by key
    pub fn group_selection(options: &[OptionItem], selected: Vec<Scalar>) -> Self {
        Self::new(
            OptionRegistry::new(condition_options(), options, DedupBy::Key),
            selected,
        )
    }

    pub fn options(&self) -> &[OptionItem] {
        self.registry.options()
    }

    pub fn selected(&self) -> &[Scalar] {
        &self.selected
    }

    pub fn dropdown(&self) -> &DropdownState {
        &self.dropdown
    }

    pub fn is_selected(&self, value: &Scalar) -> bool {
        self.selected.contains(value)
    }

    pub fn set_value(&mut self, selected: Vec<Scalar>) {
        self.selected = selected;
    }

    pub fn refresh(&mut self, external: &[OptionItem]) {
        self.registry.refresh(external);
    }

    pub fn click_control(&mut self) -> bool {
        self.dropdown.activate()
    }

    /// Flips `value` in the selection; the panel stays as it is
    pub fn toggle(&mut self, value: &Scalar) -> PropsUpdate {
        self.selected = toggle(&self.selected, value);
        PropsUpdate::Values {
            value: self.selected.clone(),
        }
    }

    pub fn header_label(&self) -> &'static str {
        if self.dropdown.is_open() {
            "Select Options"
        } else {
            "Selected Groups"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::option_registry::PASTEL_COLORS;

    #[test]
    fn test_group_choose_reports_color_and_closes() {
        let mut widget = SingleSelect::group(&[], Some(Scalar::Number(1)));
        assert!(widget.click_control());
        assert!(widget.dropdown().is_open());

        let update = widget.choose(Scalar::Number(3)).unwrap();
        assert_eq!(
            update,
            PropsUpdate::Group {
                value: Scalar::Number(3),
                current_color: "green".into()
            }
        );
        assert!(!widget.dropdown().is_open());
        assert_eq!(widget.control_label().text, "Group 3");
    }

    #[test]
    fn test_group_loading_sentinel_freezes_control() {
        let additional = vec![OptionItem::labelled("loading"), OptionItem::labelled("Group X")];
        let mut widget = SingleSelect::group(&additional, Some(loading_sentinel()));
        assert!(!widget.click_control());
        assert!(!widget.dropdown().is_open());
        assert!(widget.choose(Scalar::Number(2)).is_none());
        assert!(widget
            .selectable_options()
            .iter()
            .all(|o| o.value != Some(loading_sentinel())));
        assert_eq!(widget.selectable_options().len(), 5);

        widget.set_value(Some(Scalar::Number(2)));
        assert!(widget.click_control());
        assert!(widget.choose(loading_sentinel()).is_none());
        assert!(widget.dropdown().is_open());
    }

    #[test]
    fn test_group_inbound_current_color_overrides_swatch() {
        let mut widget = SingleSelect::group(&[], Some(Scalar::Number(2)));
        assert_eq!(widget.control_label().color, "blue");
        widget.set_current_color(Some("#123456".into()));
        assert_eq!(widget.control_label().color, "#123456");
    }

    #[test]
    fn test_unknown_value_falls_back_to_placeholder() {
        let mut widget = SingleSelect::event_selection(&[], KeyingConvention::Label);
        widget.set_value(Some(Scalar::text("ghost")));
        assert_eq!(
            widget.control_label(),
            ControlLabel {
                text: "No event selected".into(),
                color: NEUTRAL_SWATCH.into()
            }
        );
    }

    #[test]
    fn test_event_selection_creates_and_selects() {
        let mut widget =
            SingleSelect::event_selection(&[OptionItem::labelled("shock")], KeyingConvention::Label);
        widget.set_pending_label("   ");
        assert!(widget.submit_pending().is_empty());
        assert_eq!(widget.value(), None);
        assert_eq!(widget.pending_label(), "   ");

        widget.set_pending_label("tone");
        let out = widget.submit_pending();
        assert_eq!(out.props, Some(PropsUpdate::Value { value: Scalar::text("tone") }));
        let options = out.options.unwrap();
        assert_eq!(options.len(), 2);
        assert_eq!(options[1].color.as_deref(), Some(PASTEL_COLORS[1]));
        assert_eq!(widget.value(), Some(&Scalar::text("tone")));
        assert_eq!(widget.pending_label(), "");

        // host has not echoed yet: the created option survives a refresh
        widget.refresh(&[OptionItem::labelled("shock")]);
        assert_eq!(widget.selectable_options().len(), 2);
    }

    #[test]
    fn test_event_render_keeps_freezing_first() {
        let external = vec![OptionItem::labelled("shock"), OptionItem::labelled("freezing")];
        let mut widget = SingleSelect::event_render(&external);
        let values: Vec<_> = widget
            .selectable_options()
            .iter()
            .filter_map(|o| o.value.clone())
            .collect();
        assert_eq!(values, vec![Scalar::text("freezing"), Scalar::text("shock")]);
        assert_eq!(widget.control_label().color, "lightblue");

        // creation is not offered by this variant
        widget.set_pending_label("tone");
        assert!(widget.submit_pending().is_empty());
    }

    #[test]
    fn test_multi_select_toggle_keeps_panel_open() {
        let mut widget = MultiSelect::group_selection(&[], Vec::new());
        widget.click_control();
        assert_eq!(widget.header_label(), "Select Options");

        let recent = Scalar::text("Recent");
        widget.toggle(&recent);
        assert!(widget.is_selected(&recent));
        assert!(widget.dropdown().is_open());

        let update = widget.toggle(&recent);
        assert_eq!(update, PropsUpdate::Values { value: Vec::new() });
        assert!(widget.dropdown().is_open());

        widget.click_control();
        assert_eq!(widget.header_label(), "Selected Groups");
    }

    #[test]
    fn test_multi_select_merges_host_groups() {
        let host = vec![
            OptionItem::labelled("Lab").with_color("#000000"),
            OptionItem::labelled("Control").with_color("#ffffff"),
        ];
        let widget = MultiSelect::group_selection(&host, vec![Scalar::text("Lab")]);
        assert_eq!(widget.options().len(), 4);
        assert_eq!(widget.options()[2].color.as_deref(), Some(PASTEL_COLORS[2]));
        assert_eq!(widget.options()[3].color.as_deref(), Some("#000000"));
    }
}

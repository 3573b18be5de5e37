// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Merged element properties: the sole channel from behaviors to the host.

use alloc::string::String;
use hashbrown::HashMap;

use crate::callback::Callback;
use crate::event::Event;

/// Accessibility role of an element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    /// One option in a single-selection group.
    Radio,
    /// Container of radio options.
    RadioGroup,
}

impl Role {
    /// The ARIA role token.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Radio => "radio",
            Self::RadioGroup => "radiogroup",
        }
    }
}

/// The `type` of a native input element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InputType {
    /// `type="radio"`.
    Radio,
}

impl InputType {
    /// The attribute token.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Radio => "radio",
        }
    }
}

/// Properties for one focusable element, produced by props hooks for a single render pass.
///
/// Well-known properties are typed fields. Everything else (labels, class names,
/// `aria-orientation`, …) travels in [`ElementProps::attrs`] by attribute name.
/// `V` is the type of the element's `value`.
#[derive(Clone, Debug)]
pub struct ElementProps<V = ()> {
    /// Accessibility role.
    pub role: Option<Role>,
    /// Native input type.
    pub input_type: Option<InputType>,
    /// `0` for the element that owns the tab stop, `-1` for the others.
    pub tab_index: Option<i32>,
    /// Native `disabled`.
    pub disabled: Option<bool>,
    /// `aria-disabled`.
    pub aria_disabled: Option<bool>,
    /// Native `checked`.
    pub checked: Option<bool>,
    /// `aria-checked`.
    pub aria_checked: Option<bool>,
    /// The element's value.
    pub value: Option<V>,
    /// Pass-through attributes by name.
    pub attrs: HashMap<String, String>,
    /// Pointer activation.
    pub on_click: Option<Callback>,
    /// Native checked-state change.
    pub on_change: Option<Callback>,
    /// Key press.
    pub on_key_down: Option<Callback>,
    /// Focus arriving.
    pub on_focus: Option<Callback>,
}

impl<V> Default for ElementProps<V> {
    fn default() -> Self {
        Self {
            role: None,
            input_type: None,
            tab_index: None,
            disabled: None,
            aria_disabled: None,
            checked: None,
            aria_checked: None,
            value: None,
            attrs: HashMap::new(),
            on_click: None,
            on_change: None,
            on_key_down: None,
            on_focus: None,
        }
    }
}

impl<V> ElementProps<V> {
    /// Empty properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the role.
    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Set the tab index.
    #[must_use]
    pub fn with_tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = Some(tab_index);
        self
    }

    /// Set native and ARIA checked state together.
    #[must_use]
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self.aria_checked = Some(checked);
        self
    }

    /// Set the value.
    #[must_use]
    pub fn with_value(mut self, value: V) -> Self {
        self.value = Some(value);
        self
    }

    /// Set a pass-through attribute.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Set the click callback.
    #[must_use]
    pub fn with_on_click(mut self, f: impl Fn(&Event) + 'static) -> Self {
        self.on_click = Some(Callback::new(f));
        self
    }

    /// Set the change callback.
    #[must_use]
    pub fn with_on_change(mut self, f: impl Fn(&Event) + 'static) -> Self {
        self.on_change = Some(Callback::new(f));
        self
    }

    /// Set the key-down callback.
    #[must_use]
    pub fn with_on_key_down(mut self, f: impl Fn(&Event) + 'static) -> Self {
        self.on_key_down = Some(Callback::new(f));
        self
    }

    /// Set the focus callback.
    #[must_use]
    pub fn with_on_focus(mut self, f: impl Fn(&Event) + 'static) -> Self {
        self.on_focus = Some(Callback::new(f));
        self
    }

    /// Look up a pass-through attribute.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Whether this element currently owns the roving tab stop.
    pub fn is_tab_stop(&self) -> bool {
        self.tab_index == Some(0)
    }

    /// Whether this element reports itself as checked.
    pub fn is_checked(&self) -> bool {
        self.checked == Some(true)
    }

    /// Lay `over` on top of `self`.
    ///
    /// Fields that `over` sets replace those in `self`; attributes are merged by
    /// name with `over` winning. Callbacks are chained so both fire, `self`'s first.
    #[must_use]
    pub fn merge(mut self, over: Self) -> Self {
        self.role = over.role.or(self.role);
        self.input_type = over.input_type.or(self.input_type);
        self.tab_index = over.tab_index.or(self.tab_index);
        self.disabled = over.disabled.or(self.disabled);
        self.aria_disabled = over.aria_disabled.or(self.aria_disabled);
        self.checked = over.checked.or(self.checked);
        self.aria_checked = over.aria_checked.or(self.aria_checked);
        if over.value.is_some() {
            self.value = over.value;
        }
        self.attrs.extend(over.attrs);
        self.on_click = Callback::chain(self.on_click, over.on_click);
        self.on_change = Callback::chain(self.on_change, over.on_change);
        self.on_key_down = Callback::chain(self.on_key_down, over.on_key_down);
        self.on_focus = Callback::chain(self.on_focus, over.on_focus);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::TargetKind;
    use alloc::rc::Rc;
    use core::cell::Cell;

    #[test]
    fn merge_prefers_later_scalars_and_keeps_earlier_when_unset() {
        let base = ElementProps::new()
            .with_role(Role::Radio)
            .with_checked(true)
            .with_value("a");
        let over = ElementProps::new().with_tab_index(0).with_value("b");

        let merged = base.merge(over);
        assert_eq!(merged.role, Some(Role::Radio));
        assert_eq!(merged.tab_index, Some(0));
        assert_eq!(merged.value, Some("b"));
        assert!(merged.is_checked());
        assert!(merged.is_tab_stop());
    }

    #[test]
    fn merge_overrides_attributes_by_name() {
        let base: ElementProps = ElementProps::new()
            .with_attr("aria-label", "old")
            .with_attr("class", "radio");
        let over = ElementProps::new().with_attr("aria-label", "new");

        let merged = base.merge(over);
        assert_eq!(merged.attr("aria-label"), Some("new"));
        assert_eq!(merged.attr("class"), Some("radio"));
        assert_eq!(merged.attr("id"), None);
    }

    #[test]
    fn merge_chains_callbacks_base_first() {
        let order = Rc::new(Cell::new(0_u32));
        let (a, b) = (order.clone(), order.clone());
        let base: ElementProps = ElementProps::new().with_on_focus(move |_| a.set(a.get() * 10 + 1));
        let over = ElementProps::new().with_on_focus(move |_| b.set(b.get() * 10 + 2));

        let merged = base.merge(over);
        merged
            .on_focus
            .as_ref()
            .unwrap()
            .call(&Event::focus(TargetKind::Element));
        assert_eq!(order.get(), 12);
    }

    #[test]
    fn role_and_type_tokens() {
        assert_eq!(Role::Radio.as_str(), "radio");
        assert_eq!(Role::RadioGroup.as_str(), "radiogroup");
        assert_eq!(InputType::Radio.as_str(), "radio");
    }
}

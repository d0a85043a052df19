use std::collections::BTreeMap;

/// Style boundary of a DOM-like element.
pub trait StyleTarget {
    /// Current computed value of a property, `None` when the engine reports nothing.
    fn computed_property(&self, name: &str) -> Option<String>;

    /// Whether the element exposes a writable inline style.
    fn has_inline_style(&self) -> bool;

    /// Assign an inline style property. Last write wins.
    fn set_style_property(&mut self, name: &str, value: &str);
}

/// In-memory element with separate computed and inline style tables.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryElement {
    computed: BTreeMap<String, String>,
    inline: Option<BTreeMap<String, String>>,
}

impl MemoryElement {
    /// Element with an empty, writable inline style.
    pub fn new() -> Self {
        Self {
            computed: BTreeMap::new(),
            inline: Some(BTreeMap::new()),
        }
    }

    /// Element without inline style (e.g. a non-styled node); writes are dropped.
    pub fn without_style() -> Self {
        Self::default()
    }

    /// Builder-style computed value.
    pub fn with_computed(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.computed.insert(name.into(), value.into());
        self
    }

    /// Inline style value previously written under `name`.
    pub fn inline_property(&self, name: &str) -> Option<&str> {
        self.inline.as_ref()?.get(name).map(String::as_str)
    }

    /// All inline style entries in name order.
    pub fn inline_properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inline
            .iter()
            .flatten()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl StyleTarget for MemoryElement {
    fn computed_property(&self, name: &str) -> Option<String> {
        self.computed.get(name).cloned()
    }

    fn has_inline_style(&self) -> bool {
        self.inline.is_some()
    }

    fn set_style_property(&mut self, name: &str, value: &str) {
        if let Some(inline) = self.inline.as_mut() {
            inline.insert(name.to_string(), value.to_string());
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plugin/style.rs"]
mod tests;

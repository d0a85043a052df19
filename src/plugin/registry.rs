use std::collections::BTreeMap;

use crate::foundation::error::Matrix3dResult;
use crate::plugin::{config::PluginConfig, style::StyleTarget};

/// Lifecycle hooks a tweening host calls on a property plugin.
///
/// Hooks are associated functions: plugins carry no per-instance state, everything they need is
/// passed in by the host.
pub trait TweenPlugin {
    /// Name used in registries and logs.
    const NAME: &'static str;
    /// Hosts run higher priorities first.
    const PRIORITY: i32;
    /// Properties this plugin takes over.
    const PROPERTIES: &'static [&'static str];

    /// Value the host stores per tweened property.
    type Value;

    /// Produce the starting value for `prop` when a tween starts.
    fn init(
        target: &dyn StyleTarget,
        prop: &str,
        config: &PluginConfig,
    ) -> Matrix3dResult<Self::Value>;

    /// Called when the host adds a step. Reserved.
    fn step(_prop: &str, _start: &Self::Value, _end: &Self::Value) {}

    /// Advance `prop` to `ratio` and return the value the host keeps for the next tick.
    fn tween(
        target: &mut dyn StyleTarget,
        prop: &str,
        value: Self::Value,
        start: &Self::Value,
        end: &Self::Value,
        ratio: f64,
        config: &PluginConfig,
    ) -> Self::Value;
}

/// A plugin entry as recorded by [`PluginRegistry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstalledPlugin {
    /// [`TweenPlugin::NAME`]
    pub name: &'static str,
    /// [`TweenPlugin::PRIORITY`]
    pub priority: i32,
}

/// Host-side table of installed plugins per property.
#[derive(Clone, Debug, Default)]
pub struct PluginRegistry {
    by_property: BTreeMap<String, Vec<InstalledPlugin>>,
}

impl PluginRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `P` for each of its properties. Re-installing is a no-op.
    pub fn install_plugin<P: TweenPlugin>(&mut self) {
        let entry = InstalledPlugin {
            name: P::NAME,
            priority: P::PRIORITY,
        };
        for prop in P::PROPERTIES {
            let plugins = self.by_property.entry((*prop).to_string()).or_default();
            if plugins.iter().any(|p| p.name == entry.name) {
                continue;
            }
            // Stable: equal priorities keep install order.
            let at = plugins.partition_point(|p| p.priority >= entry.priority);
            plugins.insert(at, entry);
            tracing::debug!(
                plugin = entry.name,
                prop = *prop,
                priority = entry.priority,
                "installed"
            );
        }
    }

    /// Plugins installed for `prop`, highest priority first.
    pub fn plugins_for(&self, prop: &str) -> &[InstalledPlugin] {
        self.by_property.get(prop).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Return `true` when any plugin handles `prop`.
    pub fn handles(&self, prop: &str) -> bool {
        !self.plugins_for(prop).is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plugin/registry.rs"]
mod tests;

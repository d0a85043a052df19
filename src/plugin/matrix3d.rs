use crate::codec::{format::serialize_transform, lerp::interpolate, parse::parse_transform};
use crate::foundation::{
    core::Matrix4,
    error::{Matrix3dError, Matrix3dResult},
};
use crate::plugin::{
    config::{PluginConfig, VendorPrefix},
    registry::{PluginRegistry, TweenPlugin},
    style::StyleTarget,
};

/// Property handled by [`Matrix3dPlugin`].
pub const TRANSFORM: &str = "transform";

/// Tween plugin for the CSS `transform` property in `matrix3d` form.
///
/// Static-only: the type has no values, hooks are associated functions.
#[derive(Debug)]
pub enum Matrix3dPlugin {}

impl Matrix3dPlugin {
    /// Always fails; the plugin is used through its associated functions.
    pub fn new() -> Matrix3dResult<Self> {
        Err(Matrix3dError::instantiation(
            "Matrix3dPlugin cannot be instantiated",
        ))
    }

    /// Register the plugin for `transform` in `registry`.
    pub fn install(registry: &mut PluginRegistry) {
        registry.install_plugin::<Self>();
    }
}

impl TweenPlugin for Matrix3dPlugin {
    const NAME: &'static str = "Matrix3dPlugin";
    // Runs after every other plugin.
    const PRIORITY: i32 = -100;
    const PROPERTIES: &'static [&'static str] = &[TRANSFORM];

    type Value = Matrix4;

    #[tracing::instrument(skip(target, config), fields(prefix = config.vendor_prefix.css()))]
    fn init(
        target: &dyn StyleTarget,
        prop: &str,
        config: &PluginConfig,
    ) -> Matrix3dResult<Matrix4> {
        let prefix = config.vendor_prefix;
        let computed = match prefix {
            VendorPrefix::None => target.computed_property(prop),
            _ => target
                .computed_property(&prefix.property(prop))
                .or_else(|| target.computed_property(prop)),
        };
        parse_transform(computed.as_deref())
    }

    fn tween(
        target: &mut dyn StyleTarget,
        prop: &str,
        value: Matrix4,
        start: &Matrix4,
        end: &Matrix4,
        ratio: f64,
        config: &PluginConfig,
    ) -> Matrix4 {
        if prop != TRANSFORM || !target.has_inline_style() {
            return value;
        }

        let next = interpolate(start, end, ratio);
        let css = serialize_transform(&next, &config.format);
        for name in config.vendor_prefix.property_names(prop) {
            target.set_style_property(&name, &css);
        }
        tracing::trace!(ratio, transform = %css, "applied");
        next
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plugin/matrix3d.rs"]
mod tests;

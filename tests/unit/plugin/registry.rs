use super::*;
use crate::foundation::core::Matrix4;

enum EarlyPlugin {}

impl TweenPlugin for EarlyPlugin {
    const NAME: &'static str = "EarlyPlugin";
    const PRIORITY: i32 = 10;
    const PROPERTIES: &'static [&'static str] = &["transform", "opacity"];

    type Value = Matrix4;

    fn init(
        _target: &dyn StyleTarget,
        _prop: &str,
        _config: &PluginConfig,
    ) -> Matrix3dResult<Matrix4> {
        Ok(Matrix4::IDENTITY)
    }

    fn tween(
        _target: &mut dyn StyleTarget,
        _prop: &str,
        value: Matrix4,
        _start: &Matrix4,
        _end: &Matrix4,
        _ratio: f64,
        _config: &PluginConfig,
    ) -> Matrix4 {
        value
    }
}

enum LatePlugin {}

impl TweenPlugin for LatePlugin {
    const NAME: &'static str = "LatePlugin";
    const PRIORITY: i32 = -5;
    const PROPERTIES: &'static [&'static str] = &["transform"];

    type Value = f64;

    fn init(
        _target: &dyn StyleTarget,
        _prop: &str,
        _config: &PluginConfig,
    ) -> Matrix3dResult<f64> {
        Ok(0.0)
    }

    fn tween(
        _target: &mut dyn StyleTarget,
        _prop: &str,
        value: f64,
        _start: &f64,
        _end: &f64,
        _ratio: f64,
        _config: &PluginConfig,
    ) -> f64 {
        value
    }
}

#[test]
fn plugins_are_ordered_by_descending_priority() {
    let mut reg = PluginRegistry::new();
    reg.install_plugin::<LatePlugin>();
    reg.install_plugin::<EarlyPlugin>();

    let names: Vec<_> = reg.plugins_for("transform").iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["EarlyPlugin", "LatePlugin"]);
    assert_eq!(reg.plugins_for("opacity").len(), 1);
}

#[test]
fn reinstall_is_a_noop() {
    let mut reg = PluginRegistry::new();
    reg.install_plugin::<EarlyPlugin>();
    reg.install_plugin::<EarlyPlugin>();
    assert_eq!(reg.plugins_for("transform").len(), 1);
}

#[test]
fn unknown_property_has_no_plugins() {
    let reg = PluginRegistry::new();
    assert!(reg.plugins_for("left").is_empty());
    assert!(!reg.handles("left"));
}

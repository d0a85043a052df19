use super::*;
use std::cell::RefCell;

use crate::plugin::style::MemoryElement;

/// Records every computed-style lookup.
struct ReadLog {
    inner: MemoryElement,
    reads: RefCell<Vec<String>>,
}

impl StyleTarget for ReadLog {
    fn computed_property(&self, name: &str) -> Option<String> {
        self.reads.borrow_mut().push(name.to_string());
        self.inner.computed_property(name)
    }

    fn has_inline_style(&self) -> bool {
        self.inner.has_inline_style()
    }

    fn set_style_property(&mut self, name: &str, value: &str) {
        self.inner.set_style_property(name, value);
    }
}

fn read_log() -> ReadLog {
    ReadLog {
        inner: MemoryElement::new(),
        reads: RefCell::new(Vec::new()),
    }
}

fn translate(x: f64, y: f64, z: f64) -> Matrix4 {
    let mut m = Matrix4::IDENTITY;
    m[3] = [x, y, z, 1.0];
    m
}

#[test]
fn construction_is_rejected() {
    let err = Matrix3dPlugin::new().unwrap_err();
    assert!(matches!(err, Matrix3dError::Instantiation(_)));
}

#[test]
fn install_registers_transform_with_low_priority() {
    let mut reg = PluginRegistry::new();
    Matrix3dPlugin::install(&mut reg);
    let installed = reg.plugins_for(TRANSFORM);
    assert_eq!(installed.len(), 1);
    assert_eq!(installed[0].name, "Matrix3dPlugin");
    assert_eq!(installed[0].priority, -100);
}

#[test]
fn init_defaults_to_identity() {
    let cfg = PluginConfig::default();
    let el = MemoryElement::new();
    assert_eq!(
        Matrix3dPlugin::init(&el, TRANSFORM, &cfg).unwrap(),
        Matrix4::IDENTITY
    );

    let el = MemoryElement::new().with_computed("transform", "none");
    assert_eq!(
        Matrix3dPlugin::init(&el, TRANSFORM, &cfg).unwrap(),
        Matrix4::IDENTITY
    );
}

#[test]
fn init_prefers_prefixed_computed_value() {
    let cfg = PluginConfig::for_prefix(VendorPrefix::Webkit);
    let el = MemoryElement::new()
        .with_computed("-webkit-transform", "matrix(1,0,0,1,7,8)")
        .with_computed("transform", "matrix(1,0,0,1,1,2)");
    let m = Matrix3dPlugin::init(&el, TRANSFORM, &cfg).unwrap();
    assert_eq!(m.translation(), [7.0, 8.0, 0.0]);
}

#[test]
fn init_falls_back_to_unprefixed_value() {
    let cfg = PluginConfig::for_prefix(VendorPrefix::Moz);
    let el = MemoryElement::new().with_computed("transform", "matrix(1,0,0,1,1,2)");
    let m = Matrix3dPlugin::init(&el, TRANSFORM, &cfg).unwrap();
    assert_eq!(m.translation(), [1.0, 2.0, 0.0]);
}

#[test]
fn init_reads_bare_property_once_without_prefix() {
    let el = read_log();
    Matrix3dPlugin::init(&el, TRANSFORM, &PluginConfig::default()).unwrap();
    assert_eq!(*el.reads.borrow(), vec!["transform".to_string()]);
}

#[test]
fn init_tries_prefixed_then_bare_property() {
    let el = read_log();
    let cfg = PluginConfig::for_prefix(VendorPrefix::Ms);
    Matrix3dPlugin::init(&el, TRANSFORM, &cfg).unwrap();
    assert_eq!(
        *el.reads.borrow(),
        vec!["-ms-transform".to_string(), "transform".to_string()]
    );
}

#[test]
fn init_surfaces_malformed_computed_value() {
    let el = MemoryElement::new().with_computed("transform", "rotate(45deg)");
    let err = Matrix3dPlugin::init(&el, TRANSFORM, &PluginConfig::default()).unwrap_err();
    assert!(err.is_parse());
}

#[test]
fn tween_ignores_other_properties() {
    let mut el = MemoryElement::new();
    let value = translate(1.0, 1.0, 1.0);
    let out = Matrix3dPlugin::tween(
        &mut el,
        "opacity",
        value,
        &Matrix4::IDENTITY,
        &translate(10.0, 0.0, 0.0),
        0.5,
        &PluginConfig::default(),
    );
    assert_eq!(out, value);
    assert_eq!(el.inline_properties().count(), 0);
}

#[test]
fn tween_skips_elements_without_style() {
    let mut el = MemoryElement::without_style();
    let out = Matrix3dPlugin::tween(
        &mut el,
        TRANSFORM,
        Matrix4::IDENTITY,
        &Matrix4::IDENTITY,
        &translate(10.0, 0.0, 0.0),
        0.5,
        &PluginConfig::default(),
    );
    assert_eq!(out, Matrix4::IDENTITY);
}

#[test]
fn tween_writes_both_property_names() {
    let mut el = MemoryElement::new();
    let cfg = PluginConfig::for_prefix(VendorPrefix::Webkit);
    let out = Matrix3dPlugin::tween(
        &mut el,
        TRANSFORM,
        Matrix4::IDENTITY,
        &Matrix4::IDENTITY,
        &translate(10.0, -20.0, 4.0),
        0.5,
        &cfg,
    );
    assert_eq!(out, translate(5.0, -10.0, 2.0));

    let bare = el.inline_property("transform").unwrap();
    assert_eq!(el.inline_property("-webkit-transform"), Some(bare));
    assert!(bare.ends_with(",5.0000000000,-10.0000000000,2.0000000000,1.0000000000)"));
    assert_eq!(el.inline_properties().count(), 2);
}

#[test]
fn tween_suffixes_units_for_moz() {
    let mut el = MemoryElement::new();
    let cfg = PluginConfig::for_prefix(VendorPrefix::Moz);
    Matrix3dPlugin::tween(
        &mut el,
        TRANSFORM,
        Matrix4::IDENTITY,
        &translate(5.0, 6.0, 7.0),
        &translate(5.0, 6.0, 7.0),
        0.25,
        &cfg,
    );
    let written = el.inline_property("-moz-transform").unwrap();
    assert!(written.ends_with(",5.0000000000px,6.0000000000px,7.0000000000px,1.0000000000)"));
    assert_eq!(el.inline_property("transform"), Some(written));
}

#[test]
fn step_is_inert() {
    Matrix3dPlugin::step(TRANSFORM, &Matrix4::IDENTITY, &Matrix4::IDENTITY);
}

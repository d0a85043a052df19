pub(crate) mod config;
pub(crate) mod matrix3d;
pub(crate) mod registry;
pub(crate) mod style;

pub(crate) mod format;
pub(crate) mod lerp;
pub(crate) mod parse;

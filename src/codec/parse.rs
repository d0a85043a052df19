use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{
    core::Matrix4,
    error::{Matrix3dError, Matrix3dResult},
};

static MATRIX_2D: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^matrix\((.*)\)$").expect("matrix() pattern compiles"));
static MATRIX_3D: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^matrix3d\((.*)\)$").expect("matrix3d() pattern compiles"));
// Leading number plus an optional unit token, e.g. `10`, `-2.5e3`, `5.0000000000px`.
static FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)[A-Za-z%]*$")
        .expect("field pattern compiles")
});

/// Keyword reported by computed styles when no transform is applied.
pub const NO_TRANSFORM: &str = "none";

/// Parse a computed CSS transform into a [`Matrix4`].
///
/// Accepts `matrix(a, b, c, d, tx, ty)` and `matrix3d(m0, ..., m15)`. An absent value, an empty
/// string or `none` yields [`Matrix4::IDENTITY`]. A unit after a value (`10px`) is ignored, so
/// unit-suffixed output of [`crate::serialize_transform`] reads back.
pub fn parse_transform(input: Option<&str>) -> Matrix3dResult<Matrix4> {
    let Some(raw) = input else {
        return Ok(Matrix4::IDENTITY);
    };
    let s = raw.trim();
    if s.is_empty() || s == NO_TRANSFORM {
        return Ok(Matrix4::IDENTITY);
    }

    if let Some(caps) = MATRIX_2D.captures(s) {
        let [a, b, c, d, tx, ty] = parse_fields::<6>(&caps[1], "matrix")?;
        return Ok(Matrix4::from_2d(a, b, c, d, tx, ty));
    }
    if let Some(caps) = MATRIX_3D.captures(s) {
        return parse_fields::<16>(&caps[1], "matrix3d").map(Matrix4::from_cells);
    }

    tracing::debug!(transform = s, "rejecting unsupported transform");
    Err(Matrix3dError::parse(format!(
        "unsupported transform '{s}', expected matrix(...) or matrix3d(...)"
    )))
}

fn parse_fields<const N: usize>(body: &str, form: &str) -> Matrix3dResult<[f64; N]> {
    let fields: Vec<&str> = body.split(',').collect();
    if fields.len() != N {
        return Err(Matrix3dError::parse(format!(
            "{form}() expects {N} values, got {}",
            fields.len()
        )));
    }

    let mut out = [0.0; N];
    for (i, (slot, field)) in out.iter_mut().zip(fields).enumerate() {
        let field = field.trim();
        let v = FIELD
            .captures(field)
            .and_then(|caps| caps[1].parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .ok_or_else(|| {
                Matrix3dError::parse(format!("{form}() value #{i} '{field}' is not a number"))
            })?;
        *slot = v;
    }
    Ok(out)
}

impl FromStr for Matrix4 {
    type Err = Matrix3dError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_transform(Some(s))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/codec/parse.rs"]
mod tests;

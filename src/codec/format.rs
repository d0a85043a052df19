use std::fmt;

use crate::foundation::{
    core::Matrix4,
    error::{Matrix3dError, Matrix3dResult},
};

/// Digits written after the decimal point for every cell.
pub const FRACTION_DIGITS: usize = 10;

/// Unit appended to translation cells when [`FormatOptions::requires_units`] is set.
pub const DEFAULT_TRANSLATION_UNIT: &str = "px";

/// Controls how a [`Matrix4`] is written back as `matrix3d(...)`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Suffix for the three translation cells (row 3, columns 0..=2).
    pub translation_unit: String,
    /// Whether the target engine needs explicit units on translation cells.
    pub requires_units: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            translation_unit: DEFAULT_TRANSLATION_UNIT.to_string(),
            requires_units: false,
        }
    }
}

impl FormatOptions {
    /// Options that suffix translation cells with `unit`.
    pub fn with_units(unit: impl Into<String>) -> Self {
        Self {
            translation_unit: unit.into(),
            requires_units: true,
        }
    }

    /// Check that the translation unit is a plain CSS unit token (`px`, `em`, `%`, ...).
    pub fn validate(&self) -> Matrix3dResult<()> {
        let unit = self.translation_unit.as_str();
        if unit.is_empty() {
            return Err(Matrix3dError::config("translation_unit must be non-empty"));
        }
        if unit != "%" && !unit.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(Matrix3dError::config(format!(
                "translation_unit '{unit}' must be ASCII letters or '%'"
            )));
        }
        Ok(())
    }
}

/// Write `matrix` as `matrix3d(...)` with [`FRACTION_DIGITS`] fixed digits per cell.
pub fn serialize_transform(matrix: &Matrix4, opts: &FormatOptions) -> String {
    let mut out = String::with_capacity(16 * (FRACTION_DIGITS + 6) + 10);
    out.push_str("matrix3d(");
    for (i, row) in matrix.0.iter().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            if i + j > 0 {
                out.push(',');
            }
            push_fixed(&mut out, v);
            if opts.requires_units && i == 3 && j < 3 {
                out.push_str(&opts.translation_unit);
            }
        }
    }
    out.push(')');
    out
}

/// Fixed-point text for one cell.
///
/// Negative zero prints unsigned and exact decimal ties round away from zero. Non-finite values
/// keep their CSS-style spelling (`NaN`, `Infinity`).
fn push_fixed(out: &mut String, v: f64) {
    if v.is_nan() {
        out.push_str("NaN");
        return;
    }
    if v.is_infinite() {
        out.push_str(if v > 0.0 { "Infinity" } else { "-Infinity" });
        return;
    }

    if v < 0.0 {
        out.push('-');
    }
    let mag = v.abs();
    if is_decimal_tie(mag) {
        out.push_str(&round_tie_up(mag));
    } else {
        out.push_str(&format!("{:.*}", FRACTION_DIGITS, mag));
    }
}

// Exactly halfway between two 10-digit decimals iff `mag` is an odd multiple of 2^-11.
fn is_decimal_tie(mag: f64) -> bool {
    let scaled = mag * 2048.0;
    scaled.is_finite() && scaled.fract() == 0.0 && scaled % 2.0 == 1.0
}

fn round_tie_up(mag: f64) -> String {
    // Ties have exactly one more fractional digit (always 5), so this expansion is exact.
    let mut digits = format!("{mag:.prec$}", prec = FRACTION_DIGITS + 1).into_bytes();
    digits.pop();

    let mut i = digits.len();
    loop {
        if i == 0 {
            digits.insert(0, b'1');
            break;
        }
        i -= 1;
        match digits[i] {
            b'.' => continue,
            b'9' => digits[i] = b'0',
            d => {
                digits[i] = d + 1;
                break;
            }
        }
    }
    digits.into_iter().map(char::from).collect()
}

impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize_transform(self, &FormatOptions::default()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/codec/format.rs"]
mod tests;

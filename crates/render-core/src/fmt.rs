//! Number formatting helpers for text output backends.
//!
//! Coordinate arithmetic produces doubles like `109.94999999999999` that
//! must still print as `109.95`. Rust's `Display` for `f64` prints the
//! shortest round-trippable form, which keeps all those digits, so
//! backends wrap coordinates in [`G`] to get printf `%g` semantics
//! instead: six significant digits, trailing zeros trimmed, scientific
//! notation outside the `1e-4..1e6` magnitude range.

use std::fmt;

/// Formats an `f64` the way printf `%g` does.
#[derive(Debug, Clone, Copy)]
pub struct G(pub f64);

fn trim_fraction(s: &str) -> &str {
    match s.split_once('.') {
        Some(_) => s.trim_end_matches('0').trim_end_matches('.'),
        None => s,
    }
}

impl fmt::Display for G {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("nan");
        }
        if value.is_infinite() {
            return f.write_str(if value < 0.0 { "-inf" } else { "inf" });
        }
        if value == 0.0 {
            return f.write_str(if value.is_sign_negative() { "-0" } else { "0" });
        }

        // Round to six significant digits first; the decimal exponent that
        // decides between fixed and scientific style is taken from the
        // rounded value, so 999999.5 lands in scientific style as 1e+06.
        let scientific = format!("{:.5e}", value);
        let (mantissa, exponent) = match scientific.split_once('e') {
            Some(parts) => parts,
            None => return f.write_str(&scientific),
        };
        let exp: i32 = match exponent.parse() {
            Ok(exp) => exp,
            Err(_) => return f.write_str(&scientific),
        };

        if (-4..6).contains(&exp) {
            let decimals = (5 - exp).max(0) as usize;
            let fixed = format!("{:.*}", decimals, value);
            f.write_str(trim_fraction(&fixed))
        } else {
            write!(
                f,
                "{}e{}{:02}",
                trim_fraction(mantissa),
                if exp < 0 { '-' } else { '+' },
                exp.abs()
            )
        }
    }
}

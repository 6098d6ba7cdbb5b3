//! Short and exact renderings of constant values.
//!
//! The short form is what a reader sees first; the exact form keeps every
//! digit. A constant whose two forms differ is recorded with both so that
//! a precision change shows up in the diff.

use crate::model::{ConstValue, Rational};
use unicode_general_category::{get_general_category, GeneralCategory};

/// Quoted strings longer than this many characters are truncated in the
/// short form.
pub const MAX_SHORT_STRING: usize = 72;

/// Significant digits of the short float form.
const SHORT_FLOAT_PRECISION: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstRendering {
    pub short: String,
    pub exact: String,
}

impl ConstRendering {
    fn same(s: String) -> Self {
        Self {
            short: s.clone(),
            exact: s,
        }
    }

    /// The value part of a `const N = ...` feature.
    pub fn feature_value(&self) -> String {
        if self.short == self.exact {
            self.short.clone()
        } else {
            format!("{}  // {}", self.short, self.exact)
        }
    }
}

pub fn render_const_value(value: &ConstValue) -> ConstRendering {
    match value {
        ConstValue::Unknown => ConstRendering::same("unknown".to_string()),
        ConstValue::Bool { value } => ConstRendering::same(value.to_string()),
        ConstValue::Int { value } => ConstRendering::same(value.clone()),
        ConstValue::String { value } => {
            let exact = quote(value);
            ConstRendering {
                short: truncate_quoted(&exact),
                exact,
            }
        }
        ConstValue::Float(rat) => ConstRendering {
            short: short_rational(rat),
            exact: exact_rational(rat),
        },
        ConstValue::Complex { re, im } => ConstRendering {
            short: format!("({} + {}i)", short_rational(re), short_rational(im)),
            exact: format!("({} + {}i)", exact_rational(re), exact_rational(im)),
        },
    }
}

/// Double-quoted with backslash escapes for quotes and every character
/// that is not printable.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\x07' => out.push_str("\\a"),
            '\x08' => out.push_str("\\b"),
            '\x0c' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x0b' => out.push_str("\\v"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            c if (c as u32) < 0x20 || c == '\x7f' => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c if is_print(c) => out.push(c),
            c if (c as u32) < 0x10000 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push_str(&format!("\\U{:08x}", c as u32)),
        }
    }
    out.push('"');
    out
}

/// Letters, marks, numbers, punctuation, symbols and the ASCII space.
fn is_print(c: char) -> bool {
    use GeneralCategory::*;
    c == ' '
        || matches!(
            get_general_category(c),
            UppercaseLetter
                | LowercaseLetter
                | TitlecaseLetter
                | ModifierLetter
                | OtherLetter
                | NonspacingMark
                | SpacingMark
                | EnclosingMark
                | DecimalNumber
                | LetterNumber
                | OtherNumber
                | ConnectorPunctuation
                | DashPunctuation
                | OpenPunctuation
                | ClosePunctuation
                | InitialPunctuation
                | FinalPunctuation
                | OtherPunctuation
                | MathSymbol
                | CurrencySymbol
                | ModifierSymbol
                | OtherSymbol
        )
}

fn truncate_quoted(quoted: &str) -> String {
    if quoted.chars().count() <= MAX_SHORT_STRING {
        return quoted.to_string();
    }
    let mut s: String = quoted.chars().take(MAX_SHORT_STRING - 3).collect();
    s.push_str("...");
    s
}

fn exact_rational(rat: &Rational) -> String {
    if rat.is_integer() {
        rat.num.clone()
    } else {
        format!("{}/{}", rat.num, rat.den)
    }
}

/// `%.6g`, or `%e` when a non-integer would otherwise print without a
/// decimal point. Values outside the `f64` range keep their exact form.
fn short_rational(rat: &Rational) -> String {
    let (Ok(num), Ok(den)) = (rat.num.parse::<f64>(), rat.den.parse::<f64>()) else {
        return exact_rational(rat);
    };
    let x = num / den;
    let nonzero = rat.num.trim_start_matches('-').bytes().any(|b| b != b'0');
    if !x.is_finite() || (x == 0.0) == nonzero {
        return exact_rational(rat);
    }
    let s = format_g(x, SHORT_FLOAT_PRECISION);
    if !rat.is_integer() && !s.contains('.') {
        return format_e(x, 6);
    }
    s
}

/// C-style `%.<prec>g`: shortest of fixed or exponent notation with
/// trailing zeros removed, two-digit minimum exponent.
pub fn format_g(x: f64, prec: usize) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    let prec = prec.max(1);
    let sci = format!("{:.*e}", prec - 1, x);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    let negative = mantissa.starts_with('-');
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let digits = digits.trim_end_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };
    let nd = digits.len() as i32;
    let dp = exp + 1;

    let mut eprec = prec as i32;
    if eprec > nd && nd >= dp {
        eprec = nd;
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    if exp < -4 || exp >= eprec {
        out.push_str(&digits[..1]);
        if nd > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        out.push_str(&exponent_suffix(exp));
        return out;
    }

    if dp <= 0 {
        out.push_str("0.");
        for _ in 0..(-dp) {
            out.push('0');
        }
        out.push_str(digits);
    } else if dp >= nd {
        out.push_str(digits);
        for _ in 0..(dp - nd) {
            out.push('0');
        }
    } else {
        let (int_part, frac) = digits.split_at(dp as usize);
        out.push_str(int_part);
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// C-style `%.<prec>e`.
pub fn format_e(x: f64, prec: usize) -> String {
    let sci = format!("{:.*e}", prec, x);
    match sci.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            format!("{}{}", mantissa, exponent_suffix(exp))
        }
        None => sci,
    }
}

fn exponent_suffix(exp: i32) -> String {
    let sign = if exp < 0 { '-' } else { '+' };
    format!("e{}{:02}", sign, exp.abs())
}

//! Loose equality and numeric coercion.
//!
//! Searching a node list compares with `==`, not identity: an element whose
//! text is `"5"` matches the number `5`, and two distinct lists with the same
//! elements match each other.

use crate::list::NodeList;
use crate::node::{Element, Node};

/// Coercive equality in the manner of JavaScript's `==` on XML values.
pub trait LooseEq<Rhs: ?Sized = Self> {
    fn loose_eq(&self, other: &Rhs) -> bool;
}

impl LooseEq for Element {
    fn loose_eq(&self, other: &Element) -> bool {
        if self.has_simple_content() && other.has_simple_content() {
            self.string_value() == other.string_value()
        } else {
            self == other
        }
    }
}

impl LooseEq<str> for Element {
    fn loose_eq(&self, other: &str) -> bool {
        self.string_value() == other
    }
}

impl LooseEq<&str> for Element {
    fn loose_eq(&self, other: &&str) -> bool {
        self.string_value() == *other
    }
}

impl LooseEq<String> for Element {
    fn loose_eq(&self, other: &String) -> bool {
        self.string_value() == *other
    }
}

impl LooseEq<f64> for Element {
    fn loose_eq(&self, other: &f64) -> bool {
        to_number(&self.string_value()) == *other
    }
}

impl LooseEq<i64> for Element {
    fn loose_eq(&self, other: &i64) -> bool {
        self.loose_eq(&(*other as f64))
    }
}

impl LooseEq<bool> for Element {
    fn loose_eq(&self, other: &bool) -> bool {
        self.loose_eq(&if *other { 1.0f64 } else { 0.0 })
    }
}

impl LooseEq<NodeList> for Element {
    fn loose_eq(&self, other: &NodeList) -> bool {
        other.only().is_some_and(|only| self.loose_eq(only))
    }
}

impl LooseEq<Node> for Element {
    fn loose_eq(&self, other: &Node) -> bool {
        match other {
            Node::Single(element) => self.loose_eq(element),
            Node::List(list) => self.loose_eq(list),
        }
    }
}

impl LooseEq for NodeList {
    fn loose_eq(&self, other: &NodeList) -> bool {
        self.len() == other.len()
            && self.slots().zip(other.slots()).all(|pair| match pair {
                (Some(a), Some(b)) => a.loose_eq(b),
                (None, None) => true,
                _ => false,
            })
    }
}

impl LooseEq for Node {
    fn loose_eq(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::List(a), Node::List(b)) => a.loose_eq(b),
            (Node::Single(a), b) => a.loose_eq(b),
            (a, Node::Single(b)) => b.loose_eq(a),
        }
    }
}

/// String to number the way JavaScript's `Number(s)` does it: surrounding
/// whitespace is ignored, the empty string is zero, and anything that is not
/// a decimal, hex, octal or binary literal (or `Infinity`) is NaN.
pub fn to_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            if digits.starts_with('+') {
                return f64::NAN;
            }
            return match u64::from_str_radix(digits, radix) {
                Ok(n) => n as f64,
                Err(_) => f64::NAN,
            };
        }
    }

    let (sign, unsigned) = match s.as_bytes()[0] {
        b'-' => (-1.0, &s[1..]),
        b'+' => (1.0, &s[1..]),
        _ => (1.0, s),
    };
    if unsigned == "Infinity" {
        return sign * f64::INFINITY;
    }
    if unsigned.starts_with(['+', '-']) {
        return f64::NAN;
    }
    // Rust also accepts "inf" and "nan", JavaScript does not.
    if !unsigned.bytes().all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-')) {
        return f64::NAN;
    }
    unsigned.parse::<f64>().map_or(f64::NAN, |n| sign * n)
}

/// Number to string the way JavaScript prints it. Magnitudes from `1e21` up
/// and below `1e-6` use exponent form with an explicit sign (`1e+21`, `1e-7`).
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n != 0.0 && (n.abs() >= 1e21 || n.abs() < 1e-6) {
        let formatted = format!("{n:e}");
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{mantissa}e+{exponent}"),
            _ => formatted,
        }
    } else if n == n.trunc() {
        // also maps -0 to "0"
        format!("{}", n as i128)
    } else {
        format!("{n}")
    }
}

/// Round toward zero: `ceil` for negatives, `floor` otherwise. Callers deal
/// with NaN before getting here; infinities saturate.
pub fn to_integer(n: f64) -> i64 {
    if n < 0.0 { n.ceil() as i64 } else { n.floor() as i64 }
}

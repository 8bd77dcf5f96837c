//! Generally useful free functions, not tied to any specific type,
//! but mostly related to the textual side of the calculator.

/// Render a number the way it appears in descriptions and on the display.
///
/// Integral values keep a trailing `.0` (`3` becomes `"3.0"`), everything
/// else gets the shortest decimal form that parses back to the same value.
/// The non-finite values render as `inf`, `-inf` and `NaN`.
pub fn render_number(value: f64) -> String {
    format!("{value:?}")
}

/// Is `key` one of the keys that may be typed into the display?
pub fn is_digit_key(key: char) -> bool {
    key.is_ascii_digit() || key == '.'
}

/// Wrap a description in a prefix and a suffix. The unary renderers are
/// all of this shape.
pub fn wrap(prefix: &str, description: &str, suffix: &str) -> String {
    let mut text = String::with_capacity(prefix.len() + description.len() + suffix.len());
    text.push_str(prefix);
    text.push_str(description);
    text.push_str(suffix);
    text
}

/// Join two descriptions around an infix operator symbol, with a single
/// space on each side. The binary renderers are all of this shape.
pub fn infix(first: &str, symbol: &str, second: &str) -> String {
    format!("{first} {symbol} {second}")
}

// ----- T E S T S ---------------------------------------------------------------------

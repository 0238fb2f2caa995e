//! Marker classes and the style value helpers the scrollbars rely on.

use std::sync::LazyLock;

use regex::Regex;

/// Class of the scrollable content element inside a pane.
pub const INNER_CLASS: &str = "antiscroll-inner";
/// Base class of every thumb element.
pub const SCROLLBAR_CLASS: &str = "antiscroll-scrollbar";
pub const HORIZONTAL_CLASS: &str = "antiscroll-scrollbar-horizontal";
pub const VERTICAL_CLASS: &str = "antiscroll-scrollbar-vertical";
/// Present while the thumb is visible.
pub const SHOWN_CLASS: &str = "antiscroll-scrollbar-shown";
/// Present while the thumb is being dragged.
pub const DRAGGING_CLASS: &str = "antiscroll-scrollbar-dragging";

static FUNCTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+\((.+)\)").expect("function pattern is valid"));

static ARG_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*").expect("separator pattern is valid"));

static TRANSLATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(translateX|translateY|translate)\(\s*([^)]*)\)\s*$")
        .expect("translate pattern is valid")
});

/// Format a pixel length for an inline style.
pub fn px(value: f64) -> String {
    format!("{value}px")
}

/// Parse a pixel length (`"12px"`, `"12"`).
pub fn parse_px(value: &str) -> Option<f64> {
    let value = value.trim();
    let number = value.strip_suffix("px").unwrap_or(value).trim();
    number.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Translation encoded in a transform function string.
///
/// Takes the trailing two comma-separated arguments of `name(args)`, so
/// `matrix(1, 0, 0, 1, 40, 12)` yields `(40.0, 12.0)`. Anything that does not
/// look like a function call yields `(0.0, 0.0)`; a non-numeric argument
/// counts as zero.
pub fn matrix_position(transform: &str) -> (f64, f64) {
    let Some(captures) = FUNCTION.captures(transform) else {
        return (0.0, 0.0);
    };

    let values: Vec<f64> = ARG_SEPARATOR
        .split(&captures[1])
        .map(|arg| arg.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0))
        .collect();

    match values.as_slice() {
        [] => (0.0, 0.0),
        [x] => (*x, 0.0),
        [.., x, y] => (*x, *y),
    }
}

/// Resolve an inline transform to the matrix form a computed style reports.
///
/// `translateX`, `translateY` and `translate` become `matrix(1, 0, 0, 1, x, y)`.
/// Other values pass through unchanged and an empty value resolves to `none`.
pub fn resolve_transform(inline: &str) -> String {
    if inline.trim().is_empty() {
        return "none".to_string();
    }

    let Some(captures) = TRANSLATE.captures(inline) else {
        return inline.trim().to_string();
    };

    let args: Vec<f64> = ARG_SEPARATOR
        .split(&captures[2])
        .map(|arg| parse_px(arg).unwrap_or(0.0))
        .collect();
    let first = args.first().copied().unwrap_or(0.0);

    let (x, y) = match &captures[1] {
        "translateX" => (first, 0.0),
        "translateY" => (0.0, first),
        _ => (first, args.get(1).copied().unwrap_or(0.0)),
    };

    format!("matrix(1, 0, 0, 1, {x}, {y})")
}

//! Example application.
//!
//! Chains the arithmetic primitives to compute `(a + b) * 2` for the
//! fixed operands `a = 3`, `b = 5`, and renders the result as the
//! library's demo text. The `mathtools` binary prints exactly this;
//! the functions stay importable so the demo is callable as a library
//! operation too.

use crate::arith::{add, mul};

/// Computes the demo value: `mul(add(3, 5), 2)`.
///
/// # Examples
/// ```
/// use mathtools::demo::example_result;
/// assert_eq!(example_result(), 16.0);
/// ```
pub fn example_result() -> f64 {
    let res_add = add(3.0, 5.0);
    mul(res_add, 2.0)
}

/// Renders the demo text: a description line, a `RESULT:` banner, and
/// the computed value, each newline-terminated.
///
/// The value line prints `16`, not `16.0`: `f64`'s `Display` drops the
/// fractional part of whole numbers.
///
/// # Examples
/// ```
/// use mathtools::demo::render;
/// let text = render();
/// assert!(text.starts_with("Example application"));
/// assert!(text.ends_with("16\n"));
/// ```
pub fn render() -> String {
    format!(
        "Example application: compute ((a+b)*2) where a=3, b=5:\nRESULT:\n{}\n",
        example_result()
    )
}

/// Prints the demo text to standard output.
///
/// # Examples
/// ```
/// mathtools::demo::run();
/// ```
pub fn run() {
    print!("{}", render());
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_result_value() {
        assert_eq!(example_result(), 16.0);
    }

    #[test]
    fn test_example_result_matches_primitives() {
        assert_eq!(example_result(), mul(add(3.0, 5.0), 2.0));
    }

    #[test]
    fn test_render_exact_text() {
        assert_eq!(
            render(),
            "Example application: compute ((a+b)*2) where a=3, b=5:\nRESULT:\n16\n"
        );
    }

    #[test]
    fn test_render_line_structure() {
        let text = render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "RESULT:");
        assert_eq!(lines[2], "16");
    }
}

//! Greedy line wrapping against a fixed width.
//!
//! This is the shared line-breaking core: both measurement strategies
//! call [`line_count`], which is what makes their final geometry
//! equivalent despite different computation paths.

use super::metrics::FontMetrics;

/// Returns the number of lines `text` occupies when wrapped to
/// `max_width` with the given metrics.
///
/// Empty text occupies zero lines. Explicit newlines start a new
/// paragraph; a blank paragraph still occupies one line. Words longer
/// than a line are hard-wrapped at character granularity (clipping
/// semantics, no hyphenation).
pub fn line_count(text: &str, max_width: f32, metrics: FontMetrics) -> usize {
    if text.is_empty() {
        return 0;
    }
    let max_chars = chars_per_line(max_width, metrics.advance_width);
    text.split('\n')
        .map(|paragraph| paragraph_lines(paragraph, max_chars))
        .sum()
}

/// How many characters fit on one line. Degenerate widths still fit one
/// character so the pass terminates with a finite height.
fn chars_per_line(max_width: f32, advance_width: f32) -> usize {
    if advance_width <= 0.0 {
        return 1;
    }
    ((max_width / advance_width).floor() as usize).max(1)
}

fn paragraph_lines(paragraph: &str, max_chars: usize) -> usize {
    let mut lines = 1usize;
    let mut used = 0usize;
    for word in paragraph.split_whitespace() {
        let len = word.chars().count();
        let separator = usize::from(used > 0);
        if used + separator + len <= max_chars {
            used += separator + len;
        } else if len <= max_chars {
            lines += 1;
            used = len;
        } else {
            // Word longer than a whole line: fill the current line,
            // then hard-wrap the rest.
            if used > 0 {
                lines += 1;
            }
            let mut remaining = len;
            while remaining > max_chars {
                lines += 1;
                remaining -= max_chars;
            }
            used = remaining;
        }
    }
    lines
}

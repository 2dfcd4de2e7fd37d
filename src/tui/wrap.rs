use unicode_segmentation::UnicodeSegmentation;

use crate::util::unicode;

/// Wrap text into lines no wider than `width` terminal cells.
///
/// Breaks at whitespace where possible; a single token longer than the
/// width is character-wrapped. Existing newlines start fresh lines.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut out = Vec::new();
    for logical in text.split('\n') {
        wrap_logical_line(logical, width, &mut out);
    }
    out
}

fn wrap_logical_line(line: &str, width: usize, out: &mut Vec<String>) {
    if unicode::display_width(line) <= width {
        out.push(line.to_string());
        return;
    }

    let mut current = String::new();
    let mut current_width = 0;
    for word in line.split_whitespace() {
        let word_width = unicode::display_width(word);
        let sep = if current.is_empty() { 0 } else { 1 };

        if current_width + sep + word_width <= width {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += sep + word_width;
            continue;
        }

        if !current.is_empty() {
            out.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
        } else {
            // Oversized token: hard-wrap by grapheme.
            for grapheme in word.graphemes(true) {
                let gw = unicode::grapheme_display_width(grapheme);
                if current_width + gw > width && !current.is_empty() {
                    out.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push_str(grapheme);
                current_width += gw;
            }
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
}

pub const DEFAULT_SEGMENT_LENGTH: usize = 1800;

/// Cut points earlier than this share of the window are ignored.
const BREAK_THRESHOLD: f64 = 0.7;

/// Full-width terminators end a sentence wherever they appear.
const FULL_WIDTH_TERMINATORS: [char; 3] = ['。', '！', '？'];

/// ASCII terminators end a sentence only when followed by whitespace or the end of the text.
const ASCII_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Splits `text` into pieces of at most `max_length` characters for size-limited channels.
///
/// Cuts prefer, in order, the last sentence end, line break or space found past 70% of the
/// window, falling back to a hard cut at `max_length`. Pieces are trimmed, so only
/// whitespace around cut points is lost.
pub fn segment_response(text: &str, max_length: usize) -> Vec<String> {
    let max_length = max_length.max(1);

    if text.chars().count() <= max_length {
        return vec![text.to_string()];
    }

    let mut segments = Vec::new();
    let mut remaining = text;

    while !remaining.is_empty() {
        if remaining.chars().count() <= max_length {
            segments.push(remaining.to_string());
            break;
        }

        let window_end = remaining
            .char_indices()
            .nth(max_length)
            .map(|(idx, _)| idx)
            .unwrap_or(remaining.len());
        let cut = find_break_point(remaining, window_end, max_length).unwrap_or(window_end);

        let piece = remaining[..cut].trim();
        if !piece.is_empty() {
            segments.push(piece.to_string());
        }
        remaining = remaining[cut..].trim();
    }

    segments
}

/// Returns the byte offset just past the preferred break character in `text[..window_end]`.
fn find_break_point(text: &str, window_end: usize, max_length: usize) -> Option<usize> {
    let threshold = max_length as f64 * BREAK_THRESHOLD;
    let mut last_sentence_end = None;
    let mut last_newline = None;
    let mut last_space = None;

    for (position, (idx, ch)) in text[..window_end].char_indices().enumerate() {
        if position as f64 <= threshold {
            continue;
        }
        let after = idx + ch.len_utf8();
        if is_sentence_end(ch, &text[after..]) {
            last_sentence_end = Some(after);
        } else if ch == '\n' {
            last_newline = Some(after);
        } else if ch == ' ' {
            last_space = Some(after);
        }
    }

    last_sentence_end.or(last_newline).or(last_space)
}

fn is_sentence_end(ch: char, rest: &str) -> bool {
    if FULL_WIDTH_TERMINATORS.contains(&ch) {
        return true;
    }
    ASCII_TERMINATORS.contains(&ch) && rest.chars().next().is_none_or(char::is_whitespace)
}

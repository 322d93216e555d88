//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

use crate::{Parser, Span};
use std::borrow::Cow;

/// Returns the visible text of a parsed line.
///
/// Every byte covered by an escape sequence span is removed, as is any byte no
/// span covers (a dropped trailing `ESC`). `spans` must come from parsing `text`.
///
/// # Returns
///
/// - `Cow::Borrowed(text)` when the spans are all plain text and cover `text`
/// - `Cow::Owned(String)` otherwise
pub fn strip_escape_sequences<'a>(text: &'a str, spans: &[Span]) -> Cow<'a, str> {
    let covered = spans.last().map_or(0, Span::end);
    if covered == text.len() && !spans.iter().any(Span::is_escape_sequence) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len());
    for span in spans.iter().filter(|span| !span.is_escape_sequence()) {
        result.push_str(&text[span.range()]);
    }
    Cow::Owned(result)
}

/// Re-bases the plain text spans of a line onto its stripped text.
///
/// Each returned span keeps its style and length. Its offset is shifted left by
/// the total length of the escape sequence spans before it, so the result indexes
/// into the output of [`strip_escape_sequences`].
pub fn visible_spans(spans: &[Span]) -> Vec<Span> {
    let mut removed = 0;
    let mut visible = Vec::with_capacity(spans.len());
    for span in spans {
        if span.is_escape_sequence() {
            removed += span.length;
        } else {
            visible.push(Span::new(span.offset - removed, span.length, span.style));
        }
    }
    visible
}

/// Removes ANSI escape sequences from a string.
///
/// Each line is run through a fresh [`Parser`] in order, so every sequence the
/// parser recognizes is removed, including OSC strings and two byte escapes such
/// as `ESC (`. An `ESC` that starts no recognizable
/// sequence is kept, except at the very end of a line. Line terminators
/// (`\n` and `\r\n`) are preserved.
///
/// # Performance
///
/// Input without an `ESC` byte is returned borrowed without being parsed.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// # use ansiview_ansicodec::strip_ansi;
///
/// let colored = "\x1b[1;31mRed Text\x1b[0m";
/// assert_eq!(strip_ansi(colored), "Red Text");
///
/// let plain = "Plain Text";
/// assert!(matches!(strip_ansi(plain), Cow::Borrowed(_)));
///
/// let titled = "\x1b]0;title\x07\x1b(Bdone";
/// assert_eq!(strip_ansi(titled), "done");
/// ```
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    if !text.contains('\x1b') {
        return Cow::Borrowed(text);
    }

    let mut parser = Parser::new();
    let mut result = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        let (content, terminator) = split_terminator(line);
        let spans = parser.append_line(content);
        result.push_str(&strip_escape_sequences(content, &spans));
        result.push_str(terminator);
    }
    Cow::Owned(result)
}

fn split_terminator(line: &str) -> (&str, &str) {
    let content = line
        .strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .unwrap_or(line);
    line.split_at(content.len())
}

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

use crate::consts::{CSI_INTRODUCER, ESC, OSC_INTRODUCER};
use crate::csi::ControlSequence;
use crate::osc::OperatingSystemCommand;
use crate::{ParserConfig, Span, Style};
use tracing::{debug, trace};

/// A line oriented parser that splits text into styled spans.
///
/// `Parser` walks one line at a time, separating plain text from escape
/// sequences. Escape sequences are recognized in a fixed order at every `ESC`:
///
/// 1. `ESC [` - control sequences (CSI), see [`ControlSequence`]
/// 2. `ESC ]` - operating system commands (OSC), see [`OperatingSystemCommand`]
/// 3. `ESC` followed by one printable ASCII byte (charset selection and the like)
///
/// SGR sequences update the parser's current [`Style`], which persists across
/// calls to [`append_line`](Parser::append_line). Feed the lines of one document
/// in order through one parser, and use a separate parser per document.
///
/// The parser never fails. Malformed input degrades as follows:
/// - An `ESC` that starts no recognizable sequence becomes part of the plain
///   text run that follows it.
/// - A lone `ESC` at the very end of a line is dropped and covered by no span.
/// - Unknown SGR codes, CSI finals and OSC commands are measured and ignored.
///
/// # Examples
///
/// ```rust
/// use ansiview_ansicodec::{Color, Parser};
///
/// let mut parser = Parser::new();
/// let first = parser.append_line("\x1b[31mHello");
/// let second = parser.append_line("World");
///
/// assert!(first[0].is_escape_sequence());
/// assert_eq!(first[1].style.foreground, Color::RED);
/// assert_eq!(second[0].style.foreground, Color::RED);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Parser {
    /// Options fixed at construction.
    config: ParserConfig,

    /// Style reached at the end of the last parsed line.
    ///
    /// Every SGR sequence mutates this value in place. It is only reset by an SGR
    /// reset or by [`Parser::clear`].
    style: Style,
}

impl Parser {
    /// Creates a parser with the default [`ParserConfig`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with the given options and the default style.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            style: Style::default(),
        }
    }

    /// Options fixed at construction.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// The style that the next line starts with.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Resets the carried style to [`Style::default`], starting a new session.
    pub fn clear(&mut self) {
        self.style = Style::default();
    }

    /// Parses one line and returns its spans in order.
    ///
    /// `text` should not contain the line terminator. The returned spans are
    /// contiguous, never empty and cover `text` completely, except for a lone
    /// trailing `ESC`.
    pub fn append_line(&mut self, text: &str) -> Vec<Span> {
        scan_line(text, &mut self.style, &self.config)
    }
}

/// Scans `text`, threading `style` through every recognized SGR sequence.
fn scan_line(text: &str, style: &mut Style, config: &ParserConfig) -> Vec<Span> {
    let bytes = text.as_bytes();
    let mut spans = Vec::new();

    // Start of the pending plain text run.
    let mut text_offset = 0;
    let mut index = 0;

    while index < bytes.len() {
        if bytes[index] != ESC {
            let next_escape = bytes[index..]
                .iter()
                .position(|byte| *byte == ESC)
                .map_or(bytes.len(), |position| index + position);
            push_span(&mut spans, text_offset, next_escape, *style);
            text_offset = next_escape;
            index = next_escape;
            continue;
        }

        if index + 1 == bytes.len() {
            debug!(offset = index, "dropping trailing escape introducer");
            break;
        }

        let escape_style = style.as_escape_sequence();
        let recognized = match bytes[index + 1] {
            CSI_INTRODUCER => recognize_csi(&bytes[index + 2..], style, config),
            OSC_INTRODUCER => recognize_osc(&bytes[index + 2..]),
            0x20..=0x7E => Some(2),
            _ => None,
        };

        match recognized {
            Some(length) => {
                push_span(&mut spans, text_offset, index, *style);
                spans.push(Span::new(index, length, escape_style));
                index += length;
                text_offset = index;
            }
            None => {
                debug!(offset = index, "unrecognized escape sequence");
                index += 1;
            }
        }
    }

    push_span(&mut spans, text_offset, index, *style);
    spans
}

/// Pushes a plain text span over `start..end`, skipping empty ranges.
fn push_span(spans: &mut Vec<Span>, start: usize, end: usize, style: Style) {
    if end > start {
        spans.push(Span::new(start, end - start, style));
    }
}

fn recognize_csi(bytes: &[u8], style: &mut Style, config: &ParserConfig) -> Option<usize> {
    let sequence = ControlSequence::recognize(bytes)?;
    if sequence.is_sgr() {
        style.apply_sgr(&sequence.sgr_parameters(), config);
    } else {
        trace!(function = ?sequence.function(), "ignoring control sequence");
    }
    Some(sequence.len())
}

fn recognize_osc(bytes: &[u8]) -> Option<usize> {
    let command = OperatingSystemCommand::recognize(bytes)?;
    trace!(command = ?command.command(), "ignoring operating system command");
    Some(command.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AttributeFlags, Color};

    fn escape_lengths(spans: &[Span]) -> Vec<usize> {
        spans
            .iter()
            .filter(|span| span.is_escape_sequence())
            .map(|span| span.length)
            .collect()
    }

    #[test]
    fn test_plain_text() {
        let spans = Parser::new().append_line("Hello");
        assert_eq!(spans, vec![Span::new(0, 5, Style::default())]);
    }

    #[test]
    fn test_empty_line() {
        assert!(Parser::new().append_line("").is_empty());
    }

    #[test]
    fn test_style_persists_across_lines() {
        let mut parser = Parser::new();
        parser.append_line("\x1b[31mHello");
        let spans = parser.append_line("World");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].style.foreground, Color::RED);
    }

    #[test]
    fn test_sgr_reset() {
        let line = "\x1b[1;31mA\x1b[0mB";
        let spans = Parser::new().append_line(line);
        assert_eq!(spans.len(), 4);

        assert_eq!(&line[spans[1].range()], "A");
        assert!(spans[1].style.attributes.contains(AttributeFlags::BOLD));
        assert_eq!(spans[1].style.foreground, Color::RED);

        assert_eq!(&line[spans[3].range()], "B");
        assert_eq!(spans[3].style, Style::default());
    }

    #[test]
    fn test_escape_span_carries_previous_style() {
        let spans = Parser::new().append_line("\x1b[1mA\x1b[31mB");
        assert_eq!(spans[0].style, Style::default().as_escape_sequence());
        assert!(spans[2].style.attributes.contains(AttributeFlags::BOLD));
        assert!(spans[2].is_escape_sequence());
        assert_eq!(spans[2].style.foreground, Color::DEFAULT_FOREGROUND);
    }

    #[test]
    fn test_dec_private_modes() {
        let spans = Parser::new().append_line("\x1b[?1h\x1b[?25l\x1b[?1000h");
        assert_eq!(escape_lengths(&spans), vec![5, 6, 8]);
        assert_eq!(spans.len(), 3);
    }

    #[test]
    fn test_cursor_movement() {
        let spans = Parser::new().append_line("\x1b[H\x1b[2;5H\x1b[5A\x1b[3C");
        assert_eq!(escape_lengths(&spans), vec![3, 6, 4, 4]);
    }

    #[test]
    fn test_osc_sequences() {
        let spans = Parser::new().append_line("\x1b]0;Window Title\x07\x1b]2;Title\x1b\\");
        assert_eq!(escape_lengths(&spans), vec![17, 11]);
    }

    #[test]
    fn test_osc_title_length() {
        let line = "\x1b]0;Title\x07";
        let spans = Parser::new().append_line(line);
        assert_eq!(spans.len(), 1);
        assert!(spans[0].is_escape_sequence());
        assert_eq!(spans[0].length, line.len());
    }

    #[test]
    fn test_short_escapes() {
        let spans = Parser::new().append_line("\x1b(B\x1b(0\x1b)A");
        // ESC ( is a two byte escape, the charset byte that follows is text.
        assert_eq!(escape_lengths(&spans), vec![2, 2, 2]);
        assert_eq!(spans.len(), 6);
    }

    #[test]
    fn test_mixed_sequences() {
        let line = "\x1b[?1h=\x1b[31m\x1b[1mBold Red\x1b[0m\x1b[?25l";
        let spans = Parser::new().append_line(line);
        assert_eq!(escape_lengths(&spans).len(), 5);
        let text: Vec<&str> = spans
            .iter()
            .filter(|span| !span.is_escape_sequence())
            .map(|span| &line[span.range()])
            .collect();
        assert_eq!(text, vec!["=", "Bold Red"]);
    }

    #[test]
    fn test_device_status_and_attributes() {
        let spans = Parser::new().append_line("\x1b[6n\x1b[>c\x1b[!p");
        assert_eq!(escape_lengths(&spans), vec![4, 4, 4]);
    }

    #[test]
    fn test_intermediate_characters() {
        let spans = Parser::new().append_line("\x1b[!p\x1b[ q\x1b[\"q");
        assert_eq!(escape_lengths(&spans), vec![4, 4, 4]);
    }

    #[test]
    fn test_trailing_escape_is_dropped() {
        let spans = Parser::new().append_line("abc\x1b");
        assert_eq!(spans, vec![Span::new(0, 3, Style::default())]);
    }

    #[test]
    fn test_truncated_csi_falls_back_to_text() {
        let line = "ab\x1b[12;\x01cd";
        let spans = Parser::new().append_line(line);
        assert_eq!(spans.len(), 2);
        assert_eq!(&line[spans[0].range()], "ab");
        assert_eq!(&line[spans[1].range()], "\x1b[12;\x01cd");
        assert!(!spans[1].is_escape_sequence());
    }

    #[test]
    fn test_truncated_osc_keeps_later_sequences() {
        let line = "\x1b]0;title \x1b[31mred";
        let spans = Parser::new().append_line(line);
        assert_eq!(&line[spans[0].range()], "\x1b]0;title ");
        assert!(!spans[0].is_escape_sequence());
        assert!(spans[1].is_escape_sequence());
        assert_eq!(spans[2].style.foreground, Color::RED);
    }

    #[test]
    fn test_failed_escape_before_escape_is_covered() {
        let line = "\x1b\x1b[1mX";
        let spans = Parser::new().append_line(line);
        assert_eq!(spans[0], Span::new(0, 1, Style::default()));
        assert_eq!(spans[1].range(), 1..5);
        assert!(spans[1].is_escape_sequence());
        assert_eq!(spans[2].range(), 5..6);
    }

    #[test]
    fn test_unparseable_parameter_does_not_shift_codes() {
        let spans = Parser::new().append_line("\x1b[38;5;?;31mX");
        assert_eq!(spans.len(), 2);
        assert!(spans[0].is_escape_sequence());
        assert_eq!(spans[1].style.foreground, Color::RED);
    }

    #[test]
    fn test_multibyte_offsets_are_bytes() {
        let line = "日本\x1b[32m語";
        let spans = Parser::new().append_line(line);
        assert_eq!(&line[spans[0].range()], "日本");
        assert_eq!(&line[spans[2].range()], "語");
        assert_eq!(spans[2].style.foreground, Color::GREEN);
    }

    #[test]
    fn test_clear_resets_style() {
        let mut parser = Parser::new();
        parser.append_line("\x1b[1;4;35;44m");
        assert_ne!(*parser.style(), Style::default());

        parser.clear();
        assert_eq!(*parser.style(), Style::default());
        assert_eq!(
            parser.append_line("x\x1b[3my"),
            Parser::new().append_line("x\x1b[3my")
        );
    }

    #[test]
    fn test_double_underline_config() {
        let mut parser = Parser::with_config(ParserConfig::iso());
        let spans = parser.append_line("\x1b[1;21mX");
        let attributes = spans[1].style.attributes;
        assert!(attributes.contains(AttributeFlags::DOUBLE_UNDERLINE));
        assert!(attributes.contains(AttributeFlags::BOLD));

        let spans = Parser::new().append_line("\x1b[1;21mX");
        assert!(spans[1].style.attributes.is_empty());
    }
}

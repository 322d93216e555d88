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

use crate::Style;
use std::ops::Range;

/// A contiguous byte range of one line together with the style in effect over it.
///
/// Offsets are byte offsets into the `&str` handed to
/// [`Parser::append_line`](crate::Parser::append_line). Every escape grammar is
/// pure ASCII, so span boundaries always land on `char` boundaries and
/// `&line[span.range()]` never panics.
///
/// Escape sequence spans carry [`AttributeFlags::ESCAPE_SEQUENCE`](crate::AttributeFlags::ESCAPE_SEQUENCE)
/// in their style.
///
/// # Examples
///
/// ```rust
/// use ansiview_ansicodec::Parser;
///
/// let line = "\x1b[1mBold";
/// let spans = Parser::new().append_line(line);
/// assert!(spans[0].is_escape_sequence());
/// assert_eq!(&line[spans[1].range()], "Bold");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    /// Byte offset of the first byte of the span
    pub offset: usize,
    /// Number of bytes covered, always greater than zero
    pub length: usize,
    /// Style in effect over the span
    pub style: Style,
}

impl Span {
    pub fn new(offset: usize, length: usize, style: Style) -> Span {
        Span {
            offset,
            length,
            style,
        }
    }

    /// Exclusive end offset.
    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    pub fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }

    pub fn is_escape_sequence(&self) -> bool {
        self.style.is_escape_sequence()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_range() {
        let span = Span::new(3, 4, Style::default());
        assert_eq!(span.end(), 7);
        assert_eq!(span.range(), 3..7);
        assert!(!span.is_escape_sequence());
    }

    #[test]
    fn test_escape_span() {
        let span = Span::new(0, 2, Style::default().as_escape_sequence());
        assert!(span.is_escape_sequence());
    }
}

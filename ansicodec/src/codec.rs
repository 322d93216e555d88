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

use crate::{AnsiCodecError, AnsiCodecResult, LineCodecConfig, Parser, Span};
use bytes::{Buf, BytesMut};
use tokio_util::codec::Decoder;
use tracing::{instrument, trace, warn};

/// One decoded line and its spans.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnsiLine {
    /// Line content without its terminator
    pub text: String,
    /// Spans over `text`, as produced by [`Parser::append_line`]
    pub spans: Vec<Span>,
}

impl AnsiLine {
    /// Pairs each span with the text it covers.
    pub fn segments(&self) -> impl Iterator<Item = (&str, &Span)> {
        self.spans
            .iter()
            .map(move |span| (&self.text[span.range()], span))
    }
}

/// Frames a byte stream into lines and parses each one into styled spans.
///
/// The codec owns a single [`Parser`], so styles carry from one line to the next
/// for the lifetime of the stream. Invalid UTF-8 is replaced with `U+FFFD` before
/// parsing. A line longer than [`LineCodecConfig::max_line_length`] is discarded
/// and reported as [`AnsiCodecError::LineTooLong`]; decoding may continue
/// afterwards. When the overlong line has no line feed yet, bytes are dropped
/// through the next one before decoding resumes.
pub struct LineSpanCodec {
    config: LineCodecConfig,
    parser: Parser,
    /// Bytes of `src` already searched for a line feed.
    next_index: usize,
    /// Dropping the tail of an overlong line.
    discarding: bool,
}

impl LineSpanCodec {
    /// Creates a codec with the given configuration.
    pub fn new(config: LineCodecConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        Self {
            config,
            parser,
            next_index: 0,
            discarding: false,
        }
    }

    pub fn config(&self) -> &LineCodecConfig {
        &self.config
    }

    /// The parser holding the style carried into the next line.
    pub fn parser(&self) -> &Parser {
        &self.parser
    }

    /// Resets the carried style.
    pub fn clear(&mut self) {
        self.parser.clear();
    }

    fn parse_line(&mut self, mut line: BytesMut) -> AnsiLine {
        if self.config.strip_carriage_return && line.last() == Some(&b'\r') {
            line.truncate(line.len() - 1);
        }
        let text = String::from_utf8_lossy(&line).into_owned();
        let spans = self.parser.append_line(&text);
        trace!(length = text.len(), spans = spans.len(), "decoded line");
        AnsiLine { text, spans }
    }

    /// Drops the tail of an overlong line. Returns true once its line feed was seen.
    fn skip_discarded(&mut self, src: &mut BytesMut) -> bool {
        match src.iter().position(|byte| *byte == b'\n') {
            Some(position) => {
                src.advance(position + 1);
                self.discarding = false;
                trace!(length = position + 1, "dropped overlong line tail");
                true
            }
            None => {
                trace!(length = src.len(), "dropped overlong line tail");
                src.clear();
                false
            }
        }
    }

    fn discard(&mut self, src: &mut BytesMut, length: usize) -> AnsiCodecError {
        src.advance(length);
        self.next_index = 0;
        warn!(
            length,
            max = self.config.max_line_length,
            "discarding overlong line"
        );
        AnsiCodecError::LineTooLong {
            length,
            max: self.config.max_line_length,
        }
    }
}

impl Default for LineSpanCodec {
    fn default() -> Self {
        LineSpanCodec::new(LineCodecConfig::default())
    }
}

impl Decoder for LineSpanCodec {
    type Item = AnsiLine;
    type Error = AnsiCodecError;

    #[instrument(skip_all)]
    fn decode(&mut self, src: &mut BytesMut) -> AnsiCodecResult<Option<AnsiLine>> {
        if self.discarding && !self.skip_discarded(src) {
            return Ok(None);
        }
        let start = self.next_index.min(src.len());
        let newline = src[start..]
            .iter()
            .position(|byte| *byte == b'\n')
            .map(|position| start + position);

        match newline {
            Some(position) if position > self.config.max_line_length => {
                Err(self.discard(src, position + 1))
            }
            Some(position) => {
                let mut line = src.split_to(position + 1);
                line.truncate(position);
                self.next_index = 0;
                Ok(Some(self.parse_line(line)))
            }
            None if src.len() > self.config.max_line_length => {
                let length = src.len();
                self.discarding = true;
                Err(self.discard(src, length))
            }
            None => {
                self.next_index = src.len();
                Ok(None)
            }
        }
    }

    #[instrument(skip_all)]
    fn decode_eof(&mut self, src: &mut BytesMut) -> AnsiCodecResult<Option<AnsiLine>> {
        if let Some(line) = self.decode(src)? {
            return Ok(Some(line));
        }
        if src.is_empty() || self.discarding {
            src.clear();
            self.discarding = false;
            return Ok(None);
        }
        let line = src.split_to(src.len());
        self.next_index = 0;
        Ok(Some(self.parse_line(line)))
    }
}

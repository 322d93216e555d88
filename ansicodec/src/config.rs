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

use crate::consts::MAX_LINE_LENGTH;

/// Options that change how SGR codes are interpreted.
///
/// SGR code `21` has two meanings in the wild. ISO 6429 defines it as doubly
/// underlined, while many terminals treat it as "bold off". The parser never
/// guesses; the caller picks one when constructing a [`Parser`](crate::Parser).
///
/// # Examples
///
/// ```rust
/// use ansiview_ansicodec::{Parser, ParserConfig};
///
/// let mut parser = Parser::with_config(ParserConfig::iso());
/// let spans = parser.append_line("\x1b[21mtext");
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ParserConfig {
    /// Treat SGR `21` as double underline instead of "not bold"
    pub double_underline: bool,
}

impl ParserConfig {
    /// SGR `21` clears bold, matching most terminal emulators.
    pub fn common() -> ParserConfig {
        ParserConfig {
            double_underline: false,
        }
    }

    /// SGR `21` selects double underline, as ISO 6429 specifies.
    pub fn iso() -> ParserConfig {
        ParserConfig {
            double_underline: true,
        }
    }

    /// Set the meaning of SGR `21`
    pub fn with_double_underline(mut self, enabled: bool) -> Self {
        self.double_underline = enabled;
        self
    }
}

/// Settings for the streaming [`LineSpanCodec`](crate::LineSpanCodec).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LineCodecConfig {
    /// Options for the parser owned by the codec
    pub parser: ParserConfig,
    /// Longest line, in bytes, buffered before giving up on it
    pub max_line_length: usize,
    /// Drop a `\r` that directly precedes the line feed
    pub strip_carriage_return: bool,
}

impl LineCodecConfig {
    /// Set the parser options
    pub fn with_parser(mut self, parser: ParserConfig) -> Self {
        self.parser = parser;
        self
    }

    /// Set the maximum line length
    pub fn with_max_line_length(mut self, max: usize) -> Self {
        self.max_line_length = max;
        self
    }

    /// Keep or drop carriage returns before line feeds
    pub fn with_strip_carriage_return(mut self, enabled: bool) -> Self {
        self.strip_carriage_return = enabled;
        self
    }
}

impl Default for LineCodecConfig {
    fn default() -> Self {
        LineCodecConfig {
            parser: ParserConfig::default(),
            max_line_length: MAX_LINE_LENGTH,
            strip_carriage_return: true,
        }
    }
}

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

use crate::{AttributeFlags, Color, ParserConfig};
use tracing::trace;

/// Rendering state accumulated from Select Graphic Rendition (SGR) sequences.
///
/// A [`Parser`](crate::Parser) owns one `Style` that every `ESC[...m` sequence
/// mutates in place through [`Style::apply_sgr`]. Plain text spans receive a copy
/// of it, so the style reached at the end of one line carries on to the next.
///
/// # Examples
///
/// ```rust
/// use ansiview_ansicodec::{AttributeFlags, Color, ParserConfig, Style};
///
/// let mut style = Style::default();
/// style.apply_sgr(&[1, 31], &ParserConfig::default());
/// assert!(style.attributes.contains(AttributeFlags::BOLD));
/// assert_eq!(style.foreground, Color::RED);
///
/// style.apply_sgr(&[0], &ParserConfig::default());
/// assert_eq!(style, Style::default());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Style {
    /// The background color of the text.
    ///
    /// | Code           | Description          |
    /// |----------------|----------------------|
    /// | `40-47`        | Named color          |
    /// | `48;5;n`       | 256-color palette    |
    /// | `48;2;r;g;b`   | 24-bit RGB           |
    /// | `49`           | Default background   |
    /// | `100-107`      | Bright named color   |
    pub background: Color,
    /// The foreground color of the text.
    ///
    /// | Code           | Description          |
    /// |----------------|----------------------|
    /// | `30-37`        | Named color          |
    /// | `38;5;n`       | 256-color palette    |
    /// | `38;2;r;g;b`   | 24-bit RGB           |
    /// | `39`           | Default foreground   |
    /// | `90-97`        | Bright named color   |
    pub foreground: Color,
    /// Boolean rendering attributes. See [`AttributeFlags`].
    pub attributes: AttributeFlags,
    /// Selected font, `0` (primary) through `9`. Codes `10-19`.
    pub font: u8,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            background: Color::DEFAULT_BACKGROUND,
            foreground: Color::DEFAULT_FOREGROUND,
            attributes: AttributeFlags::NONE,
            font: 0,
        }
    }
}

impl Style {
    /// Copy of this style flagged as an escape sequence.
    pub fn as_escape_sequence(&self) -> Style {
        Style {
            attributes: self.attributes | AttributeFlags::ESCAPE_SEQUENCE,
            ..*self
        }
    }

    pub fn is_escape_sequence(&self) -> bool {
        self.attributes.contains(AttributeFlags::ESCAPE_SEQUENCE)
    }

    /// Applies SGR parameters left to right.
    ///
    /// Unknown codes are ignored. Codes `38` and `48` consume the parameters that
    /// follow them (`5;n` or `2;r;g;b`); when those values fall outside `0-255` the
    /// color is left unchanged but the parameters are still skipped.
    ///
    /// Codes `58` and `59` (underline color) are recognized and ignored.
    pub fn apply_sgr(&mut self, params: &[u32], config: &ParserConfig) {
        let mut index = 0;
        while index < params.len() {
            let code = params[index];
            match code {
                0 => *self = Style::default(),

                1 => self.attributes.enable(AttributeFlags::BOLD),
                2 => self.attributes.enable(AttributeFlags::FAINT),
                3 => self.attributes.enable(AttributeFlags::ITALIC),
                4 => self.attributes.enable(AttributeFlags::UNDERLINE),
                5 => self.attributes.enable(AttributeFlags::SLOW_BLINK),
                6 => self.attributes.enable(AttributeFlags::RAPID_BLINK),
                7 => self.attributes.insert(AttributeFlags::INVERSE),
                8 => self.attributes.insert(AttributeFlags::CONCEAL),
                9 => self.attributes.insert(AttributeFlags::CROSSED_OUT),

                10..=19 => self.font = (code - 10) as u8,
                20 => self.attributes.enable(AttributeFlags::FRAKTUR),
                21 if config.double_underline => {
                    self.attributes.enable(AttributeFlags::DOUBLE_UNDERLINE)
                }
                21 => self.attributes.remove(AttributeFlags::BOLD),

                22 => self
                    .attributes
                    .remove(AttributeFlags::BOLD | AttributeFlags::FAINT),
                23 => self
                    .attributes
                    .remove(AttributeFlags::ITALIC | AttributeFlags::FRAKTUR),
                24 => self
                    .attributes
                    .remove(AttributeFlags::UNDERLINE | AttributeFlags::DOUBLE_UNDERLINE),
                25 => self
                    .attributes
                    .remove(AttributeFlags::SLOW_BLINK | AttributeFlags::RAPID_BLINK),
                26 => self.attributes.insert(AttributeFlags::PROPORTIONAL),
                27 => self.attributes.remove(AttributeFlags::INVERSE),
                28 => self.attributes.remove(AttributeFlags::CONCEAL),
                29 => self.attributes.remove(AttributeFlags::CROSSED_OUT),

                30..=37 => self.foreground = Color::named((code - 30) as u8),
                38 => {
                    let (color, consumed) = extended_color(params, index);
                    if let Some(color) = color {
                        self.foreground = color;
                    }
                    index += consumed;
                }
                39 => self.foreground = Color::DEFAULT_FOREGROUND,

                40..=47 => self.background = Color::named((code - 40) as u8),
                48 => {
                    let (color, consumed) = extended_color(params, index);
                    if let Some(color) = color {
                        self.background = color;
                    }
                    index += consumed;
                }
                49 => self.background = Color::DEFAULT_BACKGROUND,

                50 => self.attributes.remove(AttributeFlags::PROPORTIONAL),
                51 => self.attributes.enable(AttributeFlags::FRAMED),
                52 => self.attributes.enable(AttributeFlags::ENCIRCLED),
                53 => self.attributes.insert(AttributeFlags::OVERLINED),
                54 => self
                    .attributes
                    .remove(AttributeFlags::FRAMED | AttributeFlags::ENCIRCLED),
                55 => self.attributes.remove(AttributeFlags::OVERLINED),
                // Underline color is not tracked.
                58 | 59 => {}

                73 => self.attributes.enable(AttributeFlags::SUPERSCRIPT),
                74 => self.attributes.enable(AttributeFlags::SUBSCRIPT),

                90..=97 => self.foreground = Color::bright((code - 90) as u8),
                100..=107 => self.background = Color::bright((code - 100) as u8),

                _ => trace!(code, "ignoring unsupported SGR code"),
            }
            index += 1;
        }
    }
}

/// Decodes the extended color starting at `params[index]` (a `38` or `48`).
///
/// Returns the color, when valid, and the number of parameters it occupies past
/// the introducing code: `2` for `5;n`, `4` for `2;r;g;b`, otherwise `0`.
fn extended_color(params: &[u32], index: usize) -> (Option<Color>, usize) {
    let channel = |offset: usize| {
        params
            .get(index + offset)
            .and_then(|value| u8::try_from(*value).ok())
    };
    match params.get(index + 1) {
        Some(5) => (channel(2).map(Color::from_fixed), 2),
        Some(2) => {
            let color = match (channel(2), channel(3), channel(4)) {
                (Some(r), Some(g), Some(b)) => Some(Color::rgb(r, g, b)),
                _ => None,
            };
            (color, 4)
        }
        _ => (None, 0),
    }
}

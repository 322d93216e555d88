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

//! Control Sequence Introducer (`ESC [`) grammar.
//!
//! A control sequence is matched as
//!
//! ```text
//! ESC [  [<=>?]?  [0-9:;<=>?]*  [\x20-\x2F]*  [\x40-\x7E]
//!        marker   parameters    intermediates  final
//! ```
//!
//! Only SGR (`m`) changes styling. Everything else is classified so that its
//! full extent can be hidden, but no terminal state is emulated.

/// A recognized control sequence, borrowing from the scanned line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlSequence<'a> {
    private_marker: Option<u8>,
    parameters: &'a [u8],
    intermediates: &'a [u8],
    final_byte: u8,
}

/// ED - Erase in Display mode parameter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EraseInDisplayMode {
    /// ESC[0J or ESC[J
    EraseToEndOfScreen,
    /// ESC[1J
    EraseToBeginningOfScreen,
    /// ESC[2J
    EraseEntireScreen,
    /// ESC[3J, also clears scrollback
    EraseEntireScreenAndSavedLines,
}

/// EL - Erase in Line mode parameter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EraseInLineMode {
    /// ESC[0K or ESC[K
    EraseToEndOfLine,
    /// ESC[1K
    EraseToStartOfLine,
    /// ESC[2K
    EraseEntireLine,
}

/// What a [`ControlSequence`] would do on a real terminal.
///
/// Parameters that are missing or zero fall back to the VT100 defaults (`1` for
/// counts and positions, `0` for erase modes, `6` for status reports).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlFunction {
    /// SGR - Select Graphic Rendition, `ESC[...m`
    SelectGraphicRendition(Vec<u32>),

    /// DECSET / DECRST - `ESC[?...h` and `ESC[?...l`
    DecPrivateMode {
        /// `true` for `h`, `false` for `l`
        set: bool,
        /// Mode numbers, e.g. `25` for cursor visibility
        modes: Vec<u32>,
    },

    /// CUP / HVP - `ESC[row;colH` or `ESC[row;colf`
    CursorPosition { row: u32, col: u32 },
    /// CUU - `ESC[nA`
    CursorUp(u32),
    /// CUD - `ESC[nB`
    CursorDown(u32),
    /// CUF - `ESC[nC`
    CursorForward(u32),
    /// CUB - `ESC[nD`
    CursorBack(u32),
    /// CNL - `ESC[nE`
    CursorNextLine(u32),
    /// CPL - `ESC[nF`
    CursorPreviousLine(u32),
    /// CHA - `ESC[nG`
    CursorHorizontalAbsolute(u32),

    /// ED - `ESC[nJ`
    EraseInDisplay(EraseInDisplayMode),
    /// EL - `ESC[nK`
    EraseInLine(EraseInLineMode),

    /// SU - `ESC[nS`
    ScrollUp(u32),
    /// SD - `ESC[nT`
    ScrollDown(u32),

    /// SCP - `ESC[s`
    SaveCursorPosition,
    /// RCP - `ESC[u`
    RestoreCursorPosition,

    /// DSR - `ESC[nn`
    DeviceStatusReport(u32),
    /// DA - `ESC[c` (primary) or `ESC[>c` (secondary)
    DeviceAttributes {
        /// Whether the `>` marker asked for secondary attributes
        secondary: bool,
    },
    /// DECSTR - `ESC[!p`
    SoftReset,

    /// Any other final byte.
    Unknown(u8),
}

impl<'a> ControlSequence<'a> {
    /// Matches a control sequence at the start of `bytes`, which begins right
    /// after the `ESC [` introducer.
    ///
    /// Returns `None` when a byte outside the grammar, or the end of input, is
    /// reached before a final byte.
    pub fn recognize(bytes: &'a [u8]) -> Option<ControlSequence<'a>> {
        let mut index = 0;

        let private_marker = match bytes.first() {
            Some(&byte) if is_private_marker(byte) => {
                index += 1;
                Some(byte)
            }
            _ => None,
        };

        let parameters_start = index;
        while index < bytes.len() && is_parameter_byte(bytes[index]) {
            index += 1;
        }
        let parameters = &bytes[parameters_start..index];

        let intermediates_start = index;
        while index < bytes.len() && is_intermediate_byte(bytes[index]) {
            index += 1;
        }
        let intermediates = &bytes[intermediates_start..index];

        match bytes.get(index) {
            Some(&final_byte) if is_final_byte(final_byte) => Some(ControlSequence {
                private_marker,
                parameters,
                intermediates,
                final_byte,
            }),
            _ => None,
        }
    }

    /// Total length in bytes, including the two byte `ESC [` introducer.
    pub fn len(&self) -> usize {
        2 + usize::from(self.private_marker.is_some())
            + self.parameters.len()
            + self.intermediates.len()
            + 1
    }

    pub fn private_marker(&self) -> Option<u8> {
        self.private_marker
    }

    /// Raw parameter bytes, without the private marker.
    pub fn parameters(&self) -> &'a [u8] {
        self.parameters
    }

    pub fn intermediates(&self) -> &'a [u8] {
        self.intermediates
    }

    pub fn final_byte(&self) -> u8 {
        self.final_byte
    }

    pub fn is_sgr(&self) -> bool {
        self.final_byte == b'm'
    }

    /// Numeric parameters for an SGR sequence. An empty list becomes `[0]`.
    pub fn sgr_parameters(&self) -> Vec<u32> {
        let mut params = parse_parameters(self.parameters);
        if params.is_empty() {
            params.push(0);
        }
        params
    }

    /// Classifies the sequence.
    pub fn function(&self) -> ControlFunction {
        let params = parse_parameters(self.parameters);
        let first = params.first().copied().unwrap_or(0);
        let count = if first == 0 { 1 } else { first };

        match (self.private_marker, self.final_byte) {
            (_, b'm') => ControlFunction::SelectGraphicRendition(self.sgr_parameters()),
            (Some(b'?'), b'h') => ControlFunction::DecPrivateMode {
                set: true,
                modes: params,
            },
            (Some(b'?'), b'l') => ControlFunction::DecPrivateMode {
                set: false,
                modes: params,
            },
            (_, b'H' | b'f') => {
                let col = params.get(1).copied().unwrap_or(0);
                ControlFunction::CursorPosition {
                    row: count,
                    col: if col == 0 { 1 } else { col },
                }
            }
            (_, b'A') => ControlFunction::CursorUp(count),
            (_, b'B') => ControlFunction::CursorDown(count),
            (_, b'C') => ControlFunction::CursorForward(count),
            (_, b'D') => ControlFunction::CursorBack(count),
            (_, b'E') => ControlFunction::CursorNextLine(count),
            (_, b'F') => ControlFunction::CursorPreviousLine(count),
            (_, b'G') => ControlFunction::CursorHorizontalAbsolute(count),
            (_, b'J') => ControlFunction::EraseInDisplay(match first {
                1 => EraseInDisplayMode::EraseToBeginningOfScreen,
                2 => EraseInDisplayMode::EraseEntireScreen,
                3 => EraseInDisplayMode::EraseEntireScreenAndSavedLines,
                _ => EraseInDisplayMode::EraseToEndOfScreen,
            }),
            (_, b'K') => ControlFunction::EraseInLine(match first {
                1 => EraseInLineMode::EraseToStartOfLine,
                2 => EraseInLineMode::EraseEntireLine,
                _ => EraseInLineMode::EraseToEndOfLine,
            }),
            (_, b'S') => ControlFunction::ScrollUp(count),
            (_, b'T') => ControlFunction::ScrollDown(count),
            (_, b's') => ControlFunction::SaveCursorPosition,
            (_, b'u') => ControlFunction::RestoreCursorPosition,
            (_, b'n') => ControlFunction::DeviceStatusReport(if first == 0 { 6 } else { first }),
            (marker, b'c') => ControlFunction::DeviceAttributes {
                secondary: marker == Some(b'>'),
            },
            (_, b'p') if self.intermediates.contains(&b'!') => ControlFunction::SoftReset,
            (_, other) => ControlFunction::Unknown(other),
        }
    }
}

/// Splits a parameter string on `;` and reads the leading decimal digits of each
/// segment. Empty segments are dropped. A segment without a leading digit keeps
/// its position as [`UNPARSEABLE_PARAMETER`], and values saturate below it.
pub(crate) fn parse_parameters(parameters: &[u8]) -> Vec<u32> {
    parameters
        .split(|byte| *byte == b';')
        .filter(|segment| !segment.is_empty())
        .map(leading_number)
        .collect()
}

/// Placeholder for a parameter segment that is not a number. No SGR code or
/// control function matches it.
pub const UNPARSEABLE_PARAMETER: u32 = u32::MAX;

fn leading_number(segment: &[u8]) -> u32 {
    let mut value: Option<u32> = None;
    for byte in segment.iter().take_while(|byte| byte.is_ascii_digit()) {
        let digit = u32::from(byte - b'0');
        value = Some(
            value
                .unwrap_or(0)
                .saturating_mul(10)
                .saturating_add(digit)
                .min(UNPARSEABLE_PARAMETER - 1),
        );
    }
    value.unwrap_or(UNPARSEABLE_PARAMETER)
}

fn is_private_marker(byte: u8) -> bool {
    matches!(byte, b'<' | b'=' | b'>' | b'?')
}

fn is_parameter_byte(byte: u8) -> bool {
    matches!(byte, b'0'..=b'9' | b':' | b';' | b'<' | b'=' | b'>' | b'?')
}

fn is_intermediate_byte(byte: u8) -> bool {
    (0x20..=0x2F).contains(&byte)
}

fn is_final_byte(byte: u8) -> bool {
    (0x40..=0x7E).contains(&byte)
}

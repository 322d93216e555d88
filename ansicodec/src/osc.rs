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

//! Operating System Command (`ESC ]`) grammar.
//!
//! An OSC runs from its introducer to the first `BEL` or `ESC \`. The content is
//! split at the first `;` into a command number and a payload. No command has an
//! effect on styling.

use crate::consts::{BEL, ESC, STRING_TERMINATOR};

/// How an OSC sequence was terminated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OscTerminator {
    /// `BEL` (0x07)
    Bell,
    /// `ESC \`
    StringTerminator,
}

impl OscTerminator {
    pub fn len(&self) -> usize {
        match self {
            OscTerminator::Bell => 1,
            OscTerminator::StringTerminator => 2,
        }
    }
}

/// Classified OSC command number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OscCommand {
    /// `0` - set icon name and window title
    SetTitleAndIcon(String),
    /// `1` - set icon name
    SetIconName(String),
    /// `2` - set window title
    SetWindowTitle(String),
    /// `4` - set or query palette entries
    Palette,
    /// `10-19` - set or query dynamic colors
    DynamicColor(u32),
    /// `52` - clipboard access
    Clipboard,
    /// Any other command, with its number when it has one
    Unknown(Option<u32>),
}

/// A recognized OSC sequence, borrowing from the scanned line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperatingSystemCommand<'a> {
    content: &'a [u8],
    terminator: OscTerminator,
}

impl<'a> OperatingSystemCommand<'a> {
    /// Matches an OSC at the start of `bytes`, which begins right after the
    /// `ESC ]` introducer. Returns `None` when no terminator is found.
    pub fn recognize(bytes: &'a [u8]) -> Option<OperatingSystemCommand<'a>> {
        for (index, &byte) in bytes.iter().enumerate() {
            let terminator = match byte {
                BEL => OscTerminator::Bell,
                ESC if bytes.get(index + 1) == Some(&STRING_TERMINATOR) => {
                    OscTerminator::StringTerminator
                }
                _ => continue,
            };
            return Some(OperatingSystemCommand {
                content: &bytes[..index],
                terminator,
            });
        }
        None
    }

    /// Total length in bytes, from the `ESC ]` introducer through the terminator.
    pub fn len(&self) -> usize {
        2 + self.content.len() + self.terminator.len()
    }

    /// Bytes between the introducer and the terminator.
    pub fn content(&self) -> &'a [u8] {
        self.content
    }

    pub fn terminator(&self) -> OscTerminator {
        self.terminator
    }

    /// Payload to the right of the first `;`.
    pub fn payload(&self) -> Option<&'a [u8]> {
        self.split().map(|(_, payload)| payload)
    }

    /// Classifies the command. `None` when the content has no `;`.
    pub fn command(&self) -> Option<OscCommand> {
        let (number, payload) = self.split()?;
        let number = leading_number(number);
        let text = || String::from_utf8_lossy(payload).into_owned();
        Some(match number {
            Some(0) => OscCommand::SetTitleAndIcon(text()),
            Some(1) => OscCommand::SetIconName(text()),
            Some(2) => OscCommand::SetWindowTitle(text()),
            Some(4) => OscCommand::Palette,
            Some(code @ 10..=19) => OscCommand::DynamicColor(code),
            Some(52) => OscCommand::Clipboard,
            other => OscCommand::Unknown(other),
        })
    }

    fn split(&self) -> Option<(&'a [u8], &'a [u8])> {
        let separator = self.content.iter().position(|byte| *byte == b';')?;
        Some((&self.content[..separator], &self.content[separator + 1..]))
    }
}

fn leading_number(segment: &[u8]) -> Option<u32> {
    let digits = segment.iter().take_while(|byte| byte.is_ascii_digit()).count();
    std::str::from_utf8(&segment[..digits]).ok()?.parse().ok()
}

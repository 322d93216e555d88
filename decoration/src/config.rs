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

use crate::{DecorationError, DecorationResult};
use ansiview_ansicodec::ParserConfig;
use std::fmt;
use std::str::FromStr;

/// How escape sequence text is shown in the raw annotated view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EscapeDisplay {
    /// Escape sequences look like ordinary text
    Normal,
    /// Escape sequences are fully transparent
    Hidden,
    /// Escape sequences are drawn at half opacity
    #[default]
    Dimmed,
}

impl EscapeDisplay {
    pub fn as_str(&self) -> &'static str {
        match self {
            EscapeDisplay::Normal => "normal",
            EscapeDisplay::Hidden => "hidden",
            EscapeDisplay::Dimmed => "dimmed",
        }
    }
}

impl FromStr for EscapeDisplay {
    type Err = DecorationError;

    fn from_str(value: &str) -> DecorationResult<Self> {
        match value {
            "normal" => Ok(EscapeDisplay::Normal),
            "hidden" => Ok(EscapeDisplay::Hidden),
            "dimmed" => Ok(EscapeDisplay::Dimmed),
            other => Err(DecorationError::UnknownEscapeDisplay(other.to_string())),
        }
    }
}

impl fmt::Display for EscapeDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings that decoration passes and caches read.
///
/// # Examples
///
/// ```rust
/// use ansiview_decoration::{DecorationConfig, EscapeDisplay};
///
/// let config = DecorationConfig::default()
///     .with_escape_display("hidden".parse().unwrap());
/// assert_eq!(config.escape_display, EscapeDisplay::Hidden);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecorationConfig {
    /// Appearance of escape sequence spans
    pub escape_display: EscapeDisplay,
    /// Options for the parser created by each decoration pass
    pub parser: ParserConfig,
}

impl DecorationConfig {
    /// Set the escape sequence display mode
    pub fn with_escape_display(mut self, display: EscapeDisplay) -> Self {
        self.escape_display = display;
        self
    }

    /// Set the parser options
    pub fn with_parser(mut self, parser: ParserConfig) -> Self {
        self.parser = parser;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_display_parse() {
        assert_eq!("normal".parse(), Ok(EscapeDisplay::Normal));
        assert_eq!("hidden".parse(), Ok(EscapeDisplay::Hidden));
        assert_eq!("dimmed".parse(), Ok(EscapeDisplay::Dimmed));
        assert_eq!(
            "Dimmed".parse::<EscapeDisplay>(),
            Err(DecorationError::UnknownEscapeDisplay("Dimmed".to_string()))
        );
    }

    #[test]
    fn test_escape_display_round_trips_through_display() {
        for display in [
            EscapeDisplay::Normal,
            EscapeDisplay::Hidden,
            EscapeDisplay::Dimmed,
        ] {
            assert_eq!(display.to_string().parse(), Ok(display));
        }
    }

    #[test]
    fn test_defaults() {
        let config = DecorationConfig::default();
        assert_eq!(config.escape_display, EscapeDisplay::Dimmed);
        assert!(!config.parser.double_underline);

        let config = config.with_parser(ParserConfig::iso());
        assert!(config.parser.double_underline);
    }
}

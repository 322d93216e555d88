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

//! Mapping of parsed [`Style`]s onto concrete rendering attributes.

use crate::EscapeDisplay;
use ansiview_ansicodec::{AttributeFlags, Color, ColorKind, Style};
use std::fmt;

const ANSI_KEYS: [&str; 8] = [
    "terminal.ansiBlack",
    "terminal.ansiRed",
    "terminal.ansiGreen",
    "terminal.ansiYellow",
    "terminal.ansiBlue",
    "terminal.ansiMagenta",
    "terminal.ansiCyan",
    "terminal.ansiWhite",
];

const ANSI_BRIGHT_KEYS: [&str; 8] = [
    "terminal.ansiBrightBlack",
    "terminal.ansiBrightRed",
    "terminal.ansiBrightGreen",
    "terminal.ansiBrightYellow",
    "terminal.ansiBrightBlue",
    "terminal.ansiBrightMagenta",
    "terminal.ansiBrightCyan",
    "terminal.ansiBrightWhite",
];

/// A color owned by the host theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemeColor {
    /// One of the sixteen terminal palette entries
    Ansi { index: u8, bright: bool },
    DefaultForeground,
    DefaultBackground,
}

impl ThemeColor {
    /// Theme key naming this color, e.g. `terminal.ansiBrightRed`.
    pub fn key(&self) -> &'static str {
        match *self {
            ThemeColor::Ansi { index, bright } => {
                let keys = if bright { &ANSI_BRIGHT_KEYS } else { &ANSI_KEYS };
                keys[usize::from(index & 0x07)]
            }
            ThemeColor::DefaultForeground => "editor.foreground",
            ThemeColor::DefaultBackground => "editor.background",
        }
    }
}

/// Whether the default color sentinels paint or defer to the underlying text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DefaultColors {
    /// Defaults resolve to [`ResolvedColor::Inherit`]
    #[default]
    Inherit,
    /// Defaults resolve to the theme's editor colors
    Explicit,
}

/// A color ready for a renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResolvedColor {
    /// Leave the color of the underlying text alone
    #[default]
    Inherit,
    Theme(ThemeColor),
    Rgb(u8, u8, u8),
}

impl ResolvedColor {
    pub fn resolve(color: Color, defaults: DefaultColors) -> ResolvedColor {
        match (color.kind(), defaults) {
            (ColorKind::DefaultForeground | ColorKind::DefaultBackground, DefaultColors::Inherit) => {
                ResolvedColor::Inherit
            }
            (ColorKind::DefaultForeground, DefaultColors::Explicit) => {
                ResolvedColor::Theme(ThemeColor::DefaultForeground)
            }
            (ColorKind::DefaultBackground, DefaultColors::Explicit) => {
                ResolvedColor::Theme(ThemeColor::DefaultBackground)
            }
            (ColorKind::Named { index, bright }, _) => {
                ResolvedColor::Theme(ThemeColor::Ansi { index, bright })
            }
            (ColorKind::Rgb(r, g, b), _) => ResolvedColor::Rgb(r, g, b),
        }
    }

    pub fn is_inherit(&self) -> bool {
        matches!(self, ResolvedColor::Inherit)
    }
}

impl fmt::Display for ResolvedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedColor::Inherit => f.write_str("inherit"),
            ResolvedColor::Theme(color) => f.write_str(color.key()),
            ResolvedColor::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Underline {
    #[default]
    None,
    Single,
    Double,
}

/// Everything a renderer needs to draw one decoration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RenderStyle {
    /// Fill color behind the text
    pub background: ResolvedColor,
    /// Text color
    pub foreground: ResolvedColor,
    pub bold: bool,
    pub italic: bool,
    pub underline: Underline,
    pub crossed_out: bool,
    pub conceal: bool,
    /// Opacity in percent, `None` for fully opaque
    pub opacity: Option<u8>,
}

impl RenderStyle {
    /// Resolves a parsed style for display.
    ///
    /// With [`AttributeFlags::INVERSE`] set, the foreground paints the fill and
    /// the background paints the text, and default colors resolve explicitly
    /// regardless of `defaults`. `style` itself is left untouched, so clearing
    /// inverse later restores the original colors.
    pub fn resolve(style: &Style, defaults: DefaultColors) -> RenderStyle {
        let attributes = style.attributes;
        let inverse = attributes.contains(AttributeFlags::INVERSE);
        let (background, foreground, defaults) = if inverse {
            (style.foreground, style.background, DefaultColors::Explicit)
        } else {
            (style.background, style.foreground, defaults)
        };

        let underline = if attributes.contains(AttributeFlags::DOUBLE_UNDERLINE) {
            Underline::Double
        } else if attributes.contains(AttributeFlags::UNDERLINE) {
            Underline::Single
        } else {
            Underline::None
        };

        RenderStyle {
            background: ResolvedColor::resolve(background, defaults),
            foreground: ResolvedColor::resolve(foreground, defaults),
            bold: attributes.contains(AttributeFlags::BOLD),
            italic: attributes.contains(AttributeFlags::ITALIC),
            underline,
            crossed_out: attributes.contains(AttributeFlags::CROSSED_OUT),
            conceal: attributes.contains(AttributeFlags::CONCEAL),
            opacity: attributes.contains(AttributeFlags::FAINT).then_some(50),
        }
    }

    /// Appearance of escape sequence text under `display`.
    pub fn escape(display: EscapeDisplay) -> RenderStyle {
        match display {
            EscapeDisplay::Normal => RenderStyle::default(),
            EscapeDisplay::Hidden => RenderStyle {
                conceal: true,
                opacity: Some(0),
                ..RenderStyle::default()
            },
            EscapeDisplay::Dimmed => RenderStyle {
                opacity: Some(50),
                ..RenderStyle::default()
            },
        }
    }

    /// `true` when drawing this style changes nothing.
    pub fn is_plain(&self) -> bool {
        *self == RenderStyle::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ansiview_ansicodec::{Parser, ParserConfig};

    fn style_of(sgr: &[u32]) -> Style {
        let mut style = Style::default();
        style.apply_sgr(sgr, &ParserConfig::default());
        style
    }

    #[test]
    fn test_theme_keys() {
        assert_eq!(
            ThemeColor::Ansi {
                index: 1,
                bright: false
            }
            .key(),
            "terminal.ansiRed"
        );
        assert_eq!(
            ThemeColor::Ansi {
                index: 6,
                bright: true
            }
            .key(),
            "terminal.ansiBrightCyan"
        );
        assert_eq!(ThemeColor::DefaultBackground.key(), "editor.background");
    }

    #[test]
    fn test_default_style_is_plain() {
        let render = RenderStyle::resolve(&Style::default(), DefaultColors::Inherit);
        assert!(render.is_plain());

        let render = RenderStyle::resolve(&Style::default(), DefaultColors::Explicit);
        assert_eq!(
            render.foreground,
            ResolvedColor::Theme(ThemeColor::DefaultForeground)
        );
        assert_eq!(
            render.background,
            ResolvedColor::Theme(ThemeColor::DefaultBackground)
        );
    }

    #[test]
    fn test_inverse_swaps_and_forces_explicit_defaults() {
        let style = style_of(&[7, 31]);
        let render = RenderStyle::resolve(&style, DefaultColors::Inherit);
        assert_eq!(
            render.background,
            ResolvedColor::Theme(ThemeColor::Ansi {
                index: 1,
                bright: false
            })
        );
        assert_eq!(
            render.foreground,
            ResolvedColor::Theme(ThemeColor::DefaultBackground)
        );
        assert_eq!(style.foreground, Color::RED);
    }

    #[test]
    fn test_inverse_toggle_restores_colors() {
        let mut parser = Parser::new();
        let spans = parser.append_line("\x1b[32;7ma\x1b[27mb");
        let inverted = RenderStyle::resolve(&spans[1].style, DefaultColors::Inherit);
        let restored = RenderStyle::resolve(&spans[3].style, DefaultColors::Inherit);
        assert!(inverted.background != ResolvedColor::Inherit);
        assert_eq!(restored.background, ResolvedColor::Inherit);
        assert_eq!(
            restored.foreground,
            ResolvedColor::Theme(ThemeColor::Ansi {
                index: 2,
                bright: false
            })
        );
    }

    #[test]
    fn test_attributes() {
        let render = RenderStyle::resolve(&style_of(&[1, 3, 4, 9, 8]), DefaultColors::Inherit);
        assert!(render.bold);
        assert!(render.italic);
        assert_eq!(render.underline, Underline::Single);
        assert!(render.crossed_out);
        assert!(render.conceal);
        assert_eq!(render.opacity, None);

        let render = RenderStyle::resolve(&style_of(&[2]), DefaultColors::Inherit);
        assert_eq!(render.opacity, Some(50));
        assert!(!render.bold);

        let mut style = Style::default();
        style.apply_sgr(&[21], &ParserConfig::iso());
        let render = RenderStyle::resolve(&style, DefaultColors::Inherit);
        assert_eq!(render.underline, Underline::Double);
    }

    #[test]
    fn test_rgb_hex() {
        let render = RenderStyle::resolve(&style_of(&[38, 2, 255, 0, 16]), DefaultColors::Inherit);
        assert_eq!(render.foreground.to_string(), "#ff0010");
        assert_eq!(ResolvedColor::Inherit.to_string(), "inherit");
    }

    #[test]
    fn test_escape_display_styles() {
        assert!(RenderStyle::escape(EscapeDisplay::Normal).is_plain());
        assert_eq!(RenderStyle::escape(EscapeDisplay::Dimmed).opacity, Some(50));
        let hidden = RenderStyle::escape(EscapeDisplay::Hidden);
        assert_eq!(hidden.opacity, Some(0));
        assert!(hidden.conceal);
    }
}

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

/// A foreground or background color as produced by SGR sequences.
///
/// `Color` is a tagged 32-bit value. Bit 24 marks a *named* color and bit 25
/// marks the *bright* variant of a named color. Named colors keep their palette
/// index (`0-7`) in the low bits, and the two default sentinels use the
/// out-of-band indices `0xF0` (background) and `0xF1` (foreground). Any value
/// without the named bit is a direct color packed as `0xRRGGBB`.
///
/// Because direct colors never exceed 24 bits, the named bit alone tells the two
/// variants apart and a single integer is enough to store, compare and hash a
/// color.
///
/// # Examples
///
/// ```rust
/// use ansiview_ansicodec::Color;
///
/// assert!(Color::RED.is_named());
/// assert_eq!(Color::BRIGHT_RED.named_index(), Some(1));
/// assert!(Color::BRIGHT_RED.is_bright());
///
/// let orange = Color::rgb(255, 128, 0);
/// assert_eq!(orange.to_rgb(), Some((255, 128, 0)));
/// assert_eq!(orange.to_string(), "#ff8000");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color(u32);

/// Decoded view of a [`Color`], convenient for matching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorKind {
    /// The renderer's default background.
    DefaultBackground,
    /// The renderer's default foreground.
    DefaultForeground,
    /// One of the eight ANSI palette colors.
    Named {
        /// Palette index, `0` (black) through `7` (white)
        index: u8,
        /// Whether the bright variant was selected
        bright: bool,
    },
    /// A direct 24-bit color.
    Rgb(u8, u8, u8),
}

const NAMED_FLAG: u32 = 1 << 24;
const BRIGHT_FLAG: u32 = 1 << 25;
const DEFAULT_BACKGROUND_INDEX: u32 = 0xF0;
const DEFAULT_FOREGROUND_INDEX: u32 = 0xF1;
const RGB_MASK: u32 = 0x00FF_FFFF;

const NAMES: [&str; 8] = [
    "Black", "Red", "Green", "Yellow", "Blue", "Magenta", "Cyan", "White",
];

impl Color {
    /// Default background sentinel (SGR `49`).
    pub const DEFAULT_BACKGROUND: Color = Color(NAMED_FLAG | DEFAULT_BACKGROUND_INDEX);
    /// Default foreground sentinel (SGR `39`).
    pub const DEFAULT_FOREGROUND: Color = Color(NAMED_FLAG | DEFAULT_FOREGROUND_INDEX);

    pub const BLACK: Color = Color::named(0);
    pub const RED: Color = Color::named(1);
    pub const GREEN: Color = Color::named(2);
    pub const YELLOW: Color = Color::named(3);
    pub const BLUE: Color = Color::named(4);
    pub const MAGENTA: Color = Color::named(5);
    pub const CYAN: Color = Color::named(6);
    pub const WHITE: Color = Color::named(7);

    pub const BRIGHT_BLACK: Color = Color::bright(0);
    pub const BRIGHT_RED: Color = Color::bright(1);
    pub const BRIGHT_GREEN: Color = Color::bright(2);
    pub const BRIGHT_YELLOW: Color = Color::bright(3);
    pub const BRIGHT_BLUE: Color = Color::bright(4);
    pub const BRIGHT_MAGENTA: Color = Color::bright(5);
    pub const BRIGHT_CYAN: Color = Color::bright(6);
    pub const BRIGHT_WHITE: Color = Color::bright(7);

    /// Named palette color. Only the low three bits of `index` are used.
    pub const fn named(index: u8) -> Color {
        Color(NAMED_FLAG | (index & 0x07) as u32)
    }

    /// Bright variant of a named palette color.
    pub const fn bright(index: u8) -> Color {
        Color(NAMED_FLAG | BRIGHT_FLAG | (index & 0x07) as u32)
    }

    /// Direct 24-bit color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Resolves an index of the 256-color palette (`38;5;n` / `48;5;n`).
    ///
    /// | Index     | Result                                          |
    /// |-----------|-------------------------------------------------|
    /// | `0-7`     | Named color                                     |
    /// | `8-15`    | Bright named color                              |
    /// | `16-231`  | 6x6x6 color cube, each step `channel * 255 / 5` |
    /// | `232-255` | 24 step gray ramp, `255 * (n - 232) / 23`       |
    pub const fn from_fixed(index: u8) -> Color {
        match index {
            0..=7 => Color::named(index),
            8..=15 => Color::bright(index - 8),
            16..=231 => {
                let cube = (index - 16) as u32;
                let b = cube % 6;
                let g = (cube / 6) % 6;
                let r = cube / 36;
                Color::rgb(
                    (r * 255 / 5) as u8,
                    (g * 255 / 5) as u8,
                    (b * 255 / 5) as u8,
                )
            }
            232..=255 => {
                let level = (255 * (index as u32 - 232) / 23) as u8;
                Color::rgb(level, level, level)
            }
        }
    }

    /// Raw tagged representation.
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Rebuilds a color from its tagged representation.
    ///
    /// Returns `None` for values that no constructor produces.
    pub const fn from_bits(bits: u32) -> Option<Color> {
        if bits & NAMED_FLAG == 0 {
            if bits & !RGB_MASK == 0 {
                return Some(Color(bits));
            }
            return None;
        }
        let index = bits & !(NAMED_FLAG | BRIGHT_FLAG);
        let bright = bits & BRIGHT_FLAG != 0;
        match index {
            0..=7 => Some(Color(bits)),
            DEFAULT_BACKGROUND_INDEX | DEFAULT_FOREGROUND_INDEX if !bright => Some(Color(bits)),
            _ => None,
        }
    }

    /// `true` for palette colors and the two default sentinels.
    pub const fn is_named(&self) -> bool {
        self.0 & NAMED_FLAG != 0
    }

    pub const fn is_bright(&self) -> bool {
        self.is_named() && self.0 & BRIGHT_FLAG != 0
    }

    /// `true` for [`Color::DEFAULT_BACKGROUND`] and [`Color::DEFAULT_FOREGROUND`].
    pub const fn is_default(&self) -> bool {
        self.0 == Color::DEFAULT_BACKGROUND.0 || self.0 == Color::DEFAULT_FOREGROUND.0
    }

    /// Palette index `0-7` of a named color, `None` for sentinels and direct colors.
    pub const fn named_index(&self) -> Option<u8> {
        if self.is_named() && !self.is_default() {
            Some((self.0 & 0x07) as u8)
        } else {
            None
        }
    }

    /// Channels of a direct color, `None` for named colors.
    pub const fn to_rgb(&self) -> Option<(u8, u8, u8)> {
        if self.is_named() {
            None
        } else {
            Some(((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8))
        }
    }

    pub const fn kind(&self) -> ColorKind {
        if self.0 == Color::DEFAULT_BACKGROUND.0 {
            ColorKind::DefaultBackground
        } else if self.0 == Color::DEFAULT_FOREGROUND.0 {
            ColorKind::DefaultForeground
        } else if self.is_named() {
            ColorKind::Named {
                index: (self.0 & 0x07) as u8,
                bright: self.0 & BRIGHT_FLAG != 0,
            }
        } else {
            ColorKind::Rgb((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
        }
    }
}

impl From<ColorKind> for Color {
    fn from(kind: ColorKind) -> Self {
        match kind {
            ColorKind::DefaultBackground => Color::DEFAULT_BACKGROUND,
            ColorKind::DefaultForeground => Color::DEFAULT_FOREGROUND,
            ColorKind::Named {
                index,
                bright: false,
            } => Color::named(index),
            ColorKind::Named { index, bright: true } => Color::bright(index),
            ColorKind::Rgb(r, g, b) => Color::rgb(r, g, b),
        }
    }
}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind() {
            ColorKind::DefaultBackground => f.write_str("DefaultBackground"),
            ColorKind::DefaultForeground => f.write_str("DefaultForeground"),
            ColorKind::Named { index, bright } => {
                if bright {
                    f.write_str("Bright")?;
                }
                f.write_str(NAMES[index as usize])
            }
            ColorKind::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
        }
    }
}

/// Lowercase words for named colors (`bright red`, `default foreground`) and
/// `#rrggbb` for RGB.
impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind() {
            ColorKind::DefaultBackground => f.write_str("default background"),
            ColorKind::DefaultForeground => f.write_str("default foreground"),
            ColorKind::Named { index, bright } => {
                if bright {
                    f.write_str("bright ")?;
                }
                f.write_str(&NAMES[index as usize].to_ascii_lowercase())
            }
            ColorKind::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_differs_from_debug() {
        assert_eq!(Color::RED.to_string(), "red");
        assert_eq!(format!("{:?}", Color::RED), "Red");
        assert_eq!(Color::bright(1).to_string(), "bright red");
        assert_eq!(format!("{:?}", Color::bright(1)), "BrightRed");
        assert_eq!(Color::DEFAULT_FOREGROUND.to_string(), "default foreground");
        assert_eq!(Color::DEFAULT_BACKGROUND.to_string(), "default background");
        assert_eq!(Color::rgb(0, 0x66, 0x99).to_string(), "#006699");
    }

    #[test]
    fn test_named_and_rgb_never_collide() {
        for index in 0..8 {
            assert!(Color::named(index).is_named());
            assert!(Color::bright(index).is_named());
        }
        assert!(!Color::rgb(255, 255, 255).is_named());
        assert_eq!(Color::rgb(255, 255, 255).bits(), 0x00FF_FFFF);
        assert_ne!(Color::rgb(0, 0, 1), Color::RED);
    }

    #[test]
    fn test_default_sentinels() {
        assert!(Color::DEFAULT_FOREGROUND.is_default());
        assert!(Color::DEFAULT_BACKGROUND.is_default());
        assert_ne!(Color::DEFAULT_FOREGROUND, Color::DEFAULT_BACKGROUND);
        assert_eq!(Color::DEFAULT_FOREGROUND.named_index(), None);
        assert!(!Color::DEFAULT_FOREGROUND.is_bright());
        assert_eq!(Color::DEFAULT_BACKGROUND.to_rgb(), None);
    }

    #[test]
    fn test_fixed_named_ranges() {
        assert_eq!(Color::from_fixed(0), Color::BLACK);
        assert_eq!(Color::from_fixed(1), Color::RED);
        assert_eq!(Color::from_fixed(7), Color::WHITE);
        assert_eq!(Color::from_fixed(8), Color::BRIGHT_BLACK);
        assert_eq!(Color::from_fixed(9), Color::BRIGHT_RED);
        assert_eq!(Color::from_fixed(15), Color::BRIGHT_WHITE);
    }

    #[test]
    fn test_fixed_color_cube() {
        assert_eq!(Color::from_fixed(16), Color::rgb(0, 0, 0));
        assert_eq!(Color::from_fixed(21), Color::rgb(0, 0, 255));
        assert_eq!(Color::from_fixed(196), Color::rgb(255, 0, 0));
        assert_eq!(Color::from_fixed(231), Color::rgb(255, 255, 255));
        // 16 + 36*1 + 6*2 + 3 = 67 -> r=1, g=2, b=3
        assert_eq!(Color::from_fixed(67), Color::rgb(51, 102, 153));
    }

    #[test]
    fn test_fixed_gray_ramp() {
        assert_eq!(Color::from_fixed(232), Color::rgb(0, 0, 0));
        assert_eq!(Color::from_fixed(255), Color::rgb(255, 255, 255));
        // 255 * 1 / 23 = 11.08 -> 11
        assert_eq!(Color::from_fixed(233), Color::rgb(11, 11, 11));
    }

    #[test]
    fn test_from_bits() {
        assert_eq!(Color::from_bits(Color::RED.bits()), Some(Color::RED));
        assert_eq!(
            Color::from_bits(Color::DEFAULT_FOREGROUND.bits()),
            Some(Color::DEFAULT_FOREGROUND)
        );
        assert_eq!(Color::from_bits(0x0012_3456), Some(Color::rgb(0x12, 0x34, 0x56)));
        assert_eq!(Color::from_bits(NAMED_FLAG | 8), None);
        assert_eq!(Color::from_bits(1 << 30), None);
    }

    #[test]
    fn test_kind() {
        assert_eq!(
            Color::BRIGHT_CYAN.kind(),
            ColorKind::Named {
                index: 6,
                bright: true
            }
        );
        assert_eq!(Color::rgb(1, 2, 3).kind(), ColorKind::Rgb(1, 2, 3));
        assert_eq!(Color::from(ColorKind::DefaultBackground), Color::DEFAULT_BACKGROUND);
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", Color::BRIGHT_MAGENTA), "BrightMagenta");
        assert_eq!(format!("{:?}", Color::DEFAULT_FOREGROUND), "DefaultForeground");
        assert_eq!(format!("{:?}", Color::rgb(0, 0x80, 0xff)), "#0080ff");
    }
}

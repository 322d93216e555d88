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

use bitflags::bitflags;

bitflags! {
    /// Set of rendering attributes carried by a [`Style`](crate::Style).
    ///
    /// Each attribute occupies one bit. Several attributes come in mutually
    /// exclusive pairs (see [`AttributeFlags::EXCLUSIVE_PAIRS`]); use
    /// [`AttributeFlags::enable`] to set one half of a pair, which clears the other.
    ///
    /// [`AttributeFlags::ESCAPE_SEQUENCE`] is not a visual attribute. It marks a
    /// [`Span`](crate::Span) whose text is an escape sequence rather than content.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ansiview_ansicodec::AttributeFlags;
    ///
    /// let mut flags = AttributeFlags::NONE;
    /// flags.enable(AttributeFlags::BOLD);
    /// flags.enable(AttributeFlags::FAINT);
    /// assert!(flags.contains(AttributeFlags::FAINT));
    /// assert!(!flags.contains(AttributeFlags::BOLD));
    /// ```
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct AttributeFlags: u32 {
        const BOLD             = 1 << 0;
        const FAINT            = 1 << 1;
        const ITALIC           = 1 << 2;
        const UNDERLINE        = 1 << 3;
        const SLOW_BLINK       = 1 << 4;
        const RAPID_BLINK      = 1 << 5;
        const INVERSE          = 1 << 6;
        const CONCEAL          = 1 << 7;
        const CROSSED_OUT      = 1 << 8;
        const FRAKTUR          = 1 << 9;
        const DOUBLE_UNDERLINE = 1 << 10;
        const PROPORTIONAL     = 1 << 11;
        const FRAMED           = 1 << 12;
        const ENCIRCLED        = 1 << 13;
        const OVERLINED        = 1 << 14;
        const SUPERSCRIPT      = 1 << 15;
        const SUBSCRIPT        = 1 << 16;

        /// Marks escape-sequence spans. Never set by an SGR code.
        const ESCAPE_SEQUENCE  = 1 << 31;
    }
}

impl AttributeFlags {
    pub const NONE: AttributeFlags = AttributeFlags::empty();

    /// Attribute pairs that can never be set at the same time.
    pub const EXCLUSIVE_PAIRS: [(AttributeFlags, AttributeFlags); 6] = [
        (AttributeFlags::BOLD, AttributeFlags::FAINT),
        (AttributeFlags::ITALIC, AttributeFlags::FRAKTUR),
        (AttributeFlags::UNDERLINE, AttributeFlags::DOUBLE_UNDERLINE),
        (AttributeFlags::SLOW_BLINK, AttributeFlags::RAPID_BLINK),
        (AttributeFlags::FRAMED, AttributeFlags::ENCIRCLED),
        (AttributeFlags::SUPERSCRIPT, AttributeFlags::SUBSCRIPT),
    ];

    /// Sets `flag` and clears its exclusive partner, if it has one.
    pub fn enable(&mut self, flag: AttributeFlags) {
        if let Some(partner) = flag.partner() {
            self.remove(partner);
        }
        self.insert(flag);
    }

    /// Exclusive partner of a single attribute.
    pub fn partner(&self) -> Option<AttributeFlags> {
        AttributeFlags::EXCLUSIVE_PAIRS
            .iter()
            .find_map(|&(left, right)| {
                if *self == left {
                    Some(right)
                } else if *self == right {
                    Some(left)
                } else {
                    None
                }
            })
    }

    /// Copy of these flags without the escape-sequence marker.
    pub const fn visual(&self) -> AttributeFlags {
        self.difference(AttributeFlags::ESCAPE_SEQUENCE)
    }
}

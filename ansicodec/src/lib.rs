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

//! Line oriented ANSI escape sequence parsing.
//!
//! [`Parser`] splits each line of text into [`Span`]s: runs of plain text
//! carrying the [`Style`] in effect, and escape sequences flagged with
//! [`AttributeFlags::ESCAPE_SEQUENCE`]. Styles persist from line to line.
//! [`LineSpanCodec`] does the same over a byte stream.

mod attributes;
mod codec;
mod color;
mod config;
mod consts;
pub mod csi;
pub mod osc;
mod parser;
mod result;
mod span;
mod style;
pub mod utility;

pub use self::attributes::AttributeFlags;
pub use self::codec::{AnsiLine, LineSpanCodec};
pub use self::color::{Color, ColorKind};
pub use self::config::{LineCodecConfig, ParserConfig};
pub use self::consts::MAX_LINE_LENGTH;
pub use self::csi::{ControlFunction, ControlSequence};
pub use self::osc::{OperatingSystemCommand, OscCommand, OscTerminator};
pub use self::parser::Parser;
pub use self::result::{AnsiCodecError, AnsiCodecResult};
pub use self::span::Span;
pub use self::style::Style;
pub use self::utility::{strip_ansi, strip_escape_sequences, visible_spans};

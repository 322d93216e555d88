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

//! Editor decorations for documents containing ANSI escape sequences.
//!
//! Parsed [`Style`](ansiview_ansicodec::Style)s are resolved to [`RenderStyle`]s,
//! grouped per document by [`DecorationKey`], and backed by host resources that a
//! [`DecorationCache`] creates lazily and releases explicitly.

mod cache;
mod config;
mod document;
mod render;
mod result;

pub use self::cache::{DecorationCache, DecorationFactory, DecorationKey};
pub use self::config::{DecorationConfig, EscapeDisplay};
pub use self::document::{DocumentDecorations, LineRange, decorate_prettified, decorate_raw};
pub use self::render::{DefaultColors, RenderStyle, ResolvedColor, ThemeColor, Underline};
pub use self::result::{DecorationError, DecorationResult};

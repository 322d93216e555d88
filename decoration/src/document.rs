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

//! Whole document decoration passes.
//!
//! A pass runs one fresh [`Parser`] over the lines of a document in order and
//! groups the resulting spans by [`DecorationKey`]. The raw pass decorates the
//! source text itself, escape sequences included. The prettified pass decorates
//! the text with its escape sequences removed.

use crate::{DecorationCache, DecorationConfig, DecorationFactory, DecorationKey};
use ansiview_ansicodec::Parser;
use indexmap::IndexMap;
use tracing::trace;

/// A range of bytes on one document line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineRange {
    /// Zero based line number
    pub line: usize,
    /// Byte offset of the first byte
    pub start: usize,
    /// Exclusive end byte offset
    pub end: usize,
}

impl LineRange {
    pub fn new(line: usize, start: usize, end: usize) -> LineRange {
        LineRange { line, start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// Ranges grouped by decoration key, in first-seen key order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentDecorations {
    entries: IndexMap<DecorationKey, Vec<LineRange>>,
}

impl DocumentDecorations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `range` under `key`. Empty ranges are skipped.
    pub fn push(&mut self, key: DecorationKey, range: LineRange) {
        if range.is_empty() {
            return;
        }
        self.entries.entry(key).or_default().push(range);
    }

    /// Ensures each key has an entry, empty if it has no ranges.
    ///
    /// Pass the keys already shown by the host so that decorations which no
    /// longer occur are cleared.
    pub fn include_keys<'a>(&mut self, keys: impl IntoIterator<Item = &'a DecorationKey>) {
        for key in keys {
            self.entries.entry(*key).or_default();
        }
    }

    pub fn get(&self, key: &DecorationKey) -> Option<&[LineRange]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DecorationKey, &[LineRange])> {
        self.entries
            .iter()
            .map(|(key, ranges)| (key, ranges.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &DecorationKey> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves every key through `cache`, pairing handles with their ranges.
    pub fn resolve<F>(&self, cache: &mut DecorationCache<F>) -> Vec<(F::Handle, &[LineRange])>
    where
        F: DecorationFactory,
        F::Handle: Clone,
    {
        self.iter()
            .map(|(key, ranges)| (cache.resolve(key).clone(), ranges))
            .collect()
    }
}

/// Decorates the source text of a document, escape sequences included.
///
/// Every escape sequence span is grouped under
/// `DecorationKey::Escape(config.escape_display)`, which is always present in the
/// result. Text spans are grouped by their style.
pub fn decorate_raw<I, S>(lines: I, config: &DecorationConfig) -> DocumentDecorations
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = Parser::with_config(config.parser.clone());
    let mut decorations = DocumentDecorations::new();
    let escape_key = DecorationKey::Escape(config.escape_display);
    decorations.include_keys([&escape_key]);

    for (line_number, line) in lines.into_iter().enumerate() {
        let spans = parser.append_line(line.as_ref());
        for span in &spans {
            let key = DecorationKey::for_span(span, config.escape_display);
            decorations.push(key, LineRange::new(line_number, span.offset, span.end()));
        }
    }
    trace!(keys = decorations.len(), "decorated raw document");
    decorations
}

/// Decorates a document as it reads with its escape sequences removed.
///
/// Ranges index into each line after
/// [`strip_escape_sequences`](ansiview_ansicodec::strip_escape_sequences).
pub fn decorate_prettified<I, S>(lines: I, config: &DecorationConfig) -> DocumentDecorations
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = Parser::with_config(config.parser.clone());
    let mut decorations = DocumentDecorations::new();

    for (line_number, line) in lines.into_iter().enumerate() {
        let spans = parser.append_line(line.as_ref());
        let mut removed = 0;
        for span in &spans {
            if span.is_escape_sequence() {
                removed += span.length;
                continue;
            }
            let start = span.offset - removed;
            decorations.push(
                DecorationKey::style(span.style),
                LineRange::new(line_number, start, start + span.length),
            );
        }
    }
    trace!(keys = decorations.len(), "decorated prettified document");
    decorations
}

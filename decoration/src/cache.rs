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

use crate::{DecorationConfig, DefaultColors, EscapeDisplay, RenderStyle};
use ansiview_ansicodec::{Span, Style};
use std::collections::HashMap;
use tracing::debug;

/// Identifies one decoration.
///
/// Text spans are keyed by their visual [`Style`]; escape sequence spans share a
/// single key per display mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecorationKey {
    Style(Style),
    Escape(EscapeDisplay),
}

impl DecorationKey {
    /// Key for a text style. The escape sequence marker is dropped.
    pub fn style(style: Style) -> DecorationKey {
        DecorationKey::Style(Style {
            attributes: style.attributes.visual(),
            ..style
        })
    }

    /// Key for a parsed span.
    pub fn for_span(span: &Span, display: EscapeDisplay) -> DecorationKey {
        if span.is_escape_sequence() {
            DecorationKey::Escape(display)
        } else {
            DecorationKey::style(span.style)
        }
    }

    pub fn is_escape(&self) -> bool {
        matches!(self, DecorationKey::Escape(_))
    }

    /// Appearance of this decoration.
    pub fn render_style(&self, defaults: DefaultColors) -> RenderStyle {
        match self {
            DecorationKey::Style(style) => RenderStyle::resolve(style, defaults),
            DecorationKey::Escape(display) => RenderStyle::escape(*display),
        }
    }
}

/// Creates and releases host rendering resources.
pub trait DecorationFactory {
    /// Resource handle returned to the host
    type Handle;

    /// Creates the resource drawing `key`.
    fn create(&mut self, key: &DecorationKey, config: &DecorationConfig) -> Self::Handle;

    /// Releases a resource returned by [`create`](DecorationFactory::create).
    fn dispose(&mut self, handle: Self::Handle);
}

/// Memoizes decoration handles by key.
///
/// Handles are created on first use and released explicitly: when the escape
/// display mode changes, when the configuration changes, on
/// [`dispose`](DecorationCache::dispose), and on drop. Only one escape handle is
/// alive at a time.
pub struct DecorationCache<F: DecorationFactory> {
    factory: F,
    config: DecorationConfig,
    handles: HashMap<DecorationKey, F::Handle>,
}

impl<F: DecorationFactory> DecorationCache<F> {
    pub fn new(factory: F, config: DecorationConfig) -> Self {
        Self {
            factory,
            config,
            handles: HashMap::new(),
        }
    }

    pub fn config(&self) -> &DecorationConfig {
        &self.config
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn contains(&self, key: &DecorationKey) -> bool {
        self.handles.contains_key(key)
    }

    /// Keys with a live handle.
    pub fn keys(&self) -> impl Iterator<Item = &DecorationKey> {
        self.handles.keys()
    }

    /// Returns the handle for `key`, creating it on first use.
    ///
    /// Resolving an escape key disposes any escape handle cached for a different
    /// display mode.
    pub fn resolve(&mut self, key: &DecorationKey) -> &F::Handle {
        if let DecorationKey::Escape(display) = key {
            self.dispose_escapes(Some(*display));
        }
        let factory = &mut self.factory;
        let config = &self.config;
        self.handles.entry(*key).or_insert_with(|| {
            debug!(?key, "creating decoration");
            factory.create(key, config)
        })
    }

    /// Disposes every escape sequence handle.
    pub fn clear_escape_decorations(&mut self) {
        self.dispose_escapes(None);
    }

    /// Replaces the configuration, disposing escape handles when it changed.
    pub fn set_config(&mut self, config: DecorationConfig) {
        if config != self.config {
            self.clear_escape_decorations();
            self.config = config;
        }
    }

    /// Releases every handle. Calling it again does nothing.
    pub fn dispose(&mut self) {
        if self.handles.is_empty() {
            return;
        }
        debug!(count = self.handles.len(), "disposing decorations");
        for (_, handle) in self.handles.drain() {
            self.factory.dispose(handle);
        }
    }

    fn dispose_escapes(&mut self, keep: Option<EscapeDisplay>) {
        let stale: Vec<DecorationKey> = self
            .handles
            .keys()
            .filter(|key| match key {
                DecorationKey::Escape(display) => Some(*display) != keep,
                DecorationKey::Style(_) => false,
            })
            .copied()
            .collect();
        for key in stale {
            if let Some(handle) = self.handles.remove(&key) {
                debug!(?key, "disposing escape decoration");
                self.factory.dispose(handle);
            }
        }
    }
}

impl<F: DecorationFactory> Drop for DecorationCache<F> {
    fn drop(&mut self) {
        self.dispose();
    }
}

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

//! Error types for the decoration crate

use thiserror::Error;

/// Result type for decoration operations
pub type DecorationResult<T> = Result<T, DecorationError>;

/// Decoration error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecorationError {
    /// An escape display mode name was not one of `normal`, `hidden` or `dimmed`
    #[error("Unknown escape sequence display mode: {0:?}")]
    UnknownEscapeDisplay(String),
}

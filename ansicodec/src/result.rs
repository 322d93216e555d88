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

//! Error types for the ansicodec crate.
//!
//! The line parser itself is total and never fails. Errors only arise at the
//! streaming boundary, where bytes are read and framed into lines.

/// Result type alias for operations that may fail with an [`AnsiCodecError`].
pub type AnsiCodecResult<T> = Result<T, AnsiCodecError>;

/// Errors raised by the [`LineSpanCodec`](crate::LineSpanCodec).
#[derive(Debug, thiserror::Error)]
pub enum AnsiCodecError {
    /// An I/O error from the underlying stream.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A line grew past the configured maximum without a newline.
    ///
    /// The codec discards the buffered bytes before returning this error so the
    /// stream can continue with the next line.
    #[error("Line too long: {length} bytes (maximum allowed: {max})")]
    LineTooLong {
        /// The number of bytes buffered without a newline
        length: usize,
        /// The maximum allowed length
        max: usize,
    },
}

impl AnsiCodecError {
    /// Check if decoding can continue after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AnsiCodecError::LineTooLong { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnsiCodecError::LineTooLong {
            length: 2048,
            max: 1024,
        };
        assert_eq!(
            err.to_string(),
            "Line too long: 2048 bytes (maximum allowed: 1024)"
        );
    }

    #[test]
    fn test_error_is_recoverable() {
        let err = AnsiCodecError::LineTooLong { length: 2, max: 1 };
        assert!(err.is_recoverable());

        let err = AnsiCodecError::from(std::io::Error::other("boom"));
        assert!(!err.is_recoverable());
    }
}

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

//! Comprehensive tests for LineSpanCodec

use ansiview_ansicodec::{
    AnsiCodecError, AnsiLine, AttributeFlags, Color, LineCodecConfig, LineSpanCodec,
    ParserConfig, strip_escape_sequences,
};
use bytes::BytesMut;
use futures::StreamExt;
use tokio_util::codec::{Decoder, FramedRead};
use tracing_test::traced_test;

fn decode_all(codec: &mut LineSpanCodec, input: &[u8]) -> Vec<AnsiLine> {
    let mut buffer = BytesMut::from(input);
    let mut lines = Vec::new();
    while let Some(line) = codec.decode(&mut buffer).unwrap() {
        lines.push(line);
    }
    if let Some(line) = codec.decode_eof(&mut buffer).unwrap() {
        lines.push(line);
    }
    lines
}

#[test]
fn test_decode_document() {
    let mut codec = LineSpanCodec::default();
    let lines = decode_all(
        &mut codec,
        b"\x1b[1;33mWarning:\x1b[0m disk\r\n\x1b[31merror\nstill red",
    );

    assert_eq!(lines.len(), 3);
    assert_eq!(
        strip_escape_sequences(&lines[0].text, &lines[0].spans),
        "Warning: disk"
    );
    assert_eq!(lines[1].spans[1].style.foreground, Color::RED);
    assert_eq!(lines[2].text, "still red");
    assert_eq!(lines[2].spans[0].style.foreground, Color::RED);
}

#[test]
fn test_decode_byte_at_a_time() {
    let input = b"\x1b[4munder\x1b[24m\nnext\n";
    let mut codec = LineSpanCodec::default();
    let mut buffer = BytesMut::new();
    let mut lines = Vec::new();
    for byte in input {
        buffer.extend_from_slice(&[*byte]);
        if let Some(line) = codec.decode(&mut buffer).unwrap() {
            lines.push(line);
        }
    }

    assert_eq!(lines, decode_all(&mut LineSpanCodec::default(), input));
    assert!(lines[0].spans[1].style.attributes.contains(AttributeFlags::UNDERLINE));
}

#[test]
fn test_codec_parser_config() {
    let config = LineCodecConfig::default().with_parser(ParserConfig::iso());
    let mut codec = LineSpanCodec::new(config);
    let lines = decode_all(&mut codec, b"\x1b[21mdouble\n");
    assert!(
        lines[0].spans[1]
            .style
            .attributes
            .contains(AttributeFlags::DOUBLE_UNDERLINE)
    );
}

#[test]
#[traced_test]
fn test_line_too_long_is_logged_and_recoverable() {
    let mut codec = LineSpanCodec::new(LineCodecConfig::default().with_max_line_length(8));
    let mut buffer = BytesMut::from(&b"this line is far too long\nshort\n"[..]);

    let error = codec.decode(&mut buffer).unwrap_err();
    assert!(error.is_recoverable());
    assert!(matches!(
        error,
        AnsiCodecError::LineTooLong { length: 26, max: 8 }
    ));
    assert!(logs_contain("discarding overlong line"));

    let line = codec.decode(&mut buffer).unwrap().unwrap();
    assert_eq!(line.text, "short");
}

#[test]
#[traced_test]
fn test_overlong_line_fed_byte_at_a_time() {
    let mut codec = LineSpanCodec::new(LineCodecConfig::default().with_max_line_length(4));
    let mut buffer = BytesMut::new();
    let mut lines = Vec::new();
    let mut errors = 0;
    for byte in b"overlong\x1b[31m\nred\n" {
        buffer.extend_from_slice(&[*byte]);
        match codec.decode(&mut buffer) {
            Ok(Some(line)) => lines.push(line),
            Ok(None) => {}
            Err(_) => errors += 1,
        }
    }

    assert_eq!(errors, 1);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text, "red");
    assert_eq!(lines[0].spans[0].style.foreground, Color::DEFAULT_FOREGROUND);
    assert!(logs_contain("dropped overlong line tail"));
}

#[tokio::test]
async fn test_framed_read() {
    let input: &[u8] = b"\x1b]0;title\x07\x1b[32mok\n\x1b[0mdone";
    let mut framed = FramedRead::new(input, LineSpanCodec::default());

    let first = framed.next().await.unwrap().unwrap();
    assert_eq!(first.spans.len(), 3);
    assert_eq!(first.spans[2].style.foreground, Color::GREEN);

    let second = framed.next().await.unwrap().unwrap();
    assert_eq!(second.text, "\x1b[0mdone");
    assert_eq!(second.spans[1].style.foreground, Color::DEFAULT_FOREGROUND);

    assert!(framed.next().await.is_none());
}

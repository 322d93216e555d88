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

/// Escape (`ESC`), the introducer of every recognized sequence.
pub const ESC: u8 = 0x1B;

/// Bell (`BEL`), one of the two OSC terminators.
pub const BEL: u8 = 0x07;

/// Second byte of a Control Sequence Introducer (`ESC [`).
pub const CSI_INTRODUCER: u8 = b'[';

/// Second byte of an Operating System Command (`ESC ]`).
pub const OSC_INTRODUCER: u8 = b']';

/// Second byte of the String Terminator (`ESC \`).
pub const STRING_TERMINATOR: u8 = b'\\';

/// Maximum length of a single line accepted by the
/// [`LineSpanCodec`](crate::LineSpanCodec), in bytes.
///
/// This limit prevents unbounded buffer growth when a stream never emits a
/// newline. Lines exceeding it trigger a `LineTooLong` error and the buffered
/// bytes are discarded.
pub const MAX_LINE_LENGTH: usize = 1024 * 1024;

//! Pure byte-layer encoding: IAC escaping and command/subcommand framing.
//!
//! Everything here is a free function operating on bytes in, bytes out -
//! there is no encoder *state*, unlike [`crate::decode::Decoder`].

use bytes::{BufMut, Bytes, BytesMut};

use crate::telnet::op_command::{IAC, SB, SE};

/// Replace every `IAC` in `data` with `IAC IAC`, the inverse of the
/// decoder's `IAC IAC -> single IAC` collapsing in the `Data` state.
///
/// No CR handling is applied on the send side - the caller is expected to
/// already provide correctly formatted line breaks.
#[must_use]
pub fn escape_message(data: &[u8]) -> Bytes {
    let mut out = BytesMut::with_capacity(data.len());
    for &b in data {
        out.put_u8(b);
        if b == IAC {
            out.put_u8(IAC);
        }
    }
    out.freeze()
}

/// Encode a 2- or 3-byte `IAC` command: `[IAC, cmd]` or `[IAC, cmd, opt]`.
#[must_use]
pub fn encode_command(cmd: u8, opt: Option<u8>) -> Bytes {
    match opt {
        Some(opt) => Bytes::copy_from_slice(&[IAC, cmd, opt]),
        None => Bytes::copy_from_slice(&[IAC, cmd]),
    }
}

/// Encode a full subnegotiation frame: `IAC SB <cmd> <payload...> IAC SE`,
/// with the payload's own `IAC` bytes escaped.
///
/// This is a convenience on top of [`escape_message`] - the core decoder
/// never emits a subnegotiation autonomously, only in reaction to an
/// explicit caller request (e.g. from a role policy or application code).
#[must_use]
pub fn encode_subcommand(cmd: u8, payload: &[u8]) -> Bytes {
    let escaped = escape_message(payload);
    let mut out = BytesMut::with_capacity(3 + escaped.len() + 2);
    out.put_u8(IAC);
    out.put_u8(SB);
    out.put_u8(cmd);
    out.put(escaped);
    out.put_u8(IAC);
    out.put_u8(SE);
    out.freeze()
}

//! The event model emitted by the [`decode`](crate::decode) state machine.

use core::fmt::{self, Display, Formatter};

use bytes::{BufMut, Bytes, BytesMut};

use crate::telnet::op_command::IAC;

/// A 2-byte (`opt = None`) or 3-byte (`opt = Some`) `IAC`-prefixed command.
///
/// The 3-byte form is only ever produced for `DO`/`DONT`/`WILL`/`WONT`;
/// every other `IAC <cmd>` sequence is a 2-byte command.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Command {
    pub cmd: u8,
    pub opt: Option<u8>,
}

impl Command {
    #[must_use]
    pub fn new(cmd: u8, opt: Option<u8>) -> Self {
        Self { cmd, opt }
    }

    /// `[IAC, cmd]` or `[IAC, cmd, opt]`.
    #[must_use]
    pub fn to_bytes(&self) -> Bytes {
        match self.opt {
            Some(opt) => Bytes::copy_from_slice(&[IAC, self.cmd, opt]),
            None => Bytes::copy_from_slice(&[IAC, self.cmd]),
        }
    }
}

/// A well-formed `IAC SB <cmd> <payload...> IAC SE` frame, already stripped
/// of its framing bytes and with any escaped `IAC IAC` collapsed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SubCommand {
    pub cmd: u8,
    pub payload: Bytes,
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for SubCommand {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let cmd = u.arbitrary()?;
        let payload: alloc::vec::Vec<u8> = u.arbitrary()?;
        Ok(Self {
            cmd,
            payload: Bytes::from(payload),
        })
    }
}

impl SubCommand {
    #[must_use]
    pub fn new(cmd: u8, payload: Bytes) -> Self {
        Self { cmd, payload }
    }

    /// `[cmd] + payload` - the subnegotiation content, *not* re-wrapped in
    /// `IAC SB ... IAC SE` framing, so callers can compose it into a larger
    /// buffer before framing it themselves (see [`crate::encode::encode_subcommand`]).
    #[must_use]
    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(1 + self.payload.len());
        buf.put_u8(self.cmd);
        buf.put(self.payload.clone());
        buf.freeze()
    }
}

/// Framing-violation classification for a malformed subnegotiation.
///
/// All variants are delivered as [`Event::Error`]; none are ever raised as a
/// Rust error. See `ErrorKind` discussion in the crate's design notes for why
/// there's deliberately no `std::error::Error` impl here: this type has
/// nothing to convert *from*, it is an event payload, not a propagated
/// failure.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum ErrorKind {
    /// `IAC SB IAC SE` with no payload at all.
    SeBufferEmpty,
    /// SB payload begins with NUL (0).
    SeBufferNul,
    /// SB payload has exactly one byte (a command with no argument).
    SeBufferTooShort,
    /// Inside SB, an `IAC` was followed by something other than `IAC` or `SE`.
    SbInvalid,
    /// Reserved for future, non-framing anomalies.
    Other,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::SeBufferEmpty => "SB/SE: payload empty",
            Self::SeBufferNul => "SB/SE: payload begins with NUL",
            Self::SeBufferTooShort => "SB/SE: payload is a bare command with no argument",
            Self::SbInvalid => "SB: IAC followed by neither IAC nor SE",
            Self::Other => "telnet: unclassified framing error",
        };
        f.write_str(msg)
    }
}

/// A framing-violation event: `kind` classifies the failure, `data` carries
/// whatever partial payload is still useful to a policy layer (e.g. the
/// lone command byte for [`ErrorKind::SeBufferTooShort`]).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Error {
    pub kind: ErrorKind,
    pub data: Option<Bytes>,
}

impl Error {
    #[must_use]
    pub fn new(kind: ErrorKind, data: Option<Bytes>) -> Self {
        Self { kind, data }
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Error {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let kind = u.arbitrary()?;
        let data: Option<alloc::vec::Vec<u8>> = u.arbitrary()?;
        Ok(Self {
            kind,
            data: data.map(Bytes::from),
        })
    }
}

/// Events emitted by the decoder while consuming inbound bytes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Event {
    /// Decoded application payload - already IAC-unescaped, with CR
    /// handling applied. Contiguous data bytes may be coalesced into a
    /// single event.
    Data(Bytes),
    /// A 2- or 3-byte IAC command.
    Command(Command),
    /// A well-formed subnegotiation frame.
    SubCommand(SubCommand),
    /// A framing violation encountered during subnegotiation.
    Error(Error),
}

impl From<Command> for Event {
    fn from(cmd: Command) -> Self {
        Self::Command(cmd)
    }
}

impl From<SubCommand> for Event {
    fn from(sub: SubCommand) -> Self {
        Self::SubCommand(sub)
    }
}

impl From<Error> for Event {
    fn from(err: Error) -> Self {
        Self::Error(err)
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Event {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(match u.int_in_range(0..=3)? {
            0 => {
                let bytes: alloc::vec::Vec<u8> = u.arbitrary()?;
                Self::Data(Bytes::from(bytes))
            }
            1 => Self::Command(u.arbitrary()?),
            2 => Self::SubCommand(u.arbitrary()?),
            _ => Self::Error(u.arbitrary()?),
        })
    }
}

//! The byte-driven decoder state machine.
//!
//! `Decoder` is the sans-I/O core: [`Decoder::feed`] is the only way bytes
//! enter the machine, and it is pure with respect to I/O - the only state
//! that changes across calls is the state enum and the in-flight
//! subnegotiation buffer. Splitting an input anywhere and feeding it across
//! multiple calls yields the same event sequence as feeding it whole.

use alloc::vec::Vec;

use bytes::{BufMut, Bytes, BytesMut};

use crate::event::{Command, Error, ErrorKind, Event, SubCommand};
use crate::telnet::op_command::{DO, DONT, IAC, NUL, SB, SE, WILL, WONT};

const CR: u8 = b'\r';
const LF: u8 = b'\n';

/// Internal decoder state. Not part of the public surface - only the event
/// stream produced by [`Decoder::feed`] is observable from outside.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    /// Ordinary application data.
    Data,
    /// Last byte was CR; awaiting the byte that disambiguates it.
    DataCr,
    /// Last byte was IAC; awaiting the command byte.
    Iac,
    /// Awaiting the option byte of a `DO`/`DONT`/`WILL`/`WONT` command.
    Negotiation { cmd: u8 },
    /// First byte of an SB payload.
    SubOption,
    /// Second byte of an SB payload.
    SubSubOption,
    /// Third and subsequent bytes of an SB payload.
    SubData,
    /// Saw IAC while inside SB; awaiting SE or an escaped IAC.
    SubEnd,
}

/// Byte-in / event-out TELNET decoder.
///
/// Construct with [`Decoder::new`], feed inbound bytes with
/// [`Decoder::feed`]. There is no terminal state - a decoder that has seen a
/// framing error keeps decoding subsequent bytes from a clean `Data` state
/// (see `ErrorKind`'s docs for the self-healing contract).
#[derive(Debug)]
pub struct Decoder {
    state: State,
    /// Accumulates SB payload bytes between `SB` and `SE`. Cleared on every
    /// frame boundary, success or error (invariant I1).
    sub_buffer: BytesMut,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: State::Data,
            sub_buffer: BytesMut::new(),
        }
    }

    /// Feed a chunk of inbound bytes, returning the events it produced.
    ///
    /// Safe to call repeatedly with arbitrarily small slices of a larger
    /// stream - state that spans chunk boundaries (a partial command, a
    /// partial CR sequence, a partial SB frame) is carried internally.
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<Event> {
        let mut events = Vec::new();
        let mut pending = BytesMut::new();

        for &b in bytes {
            self.step(b, &mut events, &mut pending);
        }
        flush_pending(&mut pending, &mut events);
        events
    }

    fn step(&mut self, b: u8, events: &mut Vec<Event>, pending: &mut BytesMut) {
        self.state = match self.state {
            State::Data => match b {
                IAC => State::Iac,
                CR => State::DataCr,
                _ => {
                    pending.put_u8(b);
                    State::Data
                }
            },
            State::DataCr => match b {
                LF => {
                    pending.put_u8(LF);
                    State::Data
                }
                NUL => {
                    pending.put_u8(CR);
                    State::Data
                }
                IAC => {
                    pending.put_u8(CR);
                    State::Iac
                }
                _ => {
                    pending.put_u8(CR);
                    pending.put_u8(b);
                    State::Data
                }
            },
            State::Iac => match b {
                DO | DONT | WILL | WONT => State::Negotiation { cmd: b },
                SB => State::SubOption,
                IAC => {
                    pending.put_u8(IAC);
                    State::Data
                }
                _ => {
                    flush_pending(pending, events);
                    events.push(Event::Command(Command::new(b, None)));
                    State::Data
                }
            },
            State::Negotiation { cmd } => {
                flush_pending(pending, events);
                events.push(Event::Command(Command::new(cmd, Some(b))));
                State::Data
            }
            State::SubOption => match b {
                IAC => State::SubEnd,
                _ => {
                    self.sub_buffer.put_u8(b);
                    State::SubSubOption
                }
            },
            State::SubSubOption => match b {
                IAC => State::SubEnd,
                _ => {
                    self.sub_buffer.put_u8(b);
                    State::SubData
                }
            },
            State::SubData => match b {
                IAC => State::SubEnd,
                _ => {
                    self.sub_buffer.put_u8(b);
                    State::SubData
                }
            },
            State::SubEnd => match b {
                IAC => {
                    self.sub_buffer.put_u8(IAC);
                    State::SubData
                }
                SE => {
                    flush_pending(pending, events);
                    events.push(self.close_sub_frame());
                    State::Data
                }
                _ => {
                    self.sub_buffer.clear();
                    flush_pending(pending, events);
                    events.push(Event::Error(Error::new(
                        ErrorKind::SbInvalid,
                        Some(Bytes::copy_from_slice(&[b])),
                    )));
                    State::Data
                }
            },
        };
    }

    /// Close an SB frame at `SE`, classifying the accumulated buffer per
    /// spec and clearing it unconditionally (invariant I1).
    fn close_sub_frame(&mut self) -> Event {
        let buf = self.sub_buffer.split().freeze();
        if buf.is_empty() {
            return Event::Error(Error::new(ErrorKind::SeBufferEmpty, None));
        }
        if buf[0] == NUL {
            return Event::Error(Error::new(ErrorKind::SeBufferNul, None));
        }
        if buf.len() == 1 {
            return Event::Error(Error::new(ErrorKind::SeBufferTooShort, Some(buf)));
        }
        Event::SubCommand(SubCommand::new(buf[0], buf.slice(1..)))
    }
}

fn flush_pending(pending: &mut BytesMut, events: &mut Vec<Event>) {
    if !pending.is_empty() {
        events.push(Event::Data(pending.split().freeze()));
    }
}

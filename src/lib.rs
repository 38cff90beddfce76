//! A sans-I/O TELNET (RFC 854/855) protocol engine.
//!
//! [`decode::Decoder`] is the byte-in/event-out state machine; [`encode`]
//! holds the inverse pure encoding functions; [`option::OptionTable`] and
//! [`policy::Policy`] implement the option-negotiation layer that sits on
//! top of the decoder's `Command` events; [`engine::Engine`] composes all
//! four behind one entry point. None of this crate performs I/O - driving
//! it from a socket, task, or buffered stream is the job of an external
//! adapter (see the crate's design notes for the split rationale).

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std as alloc;

pub mod decode;
pub mod encode;
pub mod engine;
pub mod event;
pub mod option;
pub mod policy;
pub mod telnet;

pub use decode::Decoder;
pub use encode::{encode_command, encode_subcommand, escape_message};
pub use engine::{Engine, EngineEvent};
pub use event::{Command, Error, ErrorKind, Event, SubCommand};
pub use option::{OptionTable, TelnetOption};
pub use policy::{Policy, Role};

#[cfg(feature = "tokio-util")]
mod codec {
    use bytes::{Buf, Bytes, BytesMut};
    use std::io;
    use tokio_util::codec::{Decoder as TokioDecoder, Encoder as TokioEncoder};

    use crate::engine::{Engine, EngineEvent};

    /// Adapts [`Engine`] to `tokio_util::codec`, the on-ramp an external
    /// async I/O adapter (out of scope for this crate) would use to drive
    /// the engine from a socket. This is ambient plumbing, not the adapter
    /// itself - no task spawning or connection management lives here.
    impl TokioDecoder for Engine {
        type Item = alloc::vec::Vec<EngineEvent>;
        type Error = io::Error;

        fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
            if src.is_empty() {
                return Ok(None);
            }
            let taken = src.split_off(0);
            let events = self.receive_data(&taken);
            Ok(if events.is_empty() { None } else { Some(events) })
        }
    }

    /// Writes already-encoded bytes (as returned by [`Engine::send_message`]
    /// and friends) to the outbound buffer verbatim. The only failure mode
    /// at this boundary is the underlying I/O, not the protocol, so the
    /// error type is `std::io::Error` rather than anything from the core.
    impl TokioEncoder<Bytes> for Engine {
        type Error = io::Error;

        fn encode(&mut self, item: Bytes, dst: &mut BytesMut) -> Result<(), Self::Error> {
            dst.extend_from_slice(item.chunk());
            Ok(())
        }
    }
}

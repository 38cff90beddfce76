//! The composition layer: wires the decoder, encoder, option table and role
//! policy behind the public API surface described in spec §6.

use alloc::vec::Vec;

use bytes::Bytes;

use crate::decode::Decoder;
use crate::encode::{encode_command, encode_subcommand, escape_message};
use crate::event::{Command, Event};
use crate::option::OptionTable;
use crate::policy::{Policy, Role};

/// An item produced while driving the [`Engine`]: either a decoded protocol
/// event, or outbound bytes the role policy generated in reaction to one.
///
/// Per spec §5's FIFO-ordering requirement, a policy-generated [`Outbound`]
/// entry always follows the [`Event`] that produced it in the same `Vec`,
/// in generation order - there is no separate sink object to drain.
///
/// [`Outbound`]: EngineEvent::Outbound
/// [`Event`]: EngineEvent::Event
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EngineEvent {
    /// A decoded `Data`/`Command`/`SubCommand`/`Error` event.
    Event(Event),
    /// Bytes the role policy wants sent back in reaction to the preceding
    /// event. Already fully encoded - write these to the wire as-is.
    Outbound(Bytes),
}

/// A decoder, encoder, option table and role policy composed behind one
/// entry point.
///
/// `Engine` is still sans-I/O: [`Engine::receive_data`] takes bytes and
/// returns events plus outbound bytes, it never touches a socket. Driving
/// the returned outbound bytes to the wire is the caller's (or the out-of-
/// scope adapter's) job.
pub struct Engine {
    decoder: Decoder,
    options: OptionTable,
    policy: Policy,
}

impl Engine {
    #[must_use]
    pub fn new(role: Role) -> Self {
        Self {
            decoder: Decoder::new(),
            options: OptionTable::new(),
            policy: Policy::new(role),
        }
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.policy.role()
    }

    #[must_use]
    pub fn options(&self) -> &OptionTable {
        &self.options
    }

    /// Run the decoder over `bytes`, then hand every `Command` event to the
    /// role policy, returning the decoded events interleaved with any
    /// outbound bytes the policy produced, in decode order.
    pub fn receive_data(&mut self, bytes: &[u8]) -> Vec<EngineEvent> {
        let events = self.decoder.feed(bytes);
        let mut out = Vec::with_capacity(events.len());
        for event in events {
            let outbound = if let Event::Command(cmd) = &event {
                self.policy.on_command(&mut self.options, *cmd)
            } else {
                Vec::new()
            };
            out.push(EngineEvent::Event(event));
            for cmd in outbound {
                out.push(EngineEvent::Outbound(cmd.to_bytes()));
            }
        }
        out
    }

    /// IAC-escape `data` for transmission as application payload.
    #[must_use]
    pub fn send_message(&self, data: &[u8]) -> Bytes {
        escape_message(data)
    }

    /// Encode a 2- or 3-byte `IAC` command for transmission.
    #[must_use]
    pub fn send_command(&self, cmd: u8, opt: Option<u8>) -> Bytes {
        encode_command(cmd, opt)
    }

    /// Encode a full `IAC SB ... IAC SE` subnegotiation frame for
    /// transmission.
    #[must_use]
    pub fn send_subcommand(&self, cmd: u8, payload: &[u8]) -> Bytes {
        encode_subcommand(cmd, payload)
    }

    #[must_use]
    pub fn local_in_effect(&self, opt: u8) -> bool {
        self.options.local_agreed_in_effect(opt)
    }

    #[must_use]
    pub fn remote_in_effect(&self, opt: u8) -> bool {
        self.options.remote_agreed_in_effect(opt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telnet::op_command::{DO, IP, WILL};
    use crate::telnet::op_option::{ECHO, SGA};

    #[test]
    fn do_echo_emits_event_then_outbound_will() {
        let mut engine = Engine::new(Role::Server);
        let events = engine.receive_data(&[crate::telnet::op_command::IAC, DO, ECHO]);
        assert_eq!(
            events,
            alloc::vec![
                EngineEvent::Event(Event::Command(Command::new(DO, Some(ECHO)))),
                EngineEvent::Outbound(Bytes::copy_from_slice(&[
                    crate::telnet::op_command::IAC,
                    WILL,
                    ECHO
                ])),
            ]
        );
        assert!(engine.local_in_effect(ECHO));
    }

    #[test]
    fn do_sga_emits_two_outbound_commands_in_order() {
        let mut engine = Engine::new(Role::Client);
        let events = engine.receive_data(&[crate::telnet::op_command::IAC, DO, SGA]);
        let outbound: Vec<_> = events
            .into_iter()
            .filter_map(|e| match e {
                EngineEvent::Outbound(bytes) => Some(bytes),
                EngineEvent::Event(_) => None,
            })
            .collect();
        assert_eq!(
            outbound,
            alloc::vec![
                Bytes::copy_from_slice(&[crate::telnet::op_command::IAC, WILL, SGA]),
                Bytes::copy_from_slice(&[crate::telnet::op_command::IAC, DO, SGA]),
            ]
        );
    }

    #[test]
    fn two_byte_command_produces_no_outbound() {
        let mut engine = Engine::new(Role::Server);
        let events = engine.receive_data(&[crate::telnet::op_command::IAC, IP]);
        assert_eq!(
            events,
            alloc::vec![EngineEvent::Event(Event::Command(Command::new(IP, None)))]
        );
    }

    #[test]
    fn send_message_escapes_iac() {
        let engine = Engine::new(Role::Server);
        assert_eq!(
            engine.send_message(&[0xff]),
            Bytes::copy_from_slice(&[0xff, 0xff])
        );
    }
}

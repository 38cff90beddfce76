//! TELNET wire constants (RFC 854/855 and the IANA telnet-options registry).

/// IAC-introduced command octets.
pub mod op_command {
    /// "Interpret As Command" - introduces every TELNET command.
    pub const IAC: u8 = 255;
    pub const DONT: u8 = 254;
    pub const DO: u8 = 253;
    pub const WONT: u8 = 252;
    pub const WILL: u8 = 251;
    /// Subnegotiation Begin.
    pub const SB: u8 = 250;
    /// Go Ahead.
    pub const GA: u8 = 249;
    /// Erase Line.
    pub const EL: u8 = 248;
    /// Erase Character.
    pub const EC: u8 = 247;
    /// Are You There.
    pub const AYT: u8 = 246;
    /// Abort Output.
    pub const AO: u8 = 245;
    /// Interrupt Process.
    pub const IP: u8 = 244;
    /// Break.
    pub const BRK: u8 = 243;
    /// Data Mark.
    pub const DM: u8 = 242;
    /// No Operation.
    pub const NOP: u8 = 241;
    /// Subnegotiation End.
    pub const SE: u8 = 240;
    /// End Of Record (RFC 885).
    pub const EOR: u8 = 239;
    pub const NUL: u8 = 0;
}

/// Option codes, per RFC 855 and the IANA telnet-options registry.
pub mod op_option {
    pub const BINARY: u8 = 0; // 8-bit data path
    pub const ECHO: u8 = 1;
    pub const RCP: u8 = 2; // prepare to reconnect
    pub const SGA: u8 = 3; // suppress go ahead
    pub const NAMS: u8 = 4; // approximate message size
    pub const STATUS: u8 = 5;
    pub const TM: u8 = 6; // timing mark
    pub const RCTE: u8 = 7; // remote controlled transmission and echo
    pub const NAOL: u8 = 8; // negotiate about output line width
    pub const NAOP: u8 = 9; // negotiate about output page size
    pub const NAOCRD: u8 = 10; // negotiate about CR disposition
    pub const NAOHTS: u8 = 11; // negotiate about horizontal tabstops
    pub const NAOHTD: u8 = 12; // negotiate about horizontal tab disposition
    pub const NAOFFD: u8 = 13; // negotiate about formfeed disposition
    pub const NAOVTS: u8 = 14; // negotiate about vertical tab stops
    pub const NAOVTD: u8 = 15; // negotiate about vertical tab disposition
    pub const NAOLFD: u8 = 16; // negotiate about output LF disposition
    pub const XASCII: u8 = 17; // extended ascii character set
    pub const LOGOUT: u8 = 18; // force logout
    pub const BM: u8 = 19; // byte macro
    pub const DET: u8 = 20; // data entry terminal
    pub const SUPDUP: u8 = 21;
    pub const SUPDUPOUTPUT: u8 = 22;
    pub const SNDLOC: u8 = 23; // send location
    pub const TTYPE: u8 = 24; // terminal type
    pub const EOR: u8 = 25; // end or record
    pub const TUID: u8 = 26; // TACACS user identification
    pub const OUTMRK: u8 = 27; // output marking
    pub const TTYLOC: u8 = 28; // terminal location number
    pub const VT3270REGIME: u8 = 29;
    pub const X3PAD: u8 = 30;
    pub const NAWS: u8 = 31; // window size
    pub const TSPEED: u8 = 32; // terminal speed
    pub const LFLOW: u8 = 33; // remote flow control
    pub const LINEMODE: u8 = 34;
    pub const XDISPLOC: u8 = 35; // X display location
    pub const OLD_ENVIRON: u8 = 36;
    pub const AUTHENTICATION: u8 = 37;
    pub const ENCRYPT: u8 = 38;
    pub const NEW_ENVIRON: u8 = 39;
    // The following come from the IANA telnet-options registry, which does
    // not assign mnemonic names to every code point.
    pub const TN3270E: u8 = 40;
    pub const XAUTH: u8 = 41;
    pub const CHARSET: u8 = 42;
    pub const RSP: u8 = 43; // telnet remote serial port
    pub const COM_PORT_OPTION: u8 = 44;
    pub const SUPPRESS_LOCAL_ECHO: u8 = 45;
    pub const TLS: u8 = 46;
    pub const KERMIT: u8 = 47;
    pub const SEND_URL: u8 = 48;
    pub const FORWARD_X: u8 = 49;
    pub const PRAGMA_LOGON: u8 = 138;
    pub const SSPI_LOGON: u8 = 139;
    pub const PRAGMA_HEARTBEAT: u8 = 140;
    // Widely deployed MUD-ecosystem extensions outside the IANA registry.
    pub const MCCP2: u8 = 86;
    pub const MCCP3: u8 = 87;
    pub const GMCP: u8 = 201;
}

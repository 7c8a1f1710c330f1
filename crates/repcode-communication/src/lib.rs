//! # Repcode Communication
//!
//! Transport collaborators for the repcode codec: XOR-checksum line framing
//! with sequence numbers, and a blocking serial-port driver for sending
//! framed command lines to a device. This layer consumes built line text as
//! an opaque string and never inspects decoded word maps.

pub mod driver;
pub mod framing;

pub use driver::{
    LineDriver, LoopbackDriver, Printer, SerialDriver, TransportError, TransportResult,
};
pub use framing::{checksum, SequencedFramer};

//! Sequence-numbered, checksummed line framing.
//!
//! A framed command looks like `N3 G4 S2 *77\n`: the `N<seq>` prefix and the
//! command body, then a `*` and the XOR checksum of every byte up to and
//! including the space before the `*`. The trailing space is part of the
//! checksummed text; devices that verify the trailer recompute it over the
//! same span.

/// XOR checksum over the bytes of `line`.
pub fn checksum(line: &str) -> u8 {
    line.bytes().fold(0, |acc, byte| acc ^ byte)
}

/// Stateful framer that stamps each command with the next sequence number.
///
/// Sequence numbers start at 1. Framing is pure string work; writing the
/// framed line to a device is the driver's job.
#[derive(Debug, Clone)]
pub struct SequencedFramer {
    next_seq: u32,
}

impl SequencedFramer {
    /// Create a framer whose first frame will be numbered `N1`.
    pub fn new() -> Self {
        Self { next_seq: 1 }
    }

    /// Sequence number the next [`frame`](Self::frame) call will use.
    pub fn next_sequence(&self) -> u32 {
        self.next_seq
    }

    /// Frame one command line, consuming a sequence number.
    pub fn frame(&mut self, command: &str) -> String {
        let body = format!("N{} {} ", self.next_seq, command);
        self.next_seq += 1;
        format!("{}*{}\n", body, checksum(&body))
    }
}

impl Default for SequencedFramer {
    fn default() -> Self {
        Self::new()
    }
}

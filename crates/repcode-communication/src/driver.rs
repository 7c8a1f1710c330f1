//! Serial-port transport for framed repcode commands.
//!
//! Provides a small blocking driver abstraction: [`LineDriver`] writes one
//! framed line and reads one response line. [`SerialDriver`] talks to real
//! hardware via the `serialport` crate; [`LoopbackDriver`] is an in-memory
//! stand-in for tests and dry runs. [`Printer`] combines a driver with a
//! [`SequencedFramer`](crate::framing::SequencedFramer) to send commands.

use std::collections::VecDeque;
use std::io::{BufRead, BufReader, Write};
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::framing::SequencedFramer;

/// Default read/write timeout for serial ports.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors raised by the transport layer.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The serial port could not be opened or configured.
    #[error("Failed to open port {port}: {reason}")]
    OpenFailed { port: String, reason: String },

    /// A read or write on an open connection failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The device closed the connection mid-read.
    #[error("Connection closed by device")]
    Disconnected,
}

/// Result type alias for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// One line out, one line back.
///
/// Implementations are blocking; the codec and framer above this layer are
/// pure, so all waiting happens here.
pub trait LineDriver {
    /// Write one framed line (already newline-terminated) to the device.
    fn send_line(&mut self, line: &str) -> TransportResult<()>;

    /// Read one response line, stripped of its `\r\n` terminator.
    fn read_line(&mut self) -> TransportResult<String>;
}

/// Blocking serial-port driver.
pub struct SerialDriver {
    reader: BufReader<Box<dyn serialport::SerialPort>>,
    writer: Box<dyn serialport::SerialPort>,
}

impl SerialDriver {
    /// Open a serial port with the default timeout.
    pub fn open(port_name: &str, baud_rate: u32) -> TransportResult<Self> {
        let writer = serialport::new(port_name, baud_rate)
            .timeout(DEFAULT_TIMEOUT)
            .open()
            .map_err(|e| TransportError::OpenFailed {
                port: port_name.to_string(),
                reason: e.to_string(),
            })?;
        let reader = writer
            .try_clone()
            .map_err(|e| TransportError::OpenFailed {
                port: port_name.to_string(),
                reason: e.to_string(),
            })?;
        debug!(port = port_name, baud = baud_rate, "serial port opened");
        Ok(Self {
            reader: BufReader::new(reader),
            writer,
        })
    }
}

impl LineDriver for SerialDriver {
    fn send_line(&mut self, line: &str) -> TransportResult<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> TransportResult<String> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 {
            return Err(TransportError::Disconnected);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// In-memory driver: records sent lines and replays queued responses.
///
/// Used by tests and by dry runs where no hardware is attached. When the
/// response queue is empty it answers `ok`.
#[derive(Debug, Default)]
pub struct LoopbackDriver {
    sent: Vec<String>,
    responses: VecDeque<String>,
}

impl LoopbackDriver {
    /// Create an empty loopback driver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response line for a later `read_line` call.
    pub fn push_response(&mut self, response: impl Into<String>) {
        self.responses.push_back(response.into());
    }

    /// Every line sent so far, in order.
    pub fn sent_lines(&self) -> &[String] {
        &self.sent
    }
}

impl LineDriver for LoopbackDriver {
    fn send_line(&mut self, line: &str) -> TransportResult<()> {
        self.sent.push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self) -> TransportResult<String> {
        Ok(self
            .responses
            .pop_front()
            .unwrap_or_else(|| "ok".to_string()))
    }
}

/// Sends command lines to a device, framing each with a sequence number and
/// checksum trailer.
///
/// The command text is treated as an opaque string: callers typically pass
/// the output of `repcode_core::build`, but the printer never inspects it.
pub struct Printer<D: LineDriver> {
    driver: D,
    framer: SequencedFramer,
}

impl<D: LineDriver> Printer<D> {
    /// Wrap a driver with a fresh sequence counter.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            framer: SequencedFramer::new(),
        }
    }

    /// Frame and send one command, returning the device's response line.
    pub fn send_command(&mut self, command: &str) -> TransportResult<String> {
        let packet = self.framer.frame(command);
        debug!(packet = packet.trim_end(), "SEND");
        self.driver.send_line(&packet)?;
        let response = self.driver.read_line()?;
        debug!(response = response.as_str(), "RECV");
        Ok(response)
    }

    /// Access the underlying driver, e.g. to inspect a loopback.
    pub fn driver(&self) -> &D {
        &self.driver
    }
}

impl Printer<SerialDriver> {
    /// Open a serial port and wrap it in a printer.
    pub fn open(port_name: &str, baud_rate: u32) -> TransportResult<Self> {
        Ok(Self::new(SerialDriver::open(port_name, baud_rate)?))
    }
}

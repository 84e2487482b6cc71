use std::io::Write;

#[derive(thiserror::Error, Debug)]
pub enum IpcError {
    #[error("failed to write to ipc channel : {0}")]
    Write(#[from] std::io::Error),
}

/// One-way outbound message channel owned by the host environment.
/// Delivery semantics are the host's problem, not ours.
pub trait IpcSending {
    fn send(&mut self, channel: &str, payload: &str) -> Result<(), IpcError>;
}

/// Surfaces `"log"`-channel payloads as console text, the way the
/// hosting UI renders them.
pub struct WriterIpcSender<W: Write> {
    writer: W,
}

impl<W: Write> WriterIpcSender<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl WriterIpcSender<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> IpcSending for WriterIpcSender<W> {
    fn send(&mut self, channel: &str, payload: &str) -> Result<(), IpcError> {
        log::trace!("[ IPC ] : sending {} bytes on '{channel}'", payload.len());
        writeln!(self.writer, "{payload}")?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn payload_is_written_as_a_console_line() {
        let mut sender = WriterIpcSender::new(Vec::<u8>::new());
        sender.send("log", "a\nb").unwrap();
        assert_eq!(sender.writer, b"a\nb\n");
    }

    #[test]
    fn write_failures_propagate() {
        struct BrokenPipe;
        impl Write for BrokenPipe {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut sender = WriterIpcSender::new(BrokenPipe);
        assert!(sender.send("log", "report").is_err());
    }
}

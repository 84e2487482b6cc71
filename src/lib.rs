pub mod ipc;
pub mod locations;
pub mod logger;
pub mod ports;
pub mod report;

#[cfg(test)]
pub(crate) mod test {
    use crate::ipc::{IpcError, IpcSending};

    /// Records every outbound message so tests can assert on
    /// channel tags and payloads.
    #[derive(Default)]
    pub struct CapturingIpc {
        pub messages: Vec<(String, String)>,
    }

    impl IpcSending for CapturingIpc {
        fn send(&mut self, channel: &str, payload: &str) -> Result<(), IpcError> {
            self.messages.push((channel.to_owned(), payload.to_owned()));
            Ok(())
        }
    }
}

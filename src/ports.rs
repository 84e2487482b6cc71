use midir::{MidiIO, MidiInput, MidiOutput};

#[derive(thiserror::Error, Debug)]
pub enum PortError {
    #[error("failed to create midi client : {0}")]
    Init(#[from] midir::InitError),
    #[error("no midi port at index {0}")]
    OutOfRange(usize),
    #[error("failed to read midi port name : {0}")]
    Name(#[from] midir::PortInfoError),
}

/// One direction of the system's MIDI port registry. Enumeration order is
/// whatever the backend reports, with no sorting or deduplication.
pub trait PortListing {
    fn port_count(&self) -> usize;
    fn port_name(&self, index: usize) -> Result<String, PortError>;
}

pub struct HostedPorts<Host: MidiIO> {
    host: Host,
}

impl HostedPorts<MidiInput> {
    pub fn inputs() -> Result<Self, PortError> {
        Ok(Self {
            host: MidiInput::new("midils-in")?,
        })
    }
}

impl HostedPorts<MidiOutput> {
    pub fn outputs() -> Result<Self, PortError> {
        Ok(Self {
            host: MidiOutput::new("midils-out")?,
        })
    }
}

impl<Host: MidiIO> PortListing for HostedPorts<Host> {
    fn port_count(&self) -> usize {
        self.host.ports().len()
    }

    fn port_name(&self, index: usize) -> Result<String, PortError> {
        let ports = self.host.ports();
        let port = ports.get(index).ok_or(PortError::OutOfRange(index))?;
        Ok(self.host.port_name(port)?)
    }
}

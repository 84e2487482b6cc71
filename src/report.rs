use crate::{
    ipc::IpcSending,
    ports::{PortError, PortListing},
};

const SEPARATOR: &str = "===========";
const BYPASS: &str = "-1: Void (bypass)";

/// Builds the port report, one section per direction. Each section is a
/// separator, a header, the bypass sentinel, then one `"<index>: <name>"`
/// line per port in registry order. Lines are joined with `\n` and no
/// trailing newline. Port names are passed through unescaped.
pub fn build_report(
    inputs: &impl PortListing,
    outputs: &impl PortListing,
) -> anyhow::Result<String> {
    let mut lines = vec![];

    lines.push(SEPARATOR.to_owned());
    lines.push("MIDI Inputs".to_owned());
    lines.push(BYPASS.to_owned());
    append_port_lines(&mut lines, inputs)?;

    lines.push(SEPARATOR.to_owned());
    lines.push("MIDI Outputs".to_owned());
    lines.push(BYPASS.to_owned());
    append_port_lines(&mut lines, outputs)?;

    Ok(lines.join("\n"))
}

/// Builds the report and sends it once on the `"log"` channel. Any registry
/// or send failure propagates with nothing sent and no retry.
pub fn list_ports(
    inputs: &impl PortListing,
    outputs: &impl PortListing,
    channel: &mut impl IpcSending,
) -> anyhow::Result<()> {
    let report = build_report(inputs, outputs)?;
    channel.send("log", &report)?;
    Ok(())
}

fn append_port_lines(lines: &mut Vec<String>, ports: &impl PortListing) -> Result<(), PortError> {
    let count = ports.port_count();
    log::trace!("[ MIDI ] : found {count} ports");

    for index in 0..count {
        lines.push(format!("{index}: {}", ports.port_name(index)?));
    }

    Ok(())
}

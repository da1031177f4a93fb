use v8hd_session::SessionConfig;
use v8hd_transport::{MidiTransport, MidirTransport};

use crate::cmd::PortsArgs;
use crate::exit::{transport_error, CliResult, SUCCESS};
use crate::output::{print_ports, OutputFormat, PortRow};

pub fn run(_args: PortsArgs, format: OutputFormat, config: &SessionConfig) -> CliResult<i32> {
    let transport = MidirTransport::new(&config.client_name)
        .map_err(|err| transport_error("MIDI backend unavailable", err))?;
    let ports = transport
        .list_ports()
        .map_err(|err| transport_error("port enumeration failed", err))?;

    let rows: Vec<PortRow> = ports
        .into_iter()
        .map(|port| PortRow {
            matches: config.matches(&port.name),
            index: port.index,
            name: port.name,
        })
        .collect();

    print_ports(&rows, format);
    Ok(SUCCESS)
}

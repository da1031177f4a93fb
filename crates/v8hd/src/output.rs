use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use v8hd_codec::{Command, ControlChange, MESSAGE_LEN};

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

/// The wire side of a control: the three bytes and what they address.
#[derive(Debug, Serialize)]
struct UnitFields {
    hex: String,
    bytes: [u8; MESSAGE_LEN],
    control: u8,
    parameter: &'static str,
    value: u8,
}

#[derive(Debug, Serialize)]
struct UnitOutput<'a> {
    #[serde(flatten)]
    command: &'a Command,
    unit: UnitFields,
    sent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    port: Option<&'a str>,
}

/// Print a command with its Control-Change unit. `port` is the output the
/// unit was sent to, if any.
pub fn print_unit(command: &Command, cc: &ControlChange, port: Option<&str>, format: OutputFormat) {
    let unit = UnitFields {
        hex: cc.to_string(),
        bytes: cc.to_bytes(),
        control: cc.control().raw(),
        parameter: cc.control().label(),
        value: cc.value(),
    };

    match format {
        OutputFormat::Json => {
            let out = UnitOutput {
                command,
                unit,
                sent: port.is_some(),
                port,
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["COMMAND", "PARAMETER", "CONTROL", "VALUE", "BYTES"])
                .add_row(vec![
                    command.to_string(),
                    unit.parameter.to_string(),
                    format!("0x{:02X}", unit.control),
                    unit.value.to_string(),
                    unit.hex.clone(),
                ]);
            println!("{table}");
            if let Some(port) = port {
                println!("sent to {port}");
            }
        }
        OutputFormat::Pretty => {
            let target = port.map(|port| format!(" -> {port}")).unwrap_or_default();
            println!(
                "{command}: {} = {} [{}]{target}",
                unit.parameter, unit.value, unit.hex
            );
        }
        OutputFormat::Raw => print_raw(&unit.bytes),
    }
}

#[derive(Debug, Serialize)]
pub struct PortRow {
    pub index: usize,
    pub name: String,
    pub matches: bool,
}

#[derive(Debug, Serialize)]
struct PortsOutput<'a> {
    ports: &'a [PortRow],
    /// Port a session would bind: the first match.
    selected: Option<usize>,
}

pub fn print_ports(ports: &[PortRow], format: OutputFormat) {
    let selected = ports.iter().find(|port| port.matches).map(|port| port.index);

    match format {
        OutputFormat::Json => {
            let out = PortsOutput { ports, selected };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["INDEX", "NAME", "MATCH"]);
            for port in ports {
                let mark = match (port.matches, Some(port.index) == selected) {
                    (true, true) => "selected",
                    (true, false) => "yes",
                    _ => "",
                };
                table.add_row(vec![port.index.to_string(), port.name.clone(), mark.to_string()]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            if ports.is_empty() {
                println!("no MIDI output ports");
            }
            for port in ports {
                let mark = if Some(port.index) == selected { "*" } else { " " };
                println!("{mark} {}: {}", port.index, port.name);
            }
        }
        OutputFormat::Raw => {
            for port in ports {
                println!("{}", port.name);
            }
        }
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

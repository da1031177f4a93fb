use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use v8hd_session::SessionConfig;
use v8hd_transport::{MidiTransport, MidirTransport, PortInfo};

use crate::cmd::DoctorArgs;
use crate::exit::{CliResult, HEALTH_CHECK_FAILED, SUCCESS};
use crate::output::OutputFormat;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum CheckStatus {
    Pass,
    Fail,
    Warn,
    Info,
    Skip,
}

#[derive(Debug, Serialize)]
struct CheckResult {
    name: String,
    status: CheckStatus,
    detail: String,
}

impl CheckResult {
    fn new(name: &str, status: CheckStatus, detail: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            status,
            detail: detail.into(),
        }
    }
}

impl CheckStatus {
    fn label(self) -> &'static str {
        match self {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "FAIL",
            CheckStatus::Warn => "warn",
            CheckStatus::Info => "info",
            CheckStatus::Skip => "skip",
        }
    }
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    healthy: bool,
    checks: Vec<CheckResult>,
}

impl DoctorReport {
    fn new(checks: Vec<CheckResult>) -> Self {
        let healthy = checks.iter().all(|check| check.status != CheckStatus::Fail);
        Self { healthy, checks }
    }

    fn summary(&self) -> String {
        let failed = self
            .checks
            .iter()
            .filter(|check| check.status == CheckStatus::Fail)
            .count();
        match failed {
            0 => "V-8HD reachable".to_string(),
            n => format!("{n} check(s) failed"),
        }
    }
}

pub fn run(_args: DoctorArgs, format: OutputFormat, config: &SessionConfig) -> CliResult<i32> {
    let mut checks = Vec::new();

    match MidirTransport::new(&config.client_name) {
        Ok(transport) => {
            checks.push(CheckResult::new(
                "midi_backend",
                CheckStatus::Pass,
                format!("client '{}' registered", transport.client_name()),
            ));
            match transport.list_ports() {
                Ok(ports) => {
                    checks.push(port_count_check(&ports));
                    checks.push(device_check(&ports, config));
                }
                Err(err) => {
                    checks.push(CheckResult::new("output_ports", CheckStatus::Fail, err.to_string()));
                    checks.push(CheckResult::new(
                        "device_present",
                        CheckStatus::Skip,
                        "port enumeration failed",
                    ));
                }
            }
        }
        Err(err) => {
            checks.push(CheckResult::new("midi_backend", CheckStatus::Fail, err.to_string()));
            checks.push(CheckResult::new(
                "output_ports",
                CheckStatus::Skip,
                "MIDI backend unavailable",
            ));
            checks.push(CheckResult::new(
                "device_present",
                CheckStatus::Skip,
                "MIDI backend unavailable",
            ));
        }
    }

    checks.push(compiled_features_check());

    let report = DoctorReport::new(checks);
    print_doctor(&report, format);
    Ok(if report.healthy { SUCCESS } else { HEALTH_CHECK_FAILED })
}

fn port_count_check(ports: &[PortInfo]) -> CheckResult {
    if ports.is_empty() {
        CheckResult::new("output_ports", CheckStatus::Warn, "no MIDI output ports")
    } else {
        CheckResult::new(
            "output_ports",
            CheckStatus::Info,
            format!("{} MIDI output port(s)", ports.len()),
        )
    }
}

fn device_check(ports: &[PortInfo], config: &SessionConfig) -> CheckResult {
    match ports.iter().find(|port| config.matches(&port.name)) {
        Some(port) => CheckResult::new("device_present", CheckStatus::Pass, format!("found {port}")),
        None => CheckResult::new(
            "device_present",
            CheckStatus::Fail,
            format!(
                "no output matching {}",
                config.match_patterns.join(" or ")
            ),
        ),
    }
}

fn compiled_features_check() -> CheckResult {
    let features: Vec<&str> = [
        ("cli", true),
        ("session", cfg!(feature = "session")),
        ("midir", cfg!(feature = "midir")),
    ]
    .into_iter()
    .filter_map(|(name, enabled)| enabled.then_some(name))
    .collect();

    CheckResult::new("compiled_features", CheckStatus::Info, features.join(", "))
}

fn print_doctor(report: &DoctorReport, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string(report).unwrap_or_else(|_| "{}".to_string())
        ),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["CHECK", "STATUS", "DETAIL"]);
            for check in &report.checks {
                table.add_row(vec![
                    check.name.clone(),
                    check.status.label().to_string(),
                    check.detail.clone(),
                ]);
            }
            println!("{table}");
            println!("{}", report.summary());
        }
        OutputFormat::Pretty => {
            for check in &report.checks {
                println!("{:<5} {}: {}", check.status.label(), check.name, check.detail);
            }
            println!("{}", report.summary());
        }
        OutputFormat::Raw => println!("{}", if report.healthy { "ok" } else { "unhealthy" }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ports(names: &[&str]) -> Vec<PortInfo> {
        names
            .iter()
            .enumerate()
            .map(|(index, name)| PortInfo {
                index,
                name: name.to_string(),
            })
            .collect()
    }

    #[test]
    fn device_check_reports_first_match() {
        let check = device_check(
            &ports(&["Midi Through", "Roland V-8HD", "V-8HD 2"]),
            &SessionConfig::default(),
        );
        assert_eq!(check.status, CheckStatus::Pass);
        assert_eq!(check.detail, "found 1: Roland V-8HD");
    }

    #[test]
    fn device_check_fails_without_match() {
        let check = device_check(&ports(&["Midi Through"]), &SessionConfig::default());
        assert_eq!(check.status, CheckStatus::Fail);
        assert_eq!(check.detail, "no output matching Roland or V-8HD");
    }

    #[test]
    fn empty_port_list_warns() {
        assert_eq!(port_count_check(&[]).status, CheckStatus::Warn);
        assert_eq!(port_count_check(&ports(&["a"])).status, CheckStatus::Info);
    }

    #[test]
    fn any_failure_makes_report_unhealthy() {
        let report = DoctorReport::new(vec![
            CheckResult::new("midi_backend", CheckStatus::Pass, "ok"),
            CheckResult::new("output_ports", CheckStatus::Warn, "none"),
        ]);
        assert!(report.healthy);
        assert_eq!(report.summary(), "V-8HD reachable");

        let report = DoctorReport::new(vec![
            CheckResult::new("midi_backend", CheckStatus::Pass, "ok"),
            CheckResult::new("device_present", CheckStatus::Fail, "missing"),
        ]);
        assert!(!report.healthy);
        assert_eq!(report.summary(), "1 check(s) failed");

        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["healthy"], false);
        assert_eq!(json["checks"][1]["status"], "fail");
    }
}

use serde::Serialize;

use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::OutputFormat;

#[derive(Debug, Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
    target: &'static str,
    os: &'static str,
    arch: &'static str,
    midi_backend: &'static str,
    features: Vec<&'static str>,
}

impl BuildInfo {
    fn current() -> Self {
        let mut features = vec!["cli"];
        if cfg!(feature = "session") {
            features.push("session");
        }
        if cfg!(feature = "midir") {
            features.push("midir");
        }

        Self {
            name: "v8hd",
            version: env!("CARGO_PKG_VERSION"),
            target: option_env!("V8HD_BUILD_TARGET").unwrap_or("unknown"),
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
            midi_backend: if cfg!(feature = "midir") { "midir" } else { "none" },
            features,
        }
    }
}

pub fn run(args: VersionArgs, format: OutputFormat) -> CliResult<i32> {
    let info = BuildInfo::current();
    if !args.extended {
        println!("{} {}", info.name, info.version);
        return Ok(SUCCESS);
    }

    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string(&info).unwrap_or_else(|_| "{}".to_string())
        ),
        _ => {
            println!("name: {}", info.name);
            println!("version: {}", info.version);
            println!("target: {} ({}/{})", info.target, info.os, info.arch);
            println!("midi backend: {}", info.midi_backend);
            println!("features: {}", info.features.join(", "));
        }
    }
    Ok(SUCCESS)
}

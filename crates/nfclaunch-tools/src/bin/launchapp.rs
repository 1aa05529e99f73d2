use clap::Parser;
use nfclaunch_core::LaunchAppRequest;
use nfclaunch_tools::{encode_request, to_hex, FramingArg, OutputFormat, ToolError};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "nfc-launchapp")]
struct Args {
    /// Android package name for the Android Application Record.
    #[arg(long)]
    android: Option<String>,
    /// Windows application id (GUID) for the LaunchApp record.
    #[arg(long)]
    windows: Option<String>,
    #[arg(long, default_value_t = 256)]
    capacity: usize,
    #[arg(long, value_enum, default_value = "raw")]
    framing: FramingArg,
    #[arg(long, value_enum, default_value = "hex")]
    format: OutputFormat,
    /// Write to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), ToolError> {
    let request = LaunchAppRequest::new(
        args.android.as_deref().map(str::as_bytes),
        args.windows.as_deref().map(str::as_bytes),
    );
    let msg = encode_request(&request, args.framing.into_framing(), args.capacity)?;
    log::info!("encoded {} record(s), {} bytes", msg.records.len(), msg.length);

    let rendered = match args.format {
        OutputFormat::Hex => format!("{}\n", to_hex(&msg.bytes)).into_bytes(),
        OutputFormat::Json => {
            let mut json = serde_json::to_vec_pretty(&msg)?;
            json.push(b'\n');
            json
        }
        OutputFormat::Binary => msg.bytes.clone(),
    };

    match args.out {
        Some(path) => std::fs::write(&path, &rendered)?,
        None => std::io::stdout().write_all(&rendered)?,
    }
    Ok(())
}

use std::{env, fs, io, process};

use bytes::Bytes;
use camera_params::*;
use tracing::{error, info, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let log_level = match env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn print_summary(params: &CameraParameters) {
    let preview = params.preview_size();
    let picture = params.picture_size();
    let fps = params.preview_fps_range();

    println!("preview size: {}", preview);
    println!("picture size: {}", picture);
    println!("preview fps range: {}", fps);
    println!(
        "preview format: {} ({})",
        params.preview_format().unwrap_or("<unset>"),
        preview_format_to_enum(params.preview_format())
    );

    let sizes: Vec<String> = params
        .supported_preview_sizes()
        .iter()
        .map(Size::to_string)
        .collect();
    println!("supported preview sizes: [{}]", sizes.join(", "));
    println!(
        "supported preview formats: {:?}",
        params.supported_preview_formats()
    );

    let extensions: Vec<&str> = params
        .iter()
        .map(|(key, _)| key)
        .filter(|key| !keys::is_standard_key(key))
        .collect();
    if !extensions.is_empty() {
        println!("non-standard keys: {}", extensions.join(", "));
    }
}

fn run(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut raw = fs::read(path)?;
    // editors leave a final newline that would otherwise end up in the last value
    while matches!(raw.last(), Some(b'\n') | Some(b'\r')) {
        raw.pop();
    }
    let mut data = Bytes::from(raw);
    let params = CameraParameters::from_bytes(&mut data)?;
    info!("decoded {} entries from {}", params.len(), path);

    params.dump_to(&mut io::stdout())?;
    print_summary(&params);

    let json_path = format!("{}.json", path);
    fs::write(&json_path, params.to_json()?)?;
    info!("JSON snapshot written to: {}", json_path);

    Ok(())
}

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Warning: Could not set up logging: {}", e);
    }

    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: camera_params <flattened-parameters-file>");
        process::exit(2);
    };

    if let Err(e) = run(&path) {
        error!("failed to process {}: {}", path, e);
        process::exit(1);
    }
}

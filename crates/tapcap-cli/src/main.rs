use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use simplelog::{ColorChoice, Config as LogConfig, TermLogger, TerminalMode};

use tapcap_core::{
    ArchiveError, DecodedFrame, RawSocketSource, SourceError, TransportHeader,
    classify_ether_type, ip_protocol_name, run_session, write_capture,
};

#[derive(Parser, Debug)]
#[command(name = "tapcap")]
#[command(version)]
#[command(
    about = "Live link-layer capture with per-frame protocol decoding.",
    long_about = None,
    after_help = "Examples:\n  tapcap eth0\n  tapcap any -w session.pcap\n  tapcap eth0 --count 100 --json"
)]
struct Cli {
    /// Interface to capture on (`any` for all interfaces)
    interface: String,

    /// Archive path for the captured frames (legacy pcap)
    #[arg(short = 'w', long = "write", default_value = "capture.pcap")]
    archive: PathBuf,

    /// Stop after this many frames
    #[arg(long)]
    count: Option<u64>,

    /// Emit one JSON record per frame instead of text lines
    #[arg(long)]
    json: bool,

    /// Suppress per-frame output
    #[arg(long)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

static STOP: AtomicBool = AtomicBool::new(false);

extern "C" fn on_interrupt(_signal: libc::c_int) {
    STOP.store(true, Ordering::SeqCst);
}

/// Install the SIGINT handler without SA_RESTART so a pending blocking
/// read returns EINTR and the capture loop can observe the stop flag.
fn install_interrupt_handler() -> std::io::Result<()> {
    let handler: extern "C" fn(libc::c_int) = on_interrupt;
    unsafe {
        let mut action: libc::sigaction = std::mem::zeroed();
        action.sa_sigaction = handler as libc::sighandler_t;
        if libc::sigaction(libc::SIGINT, &action, std::ptr::null_mut()) != 0 {
            return Err(std::io::Error::last_os_error());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if TermLogger::init(
        level,
        LogConfig::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("warning: logger already initialized");
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

impl From<SourceError> for CliError {
    fn from(err: SourceError) -> Self {
        let hint = match &err {
            SourceError::Privilege(_) => {
                Some("run as root or grant CAP_NET_RAW to the binary".to_string())
            }
            SourceError::NoSuchInterface { .. } => {
                Some("list available interfaces with `ip link`, or use `any`".to_string())
            }
            SourceError::Io(_) => None,
        };
        CliError::new(err.to_string(), hint)
    }
}

impl From<ArchiveError> for CliError {
    fn from(err: ArchiveError) -> Self {
        CliError::new(err.to_string(), Some("check the -w path is writable".to_string()))
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    install_interrupt_handler()
        .context("failed to install interrupt handler")
        .map_err(CliError::from)?;

    let mut source = RawSocketSource::open(&cli.interface)?;

    let (buffer, summary) = run_session(&mut source, &STOP, cli.count, |frame| {
        report_frame(frame, cli.json, cli.quiet);
    })?;

    if !cli.quiet {
        eprintln!(
            "{} frames captured, {} truncated",
            summary.frames_total, summary.frames_truncated
        );
    }

    if write_capture(&cli.archive, &buffer)? {
        if !cli.quiet {
            eprintln!("OK: archive written -> {}", cli.archive.display());
        }
    } else {
        eprintln!("no frames captured; archive not written");
    }
    Ok(())
}

fn report_frame(frame: &DecodedFrame<'_>, json: bool, quiet: bool) {
    if quiet {
        return;
    }
    if json {
        match serde_json::to_string(frame) {
            Ok(line) => println!("{line}"),
            Err(err) => log::warn!("could not serialize frame record: {err}"),
        }
    } else {
        println!("{}", render_frame(frame));
    }
}

/// One text line per frame, with a segment per decoded layer.
fn render_frame(frame: &DecodedFrame<'_>) -> String {
    let mut parts = Vec::new();

    if let Some(eth) = &frame.ethernet {
        let name = match classify_ether_type(eth.ether_type) {
            Some(kind) => kind.name().to_string(),
            None => format!("0x{:04x}", eth.ether_type),
        };
        parts.push(format!("eth {} > {} {}", eth.source, eth.destination, name));
    }

    if let Some(ip) = &frame.ipv4 {
        let proto = match ip_protocol_name(ip.protocol) {
            Some(name) => name.to_string(),
            None => format!("proto {}", ip.protocol),
        };
        parts.push(format!(
            "ipv4 {} > {} {} ttl={}",
            ip.source, ip.destination, proto, ip.ttl
        ));
    }

    match &frame.transport {
        Some(TransportHeader::Tcp(tcp)) => parts.push(format!(
            "tcp {} > {} [{}]",
            tcp.source_port,
            tcp.destination_port,
            tcp.flag_label()
        )),
        Some(TransportHeader::Udp(udp)) => {
            parts.push(format!("udp {} > {}", udp.source_port, udp.destination_port));
        }
        Some(TransportHeader::Icmp(icmp)) => {
            let name = match icmp.type_name() {
                Some(name) => name.to_string(),
                None => format!("type {}", icmp.icmp_type),
            };
            parts.push(format!("icmp {} code {}", name, icmp.code));
        }
        None => {}
    }

    if let Some(layer) = frame.truncated {
        parts.push(format!("[truncated at {layer}]"));
    }

    if parts.is_empty() {
        parts.push("[empty frame]".to_string());
    }
    parts.join(" | ")
}

#[cfg(test)]
mod tests {
    use super::render_frame;
    use tapcap_core::{Layer, decode_frame};

    fn udp_frame() -> Vec<u8> {
        let mut raw = vec![
            0x02, 0x00, 0x00, 0x00, 0x00, 0x02, // destination
            0x02, 0x00, 0x00, 0x00, 0x00, 0x01, // source
            0x08, 0x00, // IPv4
        ];
        let mut ip = vec![0u8; 20];
        ip[0] = 0x45;
        ip[8] = 64;
        ip[9] = 17;
        ip[12..16].copy_from_slice(&[10, 0, 0, 1]);
        ip[16..20].copy_from_slice(&[10, 0, 0, 2]);
        raw.extend_from_slice(&ip);
        raw.extend_from_slice(&53u16.to_be_bytes());
        raw.extend_from_slice(&12345u16.to_be_bytes());
        raw.extend_from_slice(&8u16.to_be_bytes());
        raw.extend_from_slice(&0u16.to_be_bytes());
        raw
    }

    #[test]
    fn renders_all_layers() {
        let raw = udp_frame();
        let frame = decode_frame(&raw);
        let line = render_frame(&frame);
        assert_eq!(
            line,
            "eth 02:00:00:00:00:01 > 02:00:00:00:00:02 IPv4 \
             | ipv4 10.0.0.1 > 10.0.0.2 UDP ttl=64 \
             | udp 53 > 12345"
        );
    }

    #[test]
    fn renders_truncation_marker() {
        let frame = decode_frame(&[0u8; 5]);
        assert_eq!(frame.truncated, Some(Layer::Ethernet));
        assert_eq!(render_frame(&frame), "[truncated at Ethernet]");
    }

    #[test]
    fn renders_unknown_protocols_numerically() {
        let mut raw = udp_frame();
        raw[23] = 47; // GRE, not in the table
        let frame = decode_frame(&raw);
        let line = render_frame(&frame);
        assert!(line.contains("proto 47"));
        assert!(!line.contains("udp"));
    }
}

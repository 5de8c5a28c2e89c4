//! Operator tool around the subrecord codec.
//!
//! Usage:
//!   esmconv convert SIG RTYP HEX           Convert a console payload, print PC hex
//!   esmconv read SIG RTYP HEX [--le]       Decode a payload (big-endian unless --le)
//!   esmconv signatures                     List every known subrecord signature
//!   esmconv audit FILE [--fallbacks]       Convert a `RTYP SIG HEX` listing and report coverage
//!
//! `ESMCONV_FALLBACK_LOG=1` enables fallback counting the same way `--fallbacks` does.
//! Diagnostics go to stderr; set `RUST_LOG=esmconv=trace` to see every override and fallback.

use anyhow::{bail, Context};
use esmconv::{
    all_registered_signatures, convert, read_fields, set_fallback_logging_enabled, CoverageReport,
    Endianness,
};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: esmconv <convert SIG RTYP HEX | read SIG RTYP HEX [--le] | signatures | audit FILE [--fallbacks]>";

fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    if let Some(pos) = args.iter().position(|a| a == flag) {
        args.remove(pos);
        true
    } else {
        false
    }
}

fn payload_arg(arg: Option<&String>) -> anyhow::Result<Vec<u8>> {
    let text = arg.map(String::as_str).unwrap_or("");
    hex::decode(text.replace([' ', ':'], "")).context("payload must be hex")
}

fn positional<'a>(args: &'a [String], i: usize, what: &str) -> anyhow::Result<&'a str> {
    match args.get(i) {
        Some(s) => Ok(s),
        None => bail!("missing {what}\n{USAGE}"),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let little_endian = take_flag(&mut args, "--le");
    let fallbacks = take_flag(&mut args, "--fallbacks")
        || std::env::var("ESMCONV_FALLBACK_LOG").is_ok_and(|v| v == "1");
    set_fallback_logging_enabled(fallbacks);

    let Some(command) = args.first().cloned() else {
        bail!(USAGE);
    };
    match command.as_str() {
        "convert" => {
            let sig = positional(&args, 1, "signature")?;
            let rt = positional(&args, 2, "record type")?;
            let payload = payload_arg(args.get(3))?;
            match convert(sig, rt, &payload) {
                Some(out) => println!("{}", hex::encode(out)),
                None => bail!("no schema for {sig} in {rt} ({} bytes)", payload.len()),
            }
        }
        "read" => {
            let sig = positional(&args, 1, "signature")?;
            let rt = positional(&args, 2, "record type")?;
            let payload = payload_arg(args.get(3))?;
            let endianness = Endianness::from(!little_endian);
            let fields = read_fields(sig, rt, &payload, endianness);
            if fields.is_empty() {
                eprintln!("{sig} in {rt}: nothing decoded");
            }
            for (name, value) in &fields {
                println!("{name} = {value}");
            }
        }
        "signatures" => {
            for s in all_registered_signatures() {
                println!("{s}");
            }
        }
        "audit" => {
            let path = positional(&args, 1, "listing file")?;
            let report = CoverageReport::from_path(path)
                .with_context(|| format!("auditing {path}"))?;
            print!("{report}");
        }
        other => bail!("unknown command {other:?}\n{USAGE}"),
    }
    Ok(())
}

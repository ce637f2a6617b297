use std::env;
use std::process::ExitCode;

use qrsmith::{ECLevel, QRBuilder};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: qrsmith <message> [L|M|Q|H]";

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let mut args = env::args().skip(1);
    let Some(message) = args.next() else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };
    let ec_level = args.next().map(|s| ECLevel::parse_or_default(&s)).unwrap_or_default();

    let qr = match QRBuilder::new(message.as_bytes()).ec_level(ec_level).build() {
        Ok(qr) => qr,
        Err(e) => {
            eprintln!("{e}\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    print!("{}", qr.to_svg(4));
    eprint!("{}", qr.to_str(1));
    ExitCode::SUCCESS
}

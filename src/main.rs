use std::{env, process::ExitCode};

use qrv1::{ECLevel, QRBuilder, QRResult};

fn run(args: &[String]) -> QRResult<String> {
    let data = args.first().map(String::as_str).unwrap_or_default();
    let ec_level = match args.get(1) {
        Some(ecl) => ecl.parse::<ECLevel>()?,
        None => ECLevel::M,
    };

    let qr = QRBuilder::new(data).ec_level(ec_level).build()?;
    Ok(qr.to_str(1))
}

fn main() -> ExitCode {
    let args = env::args().skip(1).collect::<Vec<_>>();
    if args.is_empty() || args.len() > 2 {
        eprintln!("Usage: qrv1 <text> [L|M|Q|H]");
        return ExitCode::from(2);
    }

    match run(&args) {
        Ok(qr) => {
            println!("{qr}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

use std::path::PathBuf;

use nomina_lib::{Document, Error};

use super::source_loader::load_source;

pub struct CheckArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let source = match load_source(args.source_path.as_deref(), args.source_text.as_deref()) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    let path = args.source_path.as_ref().map(|p| p.display().to_string());

    let doc = match Document::parse(&source) {
        Ok(doc) => doc,
        Err(Error::ParseFailed(diagnostics)) => {
            let mut printer = diagnostics.printer().source(&source).colored(args.color);
            if let Some(p) = &path {
                printer = printer.path(p);
            }
            eprintln!("{}", printer.render());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let findings = doc.findings();
    if findings.is_empty() {
        // Silent on success (like cargo check)
        return;
    }

    if args.json {
        match serde_json::to_string_pretty(&findings) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let diagnostics = doc.finding_diagnostics();
    let mut printer = diagnostics.printer().source(&source).colored(args.color);
    if let Some(p) = &path {
        printer = printer.path(p);
    }
    println!("{}", printer.render());
}

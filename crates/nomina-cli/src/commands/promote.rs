use std::fs;
use std::path::PathBuf;

use nomina_lib::{Document, Error};

use super::source_loader::load_source;

pub struct PromoteArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub write: bool,
    pub color: bool,
}

pub fn run(args: PromoteArgs) {
    if args.write && args.source_path.is_none() {
        eprintln!("error: --write requires a FILE argument");
        std::process::exit(1);
    }

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

    let rewritten = match doc.promote_all() {
        Ok(rewritten) => rewritten,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if args.write {
        let path = match args.source_path.as_ref() {
            Some(path) => path,
            None => unreachable!("--write without FILE is rejected above"),
        };
        if let Err(e) = fs::write(path, rewritten.source()) {
            eprintln!("error: failed to write '{}': {}", path.display(), e);
            std::process::exit(1);
        }
        return;
    }

    print!("{}", rewritten.source());
}

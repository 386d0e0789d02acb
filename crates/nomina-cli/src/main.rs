mod cli;
mod commands;

use cli::{CheckParams, PromoteParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("promote", m)) => {
            let params = PromoteParams::from_matches(m);
            commands::promote::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

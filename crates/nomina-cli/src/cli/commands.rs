//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("nomina")
        .about("Finds anonymous record literals and promotes them to named record types")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(promote_command())
}

/// Report anonymous record literals without modifying anything.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Report anonymous record literals")
        .override_usage(
            "\
  nomina check <FILE>
  nomina check -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  nomina check app.nom                # report literals with field names
  nomina check app.nom --json         # machine-readable findings
  nomina check -s 'let a = {x: 1}'    # inline source"#,
        )
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(json_arg())
        .arg(color_arg())
}

/// Rewrite anonymous record literals into named constructor calls.
pub fn promote_command() -> Command {
    Command::new("promote")
        .about("Promote anonymous record literals to named record types")
        .override_usage(
            "\
  nomina promote <FILE>
  nomina promote <FILE> --write
  nomina promote -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  nomina promote app.nom              # rewritten source to stdout
  nomina promote app.nom --write      # rewrite the file in place
  nomina promote -s 'let a = {x: 1}'  # inline source"#,
        )
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(write_arg())
        .arg(color_arg())
}

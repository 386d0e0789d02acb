//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch -> command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::promote::PromoteArgs;

pub struct CheckParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub json: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            source_path: p.source_path,
            source_text: p.source_text,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct PromoteParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub write: bool,
    pub color: ColorChoice,
}

impl PromoteParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            write: m.get_flag("write"),
            color: parse_color(m),
        }
    }
}

impl From<PromoteParams> for PromoteArgs {
    fn from(p: PromoteParams) -> Self {
        Self {
            source_path: p.source_path,
            source_text: p.source_text,
            write: p.write,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(String::as_str) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

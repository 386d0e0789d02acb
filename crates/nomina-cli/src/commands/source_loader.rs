use std::fs;
use std::io::{self, Read};
use std::path::Path;

pub fn load_source(
    source_path: Option<&Path>,
    source_text: Option<&str>,
) -> Result<String, String> {
    if let Some(text) = source_text {
        return Ok(text.to_string());
    }

    if let Some(path) = source_path {
        if path.as_os_str() == "-" {
            return load_stdin();
        }
        return fs::read_to_string(path)
            .map_err(|e| format!("failed to read '{}': {}", path.display(), e));
    }

    Err("source is required: use positional FILE or -s/--source".to_string())
}

fn load_stdin() -> Result<String, String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    Ok(buf)
}

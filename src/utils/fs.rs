use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::utils::error::BoxResult;

/// Read input from a file path, or from stdin when no path is given
pub fn read_input(path: Option<&Path>) -> BoxResult<String> {
    match path {
        Some(path) => {
            let contents = fs::read_to_string(path)?;
            Ok(contents)
        }
        None => {
            let mut contents = String::new();
            io::stdin().read_to_string(&mut contents)?;
            Ok(contents)
        }
    }
}

/// Write output to a file path, or to stdout when no path is given
pub fn write_output(path: Option<&Path>, contents: &str) -> BoxResult<()> {
    match path {
        Some(path) => {
            // Create parent directories if they don't exist
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, contents)?;
        }
        None => {
            io::stdout().write_all(contents.as_bytes())?;
        }
    }
    Ok(())
}

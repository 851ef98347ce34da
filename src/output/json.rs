//! JSON output formatting

use std::io;

use crate::tree::DirectoryTree;

pub fn to_json_value(tree: &DirectoryTree) -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(tree)
}

pub fn to_json_string(tree: &DirectoryTree, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(tree)
    } else {
        serde_json::to_string(tree)
    }
}

/// Print tree as JSON to stdout.
pub fn print_json(tree: &DirectoryTree, pretty: bool) -> io::Result<()> {
    let json = to_json_string(tree, pretty).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}

/// Extract the interpreter name from a script's first line.
///
/// Handles both direct paths (`#!/bin/bash`) and `env` indirection
/// (`#!/usr/bin/env -S python3 -u`). Returns the interpreter's base name.
#[must_use]
pub fn parse_shebang(first_line: &str) -> Option<String> {
    let command = first_line.strip_prefix("#!")?;
    let mut parts = command.split_whitespace();
    let program = base_name(parts.next()?);

    let interpreter = if program == "env" {
        parts.find(|p| !p.starts_with('-') && !p.contains('='))?
    } else {
        program
    };

    Some(base_name(interpreter).to_string())
}

fn base_name(command: &str) -> &str {
    command.rsplit('/').next().unwrap_or(command)
}

#[cfg(test)]
#[path = "shebang_tests.rs"]
mod tests;

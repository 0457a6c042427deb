use std::sync::OnceLock;

use regex::Regex;

/// Expand `{{ env.VAR }}` placeholders in a raw TOML string
///
/// An optional fallback is supported via `{{ env.VAR | default("value") }}`.
/// A placeholder for an unset variable without a fallback is an error.
/// Lines starting with `#` (TOML comments) are passed through unchanged.
pub fn expand_env(input: &str) -> Result<String, String> {
    let mut output = String::with_capacity(input.len());

    for (i, line) in input.lines().enumerate() {
        if i > 0 {
            output.push('\n');
        }

        if line.trim_start().starts_with('#') {
            output.push_str(line);
        } else {
            output.push_str(&expand_line(line)?);
        }
    }

    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}

fn expand_line(line: &str) -> Result<String, String> {
    // Group 1: variable name, group 2: optional default("...") fallback
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*env\.([A-Za-z0-9_]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
            .expect("must be valid regex")
    });

    let mut result = String::with_capacity(line.len());
    let mut last_end = 0;

    for captures in re.captures_iter(line) {
        let overall = captures.get(0).unwrap();
        let var_name = captures.get(1).unwrap().as_str();
        let fallback = captures.get(2).map(|m| m.as_str());

        result.push_str(&line[last_end..overall.start()]);

        match std::env::var(var_name) {
            Ok(value) => result.push_str(&value),
            Err(_) => match fallback {
                Some(value) => result.push_str(value),
                None => return Err(format!("environment variable not found: `{var_name}`")),
            },
        }

        last_end = overall.end();
    }

    result.push_str(&line[last_end..]);
    Ok(result)
}

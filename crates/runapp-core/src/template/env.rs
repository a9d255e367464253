//! Environment variable expansion for targets and arguments.
//!
//! Recognises `%VAR%`, `${VAR}` and `$VAR`. References to undefined variables
//! are left as written.

/// Expand environment references using the current process environment.
pub fn expand_env(input: &str) -> String {
    expand_env_with(input, |name| std::env::var(name).ok())
}

/// Expand environment references using `lookup` to resolve names.
pub fn expand_env_with<F>(input: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find(['%', '$']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        let consumed = if tail.starts_with('%') {
            expand_percent(tail, &lookup, &mut out)
        } else {
            expand_dollar(tail, &lookup, &mut out)
        };
        rest = &tail[consumed..];
    }

    out.push_str(rest);
    out
}

/// `tail` starts with `%`. Returns the number of bytes consumed.
fn expand_percent<F>(tail: &str, lookup: &F, out: &mut String) -> usize
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(end) = tail[1..].find('%') {
        let name = &tail[1..1 + end];
        if !name.is_empty()
            && let Some(value) = lookup(name)
        {
            out.push_str(&value);
            return end + 2;
        }
    }
    // Not a resolvable reference: keep the `%` and rescan from the next char,
    // so the closing `%` may open another reference.
    out.push('%');
    1
}

/// `tail` starts with `$`. Returns the number of bytes consumed.
fn expand_dollar<F>(tail: &str, lookup: &F, out: &mut String) -> usize
where
    F: Fn(&str) -> Option<String>,
{
    let after = &tail[1..];

    if let Some(braced) = after.strip_prefix('{') {
        if let Some(end) = braced.find('}') {
            let name = &braced[..end];
            let consumed = end + 3;
            match lookup(name).filter(|_| is_var_name(name)) {
                Some(value) => out.push_str(&value),
                None => out.push_str(&tail[..consumed]),
            }
            return consumed;
        }
        out.push('$');
        return 1;
    }

    let name_len = after
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(after.len());
    let name = &after[..name_len];
    if !is_var_name(name) {
        out.push('$');
        return 1;
    }

    match lookup(name) {
        Some(value) => out.push_str(&value),
        None => out.push_str(&tail[..name_len + 1]),
    }
    name_len + 1
}

fn is_var_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

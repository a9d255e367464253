//! `{name}` placeholder scanning and substitution.

use crate::uri::QueryParams;

/// A piece of an argument template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

fn is_name_char(c: char) -> bool {
    !(c.is_whitespace() || c == '{' || c == '}')
}

/// Split a template into literal text and `{name}` placeholders, left to right.
///
/// A name is one or more characters that are neither whitespace nor braces.
/// Braces that do not form a placeholder stay in the literal text, so
/// `{{file}}` keeps its outer braces and `{a{file}` keeps `{a`.
pub fn scan(template: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut pos = 0;

    while let Some(offset) = template[pos..].find('{') {
        let open = pos + offset;
        let name_start = open + 1;
        let name_len = template[name_start..]
            .find(|c: char| !is_name_char(c))
            .unwrap_or(template.len() - name_start);
        let close = name_start + name_len;

        if name_len > 0 && template[close..].starts_with('}') {
            if literal_start < open {
                segments.push(Segment::Literal(&template[literal_start..open]));
            }
            segments.push(Segment::Placeholder(&template[name_start..close]));
            pos = close + 1;
            literal_start = pos;
        } else {
            pos = name_start;
        }
    }

    if literal_start < template.len() {
        segments.push(Segment::Literal(&template[literal_start..]));
    }
    segments
}

/// Distinct placeholder names in order of first appearance.
pub fn placeholder_names(template: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for segment in scan(template) {
        if let Segment::Placeholder(name) = segment
            && !names.contains(&name)
        {
            names.push(name);
        }
    }
    names
}

/// Replace every placeholder with its parameter value, or with nothing when
/// the parameter is absent.
pub fn substitute(template: &str, params: &QueryParams) -> String {
    let mut out = String::with_capacity(template.len());
    for segment in scan(template) {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Placeholder(name) => {
                if let Some(value) = params.get(name) {
                    out.push_str(value);
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_scan_segments() {
        assert_eq!(
            scan("-open {file} --line={line}"),
            vec![
                Segment::Literal("-open "),
                Segment::Placeholder("file"),
                Segment::Literal(" --line="),
                Segment::Placeholder("line"),
            ]
        );
    }

    #[test]
    fn test_scan_adjacent_placeholders() {
        assert_eq!(
            scan("{a}{b}"),
            vec![Segment::Placeholder("a"), Segment::Placeholder("b")]
        );
    }

    #[test]
    fn test_non_tokens_stay_literal() {
        for text in ["{}", "{ x}", "{a b}", "{open", "close}", "{{", "}{"] {
            assert_eq!(scan(text), vec![Segment::Literal(text)], "{text:?}");
        }
    }

    #[test]
    fn test_nested_brace_starts_new_token() {
        assert_eq!(
            scan("{{name}}"),
            vec![
                Segment::Literal("{"),
                Segment::Placeholder("name"),
                Segment::Literal("}"),
            ]
        );
    }

    #[test]
    fn test_stray_braces_survive_substitution() {
        let p = params(&[("file", "report.txt")]);
        assert_eq!(substitute("{{file}}", &p), "{report.txt}");
        assert_eq!(substitute("{a{file}", &p), "{areport.txt");
    }

    #[test]
    fn test_substitute_present_and_absent() {
        let p = params(&[("file", "report.txt")]);
        assert_eq!(substitute("{file}", &p), "report.txt");
        assert_eq!(substitute("-f {file} -n {count}", &p), "-f report.txt -n ");
    }

    #[test]
    fn test_substitute_repeated_placeholder() {
        let p = params(&[("x", "1")]);
        assert_eq!(substitute("{x}-{x}-{x}", &p), "1-1-1");
    }

    #[test]
    fn test_substitute_is_case_sensitive() {
        let p = params(&[("File", "upper")]);
        assert_eq!(substitute("[{file}][{File}]", &p), "[][upper]");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let p = params(&[("a", "{b}"), ("b", "nope")]);
        assert_eq!(substitute("{a}", &p), "{b}");
    }

    #[test]
    fn test_template_without_placeholders_unchanged() {
        let p = params(&[("file", "x")]);
        let template = r#"--flag "quoted value" {not a token}"#;
        assert_eq!(substitute(template, &p), template);
    }

    #[test]
    fn test_placeholder_names_distinct() {
        assert_eq!(placeholder_names("{a} {b} {a} {}"), vec!["a", "b"]);
    }
}

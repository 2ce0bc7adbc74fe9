//! Reads assertion lines back out of a generated test file

/// Arguments of every `<macro_name>!("..", "..");` line, unescaped.
///
/// Lines whose arguments are not all string literals are skipped.
pub fn assertion_args(contents: &str, macro_name: &str) -> Vec<Vec<String>> {
    let prefix = format!("{macro_name}!(");
    contents
        .lines()
        .filter_map(|line| {
            let args = line.trim_start().strip_prefix(&prefix)?.strip_suffix(");")?;
            parse_string_literals(args)
        })
        .collect()
}

/// Parses a comma-separated list of Rust string literals such as
/// `"a\n", "b\"c"`. Returns `None` on anything else.
pub fn parse_string_literals(input: &str) -> Option<Vec<String>> {
    let mut values = Vec::new();
    let mut chars = input.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_ascii_whitespace()).is_some() {}
        if chars.next()? != '"' {
            return None;
        }

        let mut value = String::new();
        loop {
            match chars.next()? {
                '"' => break,
                '\\' => value.push(match chars.next()? {
                    'n' => '\n',
                    'r' => '\r',
                    't' => '\t',
                    '0' => '\0',
                    '\\' => '\\',
                    '"' => '"',
                    '\'' => '\'',
                    _ => return None,
                }),
                c => value.push(c),
            }
        }
        values.push(value);

        while chars.next_if(|c| c.is_ascii_whitespace()).is_some() {}
        match chars.next() {
            None => return Some(values),
            Some(',') => continue,
            Some(_) => return None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_escapes() {
        let values = parse_string_literals(r#""a\n\r\t", "q\"\\""#).unwrap();
        assert_eq!(values, vec!["a\n\r\t".to_string(), "q\"\\".to_string()]);
    }

    #[test]
    fn test_parse_rejects_non_literal() {
        assert_eq!(parse_string_literals(r#""a", b"#), None);
        assert_eq!(parse_string_literals(r#""unterminated"#), None);
    }

    #[test]
    fn test_assertion_args_filters_by_macro() {
        let contents = r#"
fn test_cond_ws() {
    test_template!("{%  if true  %}", "");
    test_template_inverted!("x", "y");
}
"#;
        let args = assertion_args(contents, "test_template");
        assert_eq!(args, vec![vec!["{%  if true  %}".to_string(), String::new()]]);
    }
}

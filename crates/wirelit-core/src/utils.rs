fn is_separator(c: char) -> bool {
    matches!(c, '_' | '-' | '.' | ' ')
}

/// Split an identifier into words at separators and case humps.
///
/// Acronym runs stay together: `HTTPServer` splits into `HTTP` and `Server`.
fn split_words(s: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let chars: Vec<(usize, char)> = s.char_indices().collect();
    let mut start: Option<usize> = None;

    for (i, &(pos, c)) in chars.iter().enumerate() {
        if is_separator(c) {
            if let Some(begin) = start.take() {
                words.push(&s[begin..pos]);
            }
            continue;
        }

        if let Some(begin) = start
            && c.is_ascii_uppercase()
        {
            let prev = chars[i - 1].1;
            let next_is_lower = chars.get(i + 1).is_some_and(|&(_, n)| n.is_ascii_lowercase());
            let boundary = prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower);
            if boundary {
                words.push(&s[begin..pos]);
                start = Some(pos);
            }
        }

        if start.is_none() {
            start = Some(pos);
        }
    }

    if let Some(begin) = start {
        words.push(&s[begin..]);
    }
    words
}

fn capitalize(word: &str, out: &mut String) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.push(first.to_ascii_uppercase());
        out.extend(chars.map(|c| c.to_ascii_lowercase()));
    }
}

/// Convert snake_case, kebab-case, dotted or camelCase to UpperCamelCase.
///
/// # Examples
/// ```
/// use wirelit_core::utils::to_upper_camel_case;
/// assert_eq!(to_upper_camel_case("foo_bar"), "FooBar");
/// assert_eq!(to_upper_camel_case("FOO_BAR"), "FooBar");
/// assert_eq!(to_upper_camel_case("FooBar"), "FooBar");  // idempotent
/// ```
pub fn to_upper_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for word in split_words(s) {
        capitalize(word, &mut result);
    }
    result
}

/// Convert to lowerCamelCase.
///
/// # Examples
/// ```
/// use wirelit_core::utils::to_lower_camel_case;
/// assert_eq!(to_lower_camel_case("MyUnion"), "myUnion");
/// assert_eq!(to_lower_camel_case("my_union"), "myUnion");
/// ```
pub fn to_lower_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for (i, word) in split_words(s).into_iter().enumerate() {
        if i == 0 {
            result.push_str(&word.to_ascii_lowercase());
        } else {
            capitalize(word, &mut result);
        }
    }
    result
}

/// Convert UpperCamelCase, lowerCamelCase or dotted names to snake_case.
///
/// # Examples
/// ```
/// use wirelit_core::utils::to_snake_case;
/// assert_eq!(to_snake_case("FooBar"), "foo_bar");
/// assert_eq!(to_snake_case("fooBar"), "foo_bar");
/// assert_eq!(to_snake_case("test.conformance"), "test_conformance");
/// ```
pub fn to_snake_case(s: &str) -> String {
    split_words(s)
        .into_iter()
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

//! String manipulation utilities

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Turn a lowerCamelCase name into kebab-case ("SomethingBig" -> "something-big")
pub fn to_hyphen_case(value: &str) -> String {
    if value.trim().is_empty() {
        return value.to_string();
    }

    let mut result = String::with_capacity(value.len() + 4);
    for (index, c) in value.chars().enumerate() {
        if index == 0 {
            result.extend(c.to_lowercase());
        } else if c.is_uppercase() {
            result.push('-');
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Prefix `value` with `prefix` unless it is empty
pub fn non_empty_prepend(value: &str, prefix: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("{prefix}{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("graph", 0), "graphs");
        assert_eq!(pluralize("graph", 1), "graph");
        assert_eq!(pluralize("graph", 5), "graphs");
    }

    #[test]
    fn test_to_hyphen_case() {
        assert_eq!(to_hyphen_case("SomethingBig"), "something-big");
        assert_eq!(to_hyphen_case("somethingBig"), "something-big");
        assert_eq!(to_hyphen_case("libraries"), "libraries");
        assert_eq!(to_hyphen_case("a"), "a");
        assert_eq!(to_hyphen_case(""), "");
        assert_eq!(to_hyphen_case("  "), "  ");
    }

    #[test]
    fn test_non_empty_prepend() {
        assert_eq!(non_empty_prepend("", "-"), "");
        assert_eq!(non_empty_prepend("firebase", "-"), "-firebase");
    }
}

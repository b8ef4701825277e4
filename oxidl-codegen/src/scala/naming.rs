//! Identifier casing transforms for generated Scala.

/// Capitalizes the leading character of a name.
///
/// Used when synthesizing setter calls (`x` becomes `setX`).
#[must_use]
pub fn cap_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Converts a camelCase name to UPPER_SNAKE_CASE.
///
/// An underscore is inserted before each upward case transition; names
/// that are already uppercase pass through unchanged.
#[must_use]
pub fn constant_name(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    let mut is_first = true;
    let mut was_upper = false;

    for c in name.chars() {
        let is_upper = c.is_uppercase();
        if is_upper && !is_first && !was_upper {
            result.push('_');
        }
        result.extend(c.to_uppercase());
        is_first = false;
        was_upper = is_upper;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cap_name() {
        assert_eq!(cap_name("x"), "X");
        assert_eq!(cap_name("point"), "Point");
        assert_eq!(cap_name("alreadyCapped"), "AlreadyCapped");
        assert_eq!(cap_name(""), "");
    }

    #[test]
    fn test_constant_name_camel_case() {
        assert_eq!(constant_name("maxRetries"), "MAX_RETRIES");
        assert_eq!(constant_name("defaultColor"), "DEFAULT_COLOR");
    }

    #[test]
    fn test_constant_name_already_upper() {
        assert_eq!(constant_name("DEFAULT"), "DEFAULT");
        assert_eq!(constant_name("MAX_RETRIES"), "MAX_RETRIES");
    }

    #[test]
    fn test_constant_name_consecutive_uppers() {
        assert_eq!(constant_name("httpURL"), "HTTP_URL");
    }
}

/// Convert an identifier to PascalCase.
///
/// Runs of non-alphanumeric characters act as a single separator. The first
/// character of every segment is uppercased; the rest keep their case, so
/// names that are already PascalCase pass through unchanged.
///
/// # Examples
/// ```
/// use idl2proto_core::utils::to_pascal_case;
/// assert_eq!(to_pascal_case("get_user"), "GetUser");
/// assert_eq!(to_pascal_case("MyStruct"), "MyStruct");
/// assert_eq!(to_pascal_case("http__URL"), "HttpURL");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;
    for c in s.chars() {
        if !c.is_ascii_alphanumeric() {
            capitalize_next = true;
            continue;
        }
        if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }
    result
}

/// Convert PascalCase or camelCase to lower_snake_case.
///
/// Every uppercase character except a leading one gets an underscore in
/// front of it. Idempotent: the output has no uppercase characters left.
///
/// # Examples
/// ```
/// use idl2proto_core::utils::to_lower_snake_case;
/// assert_eq!(to_lower_snake_case("FooBar"), "foo_bar");
/// assert_eq!(to_lower_snake_case("userId"), "user_id");
/// ```
pub fn to_lower_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Convert camelCase or PascalCase to UPPER_SNAKE_CASE.
///
/// A boundary is only detected between a lowercase and an uppercase
/// character, so acronyms are not split (`HTTPServer` -> `HTTPSERVER`).
///
/// # Examples
/// ```
/// use idl2proto_core::utils::to_upper_snake_case;
/// assert_eq!(to_upper_snake_case("darkRed"), "DARK_RED");
/// assert_eq!(to_upper_snake_case("RED"), "RED");
/// ```
pub fn to_upper_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;
    for c in s.chars() {
        if c.is_ascii_uppercase() && prev_lower {
            result.push('_');
        }
        prev_lower = c.is_ascii_lowercase();
        result.push(c.to_ascii_uppercase());
    }
    result
}

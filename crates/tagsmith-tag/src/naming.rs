//! Field name conventions shared by the harvester and the rewriter.
//!
//! The harvester sees schema names (`user_id`), the rewriter sees the Go
//! names the generator produced from them (`UserId`). Both sides reduce a
//! name to a lookup key with [`field_key`]. By default the key is the name
//! with its first letter lowercased, which only lines up for single-word
//! names. With Go name matching, both sides are camel-cased first.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `Name` | [`lower_first`] | `name` |
//! | `user_id` | [`go_camel_case`] | `UserId` |
//! | `user_id` | [`field_key`] | `user_id` |
//! | `UserId` | [`field_key`] | `userId` |
//! | `user_id` / `UserId` | [`field_key`] matching Go names | `userId` |

/// Lowercase the first character, leaving the rest untouched.
///
/// # Examples
///
/// ```
/// use tagsmith_tag::naming::lower_first;
///
/// assert_eq!(lower_first("Name"), "name");
/// assert_eq!(lower_first("URL"), "uRL");
/// assert_eq!(lower_first(""), "");
/// ```
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a schema field name to the Go identifier the generator emits.
///
/// The first character is upper-cased, a leading underscore becomes `X`,
/// and an underscore followed by a lowercase ASCII letter is dropped with
/// the letter upper-cased. Everything else is kept as is.
///
/// # Examples
///
/// ```
/// use tagsmith_tag::naming::go_camel_case;
///
/// assert_eq!(go_camel_case("user_id"), "UserId");
/// assert_eq!(go_camel_case("name"), "Name");
/// assert_eq!(go_camel_case("_hidden"), "XHidden");
/// ```
pub fn go_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 1);
    let mut chars = s.chars().peekable();

    match chars.next() {
        None => return result,
        Some('_') => result.push('X'),
        Some(first) => result.extend(first.to_uppercase()),
    }

    let mut capitalize_next = s.starts_with('_');
    while let Some(c) = chars.next() {
        if c == '_' && chars.peek().is_some_and(|n| n.is_ascii_lowercase()) {
            capitalize_next = true;
            continue;
        }
        if capitalize_next && c.is_ascii_lowercase() {
            result.push(c.to_ascii_uppercase());
        } else {
            result.push(c);
        }
        capitalize_next = false;
    }

    result
}

/// Lookup key for a field, from either its schema name or its Go name.
///
/// Without `match_go_names` this is [`lower_first`]. With it, the name is
/// passed through [`go_camel_case`] first so `user_id` and `UserId` agree.
///
/// # Examples
///
/// ```
/// use tagsmith_tag::naming::field_key;
///
/// assert_eq!(field_key("Name", false), "name");
/// assert_eq!(field_key("user_id", false), "user_id");
/// assert_ne!(field_key("user_id", false), field_key("UserId", false));
/// assert_eq!(field_key("user_id", true), field_key("UserId", true));
/// ```
pub fn field_key(name: &str, match_go_names: bool) -> String {
    if match_go_names {
        lower_first(&go_camel_case(name))
    } else {
        lower_first(name)
    }
}

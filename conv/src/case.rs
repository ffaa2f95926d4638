//! Identifier case conversion.

/// Converts `CamelCase` to `snake_case`.
///
/// An underscore goes before an ASCII uppercase letter that has a lowercase
/// neighbor on either side. The first and last characters never get one, so
/// runs of capitals such as `ID` stay together and a trailing `_` is kept.
pub fn camel_to_snake(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut snake = String::with_capacity(s.len() + s.len() / 2);
    for (i, &cur) in chars.iter().enumerate() {
        if i > 0 && i + 1 < chars.len() && cur.is_ascii_uppercase() {
            let prev = chars[i - 1];
            let next = chars[i + 1];
            if next.is_ascii_lowercase() || prev.is_ascii_lowercase() {
                snake.push('_');
            }
        }
        snake.extend(cur.to_lowercase());
    }
    snake
}

/// Converts `snake_case` to `CamelCase`.
///
/// The first character is uppercased. An inner underscore that follows a
/// lowercase letter or precedes an uppercase one is dropped and the next
/// character uppercased. Leading and trailing underscores are kept.
pub fn snake_to_camel(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut camel = String::with_capacity(s.len());
    let mut i = 0;
    while i < chars.len() {
        let cur = chars[i];
        if i == 0 {
            camel.extend(cur.to_uppercase());
            i += 1;
            continue;
        }
        if cur == '_' && i + 1 < chars.len() {
            let prev = chars[i - 1];
            let next = chars[i + 1];
            if next.is_ascii_uppercase() || prev.is_ascii_lowercase() {
                camel.extend(next.to_uppercase());
                i += 2;
                continue;
            }
        }
        camel.push(cur);
        i += 1;
    }
    camel
}

//! Display label derivation
//!
//! Labels are derived once at construction time and stored on the member or
//! group, so the accessors never recompute them.

/// Derive a member label from its declared name.
///
/// Underscores become spaces and each word is title-cased: the first cased
/// character of a word is uppercased, every following cased character is
/// lowercased. Uncased characters (digits, punctuation) pass through and
/// start a new word.
///
/// ```
/// assert_eq!(choices::display::title_case("red_panda"), "Red Panda");
/// assert_eq!(choices::display::title_case("top_10_hits"), "Top 10 Hits");
/// ```
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_cased = false;
    for ch in name.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        let cased = ch.is_uppercase() || ch.is_lowercase();
        if !cased {
            out.push(ch);
        } else if prev_cased {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
        prev_cased = cased;
    }
    out
}

/// Derive a group label from its declared camel-case name.
///
/// A space is inserted before any interior uppercase character that is
/// immediately preceded or immediately followed by a lowercase character.
/// The first and last characters never receive a preceding space, so
/// acronym runs stay joined except at a lower/upper boundary.
///
/// ```
/// assert_eq!(choices::display::split_camel_case("UnitedStates"), "United States");
/// assert_eq!(choices::display::split_camel_case("HTTPStatus"), "HTTP Status");
/// ```
pub fn split_camel_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (index, &ch) in chars.iter().enumerate() {
        if index > 0 && index + 1 < chars.len() && ch.is_uppercase() {
            let prev_lower = chars[index - 1].is_lowercase();
            let next_lower = chars[index + 1].is_lowercase();
            if prev_lower || next_lower {
                out.push(' ');
            }
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_underscores() {
        assert_eq!(title_case("red_panda"), "Red Panda");
        assert_eq!(title_case("a_b"), "A B");
    }

    #[test]
    fn test_title_case_lowercases_rest() {
        assert_eq!(title_case("RED_PANDA"), "Red Panda");
        assert_eq!(title_case("apple"), "Apple");
    }

    #[test]
    fn test_title_case_uncased_characters_start_words() {
        assert_eq!(title_case("top_10_hits"), "Top 10 Hits");
    }

    #[test]
    fn test_title_case_empty() {
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_split_camel_case_word_boundaries() {
        assert_eq!(split_camel_case("UnitedStates"), "United States");
        assert_eq!(split_camel_case("RedPandas"), "Red Pandas");
    }

    #[test]
    fn test_split_camel_case_acronym_runs() {
        assert_eq!(split_camel_case("HTTPStatus"), "HTTP Status");
        assert_eq!(split_camel_case("HTTP"), "HTTP");
    }

    #[test]
    fn test_split_camel_case_single_word() {
        assert_eq!(split_camel_case("Tropical"), "Tropical");
        assert_eq!(split_camel_case("X"), "X");
        assert_eq!(split_camel_case(""), "");
    }

    #[test]
    fn test_split_camel_case_last_character_never_split() {
        // The final character is not an interior position, so a trailing
        // uppercase run keeps its last letter attached.
        assert_eq!(split_camel_case("PandasAB"), "Pandas AB");
        assert_eq!(split_camel_case("AbC"), "AbC");
    }
}

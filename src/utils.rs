use std::cmp::Ordering;

/// Compare two strings the way an English-locale collator orders them.
///
/// Three levels, each consulted only when the previous one ties:
/// letters with case and Latin-1 accents removed, then accents (a plain
/// letter before its accented forms), then case (lowercase first).
/// Characters outside Latin-1 compare by code point. Strings are `Equal`
/// only when they are identical.
pub(crate) fn locale_cmp(a: &str, b: &str) -> Ordering {
    lowered(a)
        .map(base_letter)
        .cmp(lowered(b).map(base_letter))
        .then_with(|| lowered(a).cmp(lowered(b)))
        .then_with(|| {
            a.chars()
                .zip(b.chars())
                .map(|(x, y)| case_rank(x).cmp(&case_rank(y)))
                .find(|ord| ord.is_ne())
                .unwrap_or_else(|| a.cmp(b))
        })
}

fn lowered(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

/// Strip the accent from a lowercase Latin-1 letter.
fn base_letter(c: char) -> char {
    match c {
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ñ' => 'n',
        'ò'..='ö' | 'ø' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        _ => c,
    }
}

fn case_rank(c: char) -> u8 {
    if c.is_uppercase() {
        1
    } else {
        0
    }
}

/// Case-insensitive substring test. An empty needle matches everything.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_cmp_ignores_case_first() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("Zebra", "apple"), Ordering::Greater);
        assert_eq!(locale_cmp("chess", "Chess"), Ordering::Less);
        assert_eq!(locale_cmp("Chess", "Chess"), Ordering::Equal);
        assert_eq!(locale_cmp("Chess", "Chess Club"), Ordering::Less);
    }

    #[test]
    fn test_locale_cmp_accents_sort_with_base_letter() {
        assert_eq!(locale_cmp("Émile Society", "Zoology Club"), Ordering::Less);
        assert_eq!(locale_cmp("Émile Society", "Drama Guild"), Ordering::Greater);
        assert_eq!(locale_cmp("Café Club", "Cafeteria Crew"), Ordering::Less);
        assert_eq!(locale_cmp("Emile", "Émile"), Ordering::Less);
        assert_eq!(locale_cmp("émile", "Emile"), Ordering::Greater);
        assert_eq!(locale_cmp("Ñandú", "Ñandú"), Ordering::Equal);
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Campus Robotics Society", "ROBOTICS"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("Drama Guild", "robot"));
    }
}

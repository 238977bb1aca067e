use std::sync::OnceLock;

use regex::Regex;

fn whitespace() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace regex"))
}

fn name_pattern() -> &'static Regex {
    static NAME: OnceLock<Regex> = OnceLock::new();
    NAME.get_or_init(|| Regex::new(r"^\p{L}[\p{L} .'\-]*$").expect("valid name regex"))
}

pub struct Helpers {}

impl Helpers {
    /// # normalize a name
    /// trim the name and collapse every run of whitespace into a single space
    ///
    /// ## Arguments
    /// * `name` - the name as typed in the form
    ///
    /// ## Returns
    /// * `String` - the normalized name
    pub fn normalize_name(name: &str) -> String {
        whitespace().replace_all(name.trim(), " ").into_owned()
    }

    /// # check a name
    /// names start with a letter and may contain letters, spaces, dots,
    /// apostrophes and hyphens.
    pub fn is_valid_name(name: &str) -> bool {
        name_pattern().is_match(name)
    }
}

#[cfg(test)]
mod tests {
    use super::Helpers;

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(Helpers::normalize_name("  Anna   Lena "), "Anna Lena");
        assert_eq!(Helpers::normalize_name("Jörg\t\nMüller"), "Jörg Müller");
        assert_eq!(Helpers::normalize_name("   "), "");
    }

    #[test]
    fn accepts_common_names() {
        assert!(Helpers::is_valid_name("Anna-Lena"));
        assert!(Helpers::is_valid_name("O'Brien"));
        assert!(Helpers::is_valid_name("Ömer"));
        assert!(Helpers::is_valid_name("J. R."));
    }

    #[test]
    fn rejects_markup_and_digits() {
        assert!(!Helpers::is_valid_name("<script>"));
        assert!(!Helpers::is_valid_name("R2D2"));
        assert!(!Helpers::is_valid_name("-Anna"));
        assert!(!Helpers::is_valid_name(""));
    }
}

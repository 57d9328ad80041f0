use chrono::{DateTime, Local};

pub fn date_time_as_string(dt: Option<DateTime<Local>>, format: Option<&str>) -> String {
    dt.unwrap_or(Local::now())
        .format(format.unwrap_or("%d_%m_%Y-%H-%M"))
        .to_string()
}

/// Case-insensitive substring match using full Unicode lowercase folding.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_date_time_as_string_with_format() {
        let dt = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
        assert_eq!(date_time_as_string(Some(dt), None), "09_03_2024-14-05");
        assert_eq!(date_time_as_string(Some(dt), Some("%Y-%m-%d")), "2024-03-09");
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Ajani, Nacatl Pariah", "NACATL"));
        assert!(contains_ignore_case("Æther Vial", "æther"));
        assert!(contains_ignore_case("Lim-Dûl's Vault", "DÛL"));
        assert!(contains_ignore_case("Anything", ""));
        assert!(!contains_ignore_case("Bolt", "zap"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<Gisa & "Geralf">'s"#),
            "&lt;Gisa &amp; &quot;Geralf&quot;&gt;&#39;s"
        );
    }
}

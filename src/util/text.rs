//! Display helpers for Frigate identifiers.
//!
//! Camera, zone and label names arrive as snake_case identifiers
//! (`front_yard`, `license_plate`). The UI shows them as words.

/// Replace every underscore with a space.
pub fn humanize(name: &str) -> String {
    name.replace('_', " ")
}

/// Upper-case the first letter of every space-separated word.
pub fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Humanize and capitalize in one step: `front_yard` → `Front Yard`.
pub fn display_name(name: &str) -> String {
    capitalize_words(&humanize(name))
}

/// Round a 0..1 score to a whole percentage.
pub fn confidence_percent(score: f64) -> u32 {
    if !score.is_finite() || score <= 0.0 {
        return 0;
    }
    (score * 100.0).round() as u32
}

/// Glyph shown next to an object label.
///
/// Unknown labels fall back to a neutral marker.
pub fn icon_for_label(label: &str) -> &'static str {
    match label {
        "person" => "\u{1F6B6}",
        "face" => "\u{1F642}",
        "car" | "vehicle" => "\u{1F697}",
        "truck" => "\u{1F69A}",
        "bus" => "\u{1F68C}",
        "motorcycle" => "\u{1F3CD}",
        "bicycle" => "\u{1F6B2}",
        "boat" => "\u{26F5}",
        "dog" => "\u{1F415}",
        "cat" => "\u{1F408}",
        "bird" => "\u{1F426}",
        "horse" => "\u{1F40E}",
        "bear" => "\u{1F43B}",
        "deer" => "\u{1F98C}",
        "package" => "\u{1F4E6}",
        "license_plate" => "\u{1F522}",
        "amazon" | "fedex" | "ups" | "usps" | "dhl" => "\u{1F69A}",
        "speech" | "bark" | "yell" => "\u{1F50A}",
        _ => "\u{25CF}",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_front_yard() {
        assert_eq!(display_name("front_yard"), "Front Yard");
    }

    #[test]
    fn test_humanize_keeps_case() {
        assert_eq!(humanize("Back_Door_cam"), "Back Door cam");
    }

    #[test]
    fn test_capitalize_words_handles_double_space() {
        assert_eq!(capitalize_words("a  b"), "A  B");
    }

    #[test]
    fn test_confidence_percent_rounds() {
        assert_eq!(confidence_percent(0.846), 85);
        assert_eq!(confidence_percent(0.844), 84);
        assert_eq!(confidence_percent(0.0), 0);
        assert_eq!(confidence_percent(1.0), 100);
    }

    #[test]
    fn test_icon_for_unknown_label() {
        assert_eq!(icon_for_label("spaceship"), "\u{25CF}");
        assert_ne!(icon_for_label("person"), icon_for_label("spaceship"));
    }
}

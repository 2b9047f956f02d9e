use batchgen_core::ColorScheme;

/// Best-effort terminal colour scheme, read from `COLORFGBG` (`"fg;bg"`).
///
/// Terminals do not announce scheme changes, so this is sampled once.
pub(crate) fn detect() -> ColorScheme {
    from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
}

fn from_colorfgbg(value: Option<&str>) -> ColorScheme {
    let background = value
        .and_then(|v| v.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok());
    match background {
        Some(0..=6 | 8) => ColorScheme::Dark,
        _ => ColorScheme::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_backgrounds_are_detected() {
        assert_eq!(from_colorfgbg(Some("15;0")), ColorScheme::Dark);
        assert_eq!(from_colorfgbg(Some("7;default;8")), ColorScheme::Dark);
    }

    #[test]
    fn light_or_unknown_backgrounds_fall_back_to_light() {
        assert_eq!(from_colorfgbg(Some("0;15")), ColorScheme::Light);
        assert_eq!(from_colorfgbg(Some("0;default")), ColorScheme::Light);
        assert_eq!(from_colorfgbg(None), ColorScheme::Light);
    }
}

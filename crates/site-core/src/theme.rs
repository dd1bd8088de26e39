//! Light/dark presentation flag shared by every themed subsystem.

/// The persisted theme flag. Exactly one value is current at any time.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[inline]
    pub fn flipped(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    #[inline]
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Storage representation, also used as the document class name.
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a persisted value. Anything unrecognized falls back to light.
    #[inline]
    pub fn parse(s: &str) -> Theme {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Monochrome tint for theme-sensitive scene materials.
    #[inline]
    pub fn scene_tint(self) -> [f32; 3] {
        match self {
            Theme::Light => [0.0, 0.0, 0.0],
            Theme::Dark => [1.0, 1.0, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_parity() {
        let mut t = Theme::Light;
        for n in 1..=8u32 {
            t = t.flipped();
            assert_eq!(t.is_dark(), n % 2 == 1);
        }
    }

    #[test]
    fn parse_round_trips_and_defaults() {
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse("solarized"), Theme::Light);
        assert_eq!(Theme::parse(Theme::Dark.as_str()), Theme::Dark);
    }
}

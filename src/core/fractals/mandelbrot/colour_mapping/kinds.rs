#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourPolicyKind {
    #[default]
    Palette,
    Grayscale,
}

impl ColourPolicyKind {
    pub const ALL: &'static [Self] = &[Self::Palette, Self::Grayscale];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Palette => "Palette",
            Self::Grayscale => "Grayscale",
        }
    }
}

impl std::fmt::Display for ColourPolicyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

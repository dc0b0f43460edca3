/// Geographic code accepted by the population lookup.
///
/// Classification is by the length of the code's decimal text: a commune
/// has a 5-character INSEE code, a department a 2- or 3-character code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeoCode {
    Commune(String),
    Department(String),
}

impl GeoCode {
    /// Returns `None` when the code matches neither shape.
    #[must_use]
    pub fn classify(code: i64) -> Option<Self> {
        let text = code.to_string();
        match text.len() {
            5 => Some(Self::Commune(text)),
            2 | 3 => Some(Self::Department(text)),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Commune(code) | Self::Department(code) => code,
        }
    }
}

impl std::fmt::Display for GeoCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Commune(code) => write!(f, "commune {code}"),
            Self::Department(code) => write!(f, "department {code}"),
        }
    }
}

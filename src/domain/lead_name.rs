#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadName(String);

impl LeadName {
    pub const MIN_LENGTH: usize = 2;
    pub const ERROR: &'static str = "Name must be at least 2 characters";

    /// Accepts any name of at least two characters. Surrounding whitespace is
    /// kept and counts towards the length.
    pub fn parse(s: String) -> Result<LeadName, String> {
        // lengths are UTF-16 code units, the unit the browser-side form checks in
        if s.encode_utf16().count() < Self::MIN_LENGTH {
            Err(Self::ERROR.to_string())
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for LeadName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LeadName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

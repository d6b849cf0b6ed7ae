#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadMessage(String);

impl LeadMessage {
    pub const MIN_LENGTH: usize = 10;
    pub const ERROR: &'static str = "Message must be at least 10 characters";

    pub fn parse(s: String) -> Result<LeadMessage, String> {
        if s.encode_utf16().count() < Self::MIN_LENGTH {
            Err(Self::ERROR.to_string())
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for LeadMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

use validator::validate_email;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadEmail(String);

impl LeadEmail {
    pub const ERROR: &'static str = "Invalid email address";

    /// Accepts `local@domain.tld`. The domain must be a dotted host name ending
    /// in an alphabetic top-level label of two or more letters, so bare hosts
    /// (`user@localhost`), IP literals and numeric domains are rejected.
    pub fn parse(s: String) -> Result<LeadEmail, String> {
        if validate_email(&s) && has_host_name_domain(&s) {
            Ok(Self(s))
        } else {
            Err(Self::ERROR.to_string())
        }
    }
}

fn has_host_name_domain(s: &str) -> bool {
    let Some((_, domain)) = s.rsplit_once('@') else {
        return false;
    };
    let Some((labels, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    let is_label = |label: &str| {
        label.starts_with(|c: char| c.is_ascii_alphanumeric())
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    };
    tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
        && labels.split('.').all(is_label)
}

impl AsRef<str> for LeadEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LeadEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

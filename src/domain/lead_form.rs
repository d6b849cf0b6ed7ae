use std::collections::BTreeMap;

/// The contact form as the visitor left it. Every field is optional because
/// nothing about raw input can be trusted, including its presence.
#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub message: Option<String>,
}

impl LeadForm {
    pub fn get(&self, field: LeadField) -> Option<&str> {
        match field {
            LeadField::Name => self.name.as_deref(),
            LeadField::Email => self.email.as_deref(),
            LeadField::Company => self.company.as_deref(),
            LeadField::Message => self.message.as_deref(),
        }
    }

    pub fn set(&mut self, field: LeadField, value: String) {
        let slot = match field {
            LeadField::Name => &mut self.name,
            LeadField::Email => &mut self.email,
            LeadField::Company => &mut self.company,
            LeadField::Message => &mut self.message,
        };
        *slot = Some(value);
    }

    /// True when no field holds any text.
    pub fn is_empty(&self) -> bool {
        LeadField::ALL
            .iter()
            .all(|field| self.get(*field).map_or(true, str::is_empty))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LeadField {
    Name,
    Email,
    Company,
    Message,
}

impl LeadField {
    pub const ALL: [LeadField; 4] = [
        LeadField::Name,
        LeadField::Email,
        LeadField::Company,
        LeadField::Message,
    ];

    /// Form field name, as used in the urlencoded body.
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadField::Name => "name",
            LeadField::Email => "email",
            LeadField::Company => "company",
            LeadField::Message => "message",
        }
    }
}

impl std::fmt::Display for LeadField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human-readable messages keyed by the field that failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<LeadField, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: LeadField, message: String) {
        self.0.insert(field, message);
    }

    pub fn get(&self, field: LeadField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (LeadField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

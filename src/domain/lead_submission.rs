use crate::domain::{
    FieldErrors, LeadEmail, LeadField, LeadForm, LeadMessage, LeadName, OwnerNotification,
};

/// A lead that passed every field check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadSubmission {
    pub name: LeadName,
    pub email: LeadEmail,
    pub company: Option<String>,
    pub message: LeadMessage,
}

impl LeadSubmission {
    pub const NOTIFICATION_TITLE: &'static str = "New Lead from Zinara Website";
    pub const COMPANY_PLACEHOLDER: &'static str = "Not provided";

    /// Company as it appears in the owner notification. Blank and absent are
    /// both shown as the placeholder.
    pub fn company_or_placeholder(&self) -> &str {
        match self.company.as_deref() {
            Some(company) if !company.is_empty() => company,
            _ => Self::COMPANY_PLACEHOLDER,
        }
    }

    pub fn to_notification(&self) -> OwnerNotification {
        OwnerNotification {
            title: Self::NOTIFICATION_TITLE.to_string(),
            content: format!(
                "Name: {}\nEmail: {}\nCompany: {}\n\nMessage:\n{}",
                self.name,
                self.email,
                self.company_or_placeholder(),
                self.message.as_ref()
            ),
        }
    }
}

impl TryFrom<LeadForm> for LeadSubmission {
    type Error = FieldErrors;

    /// Checks all fields in one pass, so every problem is reported at once.
    fn try_from(form: LeadForm) -> Result<Self, Self::Error> {
        let mut errors = FieldErrors::default();
        // a missing field gets the same message as a too-short one
        let name = LeadName::parse(form.name.unwrap_or_default())
            .map_err(|e| errors.insert(LeadField::Name, e));
        let email = LeadEmail::parse(form.email.unwrap_or_default())
            .map_err(|e| errors.insert(LeadField::Email, e));
        let message = LeadMessage::parse(form.message.unwrap_or_default())
            .map_err(|e| errors.insert(LeadField::Message, e));

        match (name, email, message) {
            (Ok(name), Ok(email), Ok(message)) => Ok(LeadSubmission {
                name,
                email,
                company: form.company,
                message,
            }),
            _ => Err(errors),
        }
    }
}

/// Outcome of checking a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid(LeadSubmission),
    Invalid(FieldErrors),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }
}

/// Never fails: every input maps to either a submission or a set of field errors.
pub fn validate(form: &LeadForm) -> Validation {
    match LeadSubmission::try_from(form.clone()) {
        Ok(submission) => Validation::Valid(submission),
        Err(errors) => Validation::Invalid(errors),
    }
}

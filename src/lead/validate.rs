//! Parsing of the lead-capture fields. Nothing reaches the network layer
//! without going through `LeadSubmission::parse` first.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingFields,
    InvalidEmail,
}

impl ValidationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::MissingFields => "Please fill in all fields",
            ValidationError::InvalidEmail => "Please enter a valid email address",
        }
    }
}

/// A validated, trimmed (name, email) pair for a single submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
}

impl LeadSubmission {
    pub fn parse(name: &str, email: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() || email.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(Self {
            name: name.to_owned(),
            email: email.to_owned(),
        })
    }
}

/// `local@domain.tld` shape: exactly one `@`, no whitespace, and the domain
/// carries a dot that is neither its first nor its last character.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < domain.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_plain_name_and_email() {
        let lead = LeadSubmission::parse("Maija Meikäläinen", "maija@example.com").unwrap();
        assert_eq!(lead.name, "Maija Meikäläinen");
        assert_eq!(lead.email, "maija@example.com");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let lead = LeadSubmission::parse("  Maija  ", " maija@example.com ").unwrap();
        assert_eq!(lead.name, "Maija");
        assert_eq!(lead.email, "maija@example.com");
    }

    #[test]
    fn rejects_empty_name() {
        assert_eq!(
            LeadSubmission::parse("", "maija@example.com"),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn rejects_whitespace_only_fields() {
        assert_eq!(
            LeadSubmission::parse("   ", "maija@example.com"),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            LeadSubmission::parse("Maija", " \t "),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn missing_fields_is_reported_before_email_shape() {
        assert_eq!(
            LeadSubmission::parse("", "not-an-email"),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn rejects_email_without_at_symbol() {
        assert_eq!(
            LeadSubmission::parse("Maija", "maija.example.com"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn rejects_email_with_two_at_symbols() {
        assert_eq!(
            LeadSubmission::parse("Maija", "maija@@example.com"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            LeadSubmission::parse("Maija", "maija@ex@ample.com"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn rejects_email_with_empty_local_part() {
        assert_eq!(
            LeadSubmission::parse("Maija", "@example.com"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn rejects_domain_without_dot() {
        assert_eq!(
            LeadSubmission::parse("Maija", "maija@example"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn rejects_domain_starting_or_ending_with_dot() {
        assert_eq!(
            LeadSubmission::parse("Maija", "maija@.com"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            LeadSubmission::parse("Maija", "maija@example."),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn rejects_email_with_inner_whitespace() {
        assert_eq!(
            LeadSubmission::parse("Maija", "ma ija@example.com"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn accepts_subdomains() {
        assert!(LeadSubmission::parse("Maija", "maija@mail.example.co.uk").is_ok());
    }

    #[test]
    fn validation_messages_match_the_form_copy() {
        assert_eq!(
            ValidationError::MissingFields.user_message(),
            "Please fill in all fields"
        );
        assert_eq!(
            ValidationError::InvalidEmail.user_message(),
            "Please enter a valid email address"
        );
    }
}

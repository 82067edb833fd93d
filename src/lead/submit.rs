//! The network half of the lead form: one POST to the backend email service
//! and a tagged outcome for everything that can go wrong with it.

use gloo_console::log;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use super::validate::LeadSubmission;
use crate::config;

pub const SENT_CONFIRMATION: &str = "✓ Email sent! Check your inbox for the program link.";

#[derive(Serialize)]
pub struct ProgramRequest {
    pub name: String,
    pub email: String,
}

#[derive(Deserialize)]
pub struct ProgramResponse {
    pub success: bool,
    pub message: Option<String>,
}

/// Why an attempt failed. The network layer classifies once, here; the form
/// only maps each variant to its display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The request never reached the server.
    Connectivity,
    /// The server rejected the submission and said why.
    Rejected(String),
    /// The server rejected the submission without a reason.
    ServiceUnavailable,
    /// The response could not be understood.
    Other,
}

impl SubmitError {
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Connectivity => {
                "Cannot connect to server. Please check your internet connection.".to_string()
            }
            SubmitError::Rejected(reason) => reason.clone(),
            SubmitError::ServiceUnavailable => {
                "Email service is temporarily unavailable. Please try again later.".to_string()
            }
            SubmitError::Other => "Oops! Something went wrong. Please try again.".to_string(),
        }
    }
}

pub async fn send_lead(lead: &LeadSubmission) -> Result<(), SubmitError> {
    let body = ProgramRequest {
        name: lead.name.clone(),
        email: lead.email.clone(),
    };
    let request = match Request::post(&format!("{}/send-exercises", config::get_backend_url()))
        .json(&body)
    {
        Ok(request) => request,
        Err(e) => {
            log!("Failed to encode request body:", e.to_string());
            return Err(SubmitError::Other);
        }
    };
    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            log!("Network request failed:", e.to_string());
            return Err(SubmitError::Connectivity);
        }
    };
    // The backend reports the real outcome in the body, also on non-2xx
    // statuses, so the envelope is parsed regardless of the status code.
    match response.json::<ProgramResponse>().await {
        Ok(envelope) => outcome(envelope),
        Err(e) => {
            log!("Error parsing response:", e.to_string());
            Err(SubmitError::Other)
        }
    }
}

pub fn outcome(envelope: ProgramResponse) -> Result<(), SubmitError> {
    if envelope.success {
        return Ok(());
    }
    match envelope.message {
        Some(reason) => Err(SubmitError::Rejected(reason)),
        None => Err(SubmitError::ServiceUnavailable),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_carries_name_and_email() {
        let body = ProgramRequest {
            name: "Maija".to_string(),
            email: "maija@example.com".to_string(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "Maija", "email": "maija@example.com"})
        );
    }

    #[test]
    fn success_envelope_maps_to_ok() {
        let envelope: ProgramResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(outcome(envelope).is_ok());
    }

    #[test]
    fn extra_response_fields_are_tolerated() {
        let envelope: ProgramResponse =
            serde_json::from_str(r#"{"success": true, "message": "sent", "id": 7}"#).unwrap();
        assert!(outcome(envelope).is_ok());
    }

    #[test]
    fn rejection_with_a_reason_surfaces_it_verbatim() {
        let envelope: ProgramResponse =
            serde_json::from_str(r#"{"success": false, "message": "Mailbox is full"}"#).unwrap();
        let err = outcome(envelope).unwrap_err();
        assert_eq!(err, SubmitError::Rejected("Mailbox is full".to_string()));
        assert_eq!(err.user_message(), "Mailbox is full");
    }

    #[test]
    fn rejection_without_a_reason_reads_as_service_unavailable() {
        let envelope: ProgramResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        let err = outcome(envelope).unwrap_err();
        assert_eq!(err, SubmitError::ServiceUnavailable);
        assert_eq!(
            err.user_message(),
            "Email service is temporarily unavailable. Please try again later."
        );
    }

    #[test]
    fn connectivity_failures_point_at_the_connection() {
        assert_eq!(
            SubmitError::Connectivity.user_message(),
            "Cannot connect to server. Please check your internet connection."
        );
    }

    #[test]
    fn unclassified_failures_get_the_generic_text() {
        assert_eq!(
            SubmitError::Other.user_message(),
            "Oops! Something went wrong. Please try again."
        );
    }
}

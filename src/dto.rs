use serde::{Deserialize, Serialize};

// Wire shape of the contact form. All fields optional so that absence
// is checked by the handler instead of a deserializer rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn into_submission(self) -> Option<Submission> {
        match (self.name, self.email, self.message) {
            (Some(name), Some(email), Some(message))
                if !name.is_empty() && !email.is_empty() && !message.is_empty() =>
            {
                Some(Submission {
                    name,
                    email,
                    message,
                })
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactResponse {
    pub fn sent() -> Self {
        ContactResponse {
            success: true,
            message: Some("Email sent successfully".to_string()),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        ContactResponse {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }
}

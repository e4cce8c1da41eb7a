use crate::dto::Submission;
use crate::mailer::{MailError, Mailer};

const ACKNOWLEDGEMENT_SUBJECT: &str = "Ihre Nachricht wurde empfangen";

pub struct ContactService {
    mailer: Box<dyn Mailer>,
    owner: String,
}

// Per-send outcomes of one submission. Both sends are attempted regardless
// of the other's result; the handler decides what to surface.
#[derive(Debug)]
pub struct DispatchOutcome {
    pub acknowledgement: Result<(), MailError>,
    pub notification: Result<(), MailError>,
}

impl ContactService {
    pub fn new(mailer: impl Mailer + 'static, owner: String) -> Self {
        ContactService {
            mailer: Box::new(mailer),
            owner,
        }
    }

    pub async fn handle_submission(&self, submission: &Submission) -> DispatchOutcome {
        let acknowledgement = self
            .mailer
            .send(
                &submission.email,
                ACKNOWLEDGEMENT_SUBJECT,
                &acknowledgement_body(&submission.name),
            )
            .await;
        if let Err(e) = &acknowledgement {
            tracing::error!(
                "Failed to send acknowledgement to '{}': {e}",
                submission.email
            );
        }

        let notification = self
            .mailer
            .send(
                &self.owner,
                &notification_subject(&submission.name),
                &notification_body(submission),
            )
            .await;
        if let Err(e) = &notification {
            tracing::error!("Failed to send notification to '{}': {e}", self.owner);
        }

        DispatchOutcome {
            acknowledgement,
            notification,
        }
    }
}

fn acknowledgement_body(name: &str) -> String {
    format!(
        "Hallo {name},\n\n\
         Vielen Dank für Ihre Nachricht!\n\n\
         Wir haben Ihre Anfrage erhalten und werden uns innerhalb von 24 Stunden bei Ihnen melden.\n\n\
         Mit freundlichen Grüßen,\n\
         Hamza Masri\n\
         Excessus\n\n\
         E-Mail: kontakt@excessus.de\n\
         Telefon: +49 163 3612150\n\
         Website: www.excessus.de\n"
    )
}

fn notification_subject(name: &str) -> String {
    format!("Neue Kontaktanfrage von {name}")
}

fn notification_body(submission: &Submission) -> String {
    format!(
        "Neue Nachricht von der Website:\n\n\
         Name: {}\n\
         Email: {}\n\
         Nachricht: \n{}\n\n\
         ---\n\
         Gesendet über Excessus Kontaktformular\n",
        submission.name, submission.email, submission.message
    )
}

use async_trait::async_trait;
use lettre::message::Mailbox;

use std::sync::{Arc, Mutex};

use contact_service::mailer::{MailError, Mailer};
use contact_service::service::ContactService;

#[derive(Clone, Debug)]
struct SentMail {
    to: String,
    subject: String,
    body: String,
}

#[derive(Clone, Default)]
struct RecordingMailer {
    sent: Arc<Mutex<Vec<SentMail>>>,
    fail_sends: bool,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(SentMail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        if self.fail_sends {
            Err(MailError::Address(
                "not an address".parse::<Mailbox>().unwrap_err(),
            ))
        } else {
            Ok(())
        }
    }
}

async fn spawn_app(mailer: RecordingMailer) -> String {
    let service = Arc::new(ContactService::new(mailer, "kontakt@excessus.de".to_string()));
    let app = contact_service::router(service);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn valid_submission_sends_two_emails() {
    let mailer = RecordingMailer::default();
    let base = spawn_app(mailer.clone()).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/contact"))
        .form(&[("name", "Anna"), ("email", "a@x.com"), ("message", "Hallo")])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Email sent successfully");

    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 2);

    assert_eq!(sent[0].to, "a@x.com");
    assert_eq!(sent[0].subject, "Ihre Nachricht wurde empfangen");
    assert!(sent[0].body.contains("Hallo Anna"));

    assert_eq!(sent[1].to, "kontakt@excessus.de");
    assert_eq!(sent[1].subject, "Neue Kontaktanfrage von Anna");
    assert!(sent[1].body.contains("Name: Anna"));
    assert!(sent[1].body.contains("Email: a@x.com"));
    assert!(sent[1].body.contains("Hallo"));
}

#[tokio::test]
async fn missing_or_empty_field_is_rejected() {
    let incomplete_forms: Vec<Vec<(&str, &str)>> = vec![
        vec![("email", "a@x.com"), ("message", "Hallo")],
        vec![("name", "Anna"), ("message", "Hallo")],
        vec![("name", "Anna"), ("email", "a@x.com")],
        vec![("name", ""), ("email", "a@x.com"), ("message", "Hallo")],
        vec![("name", "Anna"), ("email", ""), ("message", "Hallo")],
        vec![("name", "Anna"), ("email", "a@x.com"), ("message", "")],
    ];

    for form in incomplete_forms {
        let mailer = RecordingMailer::default();
        let base = spawn_app(mailer.clone()).await;

        let response = reqwest::Client::new()
            .post(format!("{base}/contact"))
            .form(&form)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 400, "form: {form:?}");
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Missing required fields");

        assert!(mailer.sent.lock().unwrap().is_empty());
    }
}

#[tokio::test]
async fn send_failures_are_not_surfaced() {
    let mailer = RecordingMailer {
        fail_sends: true,
        ..RecordingMailer::default()
    };
    let base = spawn_app(mailer.clone()).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/contact"))
        .form(&[("name", "Anna"), ("email", "a@x.com"), ("message", "Hallo")])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);

    // Both sends were attempted even though each failed.
    assert_eq!(mailer.sent.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn liveness_endpoint_responds() {
    let base = spawn_app(RecordingMailer::default()).await;

    let response = reqwest::get(format!("{base}/test")).await.unwrap();

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.text().await.unwrap(),
        "Contact form handler is running! ✅"
    );
}

#[tokio::test]
async fn home_page_serves_test_form() {
    let base = spawn_app(RecordingMailer::default()).await;

    let response = reqwest::get(format!("{base}/")).await.unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let html = response.text().await.unwrap();
    assert!(html.contains(r#"<form action="/contact" method="POST">"#));
}

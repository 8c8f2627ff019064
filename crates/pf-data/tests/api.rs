//! Client tests against a local HTTP server

use std::io::Read;
use std::thread::JoinHandle;

use pf_data::sources::contact::{CONTACT_NETWORK_FAILURE, CONTACT_REJECTED};
use pf_data::{
    ApiError, ContactForm, ContactOutcome, PortfolioClient, PortfolioConfig, PortfolioView,
};

/// A response the test server hands out
struct Canned {
    status: u16,
    body: Vec<u8>,
    headers: Vec<(&'static str, &'static str)>,
}

impl Canned {
    fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.as_bytes().to_vec(),
            headers: vec![("Content-Type", "application/json")],
        }
    }
}

/// What the test server saw
#[derive(Debug)]
struct Seen {
    method: String,
    url: String,
    cache_control: Option<String>,
    body: String,
}

/// Serve the canned responses in order, one per request
fn serve(responses: Vec<Canned>) -> (String, JoinHandle<Vec<Seen>>) {
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();

    let handle = std::thread::spawn(move || {
        let mut seen = Vec::new();
        for canned in responses {
            let mut request = server.recv().unwrap();

            let mut body = String::new();
            request.as_reader().read_to_string(&mut body).unwrap();
            let cache_control = request
                .headers()
                .iter()
                .find(|h| h.field.equiv("Cache-Control"))
                .map(|h| h.value.as_str().to_string());

            seen.push(Seen {
                method: request.method().to_string(),
                url: request.url().to_string(),
                cache_control,
                body,
            });

            let mut response =
                tiny_http::Response::from_data(canned.body).with_status_code(canned.status);
            for (name, value) in canned.headers {
                let header =
                    tiny_http::Header::from_bytes(name.as_bytes(), value.as_bytes()).unwrap();
                response = response.with_header(header);
            }
            request.respond(response).unwrap();
        }
        seen
    });

    (format!("http://{}/", addr), handle)
}

fn client_for(base: &str) -> PortfolioClient {
    PortfolioClient::new(PortfolioConfig {
        api_base_url: base.to_string(),
        ..Default::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_fetch_minimal_portfolio() {
    let (base, server) = serve(vec![Canned::json(200, r#"{"profile":{"name":"Ada"},"skills":[]}"#)]);
    let client = client_for(&base);

    let portfolio = client.fetch_portfolio().await.unwrap();
    let view = PortfolioView::from_portfolio(&portfolio, client.config());

    assert_eq!(view.profile.name, "Ada");
    assert!(view.skills.is_empty());
    assert!(view.projects.is_empty());
    assert!(view.experience.is_empty());
    assert!(view.blogs.is_empty());
    assert!(view.education.is_empty());

    let seen = server.join().unwrap();
    assert_eq!(seen[0].method, "GET");
    assert_eq!(seen[0].url, "/api/portfolio");
}

#[tokio::test]
async fn test_fetch_error_status() {
    let (base, server) = serve(vec![Canned::json(500, r#"{"error":"database down"}"#)]);
    let client = client_for(&base);

    let err = client.fetch_portfolio().await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 500, .. }));
    server.join().unwrap();
}

#[tokio::test]
async fn test_fetch_non_json_body() {
    let (base, server) = serve(vec![Canned {
        status: 200,
        body: b"<html></html>".to_vec(),
        headers: vec![],
    }]);
    let client = client_for(&base);

    let err = client.fetch_portfolio().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
    server.join().unwrap();
}

#[tokio::test]
async fn test_fetch_without_base_is_invalid() {
    let client = client_for("");
    let err = client.fetch_portfolio().await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidUrl(_)));
}

#[tokio::test]
async fn test_download_not_found_surfaces_error() {
    let (base, server) = serve(vec![Canned::json(404, r#"{"error":"no resume"}"#)]);
    let client = client_for(&base);

    let err = client.download_resume("resume.pdf").await.unwrap_err();
    assert_eq!(err.to_string(), "no resume");
    server.join().unwrap();
}

#[tokio::test]
async fn test_download_generic_failure_message() {
    let (base, server) = serve(vec![Canned {
        status: 503,
        body: b"Service Unavailable".to_vec(),
        headers: vec![],
    }]);
    let client = client_for(&base);

    let err = client.download_resume("resume.pdf").await.unwrap_err();
    assert_eq!(err.to_string(), "Download failed (503)");
    server.join().unwrap();
}

#[tokio::test]
async fn test_download_uses_header_filename() {
    let (base, server) = serve(vec![Canned {
        status: 200,
        body: b"%PDF-1.4".to_vec(),
        headers: vec![
            ("Content-Type", "application/pdf"),
            ("Content-Disposition", "attachment; filename*=UTF-8''Ada%20CV.pdf"),
        ],
    }]);
    let client = client_for(&base);

    let file = client.download_resume("resume.pdf").await.unwrap();
    assert_eq!(file.filename, "Ada CV.pdf");
    assert_eq!(file.bytes, b"%PDF-1.4");

    let dir = tempfile::tempdir().unwrap();
    let path = file.save_to(dir.path()).await.unwrap();
    assert_eq!(path, dir.path().join("Ada CV.pdf"));
    assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.4");

    let seen = server.join().unwrap();
    assert_eq!(seen[0].url, "/api/resume/download");
    assert_eq!(seen[0].cache_control.as_deref(), Some("no-store"));
}

#[tokio::test]
async fn test_download_falls_back_to_preferred_name() {
    let pdf = || Canned {
        status: 200,
        body: b"%PDF".to_vec(),
        headers: vec![("Content-Type", "application/pdf")],
    };
    let (base, server) = serve(vec![pdf(), pdf()]);
    let client = client_for(&base);

    let named = client.download_resume("ada.pdf").await.unwrap();
    assert_eq!(named.filename, "ada.pdf");

    let unnamed = client.download_resume("").await.unwrap();
    assert_eq!(unnamed.filename, "resume.pdf");
    server.join().unwrap();
}

#[tokio::test]
async fn test_saved_filename_cannot_escape_directory() {
    let file = pf_data::ResumeFile {
        filename: "../../etc/cv.pdf".to_string(),
        bytes: vec![1, 2, 3],
    };
    let dir = tempfile::tempdir().unwrap();
    let path = file.save_to(dir.path()).await.unwrap();
    assert_eq!(path, dir.path().join("cv.pdf"));
}

#[tokio::test]
async fn test_contact_sent() {
    let (base, server) = serve(vec![Canned::json(200, r#"{"success":true}"#)]);
    let client = client_for(&base);

    let mut form = ContactForm::default();
    form.field_mut("name").push_str("Ada");
    form.field_mut("message").push_str("Hello");

    let outcome = client.submit_contact(&form).await;
    assert_eq!(outcome, ContactOutcome::Sent);

    let seen = server.join().unwrap();
    assert_eq!(seen[0].method, "POST");
    assert_eq!(seen[0].url, "/api/contact");
    let body: serde_json::Value = serde_json::from_str(&seen[0].body).unwrap();
    assert_eq!(body["name"], "Ada");
    assert_eq!(body["message"], "Hello");
    assert_eq!(body["email"], "");
}

#[tokio::test]
async fn test_contact_rejected() {
    let (base, server) = serve(vec![
        Canned::json(400, r#"{"success":false,"error":"Invalid email"}"#),
        Canned::json(500, r#"{"success":false}"#),
    ]);
    let client = client_for(&base);
    let form = ContactForm::default();

    let first = client.submit_contact(&form).await;
    assert_eq!(first.status_message(), "Invalid email");

    let second = client.submit_contact(&form).await;
    assert_eq!(second.status_message(), CONTACT_REJECTED);
    server.join().unwrap();
}

#[tokio::test]
async fn test_contact_network_failure() {
    // Grab a free port and close it again so nothing listens there
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let client = client_for(&format!("http://127.0.0.1:{}", port));

    let outcome = client.submit_contact(&ContactForm::default()).await;
    assert_eq!(outcome, ContactOutcome::NetworkFailure);
    assert_eq!(outcome.status_message(), CONTACT_NETWORK_FAILURE);
}

//! Tequila SSO login.

use scraper::{Html, Selector};

use crate::api::client::MoodleSession;
use crate::api::portal::Portal;
use crate::error::{Error, Result};

/// Marker the SSO provider puts in the page when credentials are rejected.
const LOGIN_FAILED_MARKER: &str = "Login failed";

/// Log into the portal and return the authenticated session.
///
/// The login entry point redirects to the SSO form, whose hidden
/// `requestkey` must be posted back together with the credentials. The
/// cookies collected along the way stay in the returned session.
pub async fn login(portal: Portal, username: &str, password: &str) -> Result<MoodleSession> {
    let session = MoodleSession::new(portal)?;

    let login_page = session.get(session.portal().login_page()?).await?;
    let status = login_page.status();
    if !status.is_success() {
        return Err(Error::Authentication(format!(
            "Failed to access login page: HTTP {}",
            status
        )));
    }

    let body = login_page.text().await?;
    let request_key = extract_request_key(&body)?;
    tracing::debug!("Found login request key");

    let response = session
        .post_form(
            session.portal().sso_login().clone(),
            &[
                ("username", username),
                ("password", password),
                ("requestkey", request_key.as_str()),
            ],
        )
        .await?;

    let status = response.status();
    let body = response.text().await?;

    let banner = extract_error_banner(&body);
    if let Some(ref message) = banner {
        tracing::warn!("SSO reported: {}", message);
    }

    if !status.is_success() || body.contains(LOGIN_FAILED_MARKER) {
        let reason = match banner {
            Some(message) => format!("{} (HTTP {})", message, status),
            None if !status.is_success() => format!("SSO login returned HTTP {}", status),
            None => "Login failed. Please check your credentials.".to_string(),
        };
        return Err(Error::Authentication(reason));
    }

    tracing::info!("Logged in as {}", username);
    Ok(session)
}

/// Read the hidden `requestkey` input of the SSO login form.
pub fn extract_request_key(html: &str) -> Result<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(r#"input[name="requestkey"]"#).unwrap();

    document
        .select(&selector)
        .find_map(|input| input.value().attr("value"))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or_else(|| Error::Parse("requestkey not found on the login page".to_string()))
}

/// Text of the red error banner the SSO page shows on failure, if any.
fn extract_error_banner(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(r#"font[color="red"][size="+1"]"#).unwrap();

    document
        .select(&selector)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .find(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const LOGIN_FORM: &str = r#"
        <html><body>
          <form method="post" action="/cgi-bin/tequila/login">
            <input type="hidden" name="requestkey" value="k3y-123">
            <input type="text" name="username">
            <input type="password" name="password">
          </form>
        </body></html>"#;

    fn portal_for(server: &MockServer) -> Portal {
        Portal::new(
            &server.uri(),
            &format!("{}/cgi-bin/tequila/login", server.uri()),
        )
        .unwrap()
    }

    async fn mount_login_page(server: &MockServer, template: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/login/index.php"))
            .respond_with(template)
            .mount(server)
            .await;
    }

    #[test]
    fn test_extract_request_key() {
        assert_eq!(extract_request_key(LOGIN_FORM).unwrap(), "k3y-123");
    }

    #[test]
    fn test_extract_request_key_missing() {
        let err = extract_request_key("<html><form></form></html>").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_extract_error_banner() {
        let html = r#"<p><font color="red" size="+1"> Invalid password </font></p>"#;
        assert_eq!(extract_error_banner(html).as_deref(), Some("Invalid password"));
        assert_eq!(extract_error_banner("<p>ok</p>"), None);
    }

    #[tokio::test]
    async fn test_login_success() {
        let server = MockServer::start().await;
        mount_login_page(&server, ResponseTemplate::new(200).set_body_string(LOGIN_FORM)).await;
        Mock::given(method("POST"))
            .and(path("/cgi-bin/tequila/login"))
            .and(body_string_contains("requestkey=k3y-123"))
            .and(body_string_contains("username=alice"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>Welcome</html>"))
            .expect(1)
            .mount(&server)
            .await;

        let session = login(portal_for(&server), "alice", "secret").await.unwrap();
        assert_eq!(session.portal().base_url().as_str(), format!("{}/", server.uri()));
    }

    #[tokio::test]
    async fn test_login_rejected_credentials() {
        let server = MockServer::start().await;
        mount_login_page(&server, ResponseTemplate::new(200).set_body_string(LOGIN_FORM)).await;
        Mock::given(method("POST"))
            .and(path("/cgi-bin/tequila/login"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"<font color="red" size="+1">Login failed</font>"#,
            ))
            .mount(&server)
            .await;

        let err = login(portal_for(&server), "alice", "wrong").await.unwrap_err();
        assert!(matches!(err, Error::Authentication(_)));
    }

    #[tokio::test]
    async fn test_login_error_status() {
        let server = MockServer::start().await;
        mount_login_page(&server, ResponseTemplate::new(200).set_body_string(LOGIN_FORM)).await;
        Mock::given(method("POST"))
            .and(path("/cgi-bin/tequila/login"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = login(portal_for(&server), "alice", "secret").await.unwrap_err();
        assert!(matches!(err, Error::Authentication(_)));
    }

    #[tokio::test]
    async fn test_login_page_unreachable() {
        let server = MockServer::start().await;
        mount_login_page(&server, ResponseTemplate::new(503)).await;

        let err = login(portal_for(&server), "alice", "secret").await.unwrap_err();
        assert!(matches!(err, Error::Authentication(_)));
    }

    #[tokio::test]
    async fn test_login_page_without_request_key() {
        let server = MockServer::start().await;
        mount_login_page(
            &server,
            ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"),
        )
        .await;

        let err = login(portal_for(&server), "alice", "secret").await.unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}

//! Moodle HTTP session.

use std::sync::Arc;

use reqwest::{Client, Response};
use url::Url;

use crate::api::portal::Portal;
use crate::config::Course;
use crate::error::{Error, Result};

/// Browser user agent sent with every request.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/144.0.0.0 Safari/537.36";

/// HTTP session against the portal.
///
/// Cloning is cheap: clones share the connection pool and the cookie store,
/// so a session authenticated once can be handed to every download worker.
#[derive(Debug, Clone)]
pub struct MoodleSession {
    client: Client,
    portal: Arc<Portal>,
}

impl MoodleSession {
    /// Create an unauthenticated session with an empty cookie store.
    pub fn new(portal: Portal) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            portal: Arc::new(portal),
        })
    }

    pub fn portal(&self) -> &Portal {
        &self.portal
    }

    /// Send a GET request. The status is left for the caller to check.
    pub async fn get(&self, url: Url) -> Result<Response> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        tracing::debug!("Response status: {}", response.status());

        Ok(response)
    }

    /// Submit a URL-encoded form.
    pub async fn post_form(&self, url: Url, form: &[(&str, &str)]) -> Result<Response> {
        tracing::debug!("POST {}", url);

        let response = self.client.post(url).form(form).send().await?;
        tracing::debug!("Response status: {}", response.status());

        Ok(response)
    }

    /// Fetch the HTML of a course page.
    pub async fn get_course_page(&self, course: &Course) -> Result<String> {
        let url = self.portal.course_page(course.id)?;
        let response = self.get(url).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::CourseFetch {
                course: course.to_string(),
                status,
            });
        }

        Ok(response.text().await?)
    }

    /// Start a file download, failing on a non-success status.
    pub async fn download_file(&self, url: Url) -> Result<Response> {
        let response = self.get(url.clone()).await?;

        if !response.status().is_success() {
            return Err(Error::Download(format!(
                "Failed to download {}: HTTP {}",
                url,
                response.status()
            )));
        }

        Ok(response)
    }
}

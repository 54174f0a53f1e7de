//! Portal endpoints.

use url::Url;

use crate::error::Result;

/// Moodle instance the CLI talks to.
pub const MOODLE_URL: &str = "https://moodle.epfl.ch";

/// Tequila SSO endpoint that receives the login form.
pub const TEQUILA_LOGIN_POST: &str = "https://tequila.epfl.ch/cgi-bin/tequila/login";

/// Base URLs of the Moodle instance and its SSO provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portal {
    moodle: Url,
    sso_login: Url,
}

impl Portal {
    pub fn new(moodle_url: &str, sso_login_url: &str) -> Result<Self> {
        Ok(Self {
            moodle: Url::parse(moodle_url)?,
            sso_login: Url::parse(sso_login_url)?,
        })
    }

    /// The EPFL Moodle behind Tequila.
    pub fn epfl() -> Result<Self> {
        Self::new(MOODLE_URL, TEQUILA_LOGIN_POST)
    }

    /// Root URL of the Moodle instance, used as the base for page links.
    pub fn base_url(&self) -> &Url {
        &self.moodle
    }

    pub fn login_page(&self) -> Result<Url> {
        Ok(self.moodle.join("login/index.php")?)
    }

    pub fn sso_login(&self) -> &Url {
        &self.sso_login
    }

    pub fn course_page(&self, course_id: u64) -> Result<Url> {
        Ok(self
            .moodle
            .join(&format!("course/view.php?id={}", course_id))?)
    }

    pub fn folder_download(&self, folder_id: &str) -> Result<Url> {
        let mut url = self.moodle.join("mod/folder/download_folder.php")?;
        url.query_pairs_mut().append_pair("id", folder_id);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epfl_endpoints() {
        let portal = Portal::epfl().unwrap();
        assert_eq!(
            portal.login_page().unwrap().as_str(),
            "https://moodle.epfl.ch/login/index.php"
        );
        assert_eq!(
            portal.course_page(14220).unwrap().as_str(),
            "https://moodle.epfl.ch/course/view.php?id=14220"
        );
        assert_eq!(
            portal.folder_download("987").unwrap().as_str(),
            "https://moodle.epfl.ch/mod/folder/download_folder.php?id=987"
        );
        assert_eq!(portal.sso_login().as_str(), TEQUILA_LOGIN_POST);
    }

    #[test]
    fn test_custom_base() {
        let portal = Portal::new("http://127.0.0.1:8080", "http://127.0.0.1:8080/sso").unwrap();
        assert_eq!(
            portal.login_page().unwrap().as_str(),
            "http://127.0.0.1:8080/login/index.php"
        );
    }

    #[test]
    fn test_invalid_base() {
        assert!(Portal::new("not a url", TEQUILA_LOGIN_POST).is_err());
    }
}

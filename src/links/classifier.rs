//! Course page link extraction.

use scraper::{Html, Selector};
use url::Url;

use crate::links::target::DownloadTarget;

/// Resolve an `href` against the page's base URL.
///
/// Absolute links pass through unchanged; anything else is joined using the
/// HTML base-URL rules.
pub fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    match Url::parse(href) {
        Ok(url) => Some(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => match base_url.join(href) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::debug!("Failed to resolve link {}: {}", href, e);
                None
            }
        },
        Err(e) => {
            tracing::debug!("Skipping malformed link {}: {}", href, e);
            None
        }
    }
}

/// Every anchor `href` on the page, resolved to an absolute URL, in document
/// order. Duplicates are kept.
pub fn extract_links(html: &str, base_url: &Url) -> Vec<Url> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a[href]").unwrap();

    document
        .select(&selector)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter_map(|href| resolve_link(href, base_url))
        .collect()
}

/// Extract and classify every link on a course page.
pub fn classify(html: &str, base_url: &Url) -> Vec<DownloadTarget> {
    extract_links(html, base_url)
        .into_iter()
        .map(DownloadTarget::from_url)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://moodle.epfl.ch").unwrap()
    }

    #[test]
    fn test_resolve_relative_links() {
        let base = base();
        assert_eq!(
            resolve_link("/mod/resource/view.php?id=1", &base).unwrap().as_str(),
            "https://moodle.epfl.ch/mod/resource/view.php?id=1"
        );
        assert_eq!(
            resolve_link("mod/folder/view.php?id=2", &base).unwrap().as_str(),
            "https://moodle.epfl.ch/mod/folder/view.php?id=2"
        );
        assert_eq!(
            resolve_link("//tequila.epfl.ch/x", &base).unwrap().as_str(),
            "https://tequila.epfl.ch/x"
        );
        assert_eq!(
            resolve_link("#section-1", &base).unwrap().as_str(),
            "https://moodle.epfl.ch/#section-1"
        );
    }

    #[test]
    fn test_resolve_absolute_link_unchanged() {
        let href = "https://other.example.org/mod/resource/view.php?id=3";
        assert_eq!(resolve_link(href, &base()).unwrap().as_str(), href);
    }

    #[test]
    fn test_resolved_links_are_absolute() {
        let html = r##"
            <a href="/a">a</a>
            <a href="b/c?d=1">b</a>
            <a href="../up">c</a>
            <a href="?q=1">d</a>
            <a href="#top">e</a>
            <a href="mailto:someone@epfl.ch">f</a>
            <a href="https://www.epfl.ch/">g</a>
        "##;

        let links = extract_links(html, &base());
        assert_eq!(links.len(), 7);
        for link in links.iter().filter(|l| l.scheme() != "mailto") {
            assert!(link.as_str().starts_with("https://"), "{link} is not absolute");
            assert!(link.has_host());
        }
        assert_eq!(links[2].as_str(), "https://moodle.epfl.ch/up");
        assert_eq!(links[3].as_str(), "https://moodle.epfl.ch/?q=1");
    }

    #[test]
    fn test_anchors_without_href_skipped() {
        let html = r#"<a name="top">x</a><a href="/mod/resource/view.php?id=1">y</a>"#;
        assert_eq!(extract_links(html, &base()).len(), 1);
    }

    #[test]
    fn test_classify_course_page() {
        let html = r#"
            <html><body>
              <a href="https://moodle.epfl.ch/course/view.php?id=14220">Course</a>
              <a href="https://moodle.epfl.ch/mod/resource/view.php?id=101">Slides</a>
              <a href="/mod/folder/view.php?id=202">Exercises</a>
              <a href="https://moodle.epfl.ch/mod/forum/view.php?id=303">Forum</a>
            </body></html>
        "#;

        let targets = classify(html, &base());
        assert_eq!(targets.len(), 4);
        assert!(targets[0].is_ignored());
        assert!(matches!(targets[1], DownloadTarget::SingleFile { .. }));
        assert!(matches!(
            &targets[2],
            DownloadTarget::FolderArchive { folder_id, .. } if folder_id == "202"
        ));
        assert!(targets[3].is_ignored());
    }

    #[test]
    fn test_duplicate_links_are_kept() {
        let html = r#"
            <a href="/mod/resource/view.php?id=1">Slides</a>
            <a href="/mod/resource/view.php?id=1"><img src="icon.png"></a>
        "#;

        let targets = classify(html, &base());
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0], targets[1]);
    }
}

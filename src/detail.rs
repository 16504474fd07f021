use scraper::{Html, Selector};

use crate::models::VideoDetail;
use crate::utils::{extract_digits, parse_duration};

/// Best-effort extraction of supplementary metadata from a watch page.
///
/// Every field degrades to its zero/empty default independently; a page
/// missing all of its tags still yields a usable record.
pub fn extract_detail(html: &str) -> VideoDetail {
    let document = Html::parse_document(html);

    let likes = meta_content(&document, r#"meta[itemprop="interactionCount"]"#)
        .filter(|text| text.chars().all(|c| c.is_ascii_digit()))
        .and_then(|text| text.parse().ok())
        .unwrap_or(0);

    let subscriber_text = element_text(&document, "yt-formatted-string#owner-sub-count")
        .unwrap_or_else(|| "0 subscribers".to_string());

    let duration_secs = meta_content(&document, r#"meta[itemprop="duration"]"#)
        .map(|text| parse_duration(&text))
        .unwrap_or(0);

    VideoDetail {
        likes,
        tags: meta_content(&document, r#"meta[name="keywords"]"#).unwrap_or_default(),
        location: meta_content(&document, r#"meta[itemprop="contentLocation"]"#).unwrap_or_default(),
        subscriber_count: extract_digits(&subscriber_text),
        duration_secs,
    }
}

fn meta_content(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).unwrap();

    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(str::to_string)
}

fn element_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).unwrap();

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_PAGE: &str = r#"
        <html><head>
            <meta itemprop="interactionCount" content="4321">
            <meta itemprop="duration" content="PT15M33S">
            <meta itemprop="contentLocation" content="Oslo, Norway">
            <meta name="keywords" content="rust, parsing, video">
        </head><body>
            <yt-formatted-string id="owner-sub-count">1.2M subscribers</yt-formatted-string>
        </body></html>"#;

    #[test]
    fn test_full_page() {
        let detail = extract_detail(FULL_PAGE);

        assert_eq!(detail.likes, 4321);
        assert_eq!(detail.duration_secs, 933);
        assert_eq!(detail.location, "Oslo, Norway");
        assert_eq!(detail.tags, "rust, parsing, video");
        assert_eq!(detail.subscriber_count, 12);
    }

    #[test]
    fn test_page_missing_every_tag_yields_defaults() {
        let detail = extract_detail("<html><body><p>bare page</p></body></html>");
        assert_eq!(detail, VideoDetail::default());
    }

    #[test]
    fn test_non_numeric_likes_default_to_zero() {
        let html = r#"<html><head><meta itemprop="interactionCount" content="4,321 likes"></head></html>"#;
        assert_eq!(extract_detail(html).likes, 0);
    }

    #[test]
    fn test_unparsable_duration_defaults_to_zero() {
        let html = r#"<html><head><meta itemprop="duration" content="fifteen minutes"></head></html>"#;
        assert_eq!(extract_detail(html).duration_secs, 0);
    }
}

//! Feed renderer
//!
//! Renders feeds to RSS 2.0 XML.

use chrono::{DateTime, Utc};

use crate::app::{FeedChannel, FeedEntry};

/// Render a channel and its entries as an RSS 2.0 document
pub fn render_rss(channel: &FeedChannel, entries: &[FeedEntry]) -> String {
    let mut buf = String::new();

    buf.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    buf.push_str(
        "<rss version=\"2.0\" xmlns:atom=\"http://www.w3.org/2005/Atom\" \
         xmlns:dc=\"http://purl.org/dc/elements/1.1/\">",
    );
    buf.push_str("<channel>");

    push_element(&mut buf, "title", &channel.title);
    push_element(&mut buf, "link", &channel.link);
    push_element(&mut buf, "description", &channel.description);
    buf.push_str(&format!(
        "<atom:link href=\"{}\" rel=\"self\"></atom:link>",
        escape(&channel.feed_url)
    ));
    if !channel.copyright.is_empty() {
        push_element(&mut buf, "copyright", &channel.copyright);
    }
    push_element(
        &mut buf,
        "lastBuildDate",
        &latest_pubdate(entries).to_rfc2822(),
    );

    for entry in entries {
        buf.push_str(&render_item(entry));
    }

    buf.push_str("</channel></rss>");
    buf
}

fn render_item(entry: &FeedEntry) -> String {
    let mut buf = String::from("<item>");

    push_element(&mut buf, "title", &entry.title);
    push_element(&mut buf, "link", &entry.link);
    push_element(&mut buf, "description", &entry.description);
    if let Some(author) = &entry.author_name {
        push_element(&mut buf, "dc:creator", author);
    }
    push_element(&mut buf, "pubDate", &entry.pubdate.to_rfc2822());
    push_element(&mut buf, "guid", entry.guid.as_deref().unwrap_or(&entry.link));

    buf.push_str("</item>");
    buf
}

/// Newest entry date, or now for an empty feed
fn latest_pubdate(entries: &[FeedEntry]) -> DateTime<Utc> {
    entries
        .iter()
        .map(|e| e.pubdate)
        .max()
        .unwrap_or_else(Utc::now)
}

fn push_element(buf: &mut String, name: &str, text: &str) {
    buf.push('<');
    buf.push_str(name);
    buf.push('>');
    buf.push_str(&escape(text));
    buf.push_str("</");
    buf.push_str(name);
    buf.push('>');
}

/// Escape text for use in XML character data and attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn channel() -> FeedChannel {
        FeedChannel {
            title: "Ask Test - Individual question feed".to_string(),
            link: "https://ask.test/".to_string(),
            description: "Questions & answers".to_string(),
            copyright: "Copyright Ask Test".to_string(),
            feed_url: "https://ask.test/feeds/rss/".to_string(),
        }
    }

    fn entry(title: &str, day: u32) -> FeedEntry {
        FeedEntry {
            title: title.to_string(),
            link: format!("https://ask.test/question/{}/", day),
            description: "<p>body</p>".to_string(),
            pubdate: Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap(),
            author_name: None,
            author_link: None,
            guid: None,
        }
    }

    // ===== render_rss tests =====

    #[test]
    fn render_rss_empty() {
        let result = render_rss(&channel(), &[]);

        assert!(result.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
        assert!(result.contains("<title>Ask Test - Individual question feed</title>"));
        assert!(result.contains("<description>Questions &amp; answers</description>"));
        assert!(result.contains("<copyright>Copyright Ask Test</copyright>"));
        assert!(result.contains("href=\"https://ask.test/feeds/rss/\" rel=\"self\""));
        assert!(!result.contains("<item>"));
    }

    #[test]
    fn render_rss_keeps_entry_order() {
        let entries = vec![entry("first", 2), entry("second", 1)];

        let result = render_rss(&channel(), &entries);

        let first = result.find("<title>first</title>").unwrap();
        let second = result.find("<title>second</title>").unwrap();
        assert!(first < second);
    }

    #[test]
    fn render_rss_last_build_date_is_newest_entry() {
        let entries = vec![entry("older", 1), entry("newer", 5)];

        let result = render_rss(&channel(), &entries);

        assert!(result.contains("<lastBuildDate>Tue, 5 Mar 2024 12:00:00 +0000</lastBuildDate>"));
    }

    #[test]
    fn render_rss_omits_empty_copyright() {
        let mut channel = channel();
        channel.copyright = String::new();

        let result = render_rss(&channel, &[]);

        assert!(!result.contains("<copyright>"));
    }

    // ===== render_item tests =====

    #[test]
    fn render_item_escapes_markup() {
        let result = render_item(&entry("a < b", 1));

        assert!(result.contains("<title>a &lt; b</title>"));
        assert!(result.contains("<description>&lt;p&gt;body&lt;/p&gt;</description>"));
    }

    #[test]
    fn render_item_guid_falls_back_to_link() {
        let result = render_item(&entry("q", 3));

        assert!(result.contains("<guid>https://ask.test/question/3/</guid>"));
        assert!(!result.contains("dc:creator"));
    }

    #[test]
    fn render_item_with_author_and_guid() {
        let mut item = entry("q", 3);
        item.author_name = Some("O'Brien".to_string());
        item.guid = Some("https://ask.test/question/3/".to_string());
        item.link = "https://ask.test/question/3/slug/".to_string();

        let result = render_item(&item);

        assert!(result.contains("<dc:creator>O&#39;Brien</dc:creator>"));
        assert!(result.contains("<guid>https://ask.test/question/3/</guid>"));
        assert!(result.contains("<pubDate>Sun, 3 Mar 2024 12:00:00 +0000</pubDate>"));
    }

    #[test]
    fn escape_all_special_characters() {
        assert_eq!(escape("&<>\"'"), "&amp;&lt;&gt;&quot;&#39;");
        assert_eq!(escape("plain"), "plain");
    }
}

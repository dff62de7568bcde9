use ap_core::{Article, Error, Result};
use atom_syndication::{Entry, Feed};
use chrono::Utc;

/// Parse an Atom response from the arXiv API into articles.
///
/// The whole document failing to parse, or an entry missing its id or
/// title, is a [`Error::Parse`]; a feed with no entries is an empty list.
pub fn parse_feed(xml: &str) -> Result<Vec<Article>> {
    let feed = Feed::read_from(xml.as_bytes())
        .map_err(|e| Error::Parse(format!("Invalid Atom feed: {}", e)))?;

    feed.entries().iter().map(parse_entry).collect()
}

fn parse_entry(entry: &Entry) -> Result<Article> {
    let arxiv_url = entry.id().to_string();
    if arxiv_url.is_empty() {
        return Err(Error::Parse("Entry without an id".to_string()));
    }

    let title = entry.title().as_str().to_string();
    if title.is_empty() {
        return Err(Error::Parse(format!("Entry without a title: {}", arxiv_url)));
    }

    let summary = entry
        .summary()
        .map(|s| s.as_str().to_string())
        .unwrap_or_default();

    let authors = entry
        .authors()
        .iter()
        .map(|person| person.name().to_string())
        .collect();

    // arXiv always sets <published>; fall back to <updated> like other
    // Atom consumers do.
    let published = entry
        .published()
        .copied()
        .unwrap_or_else(|| *entry.updated())
        .with_timezone(&Utc);

    Ok(Article::new(title, authors, summary, arxiv_url, published))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const SAMPLE_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>ArXiv Query Results</title>
  <id>http://arxiv.org/api/example</id>
  <updated>2021-01-03T00:00:00Z</updated>
  <entry>
    <id>http://arxiv.org/abs/2101.00158v1</id>
    <updated>2021-01-01T09:00:00Z</updated>
    <published>2021-01-01T09:00:00Z</published>
    <title>On the formation of \textbf{spiral} galaxies</title>
    <summary>We study galaxy
formation in the local universe.</summary>
    <author><name>A. Astronomer</name></author>
    <author><name>B. Cosmologist</name></author>
  </entry>
  <entry>
    <id>http://arxiv.org/abs/2101.00188v2</id>
    <updated>2021-01-01T12:30:00Z</updated>
    <published>2021-01-01T12:30:00Z</published>
    <title>A second paper</title>
    <summary>Another summary.</summary>
    <author><name>C. Author</name></author>
  </entry>
</feed>"#;

    #[test]
    fn test_parse_feed() {
        let articles = parse_feed(SAMPLE_FEED).unwrap();
        assert_eq!(articles.len(), 2);

        let first = &articles[0];
        assert_eq!(first.arxiv_url, "http://arxiv.org/abs/2101.00158v1");
        assert_eq!(first.title, "On the formation of spiral galaxies");
        assert_eq!(first.summary, "We study galaxy formation in the local universe.");
        assert_eq!(first.authors, vec!["A. Astronomer", "B. Cosmologist"]);
        assert_eq!(first.published.to_rfc3339(), "2021-01-01T09:00:00+00:00");
        assert!(first.original.is_none());
    }

    #[test]
    fn test_parse_feed_empty() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>ArXiv Query Results</title>
  <id>http://arxiv.org/api/example</id>
  <updated>2021-01-03T00:00:00Z</updated>
</feed>"#;
        assert!(parse_feed(xml).unwrap().is_empty());
    }

    #[test]
    fn test_parse_feed_rejects_garbage() {
        assert!(matches!(parse_feed("not xml"), Err(Error::Parse(_))));
    }
}

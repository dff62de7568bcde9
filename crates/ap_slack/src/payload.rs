use serde_json::{json, Value};

use ap_core::Article;

/// Build the Block Kit payload for one article.
///
/// Translated text goes into the header and summary; the title, author
/// list and both links always come from the untranslated original so a
/// reader can get back to the paper itself.
pub fn to_payload(article: &Article) -> Value {
    let original = article.original();

    json!({
        "text": article.title,
        "blocks": [
            { "type": "divider" },
            {
                "type": "header",
                "text": { "type": "plain_text", "text": article.title }
            },
            {
                "type": "section",
                "text": { "type": "mrkdwn", "text": format!("*Title:* {}", original.title) }
            },
            {
                "type": "section",
                "text": { "type": "mrkdwn", "text": format!("*Authors:* {}", original.authors.join(", ")) }
            },
            {
                "type": "section",
                "text": { "type": "mrkdwn", "text": format!("*Summary:* {}", article.summary) }
            },
            {
                "type": "actions",
                "elements": [
                    {
                        "type": "button",
                        "action_id": "view_arxiv",
                        "text": { "type": "plain_text", "text": "View arXiv" },
                        "url": original.arxiv_url
                    },
                    {
                        "type": "button",
                        "action_id": "view_pdf",
                        "text": { "type": "plain_text", "text": "View PDF" },
                        "url": original.arxiv_pdf_url()
                    }
                ]
            },
            { "type": "divider" }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn article() -> Article {
        Article::new(
            "A title",
            vec!["A. Author".to_string(), "B. Author".to_string()],
            "A summary.",
            "http://arxiv.org/abs/2101.00001v1",
            Utc::now(),
        )
    }

    #[test]
    fn test_payload_untranslated() {
        let payload = to_payload(&article());
        assert_eq!(payload["text"], "A title");

        let blocks = payload["blocks"].as_array().unwrap();
        assert_eq!(blocks.len(), 7);
        assert_eq!(blocks[1]["text"]["text"], "A title");
        assert_eq!(blocks[2]["text"]["text"], "*Title:* A title");
        assert_eq!(blocks[3]["text"]["text"], "*Authors:* A. Author, B. Author");
        assert_eq!(blocks[4]["text"]["text"], "*Summary:* A summary.");
        assert_eq!(
            blocks[5]["elements"][1]["url"],
            "http://arxiv.org/pdf/2101.00001v1"
        );
    }

    #[test]
    fn test_payload_translated_mixes_original_fields() {
        let translated = article().replace_text("訳したタイトル\n訳した要約");
        let payload = to_payload(&translated);

        let blocks = payload["blocks"].as_array().unwrap();
        // Header and summary carry the translation.
        assert_eq!(blocks[1]["text"]["text"], "訳したタイトル");
        assert_eq!(blocks[4]["text"]["text"], "*Summary:* 訳した要約");
        // Title, authors and links come from the original.
        assert_eq!(blocks[2]["text"]["text"], "*Title:* A title");
        assert_eq!(
            blocks[5]["elements"][0]["url"],
            "http://arxiv.org/abs/2101.00001v1"
        );
    }
}

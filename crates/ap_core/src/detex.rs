use once_cell::sync::Lazy;
use regex::Regex;

/// Ordered replacement rules; whitespace collapsing runs last.
static RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"\\text(bb|bf|it|gt|mc|md|rm|sc|sf|sl|tt|up)\{(.+?)\}", "$2"),
        (r"\{\\text(bb|bf|it|gt|mc|md|rm|sc|sf|sl|tt|up) (.+?)\}", "$2"),
        (r"\{\\(bf|em|it|rm|sc|sf|sl|tt) (.+?)\}", "$2"),
        (r"\\emph\{(.+?)\}", "$1"),
        (r"(\n+\s*|\n*\s+)", " "),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), replacement))
    .collect()
});

/// Remove TeX control commands from a text and collapse line breaks and
/// runs of whitespace to single spaces.
pub fn detex(text: &str) -> String {
    let mut text = text.to_string();

    for (pattern, replacement) in RULES.iter() {
        text = pattern.replace_all(&text, *replacement).into_owned();
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detex() {
        let cases = [
            ("This is \\textbf{a bold text}.", "This is a bold text."),
            ("This is {\\textbf a bold text}.", "This is a bold text."),
            ("This is \\emph{emphasized}.", "This is emphasized."),
            ("This is {\\em emphasized}.", "This is emphasized."),
            ("This has   \n irregular\nbreaks.", "This has irregular breaks."),
        ];

        for (original, detexed) in cases {
            assert_eq!(detex(original), detexed);
        }
    }

    #[test]
    fn test_detex_plain_text_unchanged() {
        assert_eq!(detex("No markup here."), "No markup here.");
    }
}

//! Terminal rendering of a generated metadata record.

use seoforge_types::outputs::SeoMetadata;

/// Format the three result sections the tool presents: title, description
/// and tags. Multi-line descriptions keep their line breaks, indented under
/// the section heading.
pub fn format_metadata(metadata: &SeoMetadata) -> String {
    let mut out = String::new();

    push_section(&mut out, "Optimized Title", &metadata.title);
    push_section(&mut out, "Meta Description", &metadata.description);
    push_section(&mut out, "Smart Tags", &metadata.tags_joined());

    out
}

fn push_section(out: &mut String, heading: &str, body: &str) {
    out.push_str(heading);
    out.push('\n');
    for line in body.lines() {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_all_three_sections() {
        let metadata = SeoMetadata {
            title: "Perfect Sourdough in 10 Minutes".into(),
            description: "Learn the one technique\nbakers swear by.".into(),
            tags: vec!["sourdough".into(), "baking".into()],
        };

        let rendered = format_metadata(&metadata);

        assert!(rendered.starts_with("Optimized Title\n  Perfect Sourdough"));
        assert!(rendered.contains("Meta Description\n  Learn the one technique\n  bakers swear by.\n"));
        assert!(rendered.contains("Smart Tags\n  sourdough, baking\n"));
    }
}

//! The two bounded inputs of a generation request: **where** the content will
//! be published ([`ContentType`]) and **how** it should sound ([`Tone`]).
//!
//! Both enums follow the same pattern as the workspace's model identifiers:
//! a closed set of variants plus a mapping onto the literal labels the prompt
//! uses. Keeping the labels behind `label()` means application code never
//! types the human-readable strings, and the compiler flags every match that
//! misses a newly added platform.

use std::fmt::Display;
use std::str::FromStr;

/// Platform the generated metadata is destined for.
///
/// Each platform carries its own guideline block that is rendered into the
/// prompt: length limits differ per platform and so do the calls to action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    BlogPost,
    YouTubeVideo,
    SocialMediaPost,
    ProductDescription,
    WebsitePage,
}

impl ContentType {
    /// Every supported platform, in the order presented to users.
    pub const ALL: [ContentType; 5] = [
        ContentType::BlogPost,
        ContentType::YouTubeVideo,
        ContentType::SocialMediaPost,
        ContentType::ProductDescription,
        ContentType::WebsitePage,
    ];

    /// Human-readable label used inside the prompt.
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::BlogPost => "Blog Post",
            ContentType::YouTubeVideo => "YouTube Video",
            ContentType::SocialMediaPost => "Social Media Post",
            ContentType::ProductDescription => "Product Description",
            ContentType::WebsitePage => "Website Page",
        }
    }

    /// Platform-specific instruction block rendered into the prompt.
    pub fn guideline(&self) -> &'static str {
        match self {
            ContentType::YouTubeVideo => {
                "Description length: STRICTLY Max 300 words. \
                 Include CTAs to like, share, and subscribe."
            }
            ContentType::BlogPost => {
                "Meta Description length: STRICTLY Max 160 characters. \
                 Encourage reading more or sharing."
            }
            ContentType::SocialMediaPost => {
                "Description length: STRICTLY Max 280 characters. \
                 Short, punchy, and engaging."
            }
            ContentType::ProductDescription => {
                "Description length: STRICTLY Max 200 words. \
                 Focus on benefits and 'Buy Now' CTA."
            }
            ContentType::WebsitePage => {
                "Meta Description length: STRICTLY Max 160 characters. \
                 Professional and clickable."
            }
        }
    }

    /// Kebab-case identifier accepted on the command line.
    pub fn as_kebab(&self) -> &'static str {
        match self {
            ContentType::BlogPost => "blog-post",
            ContentType::YouTubeVideo => "youtube-video",
            ContentType::SocialMediaPost => "social-media-post",
            ContentType::ProductDescription => "product-description",
            ContentType::WebsitePage => "website-page",
        }
    }
}

impl Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_kebab() == s)
            .ok_or_else(|| {
                format!(
                    "unknown content type `{s}` (expected one of: {})",
                    Self::ALL.map(|v| v.as_kebab()).join(", ")
                )
            })
    }
}

/// Target tone for the generated title and description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Catchy,
    Clickbait,
    Serious,
    Casual,
    Professional,
    Humorous,
}

impl Tone {
    /// Every supported tone, in the order presented to users.
    pub const ALL: [Tone; 6] = [
        Tone::Catchy,
        Tone::Clickbait,
        Tone::Serious,
        Tone::Casual,
        Tone::Professional,
        Tone::Humorous,
    ];

    /// Human-readable label used inside the prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Catchy => "Catchy",
            Tone::Clickbait => "Clickbait",
            Tone::Serious => "Serious",
            Tone::Casual => "Casual",
            Tone::Professional => "Professional",
            Tone::Humorous => "Humorous",
        }
    }

    /// Lowercase identifier accepted on the command line.
    pub fn as_kebab(&self) -> &'static str {
        match self {
            Tone::Catchy => "catchy",
            Tone::Clickbait => "clickbait",
            Tone::Serious => "serious",
            Tone::Casual => "casual",
            Tone::Professional => "professional",
            Tone::Humorous => "humorous",
        }
    }
}

impl Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_kebab() == s)
            .ok_or_else(|| {
                format!(
                    "unknown tone `{s}` (expected one of: {})",
                    Self::ALL.map(|v| v.as_kebab()).join(", ")
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_parses_kebab_identifiers() {
        assert_eq!(
            "youtube-video".parse::<ContentType>().unwrap(),
            ContentType::YouTubeVideo
        );
        assert_eq!(
            "blog-post".parse::<ContentType>().unwrap(),
            ContentType::BlogPost
        );
    }

    #[test]
    fn content_type_rejects_unknown_labels() {
        let err = "podcast".parse::<ContentType>().unwrap_err();
        assert!(err.contains("podcast"));
        assert!(err.contains("blog-post"));
    }

    #[test]
    fn every_platform_has_a_guideline_with_a_length_limit() {
        for platform in ContentType::ALL {
            assert!(platform.guideline().contains("Max"), "{platform}");
        }
    }

    #[test]
    fn tone_parses_and_displays() {
        let tone = "clickbait".parse::<Tone>().unwrap();
        assert_eq!(tone, Tone::Clickbait);
        assert_eq!(tone.to_string(), "Clickbait");
    }
}

//! Breakpoint-driven layout rules for the hero section.

use std::fmt::Write;

/// The `sm` breakpoint in CSS pixels.
pub const SM_BREAKPOINT_PX: u32 = 768;

/// Page content width inside the full-bleed hero background.
pub const CONTAINER_MAX_WIDTH_PX: u32 = 1280;

/// Which set of style rules is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutVariant {
    /// Below the `sm` breakpoint.
    #[default]
    Compact,
    /// At or above the `sm` breakpoint.
    Wide,
}

impl LayoutVariant {
    /// Media query guarding this variant's rules, if any.
    pub fn media_query(&self) -> Option<String> {
        match self {
            Self::Compact => None,
            Self::Wide => Some(format!("@media screen and (min-width: {}px)", SM_BREAKPOINT_PX)),
        }
    }
}

/// Font size and line height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMetrics {
    pub font_size: u32,
    pub line_height: u32,
}

impl TextMetrics {
    const fn new(font_size: u32, line_height: u32) -> Self {
        Self {
            font_size,
            line_height,
        }
    }
}

/// Style constants for one layout variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroStyle {
    pub wrapper_padding: &'static str,
    pub label: TextMetrics,
    pub title: TextMetrics,
    pub title_padding_top: u32,
    pub title_word_break: &'static str,
    pub description: TextMetrics,
    pub description_padding_top: u32,
}

impl HeroStyle {
    pub fn for_variant(variant: LayoutVariant) -> Self {
        match variant {
            LayoutVariant::Compact => Self {
                wrapper_padding: "27px 20px 23px",
                label: TextMetrics::new(13, 16),
                title: TextMetrics::new(18, 26),
                title_padding_top: 0,
                title_word_break: "break-all",
                description: TextMetrics::new(14, 20),
                description_padding_top: 5,
            },
            LayoutVariant::Wide => Self {
                wrapper_padding: "50px 20px",
                label: TextMetrics::new(20, 24),
                title: TextMetrics::new(30, 40),
                title_padding_top: 12,
                title_word_break: "break-word",
                description: TextMetrics::new(24, 32),
                description_padding_top: 12,
            },
        }
    }

    fn variant_rules(&self) -> String {
        format!(
            ".theme-hero {{ padding: {}; }}\n\
             .theme-hero-label {{ font-size: {}px; line-height: {}px; }}\n\
             .theme-hero-title {{ font-size: {}px; line-height: {}px; padding-top: {}px; word-break: {}; }}\n\
             .theme-hero-description {{ font-size: {}px; line-height: {}px; padding-top: {}px; }}\n",
            self.wrapper_padding,
            self.label.font_size,
            self.label.line_height,
            self.title.font_size,
            self.title.line_height,
            self.title_padding_top,
            self.title_word_break,
            self.description.font_size,
            self.description.line_height,
            self.description_padding_top,
        )
    }
}

const BASE_RULES: &str = "\
.theme-hero { width: 100%; }
.theme-hero-label { font-weight: 700; color: rgba(255, 255, 255, 0.7); }
.theme-hero-title { font-weight: 700; color: #fff; overflow: hidden; text-overflow: ellipsis; display: -webkit-box; -webkit-box-orient: vertical; -webkit-line-clamp: 2; }
.theme-hero-description { color: rgba(255, 255, 255, 0.55); word-break: break-all; }
.theme-hero-loading { text-align: center; padding: 20px; }
.theme-hero-error { text-align: center; padding: 20px; color: red; }
";

/// CSS for the hero section: compact rules as the base, wide rules behind the breakpoint.
pub fn hero_stylesheet() -> String {
    let mut css = String::from(BASE_RULES);
    let _ = writeln!(
        css,
        ".container {{ width: 100%; max-width: {}px; margin: 0 auto; }}",
        CONTAINER_MAX_WIDTH_PX
    );

    for variant in [LayoutVariant::Compact, LayoutVariant::Wide] {
        let rules = HeroStyle::for_variant(variant).variant_rules();
        match variant.media_query() {
            Some(query) => {
                let _ = writeln!(css, "{} {{\n{}}}", query, rules);
            }
            None => css.push_str(&rules),
        }
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_query() {
        assert_eq!(LayoutVariant::Compact.media_query(), None);
        assert_eq!(
            LayoutVariant::Wide.media_query().as_deref(),
            Some("@media screen and (min-width: 768px)")
        );
    }

    #[test]
    fn test_compact_style() {
        let style = HeroStyle::for_variant(LayoutVariant::Compact);
        assert_eq!(style.wrapper_padding, "27px 20px 23px");
        assert_eq!(style.title, TextMetrics::new(18, 26));
        assert_eq!(style.title_word_break, "break-all");
    }

    #[test]
    fn test_wide_style() {
        let style = HeroStyle::for_variant(LayoutVariant::Wide);
        assert_eq!(style.wrapper_padding, "50px 20px");
        assert_eq!(style.label, TextMetrics::new(20, 24));
        assert_eq!(style.description_padding_top, 12);
    }

    #[test]
    fn test_stylesheet_has_breakpoint() {
        let css = hero_stylesheet();
        assert!(css.contains("@media screen and (min-width: 768px) {"));
        assert!(css.contains("padding: 27px 20px 23px;"));
        assert!(css.contains("padding: 50px 20px;"));
        assert!(css.contains("max-width: 1280px"));
    }

    #[test]
    fn test_stylesheet_wide_rules_follow_query() {
        let css = hero_stylesheet();
        let query = css.find("@media").unwrap();
        let wide = css.find("padding: 50px 20px").unwrap();
        let compact = css.find("padding: 27px 20px 23px").unwrap();
        assert!(compact < query);
        assert!(query < wide);
    }
}

//! Locale resolution and localized user-facing messages.
//!
//! The supported set and default are an explicit [`LocaleConfig`] value
//! owned by the server configuration, not a module-level constant, so
//! tests and future deployments can vary them.

/// Immutable locale configuration.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Locales the site ships translations for.
    pub supported: Vec<String>,
    /// Fallback when neither cookie nor header yields a supported locale.
    pub default_locale: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            supported: vec!["en".to_string(), "vi".to_string()],
            default_locale: "en".to_string(),
        }
    }
}

impl LocaleConfig {
    pub fn is_supported(&self, locale: &str) -> bool {
        self.supported.iter().any(|l| l == locale)
    }

    /// Resolve the user-facing locale.
    ///
    /// Order: (1) cookie value if supported; (2) the `Accept-Language`
    /// header's primary subtag (first entry, language part only,
    /// lowercased) if supported; (3) the configured default. Never fails.
    pub fn resolve(&self, cookie_locale: Option<&str>, accept_language: Option<&str>) -> String {
        if let Some(locale) = cookie_locale {
            if self.is_supported(locale) {
                return locale.to_string();
            }
        }

        if let Some(header) = accept_language {
            let primary = header
                .split(',')
                .next()
                .unwrap_or("")
                .split('-')
                .next()
                .unwrap_or("")
                .trim()
                .to_lowercase();
            if self.is_supported(&primary) {
                return primary;
            }
        }

        self.default_locale.clone()
    }
}

/// Localized messages for the comment gate. Vietnamese strings are the
/// originals the site shipped with; English mirrors them.
pub mod messages {
    pub fn login_required(locale: &str) -> &'static str {
        match locale {
            "vi" => "Bạn cần đăng nhập để bình luận",
            _ => "You need to log in to comment",
        }
    }

    pub fn rate_limited(locale: &str, seconds_left: i64) -> String {
        match locale {
            "vi" => format!("Vui lòng đợi {seconds_left} giây trước khi bình luận tiếp"),
            _ => format!("Please wait {seconds_left} second(s) before commenting again"),
        }
    }

    pub fn post_not_found(locale: &str) -> &'static str {
        match locale {
            "vi" => "Không tìm thấy bài viết",
            _ => "Post not found",
        }
    }

    pub fn comment_failed(locale: &str) -> &'static str {
        match locale {
            "vi" => "Không thể đăng bình luận. Vui lòng thử lại sau.",
            _ => "Could not post the comment. Please try again later.",
        }
    }
}

use std::env;

use crate::domain::entities::SiteId;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Port the HTTP server listens on
    pub port: u16,
    pub site: SiteSettings,
}

/// Per-site settings consumed by the feed assemblers
#[derive(Debug, Clone)]
pub struct SiteSettings {
    /// Public base URL of the site, prefixed to every feed link
    pub app_url: String,
    pub app_title: String,
    pub app_description: String,
    pub app_copyright: String,
    /// The site whose threads are syndicated
    pub site_id: SiteId,
    /// Language used when the request does not ask for one
    pub default_language: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            site: SiteSettings {
                app_url: env::var("APP_URL")
                    .unwrap_or_else(|_| "http://localhost:8080".to_string()),
                app_title: env::var("APP_TITLE").unwrap_or_else(|_| "Askbot".to_string()),
                app_description: env::var("APP_DESCRIPTION")
                    .unwrap_or_else(|_| "Open source question and answer forum".to_string()),
                app_copyright: env::var("APP_COPYRIGHT").unwrap_or_default(),
                site_id: env::var("SITE_ID")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .map(SiteId)
                    .unwrap_or(SiteId(1)),
                default_language: env::var("DEFAULT_LANGUAGE")
                    .unwrap_or_else(|_| "en".to_string()),
            },
        }
    }
}

impl SiteSettings {
    /// Join the site base URL with an absolute path
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}{}", self.app_url.trim_end_matches('/'), path)
    }

    /// Channel title shared by every feed on the site
    pub fn feed_title(&self) -> String {
        format!("{} - Individual question feed", self.app_title)
    }
}

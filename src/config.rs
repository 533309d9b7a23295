use std::{env, fmt};

use serde::{
    de::{value, DeserializeOwned, IntoDeserializer},
    Deserialize,
};

const BASE_URL: &str = "https://api.imgur.com";
const API_VERSION: &str = "3";
// Public anonymous client id of the FreshShots app.
const CLIENT_ID: &str = "2e19bb8e5b8700b";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sort {
    Time,
    Viral,
    #[default]
    Top,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Window {
    Day,
    #[default]
    Week,
    Month,
    Year,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Hot,
    #[default]
    Top,
    User,
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Sort::Time => "time",
            Sort::Viral => "viral",
            Sort::Top => "top",
        })
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Window::Day => "day",
            Window::Week => "week",
            Window::Month => "month",
            Window::Year => "year",
            Window::All => "all",
        })
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Section::Hot => "hot",
            Section::Top => "top",
            Section::User => "user",
        })
    }
}

/// Everything needed to address the gallery API.
///
/// `Default` points at the public Imgur service and lists the top posts of the week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryConfig {
    pub base_url: String,
    pub api_version: String,
    pub client_id: String,
    pub sort: Sort,
    pub window: Window,
    pub section: Section,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_owned(),
            api_version: API_VERSION.to_owned(),
            client_id: CLIENT_ID.to_owned(),
            sort: Sort::default(),
            window: Window::default(),
            section: Section::default(),
        }
    }
}

impl GalleryConfig {
    /// Defaults overridden by `IMGUR_BASE_URL`, `IMGUR_API_VERSION`, `IMGUR_CLIENT_ID`,
    /// `IMGUR_SORT`, `IMGUR_WINDOW` and `IMGUR_SECTION`, read from the process environment
    /// or a `.env` file.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Defaults overridden by whatever `var` returns for the `IMGUR_*` keys.
    ///
    /// Unrecognized sort, window or section tokens are logged and keep their default.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            base_url: var("IMGUR_BASE_URL").unwrap_or(defaults.base_url),
            api_version: var("IMGUR_API_VERSION").unwrap_or(defaults.api_version),
            client_id: var("IMGUR_CLIENT_ID").unwrap_or(defaults.client_id),
            sort: token(&var, "IMGUR_SORT").unwrap_or(defaults.sort),
            window: token(&var, "IMGUR_WINDOW").unwrap_or(defaults.window),
            section: token(&var, "IMGUR_SECTION").unwrap_or(defaults.section),
        }
    }

    /// `{base_url}/{api_version}`
    pub fn api_root(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), self.api_version)
    }
}

fn token<T: DeserializeOwned>(var: impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = var(key)?;
    let deserializer: value::StringDeserializer<value::Error> =
        raw.to_lowercase().into_deserializer();

    match T::deserialize(deserializer) {
        Ok(token) => Some(token),
        Err(err) => {
            tracing::warn!("Ignoring {}={}: {}", key, raw, err);
            None
        }
    }
}

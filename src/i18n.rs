//! Locales and the marketing copy bundled for each of them.
//!
//! Copy lives in `locales/<code>.toml` and is embedded into the binary. Bundles
//! are parsed on first use; `validate_bundles` is called at startup so a broken
//! bundle stops the server before it accepts requests.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// A language the site copy is available in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Es];

    /// Parse a locale from its URL code (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(code))
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    fn source(self) -> &'static str {
        match self {
            Locale::En => include_str!("../locales/en.toml"),
            Locale::Es => include_str!("../locales/es.toml"),
        }
    }

    fn cell(self) -> &'static OnceLock<Messages> {
        static EN: OnceLock<Messages> = OnceLock::new();
        static ES: OnceLock<Messages> = OnceLock::new();
        match self {
            Locale::En => &EN,
            Locale::Es => &ES,
        }
    }

    /// Copy for this locale.
    ///
    /// # Panics
    /// If the embedded bundle does not parse. `validate_bundles` runs at startup
    /// and in tests, so this is unreachable in a server that started.
    pub fn messages(self) -> &'static Messages {
        self.cell().get_or_init(|| {
            toml::from_str(self.source()).expect("embedded locale bundle must parse")
        })
    }
}

/// Parse every embedded bundle, returning the first failure.
pub fn validate_bundles() -> Result<(), toml::de::Error> {
    for locale in Locale::ALL {
        if locale.cell().get().is_none() {
            let messages: Messages = toml::from_str(locale.source())?;
            let _ = locale.cell().set(messages);
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Messages {
    pub lang: String,
    pub nav: NavCopy,
    pub hero: HeroCopy,
    pub features: Vec<FeatureCopy>,
    pub auth: AuthCopy,
    pub test: TestCopy,
    pub footer: FooterCopy,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NavCopy {
    pub home: String,
    pub login: String,
    pub register: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HeroCopy {
    pub eyebrow: String,
    pub title: String,
    pub subtitle: String,
    pub cta_primary: String,
    pub cta_secondary: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeatureCopy {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthCopy {
    pub login_title: String,
    pub register_title: String,
    pub email_label: String,
    pub password_label: String,
    pub login_submit: String,
    pub register_submit: String,
    pub switch_to_register: String,
    pub switch_to_login: String,
}

/// Copy for the test fixture page
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TestCopy {
    pub title: String,
    pub upload_heading: String,
    pub upload_body: String,
    pub analysis_heading: String,
    pub analysis_body: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FooterCopy {
    pub tagline: String,
    pub rights: String,
}

use crate::constants::{MODAL_TARGET_ID, MODAL_TRANSITION_MS, REVEAL_TRANSITION_MS};
use crate::input::InputKind;
use crate::validator::Validator;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use std::time::Duration;

/// Top-level site configuration.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfigInner {
    pub about: AboutConfig,
    pub contact_form: ContactFormConfig,
    pub motion: MotionConfig,
    pub portal: PortalConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into components.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    #[serde(flatten, default)]
    inner: Arc<SiteConfigInner>,
}

impl Deref for SiteConfig {
    type Target = SiteConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SiteConfig {
    fn deref_mut(&mut self) -> &mut SiteConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Content of the about section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AboutConfig {
    pub header: SectionHeaderConfig,
    pub description: Vec<String>,
    pub contacts: Vec<ContactEntry>,
    pub actions: Vec<ActionLink>,
}

/// Three-line section header: headline, kicker and oversized background word.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SectionHeaderConfig {
    pub main_text: String,
    pub small_text: String,
    pub bg_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactEntry {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActionLink {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub primary: bool,
}

/// Fields of the contact form, rendered in order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactFormConfig {
    pub fields: Vec<FieldConfig>,
    pub submit_label: String,
    pub confirmation_header: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldConfig {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub kind: InputKind,
    #[serde(default)]
    pub validators: Vec<Validator>,
    #[serde(default)]
    pub error_text: String,
}

/// Transition timings in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub reveal_ms: u64,
    pub modal_ms: u64,
}

/// Where overlay content is attached.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub target_id: String,
}

impl MotionConfig {
    #[must_use]
    pub const fn reveal_timeout(&self) -> Duration {
        Duration::from_millis(self.reveal_ms)
    }

    #[must_use]
    pub const fn modal_timeout(&self) -> Duration {
        Duration::from_millis(self.modal_ms)
    }
}

// --- Default ---

impl Default for AboutConfig {
    fn default() -> Self {
        Self {
            header: SectionHeaderConfig::default(),
            description: vec![
                "I build fast, accessible web applications and the tooling behind them.".to_owned(),
                "Most days that means Rust on the backend and a typed component layer on the front."
                    .to_owned(),
            ],
            contacts: vec![
                ContactEntry {
                    label: "Email".to_owned(),
                    value: "hello@example.com".to_owned(),
                    href: Some("mailto:hello@example.com".to_owned()),
                },
                ContactEntry {
                    label: "Location".to_owned(),
                    value: "Berlin, Germany".to_owned(),
                    href: None,
                },
            ],
            actions: vec![
                ActionLink { label: "Contact me".to_owned(), href: "#contact".to_owned(), primary: true },
                ActionLink { label: "Projects".to_owned(), href: "#projects".to_owned(), primary: false },
            ],
        }
    }
}

impl Default for SectionHeaderConfig {
    fn default() -> Self {
        Self {
            main_text: "Yes, that's me".to_owned(),
            small_text: "Begrüßung & Vorstellung".to_owned(),
            bg_text: "Welcome".to_owned(),
        }
    }
}

impl Default for ContactFormConfig {
    fn default() -> Self {
        Self {
            fields: vec![
                FieldConfig {
                    id: "name".to_owned(),
                    label: "Name".to_owned(),
                    kind: InputKind::Text,
                    validators: vec![Validator::Require],
                    error_text: "Please enter your name.".to_owned(),
                },
                FieldConfig {
                    id: "email".to_owned(),
                    label: "E-Mail".to_owned(),
                    kind: InputKind::Email,
                    validators: vec![Validator::Email],
                    error_text: "Please enter a valid e-mail address.".to_owned(),
                },
                FieldConfig {
                    id: "phone".to_owned(),
                    label: "Phone (optional)".to_owned(),
                    kind: InputKind::Phone,
                    validators: Vec::new(),
                    error_text: String::new(),
                },
                FieldConfig {
                    id: "message".to_owned(),
                    label: "Message".to_owned(),
                    kind: InputKind::Textarea,
                    validators: vec![Validator::MinLength(10)],
                    error_text: "Please write at least 10 characters.".to_owned(),
                },
            ],
            submit_label: "Send".to_owned(),
            confirmation_header: "Thank you!".to_owned(),
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self { reveal_ms: REVEAL_TRANSITION_MS, modal_ms: MODAL_TRANSITION_MS }
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self { target_id: MODAL_TARGET_ID.to_owned() }
    }
}

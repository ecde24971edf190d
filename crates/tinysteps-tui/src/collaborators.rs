// Desktop integrations: browser, mail client and clipboard
use tinysteps_core::share::{Clipboard, ShareSheet};
use tinysteps_core::{Error, Result, SharePayload};

/// Shares by composing an email in the user's mail client
pub struct MailtoShareSheet;

impl MailtoShareSheet {
    pub fn mailto_url(payload: &SharePayload) -> String {
        let body = format!("{}\n\n{}", payload.text, payload.url);
        format!(
            "mailto:?subject={}&body={}",
            urlencoding::encode(&payload.title),
            urlencoding::encode(&body)
        )
    }
}

impl ShareSheet for MailtoShareSheet {
    fn can_share(&self, payload: &SharePayload) -> bool {
        !payload.url.is_empty() && has_desktop()
    }

    fn share(&self, payload: &SharePayload) -> Result<()> {
        open::that(Self::mailto_url(payload)).map_err(|e| Error::ShareError(e.to_string()))
    }
}

/// System clipboard via arboard
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| Error::ClipboardError(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| Error::ClipboardError(e.to_string()))
    }
}

pub fn open_url(url: &str) -> Result<()> {
    open::that(url).map_err(Error::IoError)
}

// Headless Linux sessions (SSH, containers) have nothing to hand a mailto to
#[cfg(target_os = "linux")]
fn has_desktop() -> bool {
    std::env::var_os("DISPLAY").is_some() || std::env::var_os("WAYLAND_DISPLAY").is_some()
}

#[cfg(not(target_os = "linux"))]
fn has_desktop() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto_url_is_encoded() {
        let payload = SharePayload {
            title: "TinySteps: Pink Tower".to_string(),
            text: "Check this out".to_string(),
            url: "https://tinysteps.app/activities/11".to_string(),
        };
        let url = MailtoShareSheet::mailto_url(&payload);
        assert!(url.starts_with("mailto:?subject=TinySteps%3A%20Pink%20Tower&body="));
        assert!(url.contains("https%3A%2F%2Ftinysteps.app%2Factivities%2F11"));
    }

    #[test]
    fn test_empty_url_cannot_share() {
        let payload = SharePayload {
            title: String::new(),
            text: String::new(),
            url: String::new(),
        };
        assert!(!MailtoShareSheet.can_share(&payload));
    }
}

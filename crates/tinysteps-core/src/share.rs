use crate::links::SharePayload;
use crate::Result;
use tracing::debug;

/// Something that can hand a payload to the platform's share mechanism
///
/// Implementations live in the UI layer; the core only decides what to do
/// when sharing is unavailable or fails.
#[cfg_attr(test, mockall::automock)]
pub trait ShareSheet {
    /// Whether this payload can be shared right now
    fn can_share(&self, payload: &SharePayload) -> bool;
    fn share(&self, payload: &SharePayload) -> Result<()>;
}

/// Fallback target when no share sheet is available
#[cfg_attr(test, mockall::automock)]
pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// How a share attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    /// The share sheet was opened but errored or was dismissed
    Dismissed,
    Copied,
    CopyFailed,
}

impl ShareOutcome {
    /// Notice to show the user, if any
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            ShareOutcome::Shared | ShareOutcome::Dismissed => None,
            ShareOutcome::Copied => Some("Link copied to clipboard!"),
            ShareOutcome::CopyFailed => Some("Could not copy link."),
        }
    }
}

/// Share through the sheet when possible, otherwise copy the URL
///
/// A failing share sheet is not retried through the clipboard: the user
/// already saw the sheet and may have cancelled it on purpose.
pub fn share_or_copy(
    sheet: Option<&dyn ShareSheet>,
    clipboard: &dyn Clipboard,
    payload: &SharePayload,
) -> ShareOutcome {
    if let Some(sheet) = sheet.filter(|s| s.can_share(payload)) {
        return match sheet.share(payload) {
            Ok(()) => ShareOutcome::Shared,
            Err(e) => {
                debug!("Sharing failed: {}", e);
                ShareOutcome::Dismissed
            }
        };
    }

    match clipboard.write_text(&payload.url) {
        Ok(()) => ShareOutcome::Copied,
        Err(e) => {
            debug!("Clipboard write failed: {}", e);
            ShareOutcome::CopyFailed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use mockall::predicate::eq;

    fn payload() -> SharePayload {
        SharePayload {
            title: "TinySteps: Pouring Water".to_string(),
            text: "Check out this developmental activity for your little one: Pouring Water"
                .to_string(),
            url: "https://tinysteps.app/activities/13".to_string(),
        }
    }

    #[test]
    fn test_shares_when_sheet_available() {
        let mut sheet = MockShareSheet::new();
        sheet.expect_can_share().return_const(true);
        sheet.expect_share().times(1).returning(|_| Ok(()));
        let mut clipboard = MockClipboard::new();
        clipboard.expect_write_text().never();

        let outcome = share_or_copy(Some(&sheet), &clipboard, &payload());
        assert_eq!(outcome, ShareOutcome::Shared);
        assert!(outcome.notice().is_none());
    }

    #[test]
    fn test_share_failure_is_swallowed() {
        let mut sheet = MockShareSheet::new();
        sheet.expect_can_share().return_const(true);
        sheet
            .expect_share()
            .returning(|_| Err(Error::ShareError("cancelled".to_string())));
        let mut clipboard = MockClipboard::new();
        clipboard.expect_write_text().never();

        let outcome = share_or_copy(Some(&sheet), &clipboard, &payload());
        assert_eq!(outcome, ShareOutcome::Dismissed);
    }

    #[test]
    fn test_falls_back_to_clipboard_without_sheet() {
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_text()
            .with(eq("https://tinysteps.app/activities/13"))
            .times(1)
            .returning(|_| Ok(()));

        let outcome = share_or_copy(None, &clipboard, &payload());
        assert_eq!(outcome, ShareOutcome::Copied);
        assert_eq!(outcome.notice(), Some("Link copied to clipboard!"));
    }

    #[test]
    fn test_falls_back_when_sheet_cannot_share() {
        let mut sheet = MockShareSheet::new();
        sheet.expect_can_share().return_const(false);
        sheet.expect_share().never();
        let mut clipboard = MockClipboard::new();
        clipboard.expect_write_text().returning(|_| Ok(()));

        let outcome = share_or_copy(Some(&sheet), &clipboard, &payload());
        assert_eq!(outcome, ShareOutcome::Copied);
    }

    #[test]
    fn test_clipboard_failure_reports_notice() {
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_text()
            .returning(|_| Err(Error::ClipboardError("denied".to_string())));

        let outcome = share_or_copy(None, &clipboard, &payload());
        assert_eq!(outcome, ShareOutcome::CopyFailed);
        assert_eq!(outcome.notice(), Some("Could not copy link."));
    }
}

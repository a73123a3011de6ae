//! Transient transaction status banner.

/// Banner wording shown to the user.
pub mod messages {
    pub const CONNECT_WALLET: &str = "Please connect wallet first";
    pub const FILL_REQUIRED: &str = "Please fill required fields";

    pub const SUBMIT_PENDING: &str = "Encrypting cheat score with Zama FHE...";
    pub const SUBMIT_SUCCESS: &str = "Encrypted cheat data submitted securely!";
    pub const SUBMIT_REJECTED: &str = "Transaction rejected by user";
    pub const SUBMIT_FAILED: &str = "Submission failed";

    pub const PROCESSING: &str = "Processing encrypted data with FHE...";
    pub const FLAG_SUCCESS: &str = "FHE analysis completed - marked as suspicious!";
    pub const FLAG_FAILED: &str = "Operation failed";
    pub const CONFIRM_SUCCESS: &str = "Cheating confirmed with FHE verification!";
    pub const CONFIRM_FAILED: &str = "Confirmation failed";

    pub const DECRYPT_FAILED: &str = "Decryption failed";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Pending,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
    /// Epoch millis after which the banner disappears. Pending banners stay
    /// until replaced.
    pub expires_at_millis: Option<u64>,
    /// Close the creation modal and reset the form when this banner expires.
    pub closes_create_form: bool,
}

impl Banner {
    pub fn pending(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Pending,
            message: message.into(),
            expires_at_millis: None,
            closes_create_form: false,
        }
    }

    pub fn success(message: impl Into<String>, expires_at_millis: u64) -> Self {
        Self {
            kind: BannerKind::Success,
            message: message.into(),
            expires_at_millis: Some(expires_at_millis),
            closes_create_form: false,
        }
    }

    pub fn error(message: impl Into<String>, expires_at_millis: u64) -> Self {
        Self {
            kind: BannerKind::Error,
            message: message.into(),
            expires_at_millis: Some(expires_at_millis),
            closes_create_form: false,
        }
    }

    pub fn closing_create_form(mut self) -> Self {
        self.closes_create_form = true;
        self
    }

    pub fn is_expired(&self, now_millis: u64) -> bool {
        self.expires_at_millis.is_some_and(|at| now_millis >= at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_never_expires() {
        assert!(!Banner::pending("wait").is_expired(u64::MAX));
    }

    #[test]
    fn timed_banners_expire_at_deadline() {
        let banner = Banner::error("boom", 3000);
        assert!(!banner.is_expired(2999));
        assert!(banner.is_expired(3000));
    }

    #[test]
    fn progress_wording_names_fhe() {
        assert_eq!(messages::SUBMIT_PENDING, "Encrypting cheat score with Zama FHE...");
        assert_eq!(messages::PROCESSING, "Processing encrypted data with FHE...");
        assert_eq!(
            messages::FLAG_SUCCESS,
            "FHE analysis completed - marked as suspicious!"
        );
    }
}

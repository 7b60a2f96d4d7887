//! `mailto:` links for "send by email" actions. Nothing is delivered; the
//! link hands the draft to the user's mail client.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailDraft {
    pub to: Option<String>,
    pub subject: String,
    pub body: String,
}

impl MailDraft {
    pub fn new(to: Option<&str>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        MailDraft {
            to: to.map(str::trim).filter(|t| !t.is_empty()).map(String::from),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// `mailto:{to}?subject=..&body=..` with percent-encoded query values.
    pub fn href(&self) -> String {
        let to = self.to.as_deref().unwrap_or("");
        let mut query = Vec::new();
        if !self.subject.is_empty() {
            query.push(format!("subject={}", urlencoding::encode(&self.subject)));
        }
        if !self.body.is_empty() {
            query.push(format!("body={}", urlencoding::encode(&self.body)));
        }
        if query.is_empty() {
            format!("mailto:{}", to)
        } else {
            format!("mailto:{}?{}", to, query.join("&"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn href_encodes_subject_and_body() {
        let draft = MailDraft::new(
            Some(" billing@acme.test "),
            "Invoice INV-0001 from Tallybook",
            "Amount due: $200.00\nThanks & regards",
        );
        assert_eq!(
            draft.href(),
            "mailto:billing@acme.test?subject=Invoice%20INV-0001%20from%20Tallybook&body=Amount%20due%3A%20%24200.00%0AThanks%20%26%20regards"
        );
    }

    #[test]
    fn href_without_recipient_or_query() {
        let draft = MailDraft::new(None, "", "");
        assert_eq!(draft.href(), "mailto:");
        assert_eq!(MailDraft::new(Some("  "), "Hi", "").href(), "mailto:?subject=Hi");
    }
}

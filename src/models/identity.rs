use serde::{Deserialize, Serialize};

/// Signed-in author as handed over by the external sign-in provider.
///
/// Nothing here is verified; the pair is only used as the key that
/// decides which articles an author may edit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorIdentity {
    pub display_name: Option<String>,
    pub email: Option<String>,
}

impl AuthorIdentity {
    pub fn new(display_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            display_name: Some(display_name.into()),
            email: Some(email.into()),
        }
    }

    pub fn with_display_name(display_name: impl Into<String>) -> Self {
        Self {
            display_name: Some(display_name.into()),
            email: None,
        }
    }

    /// Name used to sign new articles: display name, else email.
    pub fn byline(&self) -> Option<&str> {
        non_empty(self.display_name.as_deref()).or_else(|| non_empty(self.email.as_deref()))
    }

    /// True when `author` is either the display name or the email.
    pub fn owns(&self, author: &str) -> bool {
        non_empty(self.display_name.as_deref()) == Some(author)
            || non_empty(self.email.as_deref()) == Some(author)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owns_matches_name_or_email() {
        let jane = AuthorIdentity::new("Jane", "jane@example.com");
        assert!(jane.owns("Jane"));
        assert!(jane.owns("jane@example.com"));
        assert!(!jane.owns("Bob"));
    }

    #[test]
    fn empty_identity_owns_nothing() {
        let nobody = AuthorIdentity::default();
        assert!(!nobody.owns(""));

        let blank = AuthorIdentity::new("", "");
        assert!(!blank.owns(""));
    }

    #[test]
    fn byline_falls_back_to_email() {
        let only_email = AuthorIdentity {
            display_name: Some(String::new()),
            email: Some("bob@example.com".to_string()),
        };
        assert_eq!(only_email.byline(), Some("bob@example.com"));
        assert_eq!(AuthorIdentity::default().byline(), None);
    }
}

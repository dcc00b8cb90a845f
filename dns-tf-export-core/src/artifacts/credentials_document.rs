//! `credentials.tf`: the variables referenced by the provider block.

use super::config_document::escape;
use crate::types::CredentialsMode;

pub const USERNAME_VARIABLE: &str = "ultradns_username";
pub const PASSWORD_VARIABLE: &str = "ultradns_password";

/// Render the credentials document, or `None` in [`CredentialsMode::Skip`].
pub fn render(mode: CredentialsMode, username: &str, password: &str) -> Option<String> {
    match mode {
        CredentialsMode::Plaintext => Some(format!(
            "variable \"{USERNAME_VARIABLE}\" {{\n\tdefault = \"{}\"\n}}\n\
             variable \"{PASSWORD_VARIABLE}\" {{\n\tdefault = \"{}\"\n}}\n",
            escape(username),
            escape(password)
        )),
        CredentialsMode::Environment => Some(format!(
            "variable \"{USERNAME_VARIABLE}\" {{\n\tdescription = \"Set TF_VAR_{USERNAME_VARIABLE}\"\n}}\n\
             variable \"{PASSWORD_VARIABLE}\" {{\n\tdescription = \"Set TF_VAR_{PASSWORD_VARIABLE}\"\n}}\n"
        )),
        CredentialsMode::Skip => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plaintext_holds_defaults() {
        let text = render(CredentialsMode::Plaintext, "alice", "s3\"cret").unwrap();
        assert_eq!(
            text,
            "variable \"ultradns_username\" {\n\tdefault = \"alice\"\n}\n\
             variable \"ultradns_password\" {\n\tdefault = \"s3\\\"cret\"\n}\n"
        );
    }

    #[test]
    fn environment_mode_has_no_secrets() {
        let text = render(CredentialsMode::Environment, "alice", "hunter2").unwrap();
        assert!(!text.contains("alice"));
        assert!(!text.contains("hunter2"));
        assert!(!text.contains("default"));
        assert!(text.contains("TF_VAR_ultradns_password"));
    }

    #[test]
    fn skip_mode_renders_nothing() {
        assert!(render(CredentialsMode::Skip, "alice", "hunter2").is_none());
    }
}

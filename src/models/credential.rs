use serde::Deserialize;

/// One organization's management-account credentials, as configured.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct CredentialSet {
    /// Human label for the organization; becomes the document title.
    #[serde(rename = "name")]
    pub label: String,
    pub access_key: String,
    pub secret_key: String,
}

impl std::fmt::Debug for CredentialSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialSet")
            .field("label", &self.label)
            .field("access_key", &self.access_key)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_secret() {
        let creds = CredentialSet {
            label: "prod".into(),
            access_key: "AKIAEXAMPLE".into(),
            secret_key: "wJalrXUtnFEMI".into(),
        };
        let out = format!("{:?}", creds);
        assert!(out.contains("prod"));
        assert!(!out.contains("wJalrXUtnFEMI"));
    }
}

use serde::Deserialize;
use serde_json::Value;
use crate::errors::OrgDocsError;
use crate::models::CredentialSet;
use tracing::debug;

#[derive(Deserialize)]
struct CredentialsBlob {
    accounts: Option<Vec<Value>>,
}

/// Parse the credentials blob (`{"accounts": [{"name", "access_key", "secret_key"}, ...]}`)
/// into credential sets, preserving order.
///
/// Credential values are not checked against the provider here; bad keys
/// surface later as provider errors.
pub fn load_credential_sets(blob: Option<&str>) -> Result<Vec<CredentialSet>, OrgDocsError> {
    let blob = match blob {
        Some(b) if !b.trim().is_empty() => b,
        _ => return Err(OrgDocsError::Config("AWS_CREDENTIALS_JSON is not set".into())),
    };

    let parsed: CredentialsBlob = serde_json::from_str(blob)
        .map_err(|e| OrgDocsError::Config(format!("Invalid JSON in AWS_CREDENTIALS_JSON: {}", e)))?;

    let entries = parsed.accounts.ok_or_else(|| {
        OrgDocsError::Config("AWS_CREDENTIALS_JSON is missing the 'accounts' key".into())
    })?;

    let mut sets = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let secrets = entry_secrets(&entry);
        let mut set: CredentialSet = serde_json::from_value(entry).map_err(|e| {
            let detail = format!("Invalid credentials entry at index {}: {}", index, e);
            let secrets: Vec<&str> = secrets.iter().map(String::as_str).collect();
            OrgDocsError::Config(redact_credentials(&detail, &secrets))
        })?;
        set.access_key = resolve_credential(&set.access_key);
        set.secret_key = resolve_credential(&set.secret_key);
        sets.push(set);
    }

    debug!(count = sets.len(), "Loaded credential sets");
    Ok(sets)
}

/// String values of an entry's key fields, whatever their shape.
fn entry_secrets(entry: &Value) -> Vec<String> {
    ["access_key", "secret_key"]
        .iter()
        .filter_map(|field| entry.get(field).and_then(Value::as_str))
        .map(str::to_string)
        .collect()
}

/// Redact sensitive values in a string. Replaces each secret of four or more
/// characters with [REDACTED].
pub fn redact_credentials(text: &str, secrets: &[&str]) -> String {
    let mut result = text.to_string();
    for secret in secrets {
        if secret.len() >= 4 {
            result = result.replace(secret, "[REDACTED]");
        }
    }
    result
}

/// Resolve a credential value. If the value starts with '$', treat it as an
/// environment variable reference and resolve from the environment.
pub fn resolve_credential(value: &str) -> String {
    if let Some(var_name) = value.strip_prefix('$') {
        match std::env::var(var_name) {
            Ok(resolved) => {
                debug!(var = %var_name, "Resolved credential from environment");
                resolved
            }
            Err(_) => {
                debug!(var = %var_name, "Environment variable not set, using literal");
                value.to_string()
            }
        }
    } else {
        value.to_string()
    }
}

/// Mask an access key id for display, keeping the first and last four characters.
pub fn mask_access_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}{}", head, "*".repeat(chars.len() - 8), tail)
}

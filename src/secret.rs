use secrecy::{ExposeSecret, SecretString};

pub struct Passphrase {
    inner: SecretString,
}

impl Passphrase {
    pub fn new(key: &str) -> Self {
        Self { inner: SecretString::from(key.to_owned()) }
    }

    pub fn from_string(key: String) -> Self {
        Self { inner: SecretString::from(key) }
    }

    pub fn expose_secret(&self) -> &str {
        self.inner.expose_secret()
    }
}

impl From<SecretString> for Passphrase {
    fn from(secret: SecretString) -> Self {
        Self { inner: secret }
    }
}

impl std::fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Passphrase([redacted])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_never_prints_the_key() {
        let passphrase = Passphrase::new("topsecret");
        let rendered = format!("{passphrase:?}");
        assert!(!rendered.contains("topsecret"));
    }

    #[test]
    fn test_expose_returns_the_key() {
        assert_eq!(Passphrase::new("AB").expose_secret(), "AB");
    }
}

/// Client name registered with the MIDI backend.
pub const DEFAULT_CLIENT_NAME: &str = "v8hd";

/// Name given to the output connection.
pub const DEFAULT_PORT_LABEL: &str = "v8hd-out";

/// Substrings identifying the switcher among output endpoint names.
pub const DEFAULT_MATCH_PATTERNS: [&str; 2] = ["Roland", "V-8HD"];

/// Configuration for device discovery and binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Client name registered with the MIDI backend.
    pub client_name: String,
    /// Label for the output connection, where the backend supports one.
    pub port_label: String,
    /// An endpoint matches when its name contains any of these
    /// (case-sensitive).
    pub match_patterns: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            client_name: DEFAULT_CLIENT_NAME.to_string(),
            port_label: DEFAULT_PORT_LABEL.to_string(),
            match_patterns: DEFAULT_MATCH_PATTERNS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl SessionConfig {
    /// Override the backend client name.
    pub fn with_client_name(mut self, name: impl Into<String>) -> Self {
        self.client_name = name.into();
        self
    }

    /// Override the connection label.
    pub fn with_port_label(mut self, label: impl Into<String>) -> Self {
        self.port_label = label.into();
        self
    }

    /// Replace the discovery patterns.
    pub fn with_match_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.match_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Whether an endpoint name identifies the switcher.
    pub fn matches(&self, port_name: &str) -> bool {
        self.match_patterns
            .iter()
            .any(|pattern| port_name.contains(pattern.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_roland_or_model() {
        let config = SessionConfig::default();
        assert!(config.matches("Roland V-8HD"));
        assert!(config.matches("V-8HD MIDI 1"));
        assert!(config.matches("Roland UM-ONE"));
        assert!(!config.matches("roland v-8hd"));
        assert!(!config.matches("Midi Through Port-0"));
    }

    #[test]
    fn builder_overrides() {
        let config = SessionConfig::default()
            .with_client_name("stage-left")
            .with_port_label("switcher")
            .with_match_patterns(["V-8HD"]);
        assert_eq!(config.client_name, "stage-left");
        assert_eq!(config.port_label, "switcher");
        assert!(!config.matches("Roland UM-ONE"));
        assert!(config.matches("V-8HD"));
    }

    #[test]
    fn empty_pattern_list_matches_nothing() {
        let config = SessionConfig::default().with_match_patterns(Vec::<String>::new());
        assert!(!config.matches("Roland V-8HD"));
    }
}

use crate::domain::GeneratorConfig;
use crate::ports::CompletionClient;

/// Application context holding dependencies for command execution.
///
/// The completion client is injected here so commands can run against the
/// HTTP client or a scripted double interchangeably.
pub struct AppContext<C: CompletionClient> {
    client: C,
    config: GeneratorConfig,
}

impl<C: CompletionClient> AppContext<C> {
    /// Create a new application context.
    pub fn new(client: C, config: GeneratorConfig) -> Self {
        Self { client, config }
    }

    /// Get a reference to the completion client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Get a reference to the generator configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}

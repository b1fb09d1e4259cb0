use super::KeyInjector;
use crate::error::InjectorError;
use crate::pipeline::types::GameKey;
use async_trait::async_trait;
use tracing::info;

/// Dry-run injector: records taps in the log and nothing else.
#[derive(Debug, Default)]
pub struct LoggingInjector;

#[async_trait]
impl KeyInjector for LoggingInjector {
    async fn tap(&mut self, key: GameKey) -> Result<(), InjectorError> {
        info!(key = %key, "Tap");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "LoggingInjector"
    }
}

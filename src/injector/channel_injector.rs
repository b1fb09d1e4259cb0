use super::KeyInjector;
use crate::error::InjectorError;
use crate::pipeline::types::GameKey;
use async_trait::async_trait;
use tokio::sync::mpsc;

/// Forwards taps to an in-process consumer.
pub struct ChannelInjector {
    key_tx: mpsc::Sender<GameKey>,
}

impl ChannelInjector {
    pub fn new(key_tx: mpsc::Sender<GameKey>) -> Self {
        Self { key_tx }
    }
}

#[async_trait]
impl KeyInjector for ChannelInjector {
    async fn tap(&mut self, key: GameKey) -> Result<(), InjectorError> {
        self.key_tx
            .send(key)
            .await
            .map_err(|e| InjectorError::Send(e.to_string()))
    }

    fn name(&self) -> &'static str {
        "ChannelInjector"
    }
}

use crate::error::InjectorError;
use crate::pipeline::types::GameKey;
use async_trait::async_trait;

/// Host-side input sink. `tap` must press and immediately release `key`;
/// implementations never leave a key held down.
#[async_trait]
pub trait KeyInjector: Send {
    async fn tap(&mut self, key: GameKey) -> Result<(), InjectorError>;
    fn name(&self) -> &'static str;
}

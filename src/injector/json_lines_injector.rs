use super::KeyInjector;
use crate::error::InjectorError;
use crate::pipeline::types::GameKey;
use async_trait::async_trait;
use serde::Serialize;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Wire form of a tap, one JSON object per line: `{"tap":"left"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TapCommand {
    pub tap: GameKey,
}

/// Writes each tap as a JSON line for an external injector process. Every
/// line is flushed so the consumer sees taps as they happen.
pub struct JsonLinesInjector<W>
where
    W: AsyncWrite + Unpin + Send,
{
    writer: W,
}

impl<W: AsyncWrite + Unpin + Send> JsonLinesInjector<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[async_trait]
impl<W: AsyncWrite + Unpin + Send> KeyInjector for JsonLinesInjector<W> {
    async fn tap(&mut self, key: GameKey) -> Result<(), InjectorError> {
        let mut line = serde_json::to_vec(&TapCommand { tap: key })?;
        line.push(b'\n');
        self.writer.write_all(&line).await?;
        self.writer.flush().await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "JsonLinesInjector"
    }
}

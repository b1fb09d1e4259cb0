use super::FrameReader;
use crate::common::{Landmark, LandmarkFrame, Observation};
use crate::error::FrameError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

const NEWLINE: u8 = b'\n';

/// One line of input:
/// `{"timestamp_ms": 1700000000000, "hand": [{"x":0.1,"y":0.2,"z":0.0}, ...]}`.
/// `hand` is `null` or missing when nothing was detected.
#[derive(Debug, Deserialize)]
struct ObservationRecord {
    #[serde(default)]
    timestamp_ms: Option<i64>,
    #[serde(default)]
    hand: Option<Vec<Landmark>>,
}

/// Reads observations encoded as JSON lines. Blank lines are ignored.
pub struct JsonLinesReader<T>
where
    T: AsyncRead + Unpin + Send,
{
    reader: BufReader<T>,
    line: Vec<u8>,
    line_number: usize,
}

impl<T: AsyncRead + Unpin + Send> JsonLinesReader<T> {
    pub fn new(stream: T) -> Self {
        Self {
            reader: BufReader::new(stream),
            line: Vec::new(),
            line_number: 0,
        }
    }

    fn decode(&self, line: &str) -> Result<Observation, FrameError> {
        let record: ObservationRecord =
            serde_json::from_str(line).map_err(|source| FrameError::Malformed {
                line: self.line_number,
                source,
            })?;

        let hand = match record.hand {
            Some(points) => Some(LandmarkFrame::try_from(points).map_err(|e| {
                FrameError::InvalidHand {
                    line: self.line_number,
                    count: e.count,
                }
            })?),
            None => None,
        };

        let captured_at = record
            .timestamp_ms
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .unwrap_or_else(Utc::now);

        Ok(Observation::new(hand, captured_at))
    }
}

#[async_trait]
impl<T: AsyncRead + Unpin + Send> FrameReader for JsonLinesReader<T> {
    async fn read(&mut self) -> Result<Option<Observation>, FrameError> {
        loop {
            self.line.clear();
            let bytes_read = self
                .reader
                .read_until(NEWLINE, &mut self.line)
                .await
                .map_err(FrameError::Read)?;
            if bytes_read == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            // The whole line is consumed either way, so a bad encoding only
            // costs this record.
            let text = std::str::from_utf8(&self.line).map_err(|source| {
                FrameError::InvalidEncoding {
                    line: self.line_number,
                    source,
                }
            })?;
            let trimmed = text.trim();
            if trimmed.is_empty() {
                continue;
            }
            return self.decode(trimmed).map(Some);
        }
    }
}

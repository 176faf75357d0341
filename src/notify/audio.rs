// src/notify/audio.rs

//! Local audio alert playback.

use std::io::Cursor;

use async_trait::async_trait;
use rodio::{Decoder, OutputStream, Sink};

use super::AlertChannel;
use crate::error::{AppError, Result};

/// Embedded alert tone (16-bit mono WAV).
static ALERT_WAV: &[u8] = include_bytes!("../../assets/alert.wav");

/// Notification channel that plays the alert tone on the default output
/// device.
pub struct AudioChannel;

#[async_trait]
impl AlertChannel for AudioChannel {
    fn name(&self) -> &'static str {
        "audio"
    }

    async fn send(&self, _note: &str) -> Result<()> {
        play_alert().await
    }
}

/// Play the embedded alert tone. The returned future completes only after
/// playback finishes; the decode and playback run on the blocking pool.
pub async fn play_alert() -> Result<()> {
    tokio::task::spawn_blocking(play_alert_sync)
        .await
        .map_err(AppError::audio)?
}

fn play_alert_sync() -> Result<()> {
    let (_stream, handle) = OutputStream::try_default().map_err(AppError::audio)?;
    let sink = Sink::try_new(&handle).map_err(AppError::audio)?;
    let source = Decoder::new(Cursor::new(ALERT_WAV)).map_err(AppError::audio)?;

    sink.append(source);
    sink.sleep_until_end();
    Ok(())
}

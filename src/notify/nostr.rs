// src/notify/nostr.rs

//! Encrypted direct-message notifications over nostr relays.

use async_trait::async_trait;
use nostr_sdk::nips::nip04;
use nostr_sdk::prelude::*;

use super::AlertChannel;
use crate::error::{AppError, Result};
use crate::models::NostrConfig;

/// Notification channel that delivers NIP-04 encrypted direct messages.
pub struct NostrChannel {
    keys: Keys,
    recipient: PublicKey,
    relays: Vec<String>,
}

impl NostrChannel {
    pub fn new(config: &NostrConfig) -> Result<Self> {
        let keys = Keys::parse(&config.sender_key).map_err(AppError::nostr)?;
        let recipient = PublicKey::from_hex(&config.recipient_key).map_err(AppError::nostr)?;

        Ok(Self {
            keys,
            recipient,
            relays: config.relays.clone(),
        })
    }

    /// Build the signed kind-4 event carrying the encrypted note.
    fn build_event(&self, note: &str) -> Result<Event> {
        let content = nip04::encrypt(self.keys.secret_key(), &self.recipient, note)
            .map_err(AppError::nostr)?;

        EventBuilder::new(
            Kind::EncryptedDirectMessage,
            content,
            [Tag::public_key(self.recipient)],
        )
        .to_event(&self.keys)
        .map_err(AppError::nostr)
    }

    /// Publish one event to a single relay over its own connection.
    async fn publish_to(&self, relay: &str, event: Event) -> Result<()> {
        let client = Client::new(&self.keys);
        client.add_relay(relay).await.map_err(AppError::nostr)?;
        client.connect().await;

        let outcome = client.send_event(event).await.map_err(AppError::nostr);
        let _ = client.disconnect().await;

        outcome.map(|_| ())
    }
}

#[async_trait]
impl AlertChannel for NostrChannel {
    fn name(&self) -> &'static str {
        "nostr"
    }

    /// Encrypt and sign once, then publish relay-by-relay. A failing relay
    /// is logged and does not block delivery to the remaining relays.
    async fn send(&self, note: &str) -> Result<()> {
        let event = self.build_event(note)?;

        for relay in &self.relays {
            if let Err(e) = self.publish_to(relay, event.clone()).await {
                log::warn!("Relay {relay} rejected the note: {e}");
            }
        }
        Ok(())
    }
}

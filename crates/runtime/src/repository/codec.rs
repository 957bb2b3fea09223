//! Save blob encoding.
//!
//! Layout:
//!
//! ```text
//! +-------+---------+----------------+----------------------------+
//! | magic | version | sha256(payload)| payload                    |
//! | 4 B   | u16 LE  | 32 B           | zlib(bincode(GameState))   |
//! +-------+---------+----------------+----------------------------+
//! ```
//!
//! Decoding checks each layer in order, so a foreign file, a save from another
//! format version, a damaged payload and a structurally inconsistent state all
//! fail with distinct errors.

use std::io::{Read, Write};

use bincode::Options;
use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use game_core::GameState;
use sha2::{Digest, Sha256};
use tracing::debug;

use super::{RepositoryError, Result};

const MAGIC: [u8; 4] = *b"DGSV";
const DIGEST_LEN: usize = 32;
const HEADER_LEN: usize = MAGIC.len() + 2 + DIGEST_LEN;

/// Upper bound on the decompressed state, guarding against zip bombs.
const MAX_STATE_BYTES: u64 = 64 * 1024 * 1024;

/// Converts a [`GameState`] to and from the on-disk save format.
pub struct SaveCodec;

impl SaveCodec {
    pub const VERSION: u16 = 2;

    pub fn encode(state: &GameState) -> Result<Vec<u8>> {
        let raw = bincode_options()
            .serialize(state)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&raw)?;
        let payload = encoder.finish()?;
        let digest = Sha256::digest(&payload);

        let mut blob = Vec::with_capacity(HEADER_LEN + payload.len());
        blob.extend_from_slice(&MAGIC);
        blob.extend_from_slice(&Self::VERSION.to_le_bytes());
        blob.extend_from_slice(&digest);
        blob.extend_from_slice(&payload);

        debug!(
            raw = raw.len(),
            compressed = payload.len(),
            digest = %hex::encode(&digest[..8]),
            "encoded save"
        );
        Ok(blob)
    }

    /// Decodes and validates a save blob.
    ///
    /// No part of the state is returned unless every check passes.
    pub fn decode(blob: &[u8]) -> Result<GameState> {
        if blob.len() < HEADER_LEN {
            return Err(RepositoryError::CorruptedData(format!(
                "save is {} bytes, shorter than its {HEADER_LEN}-byte header",
                blob.len()
            )));
        }
        let (magic, rest) = blob.split_at(MAGIC.len());
        if magic != MAGIC {
            return Err(RepositoryError::CorruptedData(
                "not a save file (bad magic)".into(),
            ));
        }
        let (version, rest) = rest.split_at(2);
        let version = u16::from_le_bytes([version[0], version[1]]);
        if version != Self::VERSION {
            return Err(RepositoryError::IncompatibleVersion {
                found: version,
                expected: Self::VERSION,
            });
        }
        let (digest, payload) = rest.split_at(DIGEST_LEN);
        if Sha256::digest(payload).as_slice() != digest {
            return Err(RepositoryError::CorruptedData("checksum mismatch".into()));
        }

        let mut raw = Vec::new();
        ZlibDecoder::new(payload)
            .take(MAX_STATE_BYTES + 1)
            .read_to_end(&mut raw)
            .map_err(|e| RepositoryError::CorruptedData(format!("decompression failed: {e}")))?;
        if raw.len() as u64 > MAX_STATE_BYTES {
            return Err(RepositoryError::CorruptedData(
                "decompressed state exceeds size limit".into(),
            ));
        }

        let state: GameState = bincode_options()
            .deserialize(&raw)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        state.validate()?;
        Ok(state)
    }
}

fn bincode_options() -> impl Options {
    bincode::DefaultOptions::new().with_limit(MAX_STATE_BYTES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{GameConfig, GenerationParams, new_game};

    use crate::oracle::OracleManager;

    fn sample_state() -> GameState {
        let oracles = OracleManager::standard();
        let params = GenerationParams {
            map_width: 50,
            map_height: 40,
            max_rooms: 10,
            room_min_size: 4,
            room_max_size: 8,
            viewport_width: 0,
            viewport_height: 0,
        };
        new_game(oracles.as_game_env(GameConfig::default()), params, 42).unwrap()
    }

    #[test]
    fn round_trip_preserves_the_whole_state() {
        let state = sample_state();
        let blob = SaveCodec::encode(&state).unwrap();
        assert_eq!(&blob[..4], b"DGSV");

        let loaded = SaveCodec::decode(&blob).unwrap();
        assert_eq!(loaded.map.tiles(), state.map.tiles());
        assert_eq!(loaded.map.visible(), state.map.visible());
        assert_eq!(loaded.map.explored(), state.map.explored());
        assert_eq!(loaded.map.entities(), state.map.entities());
        assert_eq!(loaded.messages, state.messages);
        assert_eq!(loaded, state);
    }

    #[test]
    fn foreign_bytes_are_corrupt() {
        let err = SaveCodec::decode(b"definitely not a save file at all, just some text").unwrap_err();
        assert!(matches!(err, RepositoryError::CorruptedData(_)));
        assert!(err.is_corrupt());

        let err = SaveCodec::decode(b"DG").unwrap_err();
        assert!(matches!(err, RepositoryError::CorruptedData(_)));
    }

    #[test]
    fn other_versions_are_incompatible() {
        let mut blob = SaveCodec::encode(&sample_state()).unwrap();
        blob[4..6].copy_from_slice(&7u16.to_le_bytes());

        assert!(matches!(
            SaveCodec::decode(&blob),
            Err(RepositoryError::IncompatibleVersion {
                found: 7,
                expected: SaveCodec::VERSION,
            })
        ));
    }

    #[test]
    fn flipped_payload_byte_fails_the_checksum() {
        let mut blob = SaveCodec::encode(&sample_state()).unwrap();
        let last = blob.len() - 1;
        blob[last] ^= 0xff;

        match SaveCodec::decode(&blob) {
            Err(RepositoryError::CorruptedData(reason)) => assert_eq!(reason, "checksum mismatch"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn inconsistent_state_is_rejected_after_decoding() {
        let mut state = sample_state();
        state.map.remove_entity(game_core::EntityId::PLAYER);
        let blob = SaveCodec::encode(&state).unwrap();

        assert!(matches!(
            SaveCodec::decode(&blob),
            Err(RepositoryError::InvalidState(game_core::StateError::MissingPlayer))
        ));
    }
}

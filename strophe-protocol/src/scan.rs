//! Face-scan service records
//!
//! The scan service receives the letter of the face the user was asked to
//! scan plus an image, and answers with one of:
//!
//! - success: `ok = true`, nine tile letters, the detected center letter
//! - failure: `ok = false`, a human-readable error

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::{message, Message};

/// Tiles on one face
pub const FACE_TILES: usize = 9;

/// Index of the center tile in a row-major face
const CENTER_TILE: usize = 4;

/// Raw reply from the face-scan service
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceScanReply {
    /// Whether the scan succeeded
    pub ok: bool,
    /// Detected tile letters, row-major (success only)
    pub tiles: Option<Vec<char, FACE_TILES>>,
    /// Center letter the service detected (success only)
    pub detected_center: Option<char>,
    /// Human-readable reason (failure only)
    pub error: Option<Message>,
}

impl FaceScanReply {
    /// Create a success record
    pub fn success(tiles: [char; FACE_TILES], detected_center: char) -> Self {
        let mut list = Vec::new();
        for tile in tiles {
            // Capacity equals FACE_TILES
            let _ = list.push(tile);
        }
        Self {
            ok: true,
            tiles: Some(list),
            detected_center: Some(detected_center),
            error: None,
        }
    }

    /// Create a success record whose detected center is the middle tile
    pub fn from_tiles(tiles: [char; FACE_TILES]) -> Self {
        Self::success(tiles, tiles[CENTER_TILE])
    }

    /// Create a failure record
    pub fn failure(reason: &str) -> Self {
        Self {
            ok: false,
            tiles: None,
            detected_center: None,
            error: Some(message(reason)),
        }
    }

    /// Convert into the validated success payload
    pub fn into_result(self) -> Result<FaceScan, ServiceError> {
        if !self.ok {
            let reason = self.error.unwrap_or_else(|| message("Face scan failed"));
            return Err(ServiceError::Rejected(reason));
        }

        let tiles = self.tiles.ok_or(ServiceError::Malformed)?;
        let detected_center = self.detected_center.ok_or(ServiceError::Malformed)?;
        let tiles: [char; FACE_TILES] = tiles
            .as_slice()
            .try_into()
            .map_err(|_| ServiceError::Malformed)?;

        Ok(FaceScan {
            tiles,
            detected_center,
        })
    }
}

/// Successful scan of one face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceScan {
    /// Tile letters, row-major
    pub tiles: [char; FACE_TILES],
    /// Center letter the service detected
    pub detected_center: char,
}

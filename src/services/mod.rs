//! Service layer for palette logic.
//!
//! This module contains the palette store, the share-token codec with its
//! harmony generator, and the share-state port the store reads and writes
//! through.

pub mod codec;
pub mod harmony;
pub mod share;
pub mod store;

// Re-export commonly used types
pub use codec::PaletteCodec;
pub use harmony::{HarmonyKind, HARMONY_SIZE};
pub use share::{MemoryShareState, ShareState, ShareUrl, SHARE_PARAM};
pub use store::{PaletteIntent, PaletteStore};

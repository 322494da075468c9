//! Seed derivation.
//!
//! Batch expansion gives every item its own random stream. Item seeds are
//! derived from the batch's base seed with BLAKE3 so that neighbouring
//! indices do not produce correlated PCG32 streams.

/// Derives a seed for a specific batch item from the base seed.
///
/// ```text
/// item_seed = truncate_u32(BLAKE3(base_seed || item_index))
/// ```
///
/// # Arguments
/// * `base_seed` - The batch's base seed (u32)
/// * `item_index` - The 0-indexed item number
///
/// # Returns
/// * A derived u32 seed for the item
///
/// # Example
/// ```
/// use patfill_spec::hash::derive_item_seed;
///
/// let base = 42u32;
/// assert_ne!(derive_item_seed(base, 0), derive_item_seed(base, 1));
/// ```
pub fn derive_item_seed(base_seed: u32, item_index: u32) -> u32 {
    // Concatenate base_seed and item_index as little-endian bytes
    let mut input = [0u8; 8];
    input[..4].copy_from_slice(&base_seed.to_le_bytes());
    input[4..].copy_from_slice(&item_index.to_le_bytes());

    let hash = blake3::hash(&input);
    truncate_u32(hash.as_bytes())
}

/// First four bytes of a digest, little-endian.
fn truncate_u32(bytes: &[u8; 32]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

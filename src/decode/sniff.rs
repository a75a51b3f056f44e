//! Magic-byte format sniffing.

/// The first three bytes of every GIF file ("GIF").
const GIF_SIGNATURE: [u8; 3] = [0x47, 0x49, 0x46];

/// Check whether a buffer starts with the animated (GIF) signature.
///
/// Buffers shorter than the signature are not an error, just not a match.
#[must_use]
pub fn is_animated_format(data: &[u8]) -> bool {
    data.len() >= GIF_SIGNATURE.len() && data[..GIF_SIGNATURE.len()] == GIF_SIGNATURE
}

//! Repeating-XOR obfuscation for the on-disk serial blob.
//!
//! This is tamper discouragement, not encryption: the keystream ships in
//! the binary and the transform is involutive. The actual integrity
//! property lives in the serial itself, which re-validates against the
//! current identity on every read.

/// Fixed keystream the blob bytes are XORed against.
const KEYSTREAM: [u8; 16] = [
    0x5A, 0xC3, 0x19, 0x8E, 0x27, 0xF0, 0x63, 0xB4, 0x0D, 0x91, 0x7C, 0xE5, 0x38, 0xA2, 0x4F,
    0xD6,
];

/// Obfuscates plaintext bytes for storage.
#[must_use]
pub fn obfuscate(data: &[u8]) -> Vec<u8> {
    data.iter()
        .zip(KEYSTREAM.iter().cycle())
        .map(|(byte, key)| byte ^ key)
        .collect()
}

/// Recovers plaintext from an obfuscated blob. Involutive with
/// [`obfuscate`].
#[must_use]
pub fn deobfuscate(data: &[u8]) -> Vec<u8> {
    obfuscate(data)
}

//! Modulo-100 checksum over a frame's non-checksum prefix
//!
//! The checksum covers `TYPE-LEN-PAYLOAD-`, including all three separator
//! hyphens, and is the sum of character code points modulo 100 rendered as
//! exactly two zero-padded decimal digits. `"E-02-Hi-"` checksums to `"79"`.

use crate::constants::CHECKSUM_MODULUS;
use alloc::format;
use alloc::string::String;

/// Compute the two-digit checksum of a frame prefix
///
/// Pure and deterministic: the same prefix always yields the same digits.
pub fn compute_checksum(prefix: &str) -> String {
    let sum: u64 = prefix.chars().map(|c| c as u64).sum();
    format!("{:02}", sum % CHECKSUM_MODULUS)
}

/// Verify a claimed checksum against a recomputed one
///
/// Comparison is exact string equality; a mismatch is a protocol violation
/// to be reported by the caller, never silently corrected.
pub fn verify_checksum(prefix: &str, claimed: &str) -> bool {
    compute_checksum(prefix) == claimed
}

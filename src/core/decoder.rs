//! Bytes → text for ALOG exports.
//!
//! The export tool writes UTF-16 on most locales and UTF-8 on a few, so the
//! decoder tries UTF-16 first and falls back to UTF-8. Nothing else is attempted.

use crate::errors::{AppError, AppResult};
use std::collections::HashMap;

const BOM_UTF16_LE: [u8; 2] = [0xFF, 0xFE];
const BOM_UTF16_BE: [u8; 2] = [0xFE, 0xFF];
const BOM_UTF8: [u8; 3] = [0xEF, 0xBB, 0xBF];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ByteOrder {
    Little,
    Big,
}

/// Decode an upload: UTF-16 (BOM or NUL-pattern detected) first, then UTF-8.
pub fn decode(bytes: &[u8]) -> AppResult<String> {
    let utf16_err = match decode_utf16(bytes) {
        Some(Ok(text)) => {
            tracing::debug!(bytes = bytes.len(), "decoded as UTF-16");
            return Ok(text);
        }
        Some(Err(e)) => Some(e),
        None => None,
    };

    let body = bytes.strip_prefix(&BOM_UTF8).unwrap_or(bytes);
    match std::str::from_utf8(body) {
        Ok(text) => {
            tracing::debug!(bytes = bytes.len(), "decoded as UTF-8");
            Ok(text.to_string())
        }
        Err(e) => {
            let reason = match utf16_err {
                Some(u16e) => format!("not UTF-16 ({u16e}) and not UTF-8 ({e})"),
                None => format!("not UTF-16 and not UTF-8 ({e})"),
            };
            Err(AppError::Decode(reason))
        }
    }
}

/// `None` when the bytes do not look like UTF-16 at all,
/// `Some(Err)` when they do but the code units are invalid.
fn decode_utf16(bytes: &[u8]) -> Option<Result<String, String>> {
    let (order, body) = if let Some(rest) = bytes.strip_prefix(&BOM_UTF16_LE) {
        (ByteOrder::Little, rest)
    } else if let Some(rest) = bytes.strip_prefix(&BOM_UTF16_BE) {
        (ByteOrder::Big, rest)
    } else {
        (sniff_byte_order(bytes)?, bytes)
    };

    if body.len() % 2 != 0 {
        return Some(Err("odd number of bytes".to_string()));
    }

    let units = body.chunks_exact(2).map(|pair| match order {
        ByteOrder::Little => u16::from_le_bytes([pair[0], pair[1]]),
        ByteOrder::Big => u16::from_be_bytes([pair[0], pair[1]]),
    });

    let decoded: Result<String, _> = char::decode_utf16(units).collect();
    Some(decoded.map_err(|e| e.to_string()))
}

/// Share of code units that must carry a NUL half before BOM-less bytes are
/// taken for UTF-16. ALOG text is mostly ASCII, so real UTF-16 sits near 1.
const MIN_NUL_UNIT_RATIO: usize = 4; // at least 1 in 4

/// BOM-less UTF-16 is only assumed when one byte parity is clearly NUL-heavy.
/// Plain ASCII would otherwise pair up into valid but meaningless code units,
/// and a few stray NULs in a UTF-8 file must not trigger it either.
fn sniff_byte_order(bytes: &[u8]) -> Option<ByteOrder> {
    if bytes.is_empty() || bytes.len() % 2 != 0 {
        return None;
    }

    let (mut even_nuls, mut odd_nuls) = (0usize, 0usize);
    for (i, b) in bytes.iter().enumerate() {
        if *b == 0 {
            if i % 2 == 0 {
                even_nuls += 1;
            } else {
                odd_nuls += 1;
            }
        }
    }

    let units = bytes.len() / 2;
    let (order, dominant) = if odd_nuls >= even_nuls {
        (ByteOrder::Little, odd_nuls)
    } else {
        (ByteOrder::Big, even_nuls)
    };

    if dominant == 0 || dominant * MIN_NUL_UNIT_RATIO < units {
        tracing::trace!(units, even_nuls, odd_nuls, "no UTF-16 NUL pattern");
        return None;
    }

    Some(order)
}

/// Content hash of an upload, used as the memoization key.
pub fn content_hash(bytes: &[u8]) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(bytes);
    hasher.finalize().to_hex().to_string()
}

/// Memoizes `decode` by content hash. Purely an optimization: a miss decodes fresh.
#[derive(Debug, Default)]
pub struct DecodeCache {
    entries: HashMap<String, String>,
}

impl DecodeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decode(&mut self, bytes: &[u8]) -> AppResult<String> {
        let key = content_hash(bytes);

        if let Some(text) = self.entries.get(&key) {
            tracing::debug!(hash = %key, "decode cache hit");
            return Ok(text.clone());
        }

        let text = decode(bytes)?;
        self.entries.insert(key, text.clone());
        Ok(text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

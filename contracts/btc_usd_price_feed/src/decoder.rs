//! Decoding of raw oracle results.
//!
//! Results arrive CBOR-encoded. A bare unsigned integer is a price. An error
//! is tag 39 wrapping `[code, message]`. Anything else is passed through as
//! the message verbatim, so decoding always yields a `DecodedResult`.

use minicbor::Decoder;
use soroban_sdk::Bytes;

use crate::types::DecodedResult;

const ERROR_TAG: u64 = 39;

/// Results longer than this are not parsed and go straight to the fallback.
pub const MAX_RESULT_LEN: usize = 1024;

fn decode_value(input: &[u8]) -> Option<u64> {
    let mut d = Decoder::new(input);
    let value = d.u64().ok()?;
    (d.position() == input.len()).then_some(value)
}

fn decode_error_message(input: &[u8]) -> Option<&[u8]> {
    let mut d = Decoder::new(input);
    if d.tag().ok()?.as_u64() != ERROR_TAG {
        return None;
    }
    if d.array().ok()? != Some(2) {
        return None;
    }
    // code is not surfaced
    d.u64().ok()?;
    let message = d.str().ok()?;
    (d.position() == input.len()).then_some(message.as_bytes())
}

pub fn decode(raw: &Bytes) -> DecodedResult {
    let len = raw.len() as usize;
    if len > MAX_RESULT_LEN {
        return DecodedResult::Failure(raw.clone());
    }
    let mut buf = [0u8; MAX_RESULT_LEN];
    let input = &mut buf[..len];
    raw.copy_into_slice(input);
    let input = &*input;

    if let Some(value) = decode_value(input) {
        return DecodedResult::Value(value);
    }
    match decode_error_message(input) {
        Some(message) => DecodedResult::Failure(Bytes::from_slice(raw.env(), message)),
        None => DecodedResult::Failure(raw.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    fn bytes(env: &Env, data: &[u8]) -> Bytes {
        Bytes::from_slice(env, data)
    }

    fn error_envelope(env: &Env, code: u8, message: &[u8]) -> Bytes {
        let mut raw = bytes(env, &[0xd8, 0x27, 0x82, code, 0x60 | message.len() as u8]);
        raw.extend_from_slice(message);
        raw
    }

    #[test]
    fn test_small_and_wide_integers() {
        let env = Env::default();
        assert_eq!(decode(&bytes(&env, &[0x17])), DecodedResult::Value(23));
        assert_eq!(decode(&bytes(&env, &[0x18, 0xff])), DecodedResult::Value(255));
        assert_eq!(
            decode(&bytes(&env, &[0x19, 0xfd, 0xe8])),
            DecodedResult::Value(65_000)
        );
        assert_eq!(
            decode(&bytes(&env, &[0x1a, 0x00, 0x00, 0xfd, 0xe8])),
            DecodedResult::Value(65_000)
        );
        assert_eq!(
            decode(&bytes(&env, &[0x1b, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff])),
            DecodedResult::Value(u64::MAX)
        );
    }

    #[test]
    fn test_error_envelope_yields_message() {
        let env = Env::default();
        let raw = error_envelope(&env, 0x11, b"HTTP error");
        assert_eq!(
            decode(&raw),
            DecodedResult::Failure(bytes(&env, b"HTTP error"))
        );
    }

    #[test]
    fn test_error_code_with_extended_width() {
        let env = Env::default();
        let mut raw = bytes(&env, &[0xd8, 0x27, 0x82, 0x18, 0xe0, 0x65]);
        raw.extend_from_slice(b"stale");
        assert_eq!(decode(&raw), DecodedResult::Failure(bytes(&env, b"stale")));
    }

    #[test]
    fn test_unparseable_result_is_returned_verbatim() {
        let env = Env::default();
        let raw = bytes(&env, b"not cbor at all");
        assert_eq!(decode(&raw), DecodedResult::Failure(raw.clone()));
    }

    #[test]
    fn test_truncated_error_falls_back_to_raw() {
        let env = Env::default();
        // text header announces 10 bytes, only 1 follows
        let raw = bytes(&env, &[0xd8, 0x27, 0x82, 0x01, 0x6a, b'H']);
        assert_eq!(decode(&raw), DecodedResult::Failure(raw.clone()));
    }

    #[test]
    fn test_wrong_tag_falls_back_to_raw() {
        let env = Env::default();
        let mut raw = bytes(&env, &[0xd8, 0x28, 0x82, 0x01, 0x62]);
        raw.extend_from_slice(b"no");
        assert_eq!(decode(&raw), DecodedResult::Failure(raw.clone()));
    }

    #[test]
    fn test_error_array_must_have_two_items() {
        let env = Env::default();
        let mut raw = bytes(&env, &[0xd8, 0x27, 0x83, 0x01, 0x62]);
        raw.extend_from_slice(b"no");
        raw.push_back(0x00);
        assert_eq!(decode(&raw), DecodedResult::Failure(raw.clone()));
    }

    #[test]
    fn test_trailing_bytes_are_malformed() {
        let env = Env::default();
        let raw = bytes(&env, &[0x19, 0xfd, 0xe8, 0x00]);
        assert_eq!(decode(&raw), DecodedResult::Failure(raw.clone()));

        let mut err = error_envelope(&env, 0x01, b"late");
        err.push_back(0xff);
        assert_eq!(decode(&err), DecodedResult::Failure(err.clone()));
    }

    #[test]
    fn test_non_integer_success_types_are_rejected() {
        let env = Env::default();
        // negative integer -1
        let negative = bytes(&env, &[0x20]);
        assert_eq!(decode(&negative), DecodedResult::Failure(negative.clone()));
        // indefinite-length array
        let indefinite = bytes(&env, &[0x9f, 0x01, 0xff]);
        assert_eq!(
            decode(&indefinite),
            DecodedResult::Failure(indefinite.clone())
        );
    }

    #[test]
    fn test_long_message_with_two_byte_length() {
        let env = Env::default();
        let message = [b'x'; 300];
        let mut raw = bytes(&env, &[0xd8, 0x27, 0x82, 0x01, 0x79, 0x01, 0x2c]);
        raw.extend_from_slice(&message);
        assert_eq!(decode(&raw), DecodedResult::Failure(bytes(&env, &message)));
    }

    #[test]
    fn test_oversized_result_is_returned_verbatim() {
        let env = Env::default();
        let message = [b'x'; MAX_RESULT_LEN];
        let mut raw = bytes(&env, &[0xd8, 0x27, 0x82, 0x01, 0x79, 0x04, 0x00]);
        raw.extend_from_slice(&message);
        assert_eq!(decode(&raw), DecodedResult::Failure(raw.clone()));
    }

    #[test]
    fn test_invalid_utf8_message_falls_back_to_raw() {
        let env = Env::default();
        let raw = bytes(&env, &[0xd8, 0x27, 0x82, 0x01, 0x62, 0xff, 0xfe]);
        assert_eq!(decode(&raw), DecodedResult::Failure(raw.clone()));
    }

    #[test]
    fn test_empty_result() {
        let env = Env::default();
        let raw = Bytes::new(&env);
        assert_eq!(decode(&raw), DecodedResult::Failure(raw.clone()));
    }

    #[test]
    fn test_fallback_keeps_invalid_utf8() {
        let env = Env::default();
        let raw = bytes(&env, &[0xff, 0xfe, 0x00, 0x80]);
        assert_eq!(decode(&raw), DecodedResult::Failure(raw.clone()));
    }
}

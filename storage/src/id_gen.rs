use base64::{prelude::BASE64_URL_SAFE_NO_PAD, Engine};
use model::FieldId;
use rand::RngCore;

pub const DEFAULT_ID_LENGTH: usize = 8;
pub const MIN_ID_LENGTH: usize = 4;
pub const MAX_ID_LENGTH: usize = 64;

/// Generates a URL-safe id of `length` characters from random bytes.
pub fn generate(rng: &mut impl RngCore, length: usize) -> FieldId {
    let data = generate_data(rng, encoded_byte_len(length));
    let mut string = String::with_capacity(length + 4);
    BASE64_URL_SAFE_NO_PAD.encode_string(data, &mut string);
    string.truncate(length);
    FieldId::new(string)
}

/// Random bytes needed so the encoding yields at least `length` characters.
fn encoded_byte_len(length: usize) -> usize {
    length.div_ceil(4) * 3
}

fn generate_data(rng: &mut impl RngCore, len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    rng.fill_bytes(&mut bytes);
    bytes
}

#![no_main]

use libfuzzer_sys::fuzz_target;
use libwamap::{LEVEL_CHUNK_TYPES, copy_level_chunk, find_chunk};

fuzz_target!(|data: (&[u8], &[u8])| {
    let (png, template) = data;
    let spliced = copy_level_chunk(png.to_vec(), template);
    match find_chunk(template, &LEVEL_CHUNK_TYPES) {
        Some(chunk) => assert_eq!(spliced.len(), png.len() + chunk.len()),
        None => assert_eq!(spliced, png),
    }
});

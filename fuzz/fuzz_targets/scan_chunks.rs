#![no_main]

use libfuzzer_sys::fuzz_target;
use libwamap::{LEVEL_CHUNK_TYPES, chunks, find_chunk};

fuzz_target!(|data: &[u8]| {
    let mut end = 8;
    for span in chunks(data) {
        assert_eq!(span.offset(), end);
        end = span.offset() + span.as_bytes().len();
        assert!(end <= data.len());
    }
    if let Some(found) = find_chunk(data, &LEVEL_CHUNK_TYPES) {
        assert!(
            LEVEL_CHUNK_TYPES
                .iter()
                .any(|ty| found[4..8].eq_ignore_ascii_case(&ty.0))
        );
    }
});

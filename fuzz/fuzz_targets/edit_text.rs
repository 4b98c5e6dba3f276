#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    jsonset_fuzz::fuzz_edit_text(data);
});

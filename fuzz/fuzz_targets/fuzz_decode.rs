#![no_main]

use deltaxor::Series;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes are a valid (if meaningless) stream: the format is
    // unframed, so decoding must terminate with a short read and never
    // panic.
    let mut series = Series::from_parts(data.to_vec(), data.len() as u64 * 8);
    while series.read().is_ok() {}
});

#![no_main]

use deltaxor::Series;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Bytes are interpreted as (ts_step: u16, value_bits: u64) tuples;
    // steps keep timestamps monotonic so the delta-of-delta stays inside
    // the widest bucket.
    let mut samples = Vec::new();
    let mut ts = 1_440_583_200u64;
    for chunk in data.chunks(10) {
        if chunk.len() < 10 {
            break;
        }
        let step = u64::from(u16::from_le_bytes([chunk[0], chunk[1]]));
        let bits = u64::from_le_bytes(chunk[2..10].try_into().unwrap());
        ts = ts.saturating_add(step);
        samples.push((ts, f64::from_bits(bits)));
    }

    let mut series = Series::new();
    for &(ts, value) in &samples {
        series.append(ts, value);
    }

    // Property 1: the byte buffer length tracks the bit count.
    assert_eq!(
        series.num_bytes() as u64,
        series.num_bits().div_ceil(8),
        "byte length out of step with bit count"
    );

    // Property 2: every sample reads back bit-exactly.
    for &(ts, value) in &samples {
        let sample = series.read().expect("read failed before end of stream");
        assert_eq!(sample.ts, ts, "timestamp mismatch");
        assert_eq!(
            sample.value.to_bits(),
            value.to_bits(),
            "value bit pattern mismatch"
        );
    }

    // Property 3: the stream holds exactly the appended samples.
    assert!(series.read().is_err(), "read past end did not fail");
});

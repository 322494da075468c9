#![no_main]

use libfuzzer_sys::fuzz_target;
use patfill::expand_seeded;
use patfill_spec::ExpandOptions;

// Input layout: options JSON, a NUL byte, then the pattern.
fuzz_target!(|data: &[u8]| {
    let mut parts = data.splitn(2, |&b| b == 0);
    let options = parts
        .next()
        .and_then(|raw| std::str::from_utf8(raw).ok())
        .and_then(|json| ExpandOptions::from_json(json).ok())
        .unwrap_or_default();
    let Some(pattern) = parts.next().and_then(|raw| std::str::from_utf8(raw).ok()) else {
        return;
    };

    if let Ok(out) = expand_seeded(pattern, &options, 0) {
        assert_eq!(out.chars().count(), pattern.chars().count());
    }
});

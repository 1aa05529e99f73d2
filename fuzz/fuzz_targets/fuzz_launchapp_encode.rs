#![no_main]

use libfuzzer_sys::fuzz_target;
use nfclaunch_core::ndef::Framing;
use nfclaunch_core::{LaunchAppError, LaunchAppRequest};

const GUARD: u8 = 0xA5;

// Input layout: [capacity, flags, android_len, android..., windows...]
fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    let capacity = data[0] as usize * 2;
    let flags = data[1];
    let split = (data[2] as usize).min(data.len() - 3);
    let (android, windows) = data[3..].split_at(split);

    let request = LaunchAppRequest::new(
        (flags & 0x01 != 0).then_some(android),
        (flags & 0x02 != 0).then_some(windows),
    );
    let framing = if flags & 0x04 != 0 {
        Framing::Nlen
    } else {
        Framing::Raw
    };

    let mut buf = vec![GUARD; capacity + 16];
    match request.encode_with(framing, &mut buf[..capacity]) {
        Ok(written) => {
            assert!(written <= capacity);
            assert_eq!(Ok(written), request.encoded_len_with(framing));
        }
        Err(LaunchAppError::BufferTooSmall) => {
            assert!(buf[..capacity].iter().all(|&b| b == GUARD));
        }
        Err(_) => {}
    }
    assert!(buf[capacity..].iter().all(|&b| b == GUARD));
});

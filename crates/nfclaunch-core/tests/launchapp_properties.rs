use nfclaunch_core::launchapp::{ANDROID_RECORD_TYPE, WINDOWS_PLATFORM, WINDOWS_RECORD_TYPE};
use nfclaunch_core::{encode_launchapp_message, LaunchAppError, LaunchAppRequest};
use proptest::prelude::*;

/// Record as seen by a plain NDEF reader.
#[derive(Debug)]
struct ParsedRecord {
    header: u8,
    record_type: Vec<u8>,
    payload: Vec<u8>,
}

fn parse_message(mut data: &[u8]) -> Vec<ParsedRecord> {
    let mut out = Vec::new();
    while !data.is_empty() {
        let header = data[0];
        let type_len = data[1] as usize;
        let (payload_len, mut rest) = if header & 0x10 != 0 {
            (data[2] as usize, &data[3..])
        } else {
            let len = u32::from_be_bytes([data[2], data[3], data[4], data[5]]) as usize;
            (len, &data[6..])
        };
        let id_len = if header & 0x08 != 0 {
            let len = rest[0] as usize;
            rest = &rest[1..];
            len
        } else {
            0
        };
        let record_type = rest[..type_len].to_vec();
        let rest = &rest[type_len + id_len..];
        let payload = rest[..payload_len].to_vec();
        data = &rest[payload_len..];
        out.push(ParsedRecord {
            header,
            record_type,
            payload,
        });
    }
    out
}

/// Extracts the app id from a Windows LaunchApp payload.
fn windows_app_id(payload: &[u8]) -> &[u8] {
    assert_eq!(&payload[..2], &[0x00, 0x01]);
    let platform_len = payload[2] as usize;
    assert_eq!(&payload[3..3 + platform_len], WINDOWS_PLATFORM);
    let id_at = 3 + platform_len;
    let id_len = payload[id_at] as usize;
    let id = &payload[id_at + 1..id_at + 1 + id_len];
    assert_eq!(&payload[id_at + 1 + id_len..], &[0x00, 0x01, 0x20]);
    id
}

fn identifier() -> impl Strategy<Value = Option<Vec<u8>>> {
    prop::option::of(prop::collection::vec(any::<u8>(), 0..=255))
}

fn is_present(id: &Option<Vec<u8>>) -> bool {
    id.as_ref().is_some_and(|bytes| !bytes.is_empty())
}

proptest! {
    #[test]
    fn absent_identifiers_never_encode(capacity in 0usize..128) {
        let mut buf = vec![0x33u8; capacity];
        let mut len = capacity;
        let err = encode_launchapp_message(None, Some(&[]), &mut buf, &mut len).unwrap_err();
        prop_assert_eq!(err, LaunchAppError::InvalidArgument);
        prop_assert_eq!(len, capacity);
        prop_assert!(buf.iter().all(|&b| b == 0x33));
    }

    #[test]
    fn records_roundtrip_in_platform_order(android in identifier(), windows in identifier()) {
        prop_assume!(is_present(&android) || is_present(&windows));
        let mut buf = vec![0u8; 1024];
        let mut len = buf.len();
        encode_launchapp_message(android.as_deref(), windows.as_deref(), &mut buf, &mut len).unwrap();

        let records = parse_message(&buf[..len]);
        let mut records = records.iter();
        if is_present(&android) {
            let rec = records.next().unwrap();
            prop_assert_eq!(rec.header & 0x07, 0x04);
            prop_assert_eq!(rec.record_type.as_slice(), ANDROID_RECORD_TYPE);
            prop_assert_eq!(Some(&rec.payload), android.as_ref());
        }
        if is_present(&windows) {
            let rec = records.next().unwrap();
            prop_assert_eq!(rec.header & 0x07, 0x03);
            prop_assert_eq!(rec.record_type.as_slice(), WINDOWS_RECORD_TYPE);
            prop_assert_eq!(windows_app_id(&rec.payload), windows.as_deref().unwrap());
        }
        prop_assert!(records.next().is_none());
    }

    #[test]
    fn capacity_is_never_exceeded(
        android in identifier(),
        windows in identifier(),
        capacity in 0usize..600,
    ) {
        prop_assume!(is_present(&android) || is_present(&windows));
        let request = LaunchAppRequest::new(android.as_deref(), windows.as_deref());
        let needed = request.encoded_len().unwrap();

        // Guard bytes past the declared capacity must survive.
        let mut buf = vec![0xEEu8; capacity + 8];
        let mut len = capacity;
        let result = encode_launchapp_message(android.as_deref(), windows.as_deref(), &mut buf, &mut len);
        if needed > capacity {
            prop_assert_eq!(result.unwrap_err(), LaunchAppError::BufferTooSmall);
            prop_assert_eq!(len, capacity);
            prop_assert!(buf.iter().all(|&b| b == 0xEE));
        } else {
            prop_assert!(result.is_ok());
            prop_assert_eq!(len, needed);
        }
        prop_assert!(buf[capacity..].iter().all(|&b| b == 0xEE));
    }

    #[test]
    fn encoding_is_deterministic(android in identifier(), windows in identifier()) {
        prop_assume!(is_present(&android) || is_present(&windows));
        let request = LaunchAppRequest::new(android.as_deref(), windows.as_deref());
        let mut first = vec![0u8; 600];
        let mut second = vec![0xFFu8; 600];
        let a = request.encode(&mut first).unwrap();
        let b = request.encode(&mut second).unwrap();
        prop_assert_eq!(&first[..a], &second[..b]);
    }
}

#[test]
fn message_flags_bracket_both_records() {
    let mut buf = [0u8; 128];
    let n = LaunchAppRequest::new(Some(b"com.example.app"), Some(b"{1234}"))
        .encode(&mut buf)
        .unwrap();
    let records = parse_message(&buf[..n]);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].header & 0xC0, 0x80);
    assert_eq!(records[1].header & 0xC0, 0x40);
}

use crate::ndef::{NdefRecord, Payload, Tnf};

/// External type of the Android Application Record (AAR).
pub const ANDROID_RECORD_TYPE: &[u8] = b"android.com:pkg";

/// Builds an Android Application Record for `package_name`.
///
/// The payload is the package name exactly as given, without a terminator.
/// Android honours an AAR anywhere in a message, so the record can also be
/// appended to messages built by hand.
pub const fn android_application_record(package_name: &[u8]) -> NdefRecord<'_> {
    NdefRecord::new(Tnf::External, ANDROID_RECORD_TYPE, Payload::Bytes(package_name))
}

#[cfg(test)]
mod tests {
    use super::{android_application_record, ANDROID_RECORD_TYPE};
    use crate::encoding::writer::Writer;
    use crate::ndef::Tnf;

    #[test]
    fn aar_uses_external_type() {
        let rec = android_application_record(b"com.example.app");
        assert_eq!(rec.tnf, Tnf::External);
        assert_eq!(rec.record_type, ANDROID_RECORD_TYPE);
        assert!(rec.id.is_empty());
        assert_eq!(rec.encoded_len().unwrap(), 33);
    }

    #[test]
    fn aar_payload_is_not_terminated() {
        let rec = android_application_record(b"a.b");
        let mut buf = [0u8; 32];
        let mut w = Writer::new(&mut buf);
        rec.encode(&mut w, true, true).unwrap();
        let out = w.as_written();
        assert_eq!(&out[..3], &[0xD4, 0x0F, 0x03]);
        assert_eq!(&out[3..18], ANDROID_RECORD_TYPE);
        assert_eq!(&out[18..], b"a.b");
    }
}

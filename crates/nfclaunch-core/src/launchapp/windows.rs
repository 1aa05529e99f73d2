use crate::encoding::writer::Writer;
use crate::ndef::{NdefRecord, Payload, PayloadEncode, Tnf};
use crate::EncodeError;

/// Absolute-URI type of the Windows LaunchApp record.
pub const WINDOWS_RECORD_TYPE: &[u8] = b"windows.com/LaunchApp";
/// Platform name carried in the LaunchApp payload.
pub const WINDOWS_PLATFORM: &[u8] = b"WindowsPhone";

const PLATFORM_COUNT: u16 = 1;
const PARAMETER_LEN: u16 = 1;
const EMPTY_PARAMETER: u8 = b' ';
// count(2) + platform len(1) + app id len(1) + parameter len(2) + parameter(1)
const FIXED_OVERHEAD: usize = 7;

/// Payload of a Windows LaunchApp record for one application id.
///
/// Layout: platform count, then one `(platform, app id)` pair with one-byte
/// length prefixes, then a single empty launch parameter. The app id is
/// usually a GUID string but is written as opaque bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowsLaunchAppPayload<'a> {
    app_id: &'a [u8],
}

impl<'a> WindowsLaunchAppPayload<'a> {
    pub const fn new(app_id: &'a [u8]) -> Self {
        Self { app_id }
    }

    pub const fn app_id(&self) -> &'a [u8] {
        self.app_id
    }
}

impl PayloadEncode for WindowsLaunchAppPayload<'_> {
    fn encoded_len(&self) -> usize {
        FIXED_OVERHEAD + WINDOWS_PLATFORM.len() + self.app_id.len()
    }

    fn encode(&self, w: &mut Writer<'_>) -> Result<(), EncodeError> {
        w.write_be_u16(PLATFORM_COUNT)?;
        w.write_u8_prefixed(WINDOWS_PLATFORM)?;
        w.write_u8_prefixed(self.app_id)?;
        w.write_be_u16(PARAMETER_LEN)?;
        w.write_u8(EMPTY_PARAMETER)
    }
}

/// Builds a Windows LaunchApp record around `payload`.
pub fn windows_launchapp_record<'a>(payload: &'a WindowsLaunchAppPayload<'_>) -> NdefRecord<'a> {
    NdefRecord::new(
        Tnf::AbsoluteUri,
        WINDOWS_RECORD_TYPE,
        Payload::Encoder(payload),
    )
}

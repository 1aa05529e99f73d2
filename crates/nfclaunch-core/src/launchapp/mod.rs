/// Android Application Record construction.
pub mod android;
/// Windows LaunchApp record construction.
pub mod windows;

pub use android::{android_application_record, ANDROID_RECORD_TYPE};
pub use windows::{
    windows_launchapp_record, WindowsLaunchAppPayload, WINDOWS_PLATFORM, WINDOWS_RECORD_TYPE,
};

use crate::ndef::{Framing, NdefMessage};
use crate::{EncodeError, LaunchAppError};

/// Upper bound on records in a launch-app message: one per platform.
pub const MAX_LAUNCH_RECORDS: usize = 2;
/// Longest identifier the one-byte length fields can describe.
pub const MAX_IDENTIFIER_LEN: usize = u8::MAX as usize;

/// Identifiers of the application to launch on each platform.
///
/// `None` and an empty slice both mean "skip this platform". At least one
/// identifier must be present for the request to be encodable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LaunchAppRequest<'a> {
    pub android_package_name: Option<&'a [u8]>,
    pub windows_app_id: Option<&'a [u8]>,
}

impl<'a> LaunchAppRequest<'a> {
    pub const fn new(
        android_package_name: Option<&'a [u8]>,
        windows_app_id: Option<&'a [u8]>,
    ) -> Self {
        Self {
            android_package_name,
            windows_app_id,
        }
    }

    pub const fn android(package_name: &'a [u8]) -> Self {
        Self::new(Some(package_name), None)
    }

    pub const fn windows(app_id: &'a [u8]) -> Self {
        Self::new(None, Some(app_id))
    }

    fn identifiers(&self) -> Result<(Option<&'a [u8]>, Option<&'a [u8]>), LaunchAppError> {
        let android = present(self.android_package_name)?;
        let windows = present(self.windows_app_id)?;
        if android.is_none() && windows.is_none() {
            return Err(LaunchAppError::InvalidArgument);
        }
        Ok((android, windows))
    }

    /// Builds the message (Android record first) and hands it to `f`.
    fn with_message<R>(
        &self,
        f: impl FnOnce(&NdefMessage<'_, MAX_LAUNCH_RECORDS>) -> Result<R, EncodeError>,
    ) -> Result<R, LaunchAppError> {
        let (android, windows) = self.identifiers()?;
        let windows_payload = windows.map(WindowsLaunchAppPayload::new);

        let mut msg = NdefMessage::<'_, MAX_LAUNCH_RECORDS>::new();
        if let Some(package_name) = android {
            msg.add_record(android_application_record(package_name))?;
        }
        if let Some(payload) = windows_payload.as_ref() {
            msg.add_record(windows_launchapp_record(payload))?;
        }
        Ok(f(&msg)?)
    }

    /// Size of the bare message this request encodes to.
    pub fn encoded_len(&self) -> Result<usize, LaunchAppError> {
        self.encoded_len_with(Framing::Raw)
    }

    pub fn encoded_len_with(&self, framing: Framing) -> Result<usize, LaunchAppError> {
        self.with_message(|msg| msg.encoded_len(framing))
    }

    /// Encodes the bare message into `buf`, returning the bytes written.
    pub fn encode(&self, buf: &mut [u8]) -> Result<usize, LaunchAppError> {
        self.encode_with(Framing::Raw, buf)
    }

    /// Encodes into `buf` with the given framing, returning the bytes written.
    ///
    /// Nothing is written unless the whole message fits.
    pub fn encode_with(&self, framing: Framing, buf: &mut [u8]) -> Result<usize, LaunchAppError> {
        self.with_message(|msg| msg.encode(framing, buf))
    }
}

fn present(identifier: Option<&[u8]>) -> Result<Option<&[u8]>, LaunchAppError> {
    match identifier {
        Some(bytes) if bytes.len() > MAX_IDENTIFIER_LEN => Err(LaunchAppError::InvalidArgument),
        Some(bytes) if !bytes.is_empty() => Ok(Some(bytes)),
        _ => Ok(None),
    }
}

/// Encodes a launch-app message into `buf` using in/out length semantics.
///
/// `len` holds the usable capacity on entry (clamped to `buf.len()`) and is
/// replaced by the number of bytes written on success. On any error `len` is
/// left as it was, so a caller can never mistake a failed encode for data.
pub fn encode_launchapp_message(
    android_package_name: Option<&[u8]>,
    windows_app_id: Option<&[u8]>,
    buf: &mut [u8],
    len: &mut usize,
) -> Result<(), LaunchAppError> {
    let capacity = (*len).min(buf.len());
    let written = LaunchAppRequest::new(android_package_name, windows_app_id)
        .encode(&mut buf[..capacity])?;
    *len = written;
    Ok(())
}

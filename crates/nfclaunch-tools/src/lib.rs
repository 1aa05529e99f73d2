use clap::ValueEnum;
use nfclaunch_core::launchapp::{
    android_application_record, windows_launchapp_record, WindowsLaunchAppPayload,
};
use nfclaunch_core::ndef::{Framing, NdefRecord, Tnf};
use nfclaunch_core::{LaunchAppError, LaunchAppRequest};
use serde::Serialize;
use std::fmt::Write as _;
use thiserror::Error;

/// Errors surfaced by the command-line tools.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("encode error: {0}")]
    Encode(#[from] LaunchAppError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// CLI-friendly selection of the output [`Framing`].
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FramingArg {
    Raw,
    Nlen,
}

impl FramingArg {
    pub const fn into_framing(self) -> Framing {
        match self {
            Self::Raw => Framing::Raw,
            Self::Nlen => Framing::Nlen,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Hex,
    Json,
    Binary,
}

/// Summary of one record in an encoded message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordSummary {
    pub tnf: Tnf,
    pub record_type: String,
    pub payload_len: usize,
}

impl RecordSummary {
    fn from_record(record: &NdefRecord<'_>) -> Self {
        Self {
            tnf: record.tnf,
            record_type: String::from_utf8_lossy(record.record_type).into_owned(),
            payload_len: record.payload.len(),
        }
    }
}

/// A launch-app message encoded by [`encode_request`].
#[derive(Debug, Clone, Serialize)]
pub struct EncodedMessage {
    pub framing: Framing,
    pub length: usize,
    pub records: Vec<RecordSummary>,
    #[serde(serialize_with = "serialize_hex")]
    pub bytes: Vec<u8>,
}

fn serialize_hex<S: serde::Serializer>(bytes: &[u8], s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&to_hex(bytes))
}

pub fn to_hex(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 2);
    for b in data {
        let _ = write!(&mut out, "{b:02x}");
    }
    out
}

fn summarize(request: &LaunchAppRequest<'_>) -> Vec<RecordSummary> {
    let mut records = Vec::with_capacity(2);
    if let Some(name) = request.android_package_name.filter(|n| !n.is_empty()) {
        records.push(RecordSummary::from_record(&android_application_record(name)));
    }
    if let Some(id) = request.windows_app_id.filter(|id| !id.is_empty()) {
        let payload = WindowsLaunchAppPayload::new(id);
        records.push(RecordSummary::from_record(&windows_launchapp_record(&payload)));
    }
    records
}

/// Encodes `request` into a buffer of `capacity` bytes.
pub fn encode_request(
    request: &LaunchAppRequest<'_>,
    framing: Framing,
    capacity: usize,
) -> Result<EncodedMessage, ToolError> {
    log::debug!(
        "encoding launch-app message: android={:?} windows={:?} framing={framing:?}",
        request.android_package_name.map(<[u8]>::len),
        request.windows_app_id.map(<[u8]>::len),
    );
    let predicted = request.encoded_len_with(framing)?;
    log::debug!("predicted message size {predicted} bytes, capacity {capacity}");
    if predicted > capacity {
        log::warn!("capacity {capacity} too small, message needs {predicted} bytes");
    }

    let mut buf = vec![0u8; capacity];
    let length = request.encode_with(framing, &mut buf)?;
    buf.truncate(length);
    Ok(EncodedMessage {
        framing,
        length,
        records: summarize(request),
        bytes: buf,
    })
}

use core::fmt;

use crate::encoding::writer::Writer;
use crate::EncodeError;

/// Message Begin: set on the first record of a message.
pub const FLAG_MB: u8 = 0x80;
/// Message End: set on the last record of a message.
pub const FLAG_ME: u8 = 0x40;
/// Chunk Flag. Never emitted by this encoder.
pub const FLAG_CF: u8 = 0x20;
/// Short Record: payload length fits in one byte.
pub const FLAG_SR: u8 = 0x10;
/// ID Length field is present.
pub const FLAG_IL: u8 = 0x08;

const TNF_MASK: u8 = 0x07;
const SHORT_PAYLOAD_MAX: usize = u8::MAX as usize;

/// Type Name Format of a record (low three bits of the header byte).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tnf {
    Empty,
    WellKnown,
    Media,
    AbsoluteUri,
    External,
    Unknown,
    Unchanged,
}

impl Tnf {
    pub const fn to_u8(self) -> u8 {
        match self {
            Self::Empty => 0x00,
            Self::WellKnown => 0x01,
            Self::Media => 0x02,
            Self::AbsoluteUri => 0x03,
            Self::External => 0x04,
            Self::Unknown => 0x05,
            Self::Unchanged => 0x06,
        }
    }

    /// Returns `None` for the reserved value `0x07` and anything wider than three bits.
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(Self::Empty),
            0x01 => Some(Self::WellKnown),
            0x02 => Some(Self::Media),
            0x03 => Some(Self::AbsoluteUri),
            0x04 => Some(Self::External),
            0x05 => Some(Self::Unknown),
            0x06 => Some(Self::Unchanged),
            _ => None,
        }
    }

    /// Unknown and Unchanged records must not carry a type.
    const fn allows_type(self) -> bool {
        !matches!(self, Self::Empty | Self::Unknown | Self::Unchanged)
    }
}

/// A payload that is produced while the record is serialized rather than
/// borrowed as a finished byte slice.
///
/// `encode` must write exactly `encoded_len` bytes.
pub trait PayloadEncode {
    fn encoded_len(&self) -> usize;

    fn encode(&self, w: &mut Writer<'_>) -> Result<(), EncodeError>;
}

/// Payload of an [`NdefRecord`].
#[derive(Clone, Copy)]
pub enum Payload<'a> {
    Bytes(&'a [u8]),
    Encoder(&'a dyn PayloadEncode),
}

impl<'a> Payload<'a> {
    pub fn len(&self) -> usize {
        match self {
            Self::Bytes(bytes) => bytes.len(),
            Self::Encoder(encoder) => encoder.encoded_len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn encode(&self, w: &mut Writer<'_>) -> Result<(), EncodeError> {
        match self {
            Self::Bytes(bytes) => w.write_all(bytes),
            Self::Encoder(encoder) => {
                let expected = encoder.encoded_len();
                let start = w.position();
                w.ensure(expected)?;
                encoder.encode(w)?;
                if w.position() - start != expected {
                    return Err(EncodeError::InvalidLength);
                }
                Ok(())
            }
        }
    }
}

impl fmt::Debug for Payload<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bytes(bytes) => f.debug_tuple("Bytes").field(bytes).finish(),
            Self::Encoder(encoder) => f
                .debug_struct("Encoder")
                .field("encoded_len", &encoder.encoded_len())
                .finish(),
        }
    }
}

/// Descriptor of one NDEF record.
///
/// Only borrows its parts; the MB/ME flags are decided by the message that
/// serializes it, and the SR flag by the payload length.
#[derive(Debug, Clone, Copy)]
pub struct NdefRecord<'a> {
    pub tnf: Tnf,
    pub record_type: &'a [u8],
    pub id: &'a [u8],
    pub payload: Payload<'a>,
}

impl<'a> NdefRecord<'a> {
    pub const fn new(tnf: Tnf, record_type: &'a [u8], payload: Payload<'a>) -> Self {
        Self {
            tnf,
            record_type,
            id: &[],
            payload,
        }
    }

    pub fn with_id(mut self, id: &'a [u8]) -> Self {
        self.id = id;
        self
    }

    pub fn is_short(&self) -> bool {
        self.payload.len() <= SHORT_PAYLOAD_MAX
    }

    fn validate(&self) -> Result<(), EncodeError> {
        if self.record_type.len() > u8::MAX as usize || self.id.len() > u8::MAX as usize {
            return Err(EncodeError::InvalidLength);
        }
        if !self.tnf.allows_type() && !self.record_type.is_empty() {
            return Err(EncodeError::InvalidLength);
        }
        if self.tnf == Tnf::Empty && (!self.id.is_empty() || !self.payload.is_empty()) {
            return Err(EncodeError::InvalidLength);
        }
        if u32::try_from(self.payload.len()).is_err() {
            return Err(EncodeError::ValueOutOfRange);
        }
        Ok(())
    }

    /// Number of bytes [`NdefRecord::encode`] will write.
    pub fn encoded_len(&self) -> Result<usize, EncodeError> {
        self.validate()?;
        let payload_len_field = if self.is_short() { 1 } else { 4 };
        let id_len_field = usize::from(!self.id.is_empty());
        Ok(2 + payload_len_field
            + id_len_field
            + self.record_type.len()
            + self.id.len()
            + self.payload.len())
    }

    fn header(&self, message_begin: bool, message_end: bool) -> u8 {
        let mut header = self.tnf.to_u8() & TNF_MASK;
        if message_begin {
            header |= FLAG_MB;
        }
        if message_end {
            header |= FLAG_ME;
        }
        if self.is_short() {
            header |= FLAG_SR;
        }
        if !self.id.is_empty() {
            header |= FLAG_IL;
        }
        header
    }

    pub fn encode(
        &self,
        w: &mut Writer<'_>,
        message_begin: bool,
        message_end: bool,
    ) -> Result<(), EncodeError> {
        w.ensure(self.encoded_len()?)?;

        w.write_u8(self.header(message_begin, message_end))?;
        w.write_u8(self.record_type.len() as u8)?;
        let payload_len = self.payload.len();
        if self.is_short() {
            w.write_u8(payload_len as u8)?;
        } else {
            w.write_be_u32(payload_len as u32)?;
        }
        if !self.id.is_empty() {
            w.write_u8(self.id.len() as u8)?;
        }
        w.write_all(self.record_type)?;
        w.write_all(self.id)?;
        self.payload.encode(w)
    }
}

use crate::encoding::writer::Writer;
use crate::ndef::record::NdefRecord;
use crate::EncodeError;

/// Size of the NLEN prefix used by Type 4 Tag NDEF files.
pub const NLEN_SIZE: usize = 2;

/// How the serialized message is framed in the output buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Framing {
    /// Bare NDEF message.
    #[default]
    Raw,
    /// Message prefixed with its length as a big-endian `u16`.
    Nlen,
}

impl Framing {
    const fn prefix_len(self) -> usize {
        match self {
            Self::Raw => 0,
            Self::Nlen => NLEN_SIZE,
        }
    }
}

/// Ordered list of up to `N` records, serialized as one NDEF message.
///
/// Holds no bytes of its own: records borrow their type and payload, and
/// [`NdefMessage::encode`] writes straight into the caller's buffer.
#[derive(Debug, Clone)]
pub struct NdefMessage<'a, const N: usize> {
    records: [Option<NdefRecord<'a>>; N],
    len: usize,
}

impl<'a, const N: usize> Default for NdefMessage<'a, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const N: usize> NdefMessage<'a, N> {
    pub const fn new() -> Self {
        Self {
            records: [None; N],
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn add_record(&mut self, record: NdefRecord<'a>) -> Result<(), EncodeError> {
        let slot = self
            .records
            .get_mut(self.len)
            .ok_or(EncodeError::TooManyRecords)?;
        *slot = Some(record);
        self.len += 1;
        Ok(())
    }

    pub fn records(&self) -> impl Iterator<Item = &NdefRecord<'a>> {
        self.records[..self.len].iter().flatten()
    }

    /// Predicted size of the framed message, computed without writing.
    pub fn encoded_len(&self, framing: Framing) -> Result<usize, EncodeError> {
        let mut body = 0usize;
        for record in self.records() {
            body = body
                .checked_add(record.encoded_len()?)
                .ok_or(EncodeError::ValueOutOfRange)?;
        }
        if framing == Framing::Nlen && body > u16::MAX as usize {
            return Err(EncodeError::ValueOutOfRange);
        }
        Ok(body + framing.prefix_len())
    }

    /// Serializes the message into `buf` and returns the number of bytes written.
    ///
    /// The full size is checked before the first byte is written, so a
    /// [`EncodeError::BufferTooSmall`] leaves `buf` untouched.
    pub fn encode(&self, framing: Framing, buf: &mut [u8]) -> Result<usize, EncodeError> {
        let total = self.encoded_len(framing)?;
        if total > buf.len() {
            return Err(EncodeError::BufferTooSmall);
        }

        let mut w = Writer::new(&mut buf[..total]);
        if framing == Framing::Nlen {
            w.write_be_u16((total - NLEN_SIZE) as u16)?;
        }
        let last = self.len.saturating_sub(1);
        for (idx, record) in self.records().enumerate() {
            record.encode(&mut w, idx == 0, idx == last)?;
        }
        if w.position() != total {
            return Err(EncodeError::InvalidLength);
        }
        Ok(total)
    }
}

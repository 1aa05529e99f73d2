use crate::EncodeError;

/// Cursor over a caller-owned output buffer.
///
/// Every write is bounds-checked against the slice it was built from; a write
/// that does not fit fails with [`EncodeError::BufferTooSmall`] and leaves both
/// the buffer and the cursor untouched.
#[derive(Debug)]
pub struct Writer<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> Writer<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub const fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    pub fn as_written(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    /// Fails unless `len` more bytes fit.
    pub fn ensure(&self, len: usize) -> Result<(), EncodeError> {
        if self.remaining() < len {
            return Err(EncodeError::BufferTooSmall);
        }
        Ok(())
    }

    pub fn write_u8(&mut self, value: u8) -> Result<(), EncodeError> {
        self.ensure(1)?;
        self.buf[self.pos] = value;
        self.pos += 1;
        Ok(())
    }

    pub fn write_all(&mut self, data: &[u8]) -> Result<(), EncodeError> {
        self.ensure(data.len())?;
        let end = self.pos + data.len();
        self.buf[self.pos..end].copy_from_slice(data);
        self.pos = end;
        Ok(())
    }

    pub fn write_be_u16(&mut self, value: u16) -> Result<(), EncodeError> {
        self.write_all(&value.to_be_bytes())
    }

    pub fn write_be_u32(&mut self, value: u32) -> Result<(), EncodeError> {
        self.write_all(&value.to_be_bytes())
    }

    /// Writes a one-byte length followed by `data`.
    pub fn write_u8_prefixed(&mut self, data: &[u8]) -> Result<(), EncodeError> {
        let len = u8::try_from(data.len()).map_err(|_| EncodeError::InvalidLength)?;
        self.ensure(1 + data.len())?;
        self.write_u8(len)?;
        self.write_all(data)
    }
}

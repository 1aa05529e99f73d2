/// Byte writer for encoding NDEF messages into a caller-owned buffer.
pub mod writer;

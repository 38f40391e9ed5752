use crate::error::DnsError;
use crate::message::MAX_MESSAGE_SIZE;

type Result<T> = std::result::Result<T, DnsError>;

/// Appends big-endian fields to an outgoing message, refusing to grow past
/// the UDP message limit.
#[derive(Default)]
pub struct PacketWriter {
    buf: Vec<u8>,
}

impl PacketWriter {
    pub fn new() -> PacketWriter {
        PacketWriter {
            buf: Vec::with_capacity(MAX_MESSAGE_SIZE),
        }
    }

    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.write_bytes(&[value])
    }

    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        self.write_bytes(&value.to_be_bytes())
    }

    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        self.write_bytes(&value.to_be_bytes())
    }

    pub fn write_bytes(&mut self, values: &[u8]) -> Result<()> {
        let len = self.buf.len() + values.len();
        if len > MAX_MESSAGE_SIZE {
            return Err(DnsError::MessageTooLarge(len));
        }

        self.buf.extend_from_slice(values);

        Ok(())
    }

    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}

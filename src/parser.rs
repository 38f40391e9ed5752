use crate::error::DnsError;

type Result<T> = std::result::Result<T, DnsError>;

/// The two top bits of a length byte mark a compression pointer.
pub const POINTER_MASK: u8 = 0xC0;

pub const DEFAULT_MAX_JUMPS: usize = 16;

/// Upper bound for a configured jump limit.
pub const MAX_JUMPS_LIMIT: usize = 127;

/// Reads a DNS message front to back while keeping the whole buffer around,
/// so compression pointers can be resolved against absolute offsets.
pub struct PacketParser<'a> {
    buf: &'a [u8],
    offset: usize,
    max_jumps: usize,
}

impl<'a> PacketParser<'a> {
    pub fn new(buf: &'a [u8]) -> PacketParser<'a> {
        PacketParser {
            buf,
            offset: 0,
            max_jumps: DEFAULT_MAX_JUMPS,
        }
    }

    pub fn with_max_jumps(mut self, max_jumps: usize) -> Self {
        self.max_jumps = max_jumps;

        self
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.offset)
    }

    pub fn seek(&mut self, n: usize) {
        self.offset = n;
    }

    pub fn next(&mut self) -> Result<u8> {
        let res = *self.buf.get(self.offset).ok_or(DnsError::TruncatedInput {
            offset: self.offset,
            needed: 1,
        })?;
        self.offset += 1;

        Ok(res)
    }

    pub fn next_u16(&mut self) -> Result<u16> {
        let bytes = self.take(2)?;

        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn next_u32(&mut self) -> Result<u32> {
        let bytes = self.take(4)?;

        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Consumes exactly `len` bytes.
    pub fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        if self.remaining() < len {
            return Err(DnsError::TruncatedInput {
                offset: self.offset,
                needed: len,
            });
        }

        let res = &self.buf[self.offset..self.offset + len];
        self.offset += len;

        Ok(res)
    }

    /// Reads a name starting at the current offset and returns it as
    /// uncompressed wire bytes, terminating zero included. Pointers are
    /// followed through the whole buffer and the read head ends up just past
    /// the name as it appears at the starting position.
    ///
    /// Every pointer must land below the lowest offset this name has visited
    /// so far, so each jump moves strictly backwards and no pointer chain can
    /// revisit a byte. At most `max_jumps` pointers are followed per name.
    /// Anything else is rejected with [`DnsError::BadPointer`].
    pub fn read_qname(&mut self) -> Result<Vec<u8>> {
        let mut res = Vec::new();
        let mut floor = self.offset;
        let mut resume = None;
        let mut jumps = 0;

        loop {
            let start = self.offset;
            let len = self.next()?;

            if len == 0 {
                res.push(0);

                break;
            }

            if len & POINTER_MASK == POINTER_MASK {
                let low = self.next()?;
                let target = (((len & !POINTER_MASK) as usize) << 8) | low as usize;

                if target >= floor || jumps >= self.max_jumps {
                    return Err(DnsError::BadPointer {
                        offset: start,
                        target,
                    });
                }

                if resume.is_none() {
                    resume = Some(self.offset);
                }
                floor = target;
                jumps += 1;
                self.seek(target);

                continue;
            }

            res.push(len);
            res.extend_from_slice(self.take(len as usize)?);
        }

        if let Some(resume) = resume {
            self.seek(resume);
        }

        Ok(res)
    }
}

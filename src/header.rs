use crate::error::DnsError;
use crate::modify::{unsupported, HeaderModification, Modification, Modify};
use crate::parser::PacketParser;

pub const HEADER_SIZE: usize = 12;

/// One of the sub-fields packed into the 16-bit flags word, MSB first:
/// QR:1 OPCODE:4 AA:1 TC:1 RD:1 RA:1 Z:3 RCODE:4.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flag {
    Qr,
    OpCode,
    Aa,
    Tc,
    Rd,
    Ra,
    Z,
    RCode,
}

impl Flag {
    pub fn name(&self) -> &'static str {
        match self {
            Flag::Qr => "QR",
            Flag::OpCode => "OpCode",
            Flag::Aa => "AA",
            Flag::Tc => "TC",
            Flag::Rd => "RD",
            Flag::Ra => "RA",
            Flag::Z => "Z",
            Flag::RCode => "RCode",
        }
    }

    pub fn max(&self) -> u16 {
        match self {
            Flag::OpCode | Flag::RCode => 15,
            Flag::Z => 7,
            _ => 1,
        }
    }

    pub fn shift(&self) -> u16 {
        match self {
            Flag::Qr => 15,
            Flag::OpCode => 11,
            Flag::Aa => 10,
            Flag::Tc => 9,
            Flag::Rd => 8,
            Flag::Ra => 7,
            Flag::Z => 4,
            Flag::RCode => 0,
        }
    }

    pub fn mask(&self) -> u16 {
        self.max() << self.shift()
    }

    pub fn validate(&self, value: u16) -> Result<(), DnsError> {
        if value > self.max() {
            return Err(DnsError::OutOfRange {
                field: self.name(),
                value: value as u64,
                max: self.max() as u64,
            });
        }

        Ok(())
    }
}

pub fn validate_qr(qr: u16) -> Result<(), DnsError> {
    Flag::Qr.validate(qr)
}

pub fn validate_opcode(opcode: u16) -> Result<(), DnsError> {
    Flag::OpCode.validate(opcode)
}

pub fn validate_aa(aa: u16) -> Result<(), DnsError> {
    Flag::Aa.validate(aa)
}

pub fn validate_tc(tc: u16) -> Result<(), DnsError> {
    Flag::Tc.validate(tc)
}

pub fn validate_rd(rd: u16) -> Result<(), DnsError> {
    Flag::Rd.validate(rd)
}

pub fn validate_ra(ra: u16) -> Result<(), DnsError> {
    Flag::Ra.validate(ra)
}

pub fn validate_z(z: u16) -> Result<(), DnsError> {
    Flag::Z.validate(z)
}

pub fn validate_rcode(rcode: u16) -> Result<(), DnsError> {
    Flag::RCode.validate(rcode)
}

#[derive(Default, Debug, Clone, Copy)]
pub struct HeaderOptions {
    pub id: u16,
    pub qr: u16,
    pub opcode: u16,
    pub aa: u16,
    pub tc: u16,
    pub rd: u16,
    pub ra: u16,
    pub z: u16,
    pub rcode: u16,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub id: u16,
    pub flags: u16,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl Header {
    pub fn new(opts: HeaderOptions) -> Result<Header, DnsError> {
        validate_qr(opts.qr)?;
        validate_opcode(opts.opcode)?;
        validate_aa(opts.aa)?;
        validate_tc(opts.tc)?;
        validate_rd(opts.rd)?;
        validate_ra(opts.ra)?;
        validate_z(opts.z)?;
        validate_rcode(opts.rcode)?;

        let flags = opts.qr << Flag::Qr.shift()
            | opts.opcode << Flag::OpCode.shift()
            | opts.aa << Flag::Aa.shift()
            | opts.tc << Flag::Tc.shift()
            | opts.rd << Flag::Rd.shift()
            | opts.ra << Flag::Ra.shift()
            | opts.z << Flag::Z.shift()
            | opts.rcode << Flag::RCode.shift();

        Ok(Header {
            id: opts.id,
            flags,
            question_count: opts.question_count,
            answer_count: opts.answer_count,
            authority_count: opts.authority_count,
            additional_count: opts.additional_count,
        })
    }

    pub fn flag(&self, flag: Flag) -> u16 {
        (self.flags & flag.mask()) >> flag.shift()
    }

    pub fn qr(&self) -> u16 {
        self.flag(Flag::Qr)
    }

    pub fn opcode(&self) -> u16 {
        self.flag(Flag::OpCode)
    }

    pub fn rd(&self) -> u16 {
        self.flag(Flag::Rd)
    }

    pub fn rcode(&self) -> u16 {
        self.flag(Flag::RCode)
    }

    pub fn write(&self) -> [u8; HEADER_SIZE] {
        let mut res = [0u8; HEADER_SIZE];

        res[0..2].copy_from_slice(&self.id.to_be_bytes());
        res[2..4].copy_from_slice(&self.flags.to_be_bytes());
        res[4..6].copy_from_slice(&self.question_count.to_be_bytes());
        res[6..8].copy_from_slice(&self.answer_count.to_be_bytes());
        res[8..10].copy_from_slice(&self.authority_count.to_be_bytes());
        res[10..12].copy_from_slice(&self.additional_count.to_be_bytes());

        res
    }

    pub fn parse(parser: &mut PacketParser) -> Result<Header, DnsError> {
        // checked up front so a short buffer consumes nothing
        let bytes = parser.take(HEADER_SIZE)?;
        let field = |i: usize| u16::from_be_bytes([bytes[i], bytes[i + 1]]);

        Ok(Header {
            id: field(0),
            flags: field(2),
            question_count: field(4),
            answer_count: field(6),
            authority_count: field(8),
            additional_count: field(10),
        })
    }

    fn set_flag(&mut self, flag: Flag, value: u16) -> Result<(), DnsError> {
        flag.validate(value)?;
        self.flags = self.flags & !flag.mask() | value << flag.shift();

        Ok(())
    }
}

impl Modify for Header {
    const TARGET: &'static str = "header";

    fn apply(&mut self, modification: &Modification) -> Result<(), DnsError> {
        let Modification::Header(m) = modification else {
            return Err(unsupported(Self::TARGET, modification));
        };

        match *m {
            HeaderModification::Qr(v) => self.set_flag(Flag::Qr, v),
            HeaderModification::OpCode(v) => self.set_flag(Flag::OpCode, v),
            HeaderModification::Aa(v) => self.set_flag(Flag::Aa, v),
            HeaderModification::Tc(v) => self.set_flag(Flag::Tc, v),
            HeaderModification::Rd(v) => self.set_flag(Flag::Rd, v),
            HeaderModification::Ra(v) => self.set_flag(Flag::Ra, v),
            HeaderModification::Z(v) => self.set_flag(Flag::Z, v),
            HeaderModification::RCode(v) => self.set_flag(Flag::RCode, v),
            HeaderModification::QdCount(v) => {
                self.question_count = v;
                Ok(())
            }
            HeaderModification::AnCount(v) => {
                self.answer_count = v;
                Ok(())
            }
            HeaderModification::NsCount(v) => {
                self.authority_count = v;
                Ok(())
            }
            HeaderModification::ArCount(v) => {
                self.additional_count = v;
                Ok(())
            }
        }
    }
}

use crate::error::DnsError;
use crate::label::{bytes_to_labels, labels_to_bytes, labels_to_string, string_to_labels, Label};
use crate::modify::{unsupported, AnswerModification, Modification, Modify};
use crate::parser::PacketParser;
use crate::record_type::{RecordClass, RecordType};
use crate::writer::PacketWriter;

#[derive(Debug, Clone, Default)]
pub struct RecordOptions {
    pub name: String,
    pub rtype: RecordType,
    pub rclass: RecordClass,
    pub ttl: u32,
    pub len: u16,
    /// Dotted-decimal address with exactly `len` octets.
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: Vec<Label>,
    pub rtype: RecordType,
    pub rclass: RecordClass,
    pub ttl: u32,
    pub len: u16,
    pub data: Vec<u8>,
}

impl ResourceRecord {
    pub fn new(opts: RecordOptions) -> Result<ResourceRecord, DnsError> {
        Ok(ResourceRecord {
            name: string_to_labels(&opts.name)?,
            rtype: opts.rtype,
            rclass: opts.rclass,
            ttl: opts.ttl,
            len: opts.len,
            data: parse_address(&opts.data, opts.len)?,
        })
    }

    pub fn domain(&self) -> String {
        labels_to_string(&self.name)
    }

    pub fn write(&self, writer: &mut PacketWriter) -> Result<(), DnsError> {
        writer.write_bytes(&labels_to_bytes(&self.name))?;
        writer.write_u16(self.rtype.to_num())?;
        writer.write_u16(self.rclass.to_num())?;
        writer.write_u32(self.ttl)?;
        writer.write_u16(self.len)?;
        writer.write_bytes(&self.data)?;

        Ok(())
    }

    pub fn parse(parser: &mut PacketParser) -> Result<ResourceRecord, DnsError> {
        let name = bytes_to_labels(&parser.read_qname()?)?;
        let rtype = RecordType::from(parser.next_u16()?);
        let rclass = RecordClass::from(parser.next_u16()?);
        let ttl = parser.next_u32()?;
        let mut len = parser.next_u16()?;

        let start = parser.offset();
        let mut data = parser.take(len as usize)?.to_vec();

        // names in RDATA may point into the message they came from
        if holds_name(rtype) {
            let end = parser.offset();
            parser.seek(start);
            data = parser.read_qname()?;
            parser.seek(end);
            len = data.len() as u16;
        }

        Ok(ResourceRecord {
            name,
            rtype,
            rclass,
            ttl,
            len,
            data,
        })
    }
}

impl Modify for ResourceRecord {
    const TARGET: &'static str = "answer";

    fn apply(&mut self, modification: &Modification) -> Result<(), DnsError> {
        let Modification::Answer(m) = modification else {
            return Err(unsupported(Self::TARGET, modification));
        };

        match m {
            AnswerModification::Name(name) => self.name = string_to_labels(name)?,
            AnswerModification::Ttl(ttl) => self.ttl = *ttl,
            AnswerModification::Data(data) => self.data = parse_address(data, self.len)?,
        }

        Ok(())
    }
}

fn holds_name(rtype: RecordType) -> bool {
    matches!(rtype, RecordType::CNAME | RecordType::NS | RecordType::PTR)
}

/// Strictly parses a dotted-decimal address into `len` octets.
pub fn parse_address(s: &str, len: u16) -> Result<Vec<u8>, DnsError> {
    let parts: Vec<&str> = s.split('.').collect();
    if parts.len() != len as usize {
        return Err(DnsError::InvalidAddress(s.to_string()));
    }

    parts
        .into_iter()
        .map(|part| part.parse::<u8>().map_err(|_| DnsError::InvalidAddress(s.to_string())))
        .collect()
}

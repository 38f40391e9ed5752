use crate::error::DnsError;
use crate::label::{bytes_to_labels, labels_to_bytes, labels_to_string, string_to_labels, Label};
use crate::modify::{unsupported, Modification, Modify, QuestionModification};
use crate::parser::PacketParser;
use crate::record_type::{RecordClass, RecordType};
use crate::writer::PacketWriter;

#[derive(Debug, Clone, Default)]
pub struct QuestionOptions {
    pub name: String,
    pub qtype: RecordType,
    pub qclass: RecordClass,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: Vec<Label>,
    pub qtype: RecordType,
    pub qclass: RecordClass,
}

impl Question {
    pub fn new(opts: QuestionOptions) -> Result<Question, DnsError> {
        Ok(Question {
            name: string_to_labels(&opts.name)?,
            qtype: opts.qtype,
            qclass: opts.qclass,
        })
    }

    pub fn domain(&self) -> String {
        labels_to_string(&self.name)
    }

    pub fn write(&self, writer: &mut PacketWriter) -> Result<(), DnsError> {
        writer.write_bytes(&labels_to_bytes(&self.name))?;
        writer.write_u16(self.qtype.to_num())?;
        writer.write_u16(self.qclass.to_num())?;

        Ok(())
    }

    pub fn parse(parser: &mut PacketParser) -> Result<Question, DnsError> {
        let name = bytes_to_labels(&parser.read_qname()?)?;
        let qtype = RecordType::from(parser.next_u16()?);
        let qclass = RecordClass::from(parser.next_u16()?);

        Ok(Question { name, qtype, qclass })
    }
}

impl Modify for Question {
    const TARGET: &'static str = "question";

    fn apply(&mut self, modification: &Modification) -> Result<(), DnsError> {
        let Modification::Question(m) = modification else {
            return Err(unsupported(Self::TARGET, modification));
        };

        match m {
            QuestionModification::Name(name) => self.name = string_to_labels(name)?,
            QuestionModification::Type(qtype) => self.qtype = *qtype,
            QuestionModification::Class(qclass) => self.qclass = *qclass,
        }

        Ok(())
    }
}

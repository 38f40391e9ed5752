use crate::error::DnsError;
use crate::header::Header;
use crate::modify::{HeaderModification, Modify};
use crate::parser::{PacketParser, DEFAULT_MAX_JUMPS};
use crate::question::Question;
use crate::record::ResourceRecord;
use crate::result_code::ResultCode;
use crate::writer::PacketWriter;

pub const MAX_MESSAGE_SIZE: usize = 512;

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
}

impl Message {
    /// Decodes a client query: the header and `question_count` questions.
    ///
    /// Anything after the question section is ignored, so the answer list is
    /// always empty and the authority/additional counts are cleared. RCODE is
    /// set to NOERROR for standard queries and NOTIMP for any other opcode.
    pub fn parse(buf: &[u8]) -> Result<Message, DnsError> {
        Self::parse_with_max_jumps(buf, DEFAULT_MAX_JUMPS)
    }

    pub fn parse_with_max_jumps(buf: &[u8], max_jumps: usize) -> Result<Message, DnsError> {
        let mut parser = PacketParser::new(buf).with_max_jumps(max_jumps);
        let (header, questions) = Self::parse_head(&mut parser)?;

        let code = match header.opcode() {
            0 => ResultCode::NOERROR,
            _ => ResultCode::NOTIMP,
        };
        let header = header
            .modify(&[
                HeaderModification::RCode(code.to_num()).into(),
                HeaderModification::AnCount(0).into(),
                HeaderModification::NsCount(0).into(),
                HeaderModification::ArCount(0).into(),
            ])
            .map_err(|(_, e)| e)?;

        Ok(Message {
            header,
            questions,
            answers: Vec::new(),
        })
    }

    /// Decodes an upstream reply: header, questions and `answer_count`
    /// answer records. The header is kept as received apart from the
    /// authority/additional counts, whose sections are not read.
    pub fn parse_reply(buf: &[u8], max_jumps: usize) -> Result<Message, DnsError> {
        let mut parser = PacketParser::new(buf).with_max_jumps(max_jumps);
        let (mut header, questions) = Self::parse_head(&mut parser)?;

        let mut answers = Vec::with_capacity(header.answer_count as usize);
        for _ in 0..header.answer_count {
            answers.push(ResourceRecord::parse(&mut parser)?);
        }

        header.authority_count = 0;
        header.additional_count = 0;

        Ok(Message {
            header,
            questions,
            answers,
        })
    }

    fn parse_head(parser: &mut PacketParser) -> Result<(Header, Vec<Question>), DnsError> {
        let header = Header::parse(parser)?;

        let mut questions = Vec::with_capacity(header.question_count as usize);
        for _ in 0..header.question_count {
            questions.push(Question::parse(parser)?);
        }

        Ok((header, questions))
    }

    /// Encodes header, questions and answers in order. The header counts must
    /// describe the lists they precede.
    pub fn write(&self) -> Result<Vec<u8>, DnsError> {
        check_count("question", self.header.question_count, self.questions.len())?;
        check_count("answer", self.header.answer_count, self.answers.len())?;

        let mut writer = PacketWriter::new();
        writer.write_bytes(&self.header.write())?;

        for question in &self.questions {
            question.write(&mut writer)?;
        }

        for answer in &self.answers {
            answer.write(&mut writer)?;
        }

        Ok(writer.finish())
    }
}

fn check_count(section: &'static str, header: u16, actual: usize) -> Result<(), DnsError> {
    if header as usize != actual {
        return Err(DnsError::CountMismatch {
            section,
            header,
            actual,
        });
    }

    Ok(())
}

use crate::error::DnsError;
use crate::message::Message;
use crate::modify::{HeaderModification, Modify, QuestionModification};
use crate::record_type::{RecordClass, RecordType};

/// Breaks a query into one single-question message per question, in order.
/// Each copy keeps the header as decoded except for QDCOUNT. Note that
/// [`Message::parse`] has already cleared the AN/NS/AR counts by then.
pub fn split(message: &Message) -> Result<Vec<Message>, DnsError> {
    let header = message
        .header
        .modify(&[HeaderModification::QdCount(1).into()])
        .map_err(|(_, e)| e)?;

    Ok(message
        .questions
        .iter()
        .map(|question| Message {
            header,
            questions: vec![question.clone()],
            answers: message.answers.clone(),
        })
        .collect())
}

/// Recombines `replies`, indexed like the output of [`split`], into a copy of
/// `message`. Every question is rewritten to A/IN and the first answer of the
/// matching reply, if it has one, is collected whatever its type. Replies
/// without answers are skipped, so ANCOUNT may end up below QDCOUNT.
///
/// Replies decoded with [`Message::parse_reply`] carry CNAME, NS and PTR
/// targets uncompressed, so their RDATA is safe to copy into another message.
pub fn merge(message: &Message, replies: &[Message]) -> Result<Message, DnsError> {
    let mut questions = Vec::with_capacity(message.questions.len());
    let mut answers = Vec::new();

    for (i, question) in message.questions.iter().enumerate() {
        let question = question
            .modify(&[
                QuestionModification::Type(RecordType::A).into(),
                QuestionModification::Class(RecordClass::IN).into(),
            ])
            .map_err(|(_, e)| e)?;
        questions.push(question);

        if let Some(answer) = replies.get(i).and_then(|reply| reply.answers.first()) {
            answers.push(answer.clone());
        }
    }

    let header = message
        .header
        .modify(&[HeaderModification::AnCount(answers.len() as u16).into()])
        .map_err(|(_, e)| e)?;

    Ok(Message {
        header,
        questions,
        answers,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::header::{Header, HeaderOptions};
    use crate::parser::DEFAULT_MAX_JUMPS;
    use crate::question::{Question, QuestionOptions};
    use crate::record::{RecordOptions, ResourceRecord};

    fn question(name: &str, qtype: RecordType) -> Question {
        Question::new(QuestionOptions {
            name: name.to_string(),
            qtype,
            qclass: RecordClass::IN,
        })
        .unwrap()
    }

    fn a_record(name: &str, data: &str) -> ResourceRecord {
        ResourceRecord::new(RecordOptions {
            name: name.to_string(),
            rtype: RecordType::A,
            rclass: RecordClass::IN,
            ttl: 300,
            len: 4,
            data: data.to_string(),
        })
        .unwrap()
    }

    fn two_question_query() -> Message {
        Message {
            header: Header::new(HeaderOptions {
                id: 42,
                rd: 1,
                question_count: 2,
                ..Default::default()
            })
            .unwrap(),
            questions: vec![
                question("abc.example.com", RecordType::A),
                question("def.example.com", RecordType::AAAA),
            ],
            answers: Vec::new(),
        }
    }

    fn reply(to: &Message, answers: Vec<ResourceRecord>) -> Message {
        let mut header = to.header;
        header.answer_count = answers.len() as u16;

        Message {
            header,
            questions: to.questions.clone(),
            answers,
        }
    }

    #[test]
    fn split_keeps_order_and_header() {
        let query = two_question_query();
        let parts = split(&query).unwrap();

        assert_eq!(parts.len(), 2);
        for (i, part) in parts.iter().enumerate() {
            assert_eq!(part.header.question_count, 1);
            assert_eq!(part.header.id, 42);
            assert_eq!(part.header.flags, query.header.flags);
            assert_eq!(part.questions, vec![query.questions[i].clone()]);
            assert!(part.answers.is_empty());
            assert!(part.write().is_ok());
        }

        // the original is left alone
        assert_eq!(query.header.question_count, 2);
    }

    #[test]
    fn split_of_empty_query_is_empty() {
        assert!(split(&Message::default()).unwrap().is_empty());
    }

    #[test]
    fn merge_takes_first_answers_only() {
        let query = two_question_query();
        let parts = split(&query).unwrap();
        let replies = vec![
            reply(
                &parts[0],
                vec![
                    a_record("abc.example.com", "1.2.3.4"),
                    a_record("abc.example.com", "5.6.7.8"),
                ],
            ),
            reply(&parts[1], vec![a_record("def.example.com", "9.9.9.9")]),
        ];

        let merged = merge(&query, &replies).unwrap();

        assert_eq!(merged.header.answer_count, 2);
        assert_eq!(merged.answers[0].data, vec![1, 2, 3, 4]);
        assert_eq!(merged.answers[1].data, vec![9, 9, 9, 9]);
        assert_eq!(merged.questions[1].qtype, RecordType::A);
        assert_eq!(merged.questions[1].qclass, RecordClass::IN);
        assert!(merged.write().is_ok());
    }

    #[test]
    fn merge_accepts_partial_answers() {
        let query = two_question_query();
        let parts = split(&query).unwrap();
        let replies = vec![
            reply(&parts[0], vec![a_record("abc.example.com", "1.2.3.4")]),
            reply(&parts[1], Vec::new()),
        ];

        let merged = merge(&query, &replies).unwrap();

        assert_eq!(merged.header.answer_count, 1);
        assert_eq!(merged.answers.len(), 1);
        assert_eq!(merged.questions.len(), 2);
        assert_eq!(merged.header.question_count, 2);
    }

    #[test]
    fn merged_cname_survives_reencoding() {
        let query = Message {
            header: Header::new(HeaderOptions {
                id: 1,
                rd: 1,
                question_count: 1,
                ..Default::default()
            })
            .unwrap(),
            questions: vec![question("www.example.com", RecordType::A)],
            answers: Vec::new(),
        };

        // CNAME www.example.com -> example.com, then A example.com, both compressed
        let mut upstream = vec![0, 1, 0x81, 0x80, 0, 1, 0, 2, 0, 0, 0, 0];
        upstream.extend_from_slice(b"\x03www\x07example\x03com\x00\x00\x01\x00\x01");
        upstream.extend_from_slice(&[0xc0, 0x0c, 0, 5, 0, 1, 0, 0, 0, 60, 0, 2, 0xc0, 0x10]);
        upstream.extend_from_slice(&[0xc0, 0x10, 0, 1, 0, 1, 0, 0, 0, 60, 0, 4, 1, 2, 3, 4]);
        let reply = Message::parse_reply(&upstream, DEFAULT_MAX_JUMPS).unwrap();

        let merged = merge(&query, &[reply]).unwrap();
        let decoded = Message::parse_reply(&merged.write().unwrap(), DEFAULT_MAX_JUMPS).unwrap();

        assert_eq!(decoded.answers.len(), 1);
        assert_eq!(decoded.answers[0].rtype, RecordType::CNAME);
        assert_eq!(decoded.answers[0].data, b"\x07example\x03com\x00".to_vec());
    }
}

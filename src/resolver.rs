use anyhow::Result;
use tracing::{debug, info};
use crate::error::DnsError;
use crate::handler::Handler;
use crate::message::Message;
use crate::modify::{HeaderModification, Modification, Modify, QuestionModification};
use crate::record::{RecordOptions, ResourceRecord};
use crate::record_type::{RecordClass, RecordType};
use crate::result_code::ResultCode;
use crate::splitter::{merge, split};

pub trait Resolver {
    fn resolve(&mut self, buf: &[u8]) -> Result<Vec<u8>>;
}

/// Turns a processed query into a response header: QR set, AA/TC/RA/Z
/// cleared, ANCOUNT matching the collected answers. RCODE is left as decoded.
fn into_response(mut message: Message) -> Result<Message> {
    let modifications: [Modification; 6] = [
        HeaderModification::AnCount(message.answers.len() as u16).into(),
        HeaderModification::Qr(1).into(),
        HeaderModification::Aa(0).into(),
        HeaderModification::Tc(0).into(),
        HeaderModification::Ra(0).into(),
        HeaderModification::Z(0).into(),
    ];

    message.header = message.header.modify(&modifications).map_err(|(_, e)| e)?;

    Ok(message)
}

/// Answers every question locally with the same A record.
pub struct StaticResolver {
    address: String,
    ttl: u32,
    max_jumps: usize,
}

impl StaticResolver {
    pub fn new(address: String, ttl: u32, max_jumps: usize) -> Self {
        Self {
            address,
            ttl,
            max_jumps,
        }
    }
}

impl Resolver for StaticResolver {
    fn resolve(&mut self, buf: &[u8]) -> Result<Vec<u8>> {
        let mut message = Message::parse_with_max_jumps(buf, self.max_jumps)?;

        let mut answers = Vec::with_capacity(message.questions.len());
        for question in &message.questions {
            answers.push(ResourceRecord::new(RecordOptions {
                name: question.domain(),
                rtype: RecordType::A,
                rclass: RecordClass::IN,
                ttl: self.ttl,
                len: 4,
                data: self.address.clone(),
            })?);
        }

        let mut questions = Vec::with_capacity(message.questions.len());
        for question in &message.questions {
            questions.push(
                question
                    .modify(&[
                        QuestionModification::Type(RecordType::A).into(),
                        QuestionModification::Class(RecordClass::IN).into(),
                    ])
                    .map_err(|(_, e)| e)?,
            );
        }

        message.questions = questions;
        message.answers = answers;

        Ok(into_response(message)?.write()?)
    }
}

/// Forwards each question of a query to one upstream resolver and stitches
/// the first answers back together.
pub struct ForwardResolver<H: Handler> {
    handler: H,
    max_jumps: usize,
}

impl<H: Handler> ForwardResolver<H> {
    pub fn new(handler: H, max_jumps: usize) -> Self {
        Self { handler, max_jumps }
    }
}

impl<H: Handler> Resolver for ForwardResolver<H> {
    fn resolve(&mut self, buf: &[u8]) -> Result<Vec<u8>> {
        let req = Message::parse_with_max_jumps(buf, self.max_jumps)?;

        if req.header.rcode() == ResultCode::NOTIMP.to_num() {
            info!("opcode {} not implemented, answering without forwarding", req.header.opcode());

            return Ok(into_response(req)?.write()?);
        }

        let requests = split(&req)?;
        let replies = forward(&self.handler, &requests, self.max_jumps)?;
        let res = merge(&req, &replies)?;

        Ok(into_response(res)?.write()?)
    }
}

/// Runs the round trips for `requests` one after another. The first failure
/// abandons the whole batch.
pub fn forward<H: Handler + ?Sized>(
    handler: &H,
    requests: &[Message],
    max_jumps: usize,
) -> Result<Vec<Message>, DnsError> {
    let mut replies = Vec::with_capacity(requests.len());

    for request in requests {
        let buf = handler.exchange(&request.write()?)?;
        let reply = Message::parse_reply(&buf, max_jumps)?;

        debug!(
            "upstream answered {} with {} record(s), rcode {:?}",
            request.questions.first().map(|q| q.domain()).unwrap_or_default(),
            reply.answers.len(),
            ResultCode::from_num(reply.header.rcode()),
        );

        replies.push(reply);
    }

    Ok(replies)
}

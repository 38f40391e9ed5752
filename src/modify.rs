use crate::error::DnsError;
use crate::record_type::{RecordClass, RecordType};

/// A single field update for a [`Header`](crate::header::Header).
/// Flag values are validated against their bit width when applied, the
/// section counts are taken as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderModification {
    Qr(u16),
    OpCode(u16),
    Aa(u16),
    Tc(u16),
    Rd(u16),
    Ra(u16),
    Z(u16),
    RCode(u16),
    QdCount(u16),
    AnCount(u16),
    NsCount(u16),
    ArCount(u16),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionModification {
    Name(String),
    Type(RecordType),
    Class(RecordClass),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerModification {
    Name(String),
    Ttl(u32),
    /// Replaces the record data with a dotted-decimal address of the
    /// record's current length.
    Data(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modification {
    Header(HeaderModification),
    Question(QuestionModification),
    Answer(AnswerModification),
}

impl From<HeaderModification> for Modification {
    fn from(value: HeaderModification) -> Self {
        Modification::Header(value)
    }
}

impl From<QuestionModification> for Modification {
    fn from(value: QuestionModification) -> Self {
        Modification::Question(value)
    }
}

impl From<AnswerModification> for Modification {
    fn from(value: AnswerModification) -> Self {
        Modification::Answer(value)
    }
}

pub trait Modify: Clone {
    /// Name used in error messages.
    const TARGET: &'static str;

    fn apply(&mut self, modification: &Modification) -> Result<(), DnsError>;

    /// Applies `modifications` in order to a copy of `self`. The first
    /// failure stops the pipeline and hands back the untouched original
    /// along with the error.
    fn modify(&self, modifications: &[Modification]) -> Result<Self, (Self, DnsError)> {
        let mut modified = self.clone();

        for modification in modifications {
            if let Err(e) = modified.apply(modification) {
                return Err((self.clone(), e));
            }
        }

        Ok(modified)
    }
}

pub(crate) fn unsupported(target: &'static str, modification: &Modification) -> DnsError {
    DnsError::UnsupportedModification {
        target,
        modification: format!("{:?}", modification),
    }
}

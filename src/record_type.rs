#[derive(Default, PartialEq, Eq, Debug, Clone, Hash, Copy)]
pub enum RecordType {
    #[default]
    A, // 1
    NS,
    CNAME,
    SOA,
    PTR,
    MX,
    TXT,
    AAAA, // 28
    ANY, // 255
    Unknown(u16),
}

impl From<u16> for RecordType {
    fn from(value: u16) -> Self {
        match value {
            1 => RecordType::A,
            2 => RecordType::NS,
            5 => RecordType::CNAME,
            6 => RecordType::SOA,
            12 => RecordType::PTR,
            15 => RecordType::MX,
            16 => RecordType::TXT,
            28 => RecordType::AAAA,
            255 => RecordType::ANY,
            n => RecordType::Unknown(n),
        }
    }
}

impl RecordType {
    pub fn to_num(&self) -> u16 {
        match *self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::SOA => 6,
            RecordType::PTR => 12,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::AAAA => 28,
            RecordType::ANY => 255,
            RecordType::Unknown(n) => n,
        }
    }
}

#[derive(Default, PartialEq, Eq, Debug, Clone, Hash, Copy)]
pub enum RecordClass {
    #[default]
    IN, // 1
    CS,
    CH,
    HS,
    ANY, // 255
    Unknown(u16),
}

impl From<u16> for RecordClass {
    fn from(value: u16) -> Self {
        match value {
            1 => RecordClass::IN,
            2 => RecordClass::CS,
            3 => RecordClass::CH,
            4 => RecordClass::HS,
            255 => RecordClass::ANY,
            n => RecordClass::Unknown(n),
        }
    }
}

impl RecordClass {
    pub fn to_num(&self) -> u16 {
        match *self {
            RecordClass::IN => 1,
            RecordClass::CS => 2,
            RecordClass::CH => 3,
            RecordClass::HS => 4,
            RecordClass::ANY => 255,
            RecordClass::Unknown(n) => n,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResultCode {
    NOERROR = 0,
    FORMERR = 1,
    SERVFAIL = 2,
    NXDOMAIN = 3,
    NOTIMP = 4,
    REFUSED = 5,
}

impl ResultCode {
    /// Codes without a variant of their own map to `None`.
    pub fn from_num(value: u16) -> Option<ResultCode> {
        match value {
            0 => Some(ResultCode::NOERROR),
            1 => Some(ResultCode::FORMERR),
            2 => Some(ResultCode::SERVFAIL),
            3 => Some(ResultCode::NXDOMAIN),
            4 => Some(ResultCode::NOTIMP),
            5 => Some(ResultCode::REFUSED),
            _ => None,
        }
    }

    pub fn to_num(&self) -> u16 {
        *self as u16
    }
}

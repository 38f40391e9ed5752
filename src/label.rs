use crate::error::DnsError;

/// One length-prefixed segment of a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub length: u8,
    pub content: Vec<u8>,
}

impl Label {
    pub fn new(content: &[u8]) -> Result<Label, DnsError> {
        let length = u8::try_from(content.len())
            .map_err(|_| DnsError::LabelTooLong(String::from_utf8_lossy(content).into_owned()))?;

        Ok(Label {
            length,
            content: content.to_vec(),
        })
    }
}

/// Splits a dotted name into labels. The root terminator is not included, an
/// empty trailing segment (as in `"example.com."`) stands for it instead.
pub fn string_to_labels(name: &str) -> Result<Vec<Label>, DnsError> {
    name.split('.')
        .map(|segment| Label::new(segment.as_bytes()))
        .collect()
}

/// Encodes labels as wire bytes and terminates them with a zero byte. An
/// explicit zero-length label ends the name early, so sequences that already
/// carry their own terminator encode the same as those that don't.
pub fn labels_to_bytes(labels: &[Label]) -> Vec<u8> {
    let mut res = Vec::new();

    for label in labels {
        if label.length == 0 {
            break;
        }

        res.push(label.length);
        res.extend_from_slice(&label.content);
    }

    res.push(0);

    res
}

/// Splits uncompressed name bytes, as produced by
/// [`PacketParser::read_qname`](crate::parser::PacketParser::read_qname),
/// back into labels. The terminator is dropped.
pub fn bytes_to_labels(bytes: &[u8]) -> Result<Vec<Label>, DnsError> {
    let mut res = Vec::new();
    let mut pos = 0;

    loop {
        let len = *bytes.get(pos).ok_or(DnsError::TruncatedInput {
            offset: pos,
            needed: 1,
        })? as usize;
        pos += 1;

        if len == 0 {
            return Ok(res);
        }

        let content = bytes.get(pos..pos + len).ok_or(DnsError::TruncatedInput {
            offset: pos,
            needed: len,
        })?;
        res.push(Label::new(content)?);

        pos += len;
    }
}

pub fn labels_to_string(labels: &[Label]) -> String {
    labels
        .iter()
        .take_while(|label| label.length != 0)
        .map(|label| String::from_utf8_lossy(&label.content))
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parser::PacketParser;

    #[test]
    fn splits_on_dots() {
        let labels = string_to_labels("www.example.com").unwrap();

        assert_eq!(labels.len(), 3);
        assert_eq!(labels[1], Label { length: 7, content: b"example".to_vec() });
        assert_eq!(labels_to_string(&labels), "www.example.com");
    }

    #[test]
    fn rejects_long_segments() {
        let name = format!("{}.com", "a".repeat(256));

        assert!(matches!(string_to_labels(&name), Err(DnsError::LabelTooLong(_))));
        assert!(string_to_labels(&"a".repeat(255)).is_ok());
    }

    #[test]
    fn encodes_with_terminator() {
        let labels = string_to_labels("example.com").unwrap();

        assert_eq!(labels_to_bytes(&labels), b"\x07example\x03com\x00".to_vec());
    }

    #[test]
    fn explicit_terminator_is_not_doubled() {
        let plain = string_to_labels("example.com").unwrap();
        let rooted = string_to_labels("example.com.").unwrap();

        assert_eq!(rooted.len(), 3);
        assert_eq!(labels_to_bytes(&rooted), labels_to_bytes(&plain));
        assert_eq!(labels_to_string(&rooted), "example.com");
    }

    #[test]
    fn uncompressed_round_trip() {
        let long = "x".repeat(63);
        for name in ["example.com", "a.b.c.d.e", long.as_str(), "xn--bcher-kva.example"] {
            let labels = string_to_labels(name).unwrap();
            let bytes = labels_to_bytes(&labels);

            let mut parser = PacketParser::new(&bytes);
            let read = parser.read_qname().unwrap();

            assert_eq!(read, bytes);
            assert_eq!(bytes_to_labels(&read).unwrap(), labels);
        }
    }

    #[test]
    fn compressed_name_matches_original() {
        let original = string_to_labels("mail.example.com").unwrap();

        // the full name at offset 0, then "mail" + pointer to "example.com" at 5
        let mut buf = labels_to_bytes(&original);
        let second = buf.len();
        buf.extend_from_slice(b"\x04mail\xc0\x05");

        let mut parser = PacketParser::new(&buf);
        let first = parser.read_qname().unwrap();
        assert_eq!(parser.offset(), second);
        let compressed = parser.read_qname().unwrap();

        assert_eq!(bytes_to_labels(&compressed).unwrap(), original);
        assert_eq!(bytes_to_labels(&first).unwrap(), original);
    }

    #[test]
    fn bytes_to_labels_needs_terminator() {
        assert!(matches!(
            bytes_to_labels(b"\x03com"),
            Err(DnsError::TruncatedInput { offset: 4, .. })
        ));
        assert!(matches!(bytes_to_labels(b"\x05co\x00"), Err(DnsError::TruncatedInput { .. })));
    }
}

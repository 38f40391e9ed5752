pub mod error;
pub mod handler;
pub mod header;
pub mod label;
pub mod message;
pub mod modify;
pub mod parser;
pub mod question;
pub mod record;
pub mod record_type;
pub mod resolver;
pub mod result_code;
pub mod splitter;
pub mod writer;

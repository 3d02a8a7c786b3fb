#![allow(dead_code)]
use std::net::{Ipv4Addr, Ipv6Addr};

/// Hand-assembled DNS response messages.
///
/// Owner names equal to the question name are written as a compression
/// pointer to offset 12, like most real servers do.
pub struct ResponseBuilder {
    id: u16,
    question: String,
    answers: Vec<Vec<u8>>,
}

impl ResponseBuilder {
    pub fn new(question: &str) -> Self {
        Self {
            id: 0xABCD,
            question: question.to_string(),
            answers: Vec::new(),
        }
    }

    pub fn a(mut self, name: &str, ttl: u32, ip: Ipv4Addr) -> Self {
        let answer = self.answer(name, 0x0001, ttl, &ip.octets());
        self.answers.push(answer);
        self
    }

    pub fn aaaa(mut self, name: &str, ttl: u32, ip: Ipv6Addr) -> Self {
        let answer = self.answer(name, 0x001C, ttl, &ip.octets());
        self.answers.push(answer);
        self
    }

    pub fn cname(mut self, name: &str, ttl: u32, target: &str) -> Self {
        let answer = self.answer(name, 0x0005, ttl, &encode_name(target));
        self.answers.push(answer);
        self
    }

    /// TXT record, for checking that unsupported types pass through.
    pub fn txt(mut self, name: &str, ttl: u32, text: &str) -> Self {
        let mut rdata = vec![text.len() as u8];
        rdata.extend_from_slice(text.as_bytes());
        let answer = self.answer(name, 0x0010, ttl, &rdata);
        self.answers.push(answer);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut response = Vec::with_capacity(512);

        response.extend_from_slice(&self.id.to_be_bytes());
        response.push(0x81);
        response.push(0x80);
        response.extend_from_slice(&[0x00, 0x01]);
        response.extend_from_slice(&(self.answers.len() as u16).to_be_bytes());
        response.extend_from_slice(&[0x00, 0x00]);
        response.extend_from_slice(&[0x00, 0x00]);

        response.extend_from_slice(&encode_name(&self.question));
        response.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);

        for answer in self.answers {
            response.extend_from_slice(&answer);
        }
        response
    }

    fn answer(&self, name: &str, record_type: u16, ttl: u32, rdata: &[u8]) -> Vec<u8> {
        let mut answer = Vec::new();
        if name == self.question {
            answer.extend_from_slice(&[0xc0, 0x0c]);
        } else {
            answer.extend_from_slice(&encode_name(name));
        }
        answer.extend_from_slice(&record_type.to_be_bytes());
        answer.extend_from_slice(&[0x00, 0x01]);
        answer.extend_from_slice(&ttl.to_be_bytes());
        answer.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        answer.extend_from_slice(rdata);
        answer
    }
}

pub fn encode_name(name: &str) -> Vec<u8> {
    let mut bytes = Vec::new();
    for label in name.trim_end_matches('.').split('.') {
        bytes.push(label.len() as u8);
        bytes.extend_from_slice(label.as_bytes());
    }
    bytes.push(0x00);
    bytes
}

/// Reads the question name of a wire-format query.
pub fn question_name(query: &[u8]) -> Option<String> {
    let mut labels = Vec::new();
    let mut pos = 12;
    loop {
        let len = *query.get(pos)? as usize;
        if len == 0 {
            break;
        }
        let label = query.get(pos + 1..pos + 1 + len)?;
        labels.push(String::from_utf8(label.to_vec()).ok()?);
        pos += 1 + len;
    }
    Some(labels.join("."))
}

use ferrous_doh_domain::{normalize_domain_name, AnswerRecord, RecordType};
use std::time::Duration;
use tracing::debug;

/// Lower bound applied to server-advertised TTLs.
pub const MIN_TTL_SECS: u64 = 10;

/// Answers sharing one owner name and record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerGroup {
    pub name: String,
    pub record_type: RecordType,
    pub data: Vec<String>,
    pub ttls: Vec<u32>,
}

impl AnswerGroup {
    fn new(name: String, record_type: RecordType) -> Self {
        Self {
            name,
            record_type,
            data: Vec::new(),
            ttls: Vec::new(),
        }
    }

    fn push(&mut self, answer: &AnswerRecord) {
        for value in &answer.data {
            let value = match self.record_type {
                RecordType::CNAME => normalize_domain_name(value),
                _ => value.clone(),
            };
            if !self.data.contains(&value) {
                self.data.push(value);
            }
        }
        self.ttls.push(answer.ttl);
    }

    /// The override when one is configured, otherwise the smallest observed
    /// TTL raised to [`MIN_TTL_SECS`].
    pub fn derived_ttl(&self, ttl_override: Option<Duration>) -> Duration {
        if let Some(ttl) = ttl_override {
            return ttl;
        }
        let min_observed = self.ttls.iter().copied().min().unwrap_or(0) as u64;
        Duration::from_secs(min_observed.max(MIN_TTL_SECS))
    }
}

/// Groups answers by `(owner name, type)`.
///
/// Names are ordered by first appearance and, within a name, types are
/// ordered by first appearance. Types other than A, AAAA and CNAME are
/// dropped, as are groups without data.
pub fn index_answers(answers: &[AnswerRecord]) -> Vec<AnswerGroup> {
    let mut by_name: Vec<(String, Vec<AnswerGroup>)> = Vec::new();

    for answer in answers {
        let Some(record_type) = RecordType::from_u16(answer.record_type) else {
            debug!(
                name = %answer.name,
                record_type = answer.record_type,
                "Ignoring unsupported answer type"
            );
            continue;
        };
        let name = normalize_domain_name(&answer.name);

        let position = match by_name.iter().position(|(n, _)| *n == name) {
            Some(position) => position,
            None => {
                by_name.push((name.clone(), Vec::new()));
                by_name.len() - 1
            }
        };
        let groups = &mut by_name[position].1;

        match groups.iter_mut().find(|g| g.record_type == record_type) {
            Some(group) => group.push(answer),
            None => {
                let mut group = AnswerGroup::new(name, record_type);
                group.push(answer);
                groups.push(group);
            }
        }
    }

    by_name
        .into_iter()
        .flat_map(|(_, groups)| groups)
        .filter(|group| !group.data.is_empty())
        .collect()
}

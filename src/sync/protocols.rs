use std::collections::BTreeSet;
use std::iter::FromIterator;

/// Grow-only set of protocol labels, enumerated in sorted order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Protocols(BTreeSet<String>);

impl Protocols {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge<I, S>(&mut self, labels: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let before = self.0.len();
        self.0.extend(labels.into_iter().map(Into::into));
        self.0.len() != before
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Protocols {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Protocols(iter.into_iter().map(Into::into).collect())
    }
}

use std::collections::BTreeMap;

use serde::Serialize;

use super::AppError;

/// Values collected from prompts, keyed by prompt name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Answers(BTreeMap<String, String>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `key=value` pairs as given on the command line.
    ///
    /// Only the first `=` separates key from value, so values may contain `=`.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut answers = Answers::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let (key, value) =
                pair.split_once('=').ok_or_else(|| AppError::InvalidAnswerPair(pair.into()))?;
            let key = key.trim();
            if key.is_empty() {
                return Err(AppError::InvalidAnswerPair(pair.into()));
            }
            answers.insert(key, value);
        }
        Ok(answers)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Answers merged with per-action overrides, overrides winning.
    pub fn with_overrides(&self, overrides: &BTreeMap<String, String>) -> BTreeMap<String, String> {
        let mut merged = self.0.clone();
        merged.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Answers {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Answers(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

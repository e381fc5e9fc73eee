//! Ordered test tables and their JSON rendering

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value as Json;

/// Ordered mapping from test input to expected output.
///
/// `None` means the input is invalid and serializes as `null`. Inserting an
/// existing input replaces its expected value but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestTable {
    tests: IndexMap<String, Option<String>>,
}

impl TestTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, test: impl Into<String>, expected: Option<String>) {
        self.tests.insert(test.into(), expected);
    }

    pub fn get(&self, test: &str) -> Option<Option<&str>> {
        self.tests.get(test).map(Option::as_deref)
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Iterate `(test, expected)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.tests.iter().map(|(test, expected)| (test.as_str(), expected.as_deref()))
    }

    /// Render as a flat JSON array of alternating tests and expected values.
    ///
    /// One pair per line, indented by two spaces:
    ///
    /// ```text
    /// [
    ///   "black", "rgb(0, 0, 0)",
    ///   "none", null
    /// ]
    /// ```
    pub fn to_json(&self) -> String {
        let lines: Vec<String> = self
            .tests
            .iter()
            .map(|(test, expected)| {
                let test = Json::String(test.clone());
                let expected = expected.clone().map_or(Json::Null, Json::String);
                format!("  {}, {}", test, expected)
            })
            .collect();
        format!("[\n{}\n]", lines.join(",\n"))
    }
}

impl fmt::Display for TestTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json())
    }
}

impl<K: Into<String>> FromIterator<(K, Option<String>)> for TestTable {
    fn from_iter<I: IntoIterator<Item = (K, Option<String>)>>(iter: I) -> Self {
        let mut table = TestTable::new();
        for (test, expected) in iter {
            table.insert(test, expected);
        }
        table
    }
}

//! Unique id generation.

use rustc_hash::FxHashMap;

use crate::value::Value;

/// Generates ids that are unique per generator and per prefix.
///
/// Every prefix counts from `1` independently. Without a prefix the id is
/// an integer; with one it is the prefix followed by the count. Two
/// generators never share counters.
///
/// # Examples
///
/// ```rust
/// use overscore::utility::IdGenerator;
/// use overscore::value::Value;
///
/// let mut ids = IdGenerator::new();
/// assert_eq!(ids.unique_id(None), Value::from(1));
/// assert_eq!(ids.unique_id(Some("contact_")), Value::from("contact_1"));
/// assert_eq!(ids.unique_id(Some("contact_")), Value::from("contact_2"));
/// assert_eq!(ids.unique_id(None), Value::from(2));
/// ```
#[derive(Clone, Debug, Default)]
pub struct IdGenerator {
    counters: FxHashMap<String, u64>,
}

impl IdGenerator {
    /// Creates a generator with no ids issued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next id for `prefix`.
    ///
    /// `None` and `Some("")` share one counter; the first yields an integer
    /// id and the second a string.
    pub fn unique_id(&mut self, prefix: Option<&str>) -> Value {
        let counter = self
            .counters
            .entry(prefix.unwrap_or_default().to_owned())
            .or_insert(0);
        *counter += 1;
        let id = *counter;
        match prefix {
            Some(prefix) => Value::from(format!("{prefix}{id}")),
            None => Value::Int(i64::try_from(id).unwrap_or(i64::MAX)),
        }
    }

    /// Returns the number of ids issued for `prefix`.
    pub fn issued(&self, prefix: Option<&str>) -> u64 {
        self.counters
            .get(prefix.unwrap_or_default())
            .copied()
            .unwrap_or(0)
    }
}

use serde::{Serialize, Deserialize};


/// A single record: an ordered map from attribute name to value.
///
/// The order of the fields is the order they were inserted,
/// which is the header order for records read from a file.
/// Records are short, so lookups scan linearly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    fields: Vec<(String, String)>,
}


impl Instance {
    /// Construct an empty [`Instance`].
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }


    /// Construct an empty [`Instance`] with room for `n` fields.
    pub fn with_capacity(n: usize) -> Self {
        Self { fields: Vec::with_capacity(n) }
    }


    /// Returns the value of `name`, if present.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }


    /// Returns `true` if the instance has a value for `name`.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }


    /// Set `name` to `value`.
    /// An existing field keeps its position and gets the new value.
    pub fn insert<K, V>(&mut self, name: K, value: V)
        where K: Into<String>,
              V: Into<String>,
    {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(key, _)| *key == name) {
            Some((_, old)) => { *old = value; },
            None => { self.fields.push((name, value)); },
        }
    }


    /// Attribute names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }


    /// `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }


    /// Number of fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }


    /// Returns `true` if the instance has no field.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}


impl<K, V> FromIterator<(K, V)> for Instance
    where K: Into<String>,
          V: Into<String>,
{
    fn from_iter<I>(iter: I) -> Self
        where I: IntoIterator<Item = (K, V)>
    {
        let mut instance = Self::new();
        for (name, value) in iter {
            instance.insert(name, value);
        }
        instance
    }
}

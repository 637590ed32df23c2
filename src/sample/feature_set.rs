use super::instance::Instance;


/// The attribute names still eligible for splitting.
///
/// The order is the first-seen order of the header.
/// Ties in information gain go to the earlier name,
/// so the order decides which feature wins a tie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureSet {
    names: Vec<String>,
}


impl FeatureSet {
    /// Collect the keys of `instance`, skipping the names in `excluded`.
    pub fn from_instance(instance: &Instance, excluded: &[&str]) -> Self {
        instance.keys()
            .filter(|key| !excluded.contains(key))
            .collect()
    }


    /// Returns a copy of `self` without `name`.
    pub fn without(&self, name: &str) -> Self {
        let names = self.names.iter()
            .filter(|n| *n != name)
            .cloned()
            .collect();
        Self { names }
    }


    /// Iterate over the names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }


    /// Returns `true` if `name` is in the set.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }


    /// Number of names.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }


    /// Returns `true` if no feature is left.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}


impl<S> FromIterator<S> for FeatureSet
    where S: Into<String>
{
    fn from_iter<I>(iter: I) -> Self
        where I: IntoIterator<Item = S>
    {
        let mut names: Vec<String> = Vec::new();
        for name in iter {
            let name = name.into();
            if !names.contains(&name) {
                names.push(name);
            }
        }
        Self { names }
    }
}

use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::Index;

use polars::prelude::*;

use crate::constants::{BYTE_ORDER_MARK, DEFAULT_DELIMITER};
use crate::error::Result;
use super::instance::Instance;


/// Struct `Dataset` holds an ordered sequence of [`Instance`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    instances: Vec<Instance>,
}


impl Dataset {
    /// Construct an empty [`Dataset`].
    pub fn new() -> Self {
        Self { instances: Vec::new() }
    }


    /// Read a CSV file with a header row.
    /// See [`Dataset::from_reader`] for the accepted layout.
    pub fn from_csv<P>(file: P) -> Result<Self>
        where P: AsRef<Path>
    {
        let file = File::open(file)?;
        Self::from_reader(BufReader::new(file), DEFAULT_DELIMITER)
    }


    /// Read delimited records from `reader`.
    ///
    /// - The first line names the attributes.
    ///   A leading byte-order mark is dropped.
    /// - Each following line is one record whose values map to
    ///   the header names in order.
    ///   A short line maps only the values it has,
    ///   surplus values are ignored.
    /// - One trailing delimiter ends a line without starting a new field,
    ///   so `x,` is the single value `x`.
    /// - Blank lines are skipped.
    pub fn from_reader<R>(reader: R, delimiter: char) -> Result<Self>
        where R: BufRead
    {
        let mut lines = reader.lines();

        let header = match lines.next() {
            Some(line) => line?,
            None => return Ok(Self::new()),
        };
        let header = header.strip_prefix(BYTE_ORDER_MARK)
            .unwrap_or(header.as_str())
            .trim_end_matches('\r');
        let names = fields(header, delimiter)
            .map(str::to_string)
            .collect::<Vec<_>>();

        let mut instances = Vec::new();
        for line in lines {
            let line = line?;
            let line = line.trim_end_matches('\r');
            if line.is_empty() { continue; }

            let instance = names.iter()
                .map(String::as_str)
                .zip(fields(line, delimiter))
                .collect::<Instance>();
            instances.push(instance);
        }

        Ok(Self { instances })
    }


    /// Convert `polars::DataFrame` into [`Dataset`].
    /// Every column is cast to a string column.
    /// A null cell leaves the attribute absent from that instance.
    pub fn from_dataframe(data: &DataFrame) -> Result<Self> {
        let columns = data.get_columns()
            .iter()
            .map(|series| series.cast(&DataType::Utf8))
            .collect::<PolarsResult<Vec<_>>>()?;

        let n_feature = columns.len();
        let mut instances = vec![
            Instance::with_capacity(n_feature);
            data.height()
        ];

        for series in columns.iter() {
            let name = series.name();
            series.utf8()?
                .into_iter()
                .zip(instances.iter_mut())
                .for_each(|(value, instance)| {
                    if let Some(value) = value {
                        instance.insert(name, value);
                    }
                });
        }

        Ok(Self { instances })
    }


    /// Returns a slice of the instances.
    #[inline]
    pub fn instances(&self) -> &[Instance] {
        &self.instances[..]
    }


    /// Iterate over the instances in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Instance> {
        self.instances.iter()
    }


    /// Append an instance.
    pub fn push(&mut self, instance: Instance) {
        self.instances.push(instance);
    }


    /// Number of instances.
    #[inline]
    pub fn len(&self) -> usize {
        self.instances.len()
    }


    /// Returns `true` if there is no instance.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}


/// Split `line` at `delimiter`, ignoring a single trailing delimiter.
fn fields(line: &str, delimiter: char) -> std::str::Split<'_, char> {
    line.strip_suffix(delimiter)
        .unwrap_or(line)
        .split(delimiter)
}


impl Index<usize> for Dataset {
    type Output = Instance;
    #[inline]
    fn index(&self, row: usize) -> &Self::Output {
        &self.instances[row]
    }
}


impl FromIterator<Instance> for Dataset {
    fn from_iter<I>(iter: I) -> Self
        where I: IntoIterator<Item = Instance>
    {
        Self { instances: iter.into_iter().collect() }
    }
}


impl From<Vec<Instance>> for Dataset {
    fn from(instances: Vec<Instance>) -> Self {
        Self { instances }
    }
}


impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Instance;
    type IntoIter = std::slice::Iter<'a, Instance>;
    fn into_iter(self) -> Self::IntoIter {
        self.instances.iter()
    }
}

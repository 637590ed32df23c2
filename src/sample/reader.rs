use std::path::Path;
use std::fs::File;
use std::io::{self, BufReader};

use crate::constants::DEFAULT_DELIMITER;
use crate::error::Result;
use super::dataset::Dataset;


/// A struct that returns [`Dataset`].
/// Using this struct, one can read a delimited text file with a header row.
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use id3tree::DatasetReader;
/// let filename = "/path/to/csv/file.csv";
/// let dataset = DatasetReader::default()
///     .file(filename)
///     .delimiter(',')
///     .read()
///     .unwrap();
/// ```
pub struct DatasetReader<P> {
    file: Option<P>,
    delimiter: char,
}


impl<P> Default for DatasetReader<P> {
    fn default() -> Self {
        Self { file: None, delimiter: DEFAULT_DELIMITER, }
    }
}


impl<P> DatasetReader<P> {
    /// Set the field separator.
    /// Default is `','`.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}


impl<P> DatasetReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file based on the arguments,
    /// and returns the [`Dataset`].
    /// This method consumes `self`.
    pub fn read(self) -> Result<Dataset> {
        let file = self.file.ok_or_else(|| io::Error::new(
            io::ErrorKind::InvalidInput,
            "The file name is not set. Use `DatasetReader::file`.",
        ))?;
        let file = File::open(file)?;
        Dataset::from_reader(BufReader::new(file), self.delimiter)
    }
}

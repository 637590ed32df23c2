//! Default column names and markers.

/// Column that holds the ground-truth class label.
pub const DEFAULT_LABEL_COLUMN:      &str = "Decision";
/// Column that identifies an instance. Never used as a feature.
pub const DEFAULT_ID_COLUMN:         &str = "ID";
/// Column appended to the prediction output.
pub const DEFAULT_PREDICTION_COLUMN: &str = "PredictedWillWait";
/// Label written for instances the tree cannot route to a leaf.
pub const UNKNOWN_LABEL:             &str = "Unknown";

/// Field separator of the record reader.
pub const DEFAULT_DELIMITER:    char = ',';
/// One marker per depth level in the tree outline.
pub const DEFAULT_INDENT_MARKER: char = '-';

/// UTF-8 byte-order mark that may prefix the header line.
pub const BYTE_ORDER_MARK: char = '\u{feff}';

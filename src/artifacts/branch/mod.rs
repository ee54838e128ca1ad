pub mod recency;
pub mod record;

pub const CURRENT_MARKER: char = '*';
pub const FIELD_SEPARATOR: char = '|';
// Greedy prefix so the capture anchors on the last " to " of the subject.
pub const REFERENCE_CHANGE_REGEX: &str = r"^.+ to (\S+)$";
pub const DEFAULT_HISTORY_DEPTH: usize = 50;

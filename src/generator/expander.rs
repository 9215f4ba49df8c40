use super::record::VariableRecord;
use super::template::render;

/// Expand one record into its rendered blocks, one per level value in list
/// order with a 1-based VarValID, each block followed by one blank
/// separator line.
pub fn expand(record: &VariableRecord) -> String {
    let mut out = String::new();
    for (index, level) in record.levels.iter().enumerate() {
        out.push_str(&render(record, level, index + 1));
        out.push_str("\n\n");
    }
    out
}

use super::record::VariableRecord;

// Fixed literal constants of the record block. These are part of the output
// contract and downstream consumers match on them verbatim.
const YEAR_NUM: u32 = 2023;
const DATASET_TYPE: &str = "Health Surveys";
const DATA_VALUE_TYPE: &str = "Percent";
const DATA_VALUE_UNIT: &str = "%";
const EXCLUDE_INCLUDE: u32 = 1;
const GEO_LEVEL: &str = "National";
const LOCATION_ID: u32 = 59;
const LOCATION: &str = "United States";
const DATA_SOURCE: &str = "CDC";
const DISPLAY_FLAG: u32 = 1;
// SAS numeric missing value.
const MISSING: &str = ".";

/// Render one record block for a single level value.
///
/// String substitutions are double-quoted with no escaping; a value that
/// itself contains a double quote corrupts the block. That matches the
/// legacy generator bit-for-bit and is accepted input behavior here.
/// Indicator_SortOrder is intentionally emitted with no value at all, not
/// as a quoted empty string.
pub fn render(record: &VariableRecord, level_value: &str, sequence_index: usize) -> String {
    let lines = vec![
        format!("/* {} */", level_value),
        format!("VarValID={};", sequence_index),
        format!("YearNum={};", YEAR_NUM),
        format!("TopicID={};", record.topic_id),
        format!("SubTopicID={};", record.subtopic_id),
        format!("Dataset=\"{}\";", record.dataset),
        format!("Dataset_Name=\"{}\";", record.dataset_name),
        format!("Dataset_Type=\"{}\";", DATASET_TYPE),
        format!("Var_Code=\"{}\";", record.var_code),
        format!("VarValue=\"{}\";", level_value),
        format!("Var_Type=\"{}\";", record.var_type),
        format!("Var_Name=\"{}\";", record.var_name),
        format!("Description=\"{}\";", record.description),
        format!("Topic=\"{}\";", record.topic),
        format!("SubTopic=\"{}\";", record.sub_topic),
        format!("Population=\"{}\";", record.population_label()),
        format!("Tag=\"{}\";", record.tag()),
        format!("Data_Value_Type=\"{}\";", DATA_VALUE_TYPE),
        format!("Data_Value_Unit=\"{}\";", DATA_VALUE_UNIT),
        format!("ExcludeInclude={};", EXCLUDE_INCLUDE),
        "Indicator_SortOrder=;".to_string(),
        format!("Geo_Level=\"{}\";", GEO_LEVEL),
        format!("LocationID={};", LOCATION_ID),
        format!("Location=\"{}\";", LOCATION),
        "Break_Out=\"\";".to_string(),
        "Break_Out_ID=0;".to_string(),
        "Category=\"\";".to_string(),
        "CategoryID=0;".to_string(),
        format!("Sample_Size={};", MISSING),
        format!("Confidence_Limit_Low={};", MISSING),
        format!("Confidence_Limit_High={};", MISSING),
        format!("Data_Source=\"{}\";", DATA_SOURCE),
        format!("Source_ID={};", MISSING),
        "Note1=\"\";".to_string(),
        "Note2=\"\";".to_string(),
        "Note3=\"\";".to_string(),
        "CrossNotes=\"\";".to_string(),
        format!("Question_Order={};", MISSING),
        format!("Display_Flag={};", DISPLAY_FLAG),
    ];
    lines.join("\n")
}

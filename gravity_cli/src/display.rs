use comfy_table::{presets::NOTHING, *};
use polars::frame::DataFrame;

use gravity::merge::StageReport;

fn styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_style(comfy_table::TableComponent::BottomBorder, '─')
        .set_style(comfy_table::TableComponent::MiddleHeaderIntersections, '─')
        .set_style(comfy_table::TableComponent::HeaderLines, '─')
        .set_style(comfy_table::TableComponent::BottomBorderIntersections, '─')
        .set_style(comfy_table::TableComponent::TopBorder, '─')
        .set_style(comfy_table::TableComponent::TopBorderIntersections, '─');
    table
}

/// Render the per-join attrition report so silent inner-join row loss is
/// visible at a glance.
pub fn display_stage_reports(stages: &[StageReport]) {
    let mut table = styled_table();
    table.set_header(vec![
        Cell::new("Join stage").add_attribute(Attribute::Bold),
        Cell::new("Rows before").add_attribute(Attribute::Bold),
        Cell::new("Rows after").add_attribute(Attribute::Bold),
        Cell::new("Dropped").add_attribute(Attribute::Bold),
    ]);
    for stage in stages {
        table.add_row(vec![
            stage.stage.to_string(),
            stage.rows_before.to_string(),
            stage.rows_after.to_string(),
            stage.rows_dropped().to_string(),
        ]);
    }
    println!("\n{}", table);
}

/// Render the column-wise missing-value counts of a frame.
pub fn display_null_counts(df: &DataFrame) -> anyhow::Result<()> {
    let null_counts = df.null_count();
    let mut table = styled_table();
    table.set_header(vec![
        Cell::new("Column").add_attribute(Attribute::Bold),
        Cell::new("Missing values").add_attribute(Attribute::Bold),
    ]);
    for series in null_counts.get_columns() {
        let count = series.u32()?.get(0).unwrap_or_default();
        table.add_row(vec![series.name().to_string(), count.to_string()]);
    }
    println!("\n{}", table);
    Ok(())
}

/// Print the shape and the head rows of a loaded frame.
pub fn display_frame_head(df: &DataFrame, max_results: Option<usize>) {
    println!("shape: {:?}", df.shape());
    println!("\n{}", df.head(max_results));
}

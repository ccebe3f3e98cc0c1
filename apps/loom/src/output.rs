use market_history::merge::MergedTable;

pub fn write_csv(table: &MergedTable, path: &str) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record([
        "timestamp", "open", "high", "low", "close", "volume", "D_open", "D_high", "D_low",
        "D_close", "D_volume",
    ])?;

    for row in table.rows() {
        writer.write_record(&[
            row.ts.to_rfc3339(),
            row.open.to_string(),
            row.high.to_string(),
            row.low.to_string(),
            row.close.to_string(),
            row.volume.to_string(),
            fmt_field(row.d_open),
            fmt_field(row.d_high),
            fmt_field(row.d_low),
            fmt_field(row.d_close),
            fmt_field(row.d_volume),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

pub fn print_tail(table: &MergedTable, n: usize) {
    println!(
        "{:<26} {:>9} {:>9} {:>9} {:>9} {:>12} {:>9} {:>9} {:>9} {:>9} {:>12}",
        "timestamp",
        "open",
        "high",
        "low",
        "close",
        "volume",
        "D_open",
        "D_high",
        "D_low",
        "D_close",
        "D_volume"
    );
    for row in table.tail(n) {
        println!(
            "{:<26} {:>9.5} {:>9.5} {:>9.5} {:>9.5} {:>12.2} {:>9} {:>9} {:>9} {:>9} {:>12}",
            row.ts.to_rfc3339(),
            row.open,
            row.high,
            row.low,
            row.close,
            row.volume,
            fmt_field(row.d_open),
            fmt_field(row.d_high),
            fmt_field(row.d_low),
            fmt_field(row.d_close),
            fmt_field(row.d_volume),
        );
    }
}

fn fmt_field(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

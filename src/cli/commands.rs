use crate::core::{
    build_project_table, import_spreadsheet, render_table, ExportOptions, ImportOptions,
    LabelFilter,
};
use crate::error::LabelResult;
use crate::excel::ExcelExporter;
use crate::project::{parse_language_list, ProjectLayout};
use colored::Colorize;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Execute the export command
pub fn export(
    project: PathBuf,
    languages: String,
    category: Option<String>,
    prefix: Option<String>,
    output: Option<PathBuf>,
) -> LabelResult<()> {
    println!("{}", "🏷️  Label Forge - Excel Export".bold().green());
    println!("   Project:   {}", project.display());
    println!("   Languages: {}", languages.bright_blue());

    info!("project absolute path [{}]", project.display());
    info!("export languages [{}]", languages);
    if let Some(ref c) = category {
        info!("filter by category [{}]", c);
        println!("   Category:  {}", c.bright_yellow());
    }
    if let Some(ref p) = prefix {
        info!("filter by prefix [{}]", p);
        println!("   Prefix:    {}", p.bright_yellow());
    }
    println!();

    let mut options = ExportOptions::new(parse_language_list(&languages)?);
    options.filter = LabelFilter { category, prefix };
    if let Some(output) = output {
        options.output = output;
    }

    let layout = ProjectLayout::new(&project);
    let table = build_project_table(&layout, &options)?;

    match render_table(&table) {
        Some(rendered) => debug!("\n Print table \n{}", rendered),
        None => warn!("translation table is empty"),
    }
    info!("total rows [{}]", table.row_count());

    ExcelExporter::new(&table).export(&options.output)?;

    println!("{}", "✅ Export Complete!".bold().green());
    println!("   Rows:       {}", table.row_count());
    println!("   Excel file: {}\n", options.output.display());

    Ok(())
}

/// Execute the import command
pub fn import(project: PathBuf, input: PathBuf, dry_run: bool) -> LabelResult<()> {
    println!("{}", "🏷️  Label Forge - Excel Import".bold().green());
    println!("   Project: {}", project.display());
    println!("   Input:   {}\n", input.display());

    if dry_run {
        println!(
            "{}",
            "📋 DRY RUN MODE - No changes will be written\n".yellow()
        );
    }

    info!("project absolute path [{}]", project.display());
    info!("import file path [{}]", input.display());

    let layout = ProjectLayout::new(&project);
    let report = import_spreadsheet(&layout, &input, &ImportOptions { dry_run })?;

    println!("   Languages: {}", report.languages.join(", ").bright_blue());
    println!("   Rows read: {}", report.rows);

    if report.changes.is_empty() {
        println!("\n{}", "✅ No label values changed".bold().green());
    } else {
        println!(
            "\n{}",
            format!("✏️  {} label value(s) changed:", report.changes.len()).bold()
        );
        for change in &report.changes {
            println!(
                "   {} [{}]: {} → {}",
                change.key.bright_blue(),
                change.language,
                change.old_value.red(),
                change.new_value.green()
            );
        }
    }

    if report.written {
        println!(
            "\n{}",
            format!("💾 Saved {}", report.labels_path.display()).bold().green()
        );
    } else {
        println!("\n{}", "📋 Dry run complete - no changes written".yellow());
    }

    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;

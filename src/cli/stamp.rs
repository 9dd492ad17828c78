use crate::cli::Workspace;
use crate::services::{collect_docs, stamp_docs, VersionStamp};
use crate::Result;
use colored::Colorize;

pub fn run(workspace: &Workspace, dry_run: bool) -> Result<()> {
    let docs = collect_docs(&workspace.root, &workspace.config)?;
    let stamp = VersionStamp::from_config(&workspace.config);

    let summary = stamp_docs(&docs, &stamp, dry_run)?;

    let verb = if dry_run { "Would update" } else { "Updated" };
    for path in &summary.updated {
        let shown = path.strip_prefix(&workspace.root).unwrap_or(path);
        println!("   • {}", shown.display());
    }
    println!(
        "{}",
        format!(
            "✅ {} {} of {} page(s) with `{}: {}`",
            verb,
            summary.updated.len(),
            summary.scanned,
            stamp.key,
            stamp.value
        )
        .green()
    );
    if !summary.unreadable.is_empty() {
        println!(
            "{}",
            format!("⚠️  {} unreadable page(s) left untouched", summary.unreadable.len()).yellow()
        );
    }

    Ok(())
}

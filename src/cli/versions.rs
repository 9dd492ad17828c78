use crate::cli::Workspace;
use crate::services::generate_version_report;
use crate::Result;
use colored::Colorize;

pub fn run(workspace: &Workspace) -> Result<()> {
    let index = generate_version_report(&workspace.root, &workspace.config)?;

    println!("{}", "📋 Documentation versions".cyan().bold());
    for (version, docs) in &index.buckets {
        println!("   {:<12} {} page(s)", version, docs.len());
    }
    if !index.unversioned.is_empty() {
        println!(
            "   {:<12} {} page(s)",
            "(none)".yellow(),
            index.unversioned.len()
        );
    }
    println!(
        "{}",
        format!(
            "✅ Version report written to {}",
            workspace.config.report_path(&workspace.root).display()
        )
        .green()
    );

    Ok(())
}

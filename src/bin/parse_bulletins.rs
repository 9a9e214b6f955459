use adobe_digest::Result;
use adobe_digest::cli::{PARSE_USAGE, ParseCli};
use adobe_digest::outputs::json::write_import_file;
use adobe_digest::parser::{LineOutcome, parse_file};
use adobe_digest::utils::init_tracing;
use clap::Parser;
use clap::error::ErrorKind;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    let args = match ParseCli::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            println!("{PARSE_USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "parse_bulletins failed");
            println!("❌ Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &ParseCli) -> Result<()> {
    let report = parse_file(&args.input_file).await?;
    println!(
        "📄 Processing {} lines from {}",
        report.total_lines,
        args.input_file.display()
    );

    for outcome in &report.outcomes {
        match outcome {
            LineOutcome::Parsed { bulletin, .. } => {
                println!("  ✅ {}: {}", bulletin.apsb, bulletin.title);
            }
            LineOutcome::Skipped(line) => {
                println!("  ⚠️  Line {}: Could not parse: {}", line.line_number, line.content);
            }
        }
    }

    let import = report.into_import();
    let count = import.bulletins.len();
    write_import_file(&import, &args.output_file).await?;
    info!(count, path = %args.output_file.display(), "Bulletin import written");

    let output = args.output_file.display();
    println!("\n✅ Successfully parsed {count} bulletins");
    println!("📁 Output saved to {output}");
    println!("\n🔄 Next steps:");
    println!("   1. Review the generated JSON file");
    println!("   2. Run: bulk-importer data/security-bulletins.json {output}");
    println!("   3. Run: content-generator generate");

    Ok(())
}

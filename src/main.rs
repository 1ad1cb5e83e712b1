/*!
 * RBMM - Demo Entry Point
 *
 * Builds a region from the command-line words, prints them most recent
 * first, then destroys the region and reports what was released.
 */

use miette::IntoDiagnostic;
use rbmm::{init_tracing, Region, RegionConfig};
use tracing::info;

fn usage(program: &str) {
    println!("Usage [{}]:", program);
    println!("    --help / -h                Print usage to the terminal");
    println!("    --json / -j                Print allocator statistics as JSON");
    println!("    WORD...                    Strings to add to the region");
}

fn main() -> miette::Result<()> {
    init_tracing();
    let config = RegionConfig::from_env();

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "rbmm".to_string());

    let mut json = false;
    let mut words = Vec::new();
    for arg in args {
        match arg.as_str() {
            "--help" | "-h" => {
                usage(&program);
                return Ok(());
            }
            "--json" | "-j" => json = true,
            _ => words.push(arg),
        }
    }

    let allocator = config.allocator();
    let mut region = Region::new(allocator.clone())?;
    info!(region = %region.id(), limit = ?config.memory_limit, "region ready");

    for word in &words {
        region.add_str(word)?;
    }

    for (i, string) in region.iter().enumerate() {
        println!("{:>4}  {} ({} bytes)", i, string, string.len());
    }

    let report = region.destroy();
    let stats = allocator.stats();

    if json {
        let output = serde_json::json!({ "released": report, "allocator": stats });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).into_diagnostic()?
        );
    } else {
        println!(
            "released {} nodes, {} strings, {} payload bytes (peak {} bytes)",
            report.nodes, report.strings, report.payload_bytes, stats.peak_bytes
        );
    }

    Ok(())
}

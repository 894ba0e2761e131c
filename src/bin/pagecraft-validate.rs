use pagecraft::{parse_graph, LayoutError};
use std::env;
use std::fs;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: pagecraft-validate <layout.json> [more.json ...]");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  pagecraft-validate page.json");
        eprintln!("  pagecraft-validate *.json");
        process::exit(1);
    }

    let mut exit_code = 0;

    for file_path in &args[1..] {
        match validate_file(file_path) {
            Ok(node_count) => {
                println!("✓ {} is valid ({} nodes)", file_path, node_count);
            }
            Err(e) => {
                eprintln!("✗ {} has errors:", file_path);
                print_error(&e);
                exit_code = 1;
            }
        }
    }

    process::exit(exit_code);
}

fn validate_file(path: &str) -> Result<usize, LayoutError> {
    let content = fs::read_to_string(path).map_err(|e| LayoutError::InvalidJson {
        message: format!("failed to read file: {}", e),
    })?;
    let graph = parse_graph(&content)?;
    Ok(graph.len())
}

fn print_error(error: &LayoutError) {
    match error {
        LayoutError::InvalidJson { message } => {
            eprintln!("  JSON error:");
            eprintln!("    {}", message);
        }
        LayoutError::NotAnObject => {
            eprintln!("  Top level must be a JSON object");
            eprintln!("    Expected a map of node id to node data");
        }
        LayoutError::MissingRoot => {
            eprintln!("  Document has no \"ROOT\" entry");
            eprintln!("    Every layout document needs a ROOT node as its entry point");
        }
    }
}

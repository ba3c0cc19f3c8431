use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

/// Top-level CLI argument parser for the `bg` command
#[derive(Parser)]
#[command(
    name = "bg",
    about = "boilergen — problem definitions to per-language boilerplate",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the `bg` CLI
#[derive(Subcommand)]
enum Commands {
    /// Show the parsed definition
    Show {
        /// Path to the definition file
        definition: PathBuf,
        /// Output format: text (default) or json
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Lint a definition for degraded or surprising constructs
    Lint {
        /// Path to the definition file
        definition: PathBuf,
    },
    /// Generate a minimal function stub
    Stub {
        /// Path to the definition file
        definition: PathBuf,
        /// Target language: cpp, python, javascript, or java
        #[arg(short, long)]
        lang: String,
    },
    /// Generate a full stdin/stdout harness program
    Harness {
        /// Path to the definition file
        definition: PathBuf,
        /// Target language: cpp, python, javascript, or java
        #[arg(short, long)]
        lang: String,
    },
    /// Generate the Java smoke-test scaffold
    TestStub {
        /// Path to the definition file
        definition: PathBuf,
    },
    /// Generate all artifacts to disk
    Generate {
        /// Path to the definition file
        definition: PathBuf,
        /// Output directory for generated files
        #[arg(short, long, default_value = "generated")]
        output: PathBuf,
    },
}

/// Dispatch a parsed CLI subcommand to its handler
fn run_command(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Show { definition, format } => commands::show::run(&definition, &format),
        Commands::Lint { definition } => commands::lint::run(&definition),
        Commands::Stub { definition, lang } => commands::stub::run(&definition, &lang),
        Commands::Harness { definition, lang } => commands::harness::run(&definition, &lang),
        Commands::TestStub { definition } => commands::test_stub::run(&definition),
        Commands::Generate { definition, output } => {
            commands::generate::run(&definition, &output)
        }
    }
}

/// Entry point: parse CLI arguments and run the selected subcommand
fn main() {
    let cli = Cli::parse();

    if let Err(e) = run_command(cli.command) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Return the path to the two-sum definition fixture for testing
    fn test_definition() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../definitions/two-sum.md")
    }

    #[test]
    fn dispatch_show() {
        let result = run_command(Commands::Show {
            definition: test_definition(),
            format: "text".to_string(),
        });
        assert!(result.is_ok());
    }

    #[test]
    fn dispatch_show_json() {
        let result = run_command(Commands::Show {
            definition: test_definition(),
            format: "json".to_string(),
        });
        assert!(result.is_ok());
    }

    #[test]
    fn dispatch_show_unknown_format() {
        let result = run_command(Commands::Show {
            definition: test_definition(),
            format: "yaml".to_string(),
        });
        assert!(result.is_err());
    }

    #[test]
    fn dispatch_lint() {
        let result = run_command(Commands::Lint {
            definition: test_definition(),
        });
        assert!(result.is_ok());
    }

    #[test]
    fn dispatch_stub() {
        let result = run_command(Commands::Stub {
            definition: test_definition(),
            lang: "cpp".to_string(),
        });
        assert!(result.is_ok());
    }

    #[test]
    fn dispatch_stub_unknown_language() {
        let result = run_command(Commands::Stub {
            definition: test_definition(),
            lang: "cobol".to_string(),
        });
        assert!(result.is_err());
    }

    #[test]
    fn dispatch_harness() {
        let result = run_command(Commands::Harness {
            definition: test_definition(),
            lang: "python".to_string(),
        });
        assert!(result.is_ok());
    }

    #[test]
    fn dispatch_test_stub() {
        let result = run_command(Commands::TestStub {
            definition: test_definition(),
        });
        assert!(result.is_ok());
    }

    #[test]
    fn dispatch_generate() {
        let dir = tempfile::tempdir().unwrap();
        let result = run_command(Commands::Generate {
            definition: test_definition(),
            output: dir.path().to_path_buf(),
        });
        assert!(result.is_ok());
        assert!(dir.path().join("boilerplate_full/function.cpp").exists());
    }

    #[test]
    fn dispatch_missing_file_is_error() {
        let result = run_command(Commands::Lint {
            definition: PathBuf::from("definitely/not/here.md"),
        });
        assert!(result.is_err());
    }
}

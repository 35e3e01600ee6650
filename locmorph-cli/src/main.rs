use std::path::PathBuf;
use std::time::Duration;

use clap::{Args as ClapArgs, Parser, Subcommand};
use locmorph::transformers::{Capitalize, CjkGate, StripDiacritics};

use locmorph_cli::run::{self, RunOptions};
use locmorph_cli::transformers::chat::{ChatConfig, ChatRewriter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

#[derive(ClapArgs, Debug)]
struct CommonArgs {
    /// The input folder to read localisation files from
    #[arg(short, long, default_value = "read1")]
    input: PathBuf,

    /// The output folder to write transformed files to
    #[arg(short, long, default_value = "write1")]
    output: PathBuf,

    /// Write a JSON run report to this path
    #[arg(long)]
    report_json: Option<PathBuf>,

    /// Suppress per-line update notices (summary is still printed)
    #[arg(short, long)]
    quiet: bool,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Capitalize the first letter of every value.
    Capitalize {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Remove diacritics (accents) from every value.
    StripDiacritics {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Rewrite every value through a chat-completions service.
    Rewrite {
        #[command(flatten)]
        common: CommonArgs,

        /// File holding the system prompt sent with every value
        #[arg(short, long)]
        prompt_file: PathBuf,

        /// Model name passed to the service
        #[arg(short, long, default_value = "gpt-4.1-nano")]
        model: String,

        /// Chat-completions endpoint URL
        #[arg(long, default_value = "https://api.openai.com/v1/chat/completions")]
        endpoint: String,

        /// Per-request timeout in seconds
        #[arg(long, default_value_t = 60)]
        timeout_secs: u64,

        /// Only rewrite values containing CJK ideographs
        #[arg(long)]
        cjk_only: bool,
    },
}

impl CommonArgs {
    fn into_run_options(self) -> RunOptions {
        RunOptions {
            input: self.input,
            output: self.output,
            report_json: self.report_json,
            quiet: self.quiet,
        }
    }
}

fn run_rewrite(
    common: CommonArgs,
    prompt_file: PathBuf,
    model: String,
    endpoint: String,
    timeout_secs: u64,
    cjk_only: bool,
) -> Result<(), String> {
    // Configuration problems are fatal before any file is touched.
    let api_key = std::env::var("OPENAI_API_KEY")
        .map_err(|_| "OPENAI_API_KEY is not set in the environment".to_string())?;
    let system_prompt = std::fs::read_to_string(&prompt_file)
        .map_err(|e| format!("Cannot read prompt file {}: {}", prompt_file.display(), e))?
        .trim()
        .to_string();
    if system_prompt.is_empty() {
        return Err(format!("Prompt file {} is empty", prompt_file.display()));
    }

    let config = ChatConfig {
        endpoint,
        model,
        api_key,
        system_prompt,
        timeout: Duration::from_secs(timeout_secs),
    };

    run::execute(common.into_run_options(), move || {
        let rewriter = ChatRewriter::new(config)?;
        Ok(if cjk_only {
            Box::new(CjkGate::new(rewriter))
        } else {
            Box::new(rewriter)
        })
    })
}

fn main() {
    let args = Args::parse();

    let result = match args.commands {
        Commands::Capitalize { common } => {
            run::execute(common.into_run_options(), || Ok(Box::new(Capitalize)))
        }
        Commands::StripDiacritics { common } => {
            run::execute(common.into_run_options(), || Ok(Box::new(StripDiacritics)))
        }
        Commands::Rewrite {
            common,
            prompt_file,
            model,
            endpoint,
            timeout_secs,
            cjk_only,
        } => run_rewrite(common, prompt_file, model, endpoint, timeout_secs, cjk_only),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::anyhow;
use clap::Parser;
use colored::Colorize;
use log::{debug, LevelFilter};
use simplelog::{SimpleLogger, TermLogger, TerminalMode};

use asmview_compilation::languages::LanguageRegistry;
use asmview_compilation::pipeline::{CompilerPipeline, ToolchainPipeline};
use asmview_compilation::request::{CacheKey, CompilationRequest};
use asmview_lean4::Lean4Compiler;

mod config;

#[derive(Parser)]
#[clap(
    name = env!("CARGO_BIN_NAME"),
    about = "Compiles a Lean 4 source file through the leanc C lowering and the base toolchain, showing the raw compiler output",
    rename_all = "kebab-case",
    author,
    version = env!("CARGO_PKG_VERSION"),
)]
pub struct Args {
    /// Lean 4 source file to compile
    pub input: Option<PathBuf>,

    /// Working directory for intermediate artifacts (default: the input's directory)
    #[clap(long = "working-dir", short = 'w')]
    pub working_dir: Option<PathBuf>,

    /// Path to a TOML config with [lean4] and [toolchain] tables
    #[clap(long = "config", short = 'c')]
    pub config: Option<PathBuf>,

    /// Extra option passed to the base compiler driver (repeatable)
    #[clap(long = "option", short = 'O')]
    pub options: Vec<String>,

    /// Don't delete the intermediate C file after compilation
    #[clap(long = "keep-temp", short = 'k')]
    pub keep_temp: bool,

    /// Display detailed progress
    #[clap(long, short = 'v')]
    pub verbose: bool,

    /// List registered editor languages and exit
    #[clap(long)]
    pub list_languages: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if TermLogger::init(level, simplelog::Config::default(), TerminalMode::Mixed).is_err() {
        let _ = SimpleLogger::init(level, simplelog::Config::default());
    }
}

#[tokio::main]
async fn main() {
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).unwrap();

    let args = Args::parse();
    init_logging(args.verbose);
    debug!("asmview CLI version: {}", env!("CARGO_PKG_VERSION"));

    match run(args).await {
        Ok(true) => (),
        Ok(false) => std::process::exit(1),
        Err(err) => {
            let err = format!("{:?}", err);
            println!("{}", err.bold().red());
            std::process::exit(1);
        }
    }
}

async fn run(args: Args) -> anyhow::Result<bool> {
    let config = config::load(args.config.as_deref())?;

    let mut registry = LanguageRegistry::new();
    asmview_lean4::register(&mut registry);

    if args.list_languages {
        for id in registry.ids() {
            println!("{id}");
        }
        return Ok(true);
    }

    let input = args.input.ok_or_else(|| anyhow!("no input file given"))?;
    let working_dir = match args.working_dir {
        Some(dir) => dir,
        None => input
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };

    let mut request = CompilationRequest::new(
        &input,
        &working_dir,
        CacheKey(input.display().to_string()),
    );
    request.options = args.options;

    let pipeline = Arc::new(ToolchainPipeline::new(config.toolchain));
    let compiler = Lean4Compiler::new(config.lean4, pipeline);

    let intermediate = asmview_lean4::compiler::intermediate_path(&input, &working_dir);
    let intermediate_existed = intermediate.exists();

    debug!("compiling {}", input.display());
    let result = compiler.compile(&request).await?;

    if !args.keep_temp && !intermediate_existed {
        let _ = std::fs::remove_file(&intermediate);
    }

    print!("{}", result.output.stdout);
    eprint!("{}", result.output.stderr);

    if result.is_success() {
        Ok(true)
    } else {
        println!("{}", "compilation failed".bold().red());
        Ok(false)
    }
}

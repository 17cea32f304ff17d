use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use dmcss::{Config, Processor};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Compile dmcss device stylesheets to CSS", long_about = None)]
struct Cli {
    /// Main dmcss source
    #[arg(long, global = true, value_name = "PATH")]
    source: Option<PathBuf>,

    /// Directory holding <device>.dmcss fragments
    #[arg(long, global = true, value_name = "DIR")]
    device_dir: Option<PathBuf>,

    /// More output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Compile the main source to CSS")]
    Compile { output: Option<PathBuf> },
    #[command(about = "Scaffold a new device fragment")]
    Generate {
        #[arg(long)]
        device: String,
        #[arg(long)]
        width: String,
        #[arg(long)]
        height: String,
    },
    #[command(about = "Generate the script that tags <body> with device classes")]
    GenerateScript { output: Option<PathBuf> },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let mut config = Config::default();
    if let Some(source) = cli.source {
        config = config.with_source(source);
    }
    if let Some(device_dir) = cli.device_dir {
        config = config.with_device_dir(device_dir);
    }
    match &cli.command {
        Commands::Compile {
            output: Some(output),
        } => config = config.with_css_output(output),
        Commands::GenerateScript {
            output: Some(output),
        } => config = config.with_script_output(output),
        _ => {}
    }
    let processor = Processor::new(config);

    let result = match cli.command {
        Commands::Compile { .. } => processor
            .compile_to(None)
            .map(|path| println!("Transpilation successful! Output written to {}", path.display())),
        Commands::Generate {
            device,
            width,
            height,
        } => processor
            .generate_device(&device, &width, &height)
            .map(|out| {
                println!(
                    "Device {device} generated at {} and registered in {}",
                    out.fragment.display(),
                    out.source.display()
                )
            }),
        Commands::GenerateScript { .. } => processor
            .generate_script(None)
            .map(|path| println!("Script written to {}", path.display())),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

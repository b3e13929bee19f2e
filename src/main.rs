#![warn(clippy::all, rust_2018_idioms)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use spritelab::event::LogEventHandler;
use spritelab::{Command, Editor, EditorConfig, Result};

/// Render a SpriteLab project to PNG, and to GIF when it has several frames.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Project file to export
    #[arg(value_name = "PROJECT")]
    project: PathBuf,

    /// Editor settings (canvas size, fps, output directory, ...)
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => EditorConfig::load(path)?,
        None => EditorConfig::default(),
    };

    let mut editor = Editor::new(config);
    editor.event_bus().subscribe(Box::new(LogEventHandler));

    editor.execute(Command::LoadProjectFrom(args.project))?;
    editor.execute(Command::ExportPng)?;
    if editor.frames().len() > 1 {
        editor.execute(Command::ExportGif)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("spritelab: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_project_and_config() {
        let argv = ["spritelab", "sprite.json", "--config", "cfg.json"];
        let args = Args::try_parse_from(argv).unwrap();
        assert_eq!(args.project, PathBuf::from("sprite.json"));
        assert_eq!(args.config, Some(PathBuf::from("cfg.json")));

        assert!(Args::try_parse_from(["spritelab"]).is_err());
    }
}

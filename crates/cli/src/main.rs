#![deny(unsafe_code)]
//! CLI binary for the imagery function-valued image system.
//!
//! Subcommands:
//! - `render <scene>` — build a scene, sample it over a viewport, write PNG
//! - `list` — print available scenes

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use imagery_raster::{list_scenes, scene_from_name, snapshot, Viewport};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "imagery", about = "Function-valued image renderer")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a named scene to a PNG file.
    Render {
        /// Scene name (e.g. "eclipse").
        scene: String,

        /// Raster width in pixels.
        #[arg(short = 'W', long, default_value_t = 512)]
        width: usize,

        /// Raster height in pixels.
        #[arg(short = 'H', long, default_value_t = 512)]
        height: usize,

        /// World units across the raster width.
        #[arg(short, long, default_value_t = 2.0)]
        span: f64,

        /// Output file path.
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,

        /// Scene parameters as a JSON object.
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// List available scenes.
    List,
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let scenes = list_scenes();
            if cli.json {
                let info = serde_json::json!({ "scenes": scenes });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Scenes:");
                for name in scenes {
                    println!("  {name}");
                }
            }
        }
        Command::Render {
            scene,
            width,
            height,
            span,
            output,
            params,
        } => {
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;

            let img = scene_from_name(&scene, &params)?;
            let viewport = Viewport::new(width, height, span)?;

            snapshot::write_png(&img, &viewport, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "scene": scene,
                    "width": width,
                    "height": height,
                    "span": span,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {scene} ({width}x{height}, span {span}) -> {}",
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

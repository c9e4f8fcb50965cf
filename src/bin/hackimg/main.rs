mod args;
mod pnm;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Env};
use hackbitmap_rust::{convert, CodecConfig, HackContext, Image, NamingConfig};
use log::{debug, info, LevelFilter};
use std::fs::File;
use std::io::Write;

use args::Args;

fn init_logging(args: &Args) -> Result<()> {
    let default_log_level = if args.verbose {
        if cfg!(debug_assertions) {
            "debug"
        } else {
            "info"
        }
    } else {
        "warn"
    };

    let mut builder = Builder::from_env(Env::new().default_filter_or(default_log_level));

    #[cfg(feature = "trace_codec")]
    builder.filter_module("hackbitmap_rust::hackword", LevelFilter::Trace);

    if args.verbose {
        builder.filter_module("hackbitmap_rust::hackimage", LevelFilter::Debug);
    }

    if let Some(dir) = &args.log_dir {
        let log_file = args.log_file.as_deref().unwrap_or("hackimg.log");
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating log directory {}", dir.display()))?;
        let file = File::create(dir.join(log_file))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    debug!(
        "Logging initialized with verbose={}, log_dir={:?}, log_file={:?}",
        args.verbose, args.log_dir, args.log_file
    );
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    info!("{}", hackbitmap_rust::get_version());
    info!("Build: {}", hackbitmap_rust::get_build_info());

    let image = pnm::read_pnm(&args.file)?;

    let naming = NamingConfig {
        func_name: args.func_name.clone(),
        class_name: args.class_name.clone(),
        image_name: args.image_name.clone(),
        alphabet: args.alphabet.clone(),
    };
    let ctx = HackContext::with_config(CodecConfig::default(), naming, args.mode.to_emit_mode());

    let text = convert(Image::from_slice(image.width, image.height, &image.samples), &ctx)
        .with_context(|| format!("converting {}", args.file.display()))?;

    match &args.output {
        Some(path) => {
            let mut file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            file.write_all(text.as_bytes())?;
            info!("Wrote {} bytes to {}", text.len(), path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut stdout = stdout.lock();
            stdout.write_all(text.as_bytes())?;
        }
    }

    Ok(())
}

use std::path::{Path, PathBuf};
use std::process;

use mailmerge_batch::{BatchRunner, Settings};

const CONFIG_FILE: &str = "config.toml";
const DATA_DIR: &str = "data";
const OUT_DIR: &str = "output";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        println!("ERROR: {e:#}");
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let settings = Settings::load(Path::new(CONFIG_FILE))?;
    let runner = BatchRunner::new(settings, PathBuf::from(DATA_DIR), PathBuf::from(OUT_DIR));
    runner.run()
}

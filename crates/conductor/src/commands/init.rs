use crate::settings::SettingsFile;
use conductor_telemetry::{write_json_atomic, Paths};

/// Write the default settings file; `false` when one already exists
fn write_default_settings(paths: &Paths) -> anyhow::Result<bool> {
    let config_file = paths.config_file();
    if config_file.exists() {
        return Ok(false);
    }
    write_json_atomic(&config_file, &SettingsFile::defaults())?;
    Ok(true)
}

pub fn run() -> anyhow::Result<()> {
    let paths = Paths::new()?;

    if write_default_settings(&paths)? {
        println!("✓ Wrote default settings to {}", paths.config_file().display());
        println!("\nEdit the file to change the model catalog or scoring weights.");
    } else {
        println!(
            "Settings already exist at {}, leaving them untouched",
            paths.config_file().display()
        );
    }
    Ok(())
}

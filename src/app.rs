//! Pipeline driver: five strictly sequential steps, fail-fast, no rollback.

use crate::cli::Command;
use crate::config::BootstrapConfig;
use crate::error::{BootstrapError, Result};
use crate::manifest::DependencyManifest;
use crate::report::{BootstrapReport, Step};
use crate::runtime;
use crate::seed::{ConfigSeed, SeedOutcome};
use crate::venv::VirtualEnv;
use crate::version;

const OK: &str = "\x1b[32m\u{2713}\x1b[0m";
const FAIL: &str = "\x1b[31m\u{2717}\x1b[0m";
const TAG: &str = "\x1b[36m[bootstrap]\x1b[0m";

pub fn run(command: Command) -> anyhow::Result<i32> {
    match command {
        Command::Bootstrap => {
            let config = BootstrapConfig::discover();
            match bootstrap(&config) {
                Ok(report) => {
                    print_next_steps(&config, &report);
                    Ok(0)
                }
                Err(err) => {
                    eprintln!("{FAIL} {err}");
                    // pip's diagnostics go out exactly as pip produced them.
                    if let BootstrapError::DependencyInstall { stderr, .. } = &err {
                        if !stderr.trim().is_empty() {
                            eprintln!("{}", stderr.trim_end());
                        }
                    }
                    if let Some(hint) = err.remediation() {
                        eprintln!("  {hint}");
                    }
                    Ok(1)
                }
            }
        }
        Command::ShowVersion => {
            println!("{}", version::describe());
            Ok(0)
        }
    }
}

/// Run the five-step pipeline, narrating each step and recording its outcome.
/// The first failure aborts everything after it; completed steps are not
/// rolled back.
pub fn bootstrap(config: &BootstrapConfig) -> Result<BootstrapReport> {
    let mut report = BootstrapReport::default();

    // Steps 1-2: find an interpreter and hold it to the version floor.
    println!("{TAG} Probing for a Python runtime...");
    let rt = runtime::discover(config.runtime.as_deref())?;
    println!(
        "{OK} Found {} {} ({})",
        rt.name,
        rt.version,
        rt.command.display()
    );
    report.record(
        Step::RuntimeDiscovery,
        format!("{} at {}", rt.name, rt.command.display()),
    );
    println!(
        "{OK} Version {} meets the {}.{} floor",
        rt.version,
        runtime::MIN_MAJOR,
        runtime::MIN_MINOR
    );
    report.record(Step::VersionCheck, rt.version.to_string());

    // Step 3: isolated environment.
    let env_dir = config.env_dir();
    println!(
        "{TAG} Creating virtual environment at {}...",
        env_dir.display()
    );
    let env = VirtualEnv::create(&rt, &env_dir)?;
    println!("{OK} Virtual environment ready");
    report.record(Step::CreateEnvironment, env.root().display().to_string());

    // Step 4: pip upgrade, then the manifest. The manifest check comes after
    // environment creation on purpose; a missing manifest still leaves the
    // environment behind.
    let manifest = DependencyManifest::load(&config.manifest())?;
    println!(
        "{TAG} Installing {} package(s) from {}...",
        manifest.len(),
        manifest.path().display()
    );
    env.install(&manifest)?;
    println!("{OK} Dependencies installed");
    report.record(
        Step::InstallDependencies,
        format!("{} specifier(s)", manifest.len()),
    );

    // Step 5: seed the live config from the template, never overwriting.
    let seeder = ConfigSeed::new(&config.config_dir());
    match seeder.materialize()? {
        SeedOutcome::Created => {
            println!("{OK} Created {} from template", seeder.target().display());
            println!("  Edit it and fill in your secrets before starting the bot");
            report.record(Step::SeedConfiguration, "created");
        }
        SeedOutcome::AlreadyExists => {
            println!(
                "{OK} Configuration {} already exists, left untouched",
                seeder.target().display()
            );
            report.record(Step::SeedConfiguration, "already exists");
        }
    }

    Ok(report)
}

fn print_next_steps(config: &BootstrapConfig, report: &BootstrapReport) {
    debug_assert!(report.completed(Step::SeedConfiguration));

    let interpreter = if cfg!(windows) {
        config.env_dir().join("Scripts").join("python.exe")
    } else {
        config.env_dir().join("bin").join("python")
    };

    println!();
    println!("{TAG} Bootstrap complete");
    println!("Next steps:");
    println!(
        "  1. Edit {}/{} and fill in your values",
        config.config_dir().display(),
        crate::seed::CONFIG_FILE
    );
    println!(
        "  2. Start the bot: {} yt_sum_bot.py",
        interpreter.display()
    );
}

//! Background daemon lifecycle.
//!
//! Daemon mode re-spawns the current executable detached from the terminal,
//! with stdout/stderr redirected to the log file, and records the child PID.
//! Stale PID files from a previous run are reclaimed on the next start.

use std::fs;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};

use crate::config::AppConfig;

/// Spawn the server as a background daemon.
///
/// Fails if a live process already owns the PID file.
pub fn spawn_daemon(config: &AppConfig) -> Result<()> {
    let pid_file = config.pid_file_path();
    if let Some(dir) = pid_file.parent() {
        fs::create_dir_all(dir)?;
    }

    if pid_file.exists() {
        let pid_str = fs::read_to_string(&pid_file)?;
        if let Ok(pid) = pid_str.trim().parse::<i32>() {
            if process_exists(pid) {
                anyhow::bail!(
                    "torero-api already running with PID {} (PID file: {})",
                    pid,
                    pid_file.display()
                );
            }
            println!("Found stale PID file. Removing it.");
            fs::remove_file(&pid_file)?;
        }
    }

    let log_file = config.log_file_path();
    if let Some(dir) = log_file.parent() {
        fs::create_dir_all(dir)?;
    }
    let log = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("Could not open log file {}", log_file.display()))?;

    let exe = std::env::current_exe().context("Could not determine current executable")?;

    let child = Command::new(exe)
        .arg("--host")
        .arg(&config.host)
        .arg("--port")
        .arg(config.port.to_string())
        .arg("--log-level")
        .arg(&config.log_level)
        .stdin(Stdio::null())
        .stdout(Stdio::from(log.try_clone()?))
        .stderr(Stdio::from(log))
        .spawn()
        .context("Failed to spawn torero-api daemon")?;

    fs::write(&pid_file, child.id().to_string())?;
    println!("torero-api started with PID {}", child.id());
    println!("PID file: {}", pid_file.display());
    println!("Log file: {}", log_file.display());

    Ok(())
}

/// Check whether a process with the given PID is alive.
pub fn process_exists(pid: i32) -> bool {
    use sysinfo::{ProcessesToUpdate, System};

    let mut system = System::new_all();
    system.refresh_processes(ProcessesToUpdate::All);

    system.process(sysinfo::Pid::from(pid as usize)).is_some()
}

/// Record the current process PID.
pub fn write_pid_file(config: &AppConfig) -> Result<()> {
    let pid_file = config.pid_file_path();
    if let Some(dir) = pid_file.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(&pid_file, std::process::id().to_string())?;
    Ok(())
}

/// Remove the PID file, ignoring a file that is already gone.
pub fn remove_pid_file(config: &AppConfig) {
    let _ = fs::remove_file(config.pid_file_path());
}

mod logging;

use std::path::PathBuf;

use anyhow::Context;
use faaslog_core::{codes, sprintln, ConfigMode, GroupConfig, Severity};

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    strict: bool,
    log_file: Option<PathBuf>,
    threads: usize,
    status: Option<u16>,
    message: Vec<String>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--config" => args.config = it.next().map(PathBuf::from),
            "--strict" => args.strict = true,
            "--log-file" => args.log_file = it.next().map(PathBuf::from),
            "--threads" => {
                let n = it.next().context("--threads needs a value")?;
                args.threads = n.parse().with_context(|| format!("invalid --threads {n:?}"))?;
            }
            "--status" => {
                let n = it.next().context("--status needs a value")?;
                args.status = Some(n.parse().with_context(|| format!("invalid --status {n:?}"))?);
            }
            _ => args.message.push(a),
        }
    }

    // Optional: env FAASLOG_LOG_FILE when --log-file is absent
    if args.log_file.is_none() {
        if let Ok(p) = std::env::var("FAASLOG_LOG_FILE") {
            if !p.trim().is_empty() {
                args.log_file = Some(PathBuf::from(p));
            }
        }
    }
    Ok(args)
}

fn main() -> anyhow::Result<()> {
    let args = parse_args()?;

    let mode = if args.strict { ConfigMode::Strict } else { ConfigMode::Lenient };
    let cfg = match &args.config {
        Some(path) => GroupConfig::load(path, mode)
            .with_context(|| format!("loading logger config {}", path.display()))?,
        None => GroupConfig::new(env!("CARGO_PKG_NAME")).with_env_overrides(),
    };

    let run_id = logging::init(cfg.build(), args.log_file.clone());
    logi!("INIT", "run_id={run_id} label={:?} flags={:?}", cfg.label(), cfg.flags());

    let message = if args.message.is_empty() {
        "hello from faaslog".to_string()
    } else {
        args.message.join(" ")
    };

    logi!("MSG", "{message}");
    logw!("MSG", "{message}");
    loge!("MSG", "{message}");

    if let Some(code) = args.status {
        match codes::message_for(code) {
            Some(text) => loge!("HTTP", "{code}: {text}"),
            None => logw!("HTTP", "{code}: no message for this status"),
        }
    }

    if args.threads > 0 {
        fan_out(args.threads, &message);
    }

    Ok(())
}

/// Format `message` from `n` worker threads and print every line on stdout.
fn fan_out(n: usize, message: &str) {
    let group = logging::group();
    let (tx, rx) = crossbeam_channel::unbounded::<String>();

    std::thread::scope(|s| {
        for worker in 0..n {
            let tx = tx.clone();
            s.spawn(move || {
                let severity = Severity::ALL[worker % Severity::ALL.len()];
                let line = sprintln!(group.get(severity), format!("worker={worker}"), message);
                let _ = tx.send(line);
            });
        }
    });
    drop(tx);

    let mut count = 0usize;
    for line in rx.iter() {
        print!("{line}");
        count += 1;
    }
    logi!("FANOUT", "{count} lines from {n} workers (run_id={})", logging::run_id());
}

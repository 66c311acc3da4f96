//! # forum-page
//!
//! Mounts one forum page session and drives it from stdin, one command per
//! line. Toasts are printed after each command and mirrored to the log.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Context;
use api_adapters::{execute, parse, render_page, Reply};
use configs::{LogFormat, Settings};
use notify_adapters::{Fanout, ToastLog, TracingSink};
use services::{ForumPage, PageOptions};
use storage_adapters::Seed;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("loading settings")?;
    init_tracing(&settings);

    let seed = match &settings.seed_path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading seed {}", path.display()))?;
            Seed::from_json(&raw).with_context(|| format!("parsing seed {}", path.display()))?
        }
        None => Seed::load_default().context("parsing bundled seed")?,
    };

    let toasts = Arc::new(ToastLog::new());
    let sink = Fanout::new(Arc::clone(&toasts), TracingSink);
    let options = PageOptions {
        is_admin: settings.is_admin,
        id_strategy: settings.id_strategy,
        locale: settings.locale,
    };
    let (mut page, admin) = ForumPage::start(seed.posts, seed.users, sink, options);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", render_page(&page)?)?;
    write!(out, "> ")?;
    out.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        if line.trim().is_empty() {
            write!(out, "> ")?;
            out.flush()?;
            continue;
        }

        let reply = parse(&line)
            .map_err(anyhow::Error::from)
            .and_then(|command| Ok(execute(&mut page, admin.as_ref(), command)?));
        match reply {
            Ok(Reply::Quit) => break,
            Ok(Reply::Help(text)) => writeln!(out, "{text}")?,
            Ok(Reply::Page(text)) => writeln!(out, "{text}")?,
            Ok(Reply::Outcome(outcome)) => {
                info!(?outcome, "command applied");
                writeln!(out, "{}", render_page(&page)?)?;
            }
            Err(err) => {
                warn!(%err, "command rejected");
                writeln!(out, "! {err}")?;
            }
        }

        for toast in toasts.drain() {
            writeln!(out, "* {}: {}", toast.title, toast.description)?;
        }
        write!(out, "> ")?;
        out.flush()?;
    }

    info!(posts = page.posts().len(), "session closed");
    Ok(())
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log.filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    match settings.log.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

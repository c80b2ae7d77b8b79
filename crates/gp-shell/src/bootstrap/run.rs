//! Application entry: config, wiring and the interactive loop.
//! 应用入口：配置、装配与交互循环

use std::io::Write;

use anyhow::Context;
use gp_app::{PageLoadOutcome, PageViewController, ViewStatus};
use gp_core::config::AppConfig;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use super::{build_page_view, load_config, resolve_config, CliArgs};
use crate::commands::{execute, Command, Reply};
use crate::render::{render_page, render_summary, HELP_TEXT};

/// Loads configuration, wires the page view and runs the shell on stdin/stdout.
pub async fn run_app(args: CliArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => load_config(path.clone())?,
        None => AppConfig::default(),
    };
    let resolved = resolve_config(config, &args);
    ::tracing::info!(
        base_url = %resolved.base_url,
        page_size = resolved.page_size,
        initial_page = resolved.initial_page,
        "Starting gallery picker"
    );

    let view = build_page_view(&resolved)?;
    let input = BufReader::new(tokio::io::stdin());
    run_repl(&view, resolved.initial_page, input, std::io::stdout()).await
}

/// Opens `initial_page`, then reads commands line by line until `quit` or
/// end of input.
pub async fn run_repl<R, W>(
    view: &PageViewController,
    initial_page: u32,
    input: R,
    mut output: W,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let page_size = view.page_size().await;
    if let PageLoadOutcome::Rejected(err) = view.go_to_page(initial_page, page_size).await {
        writeln!(output, "{}", err)?;
    }
    redraw(view, &mut output).await?;
    writeln!(output, "Type `help` for commands.")?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "{}", err)?;
                continue;
            }
        };

        match execute(command, view).await {
            Reply::Redraw => redraw(view, &mut output).await?,
            Reply::Notice(message) => writeln!(output, "{}", message)?,
            Reply::Help => writeln!(output, "{}", HELP_TEXT)?,
            Reply::Quit => break,
        }
    }

    ::tracing::info!("Shell closed");
    Ok(())
}

/// Draws the page and the summary. An error banner is acknowledged once drawn.
async fn redraw<W: Write>(view: &PageViewController, output: &mut W) -> anyhow::Result<()> {
    let snapshot = view.snapshot().await;
    writeln!(output, "{}", render_page(&snapshot))?;

    let summary = render_summary(&view.summary().await);
    if !summary.is_empty() {
        writeln!(output)?;
        writeln!(output, "{}", summary)?;
    }

    if matches!(snapshot.status, ViewStatus::Error(_)) {
        view.acknowledge_error().await;
    }
    Ok(())
}

use gp_app::{NavigationBlocked, PageLoadOutcome, PageViewController, SummaryAction};
use gp_core::PageState;

use super::Command;

/// What the shell loop should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Redraw the page table and the selection summary.
    Redraw,
    /// Print a one-line message and leave the screen as it is.
    Notice(String),
    Help,
    Quit,
}

fn load_reply(outcome: PageLoadOutcome) -> Reply {
    match outcome {
        PageLoadOutcome::Applied(_) | PageLoadOutcome::Failed(_) => Reply::Redraw,
        PageLoadOutcome::Superseded { page_number } => {
            Reply::Notice(format!("Page {} was replaced by a newer request", page_number))
        }
        PageLoadOutcome::Rejected(err) => Reply::Notice(err.to_string()),
    }
}

fn step_reply(step: Result<PageLoadOutcome, NavigationBlocked>) -> Reply {
    match step {
        Ok(outcome) => load_reply(outcome),
        Err(NavigationBlocked::NoPageLoaded) => {
            Reply::Notice("No page loaded; try `reload` or `page N`".to_string())
        }
        Err(NavigationBlocked::FirstPage) => Reply::Notice("Already on the first page".to_string()),
        Err(NavigationBlocked::LastPage) => Reply::Notice("Already on the last page".to_string()),
    }
}

/// Runs one command against the page view.
/// 对页面视图执行一条命令
pub async fn execute(command: Command, view: &PageViewController) -> Reply {
    tracing::debug!(?command, "Executing command");

    match command {
        Command::Page {
            page_number,
            page_size,
        } => {
            let size = match page_size {
                Some(size) => size,
                None => view.page_size().await,
            };
            load_reply(view.go_to_page(page_number, size).await)
        }
        Command::Next => step_reply(view.next_page().await),
        Command::Prev => step_reply(view.previous_page().await),
        Command::Reload => load_reply(view.reload().await),
        Command::Offset(row) => {
            let size = view.page_size().await;
            let page_number = PageState::page_for_offset(row, size);
            load_reply(view.go_to_page(page_number, size).await)
        }
        Command::Select(ids) => {
            let mut selection = view.snapshot().await.selected_on_page;
            selection.extend(ids);
            let outcome = view.apply_visible_selection(&selection).await;
            if outcome.is_noop() {
                Reply::Notice("Nothing changed".to_string())
            } else {
                Reply::Redraw
            }
        }
        Command::Toggle(id) => {
            let outcome = view.toggle(id).await;
            if outcome.is_noop() {
                Reply::Notice(format!("Artwork {} is not on this page", id))
            } else {
                Reply::Redraw
            }
        }
        Command::All => {
            view.select_all_visible().await;
            Reply::Redraw
        }
        Command::None => {
            view.deselect_all_visible().await;
            Reply::Redraw
        }
        Command::Remove(id) => {
            if SummaryAction::Remove(id).dispatch(view).await {
                Reply::Redraw
            } else {
                Reply::Notice(format!("Artwork {} is not selected", id))
            }
        }
        Command::Clear => {
            SummaryAction::ClearAll.dispatch(view).await;
            Reply::Redraw
        }
        Command::Show => Reply::Redraw,
        Command::Help => Reply::Help,
        Command::Quit => Reply::Quit,
    }
}

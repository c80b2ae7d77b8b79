//! Plain-text rendering of the page view.
//! 页面视图的纯文本渲染
//!
//! Every function here is a pure `snapshot -> String` projection; the shell
//! loop decides where the text goes.

mod summary;
mod table;
mod text;

pub use summary::render_summary;
pub use table::{render_error_banner, render_page};
pub use text::format_count;

pub const HELP_TEXT: &str = "\
Commands:
  page N [SIZE]   open page N, optionally with SIZE rows per page
  next | prev     move one page forward or back
  offset ROW      open the page that contains row ROW
  reload          fetch the current page again
  select ID...    check rows on this page
  toggle ID       flip one row on this page
  all | none      check or uncheck every row on this page
  remove ID       drop one entry from the selection
  clear           drop every selection on every page
  show            redraw the page and the selection
  help            show this text
  quit            leave";

pub mod app;
pub mod clock;
pub mod command;
mod context;
mod month_pane;
mod pagination_bar;
pub mod toast;

pub use app::App;
pub use context::{Context, Mode, Theme};
pub use month_pane::MonthPane;
pub use pagination_bar::PaginationBar;

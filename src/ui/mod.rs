// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (search box, list, legend, status bar)
// - render: Main orchestration function that coordinates all rendering
// - search: Renders the search input box with the query and result count
// - bookmark_list: Renders the tree / result rows with pin affordances
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status bar (mode, counts, selected bookmark)
// - toast: Renders toast notifications (brief pop-up messages)

pub mod bookmark_list;
pub mod layout;
pub mod legend;
pub mod render;
pub mod search;
pub mod status_bar;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;

// Components module - UI building blocks
//
// Shell components are rendered around the main content:
// - Title bar: App name, current mode
// - Hint bar: Typing hints driven by the hint timers
// - Status bar: Progress and key hints
// - Logs panel: System log entries
//
// Content components:
// - Editor panel: Sentence input (typing mode)
// - Sentence panel: Terms with their category labels (categorizing mode)
// - Selector panel: Floating category list over the sentence

pub mod editor_panel;
pub mod hint_bar;
pub mod logs_panel;
pub mod selector_panel;
pub mod sentence_panel;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use editor_panel::EditorPanel;
pub use toast::Toast;

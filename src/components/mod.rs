//! UI Components
//!
//! Leptos components of the reactor panel.

mod notice;
mod theme_toggle;
mod tab_bar;
mod live_panel;
mod accordion;
mod checklist_item;
mod verification_modal;
mod action_bar;
mod calculator_form;

pub use notice::NoticeToast;
pub use theme_toggle::ThemeToggle;
pub use tab_bar::{Tab, TabBar};
pub use live_panel::LivePanel;
pub use accordion::ChecklistAccordion;
pub use checklist_item::ChecklistItemRow;
pub use verification_modal::VerificationModal;
pub use action_bar::ActionBar;
pub use calculator_form::CalculatorForm;

//! UI Components for Reunion Planner.

mod budget_slider;
mod city_select;
mod date_range_panel;
mod finalize_button;
mod notice_modal;
mod results_table;
mod traveler_card;
mod traveler_summary;
mod vibe_picker;

pub use budget_slider::BudgetSlider;
pub use city_select::CitySelect;
pub use date_range_panel::DateRangePanel;
pub use finalize_button::FinalizeButton;
pub use notice_modal::NoticeModal;
pub use results_table::ResultsTable;
pub use traveler_card::TravelerCard;
pub use traveler_summary::TravelerSummary;
pub use vibe_picker::VibePicker;

mod calendar_tabs;
mod empty_notice;
mod event_card_item;
mod load_error_notice;
mod tab_link;
mod tab_panel;

pub use calendar_tabs::CalendarTabs;
pub use empty_notice::EmptyNotice;
pub use event_card_item::EventCardItem;
pub use load_error_notice::LoadErrorNotice;
pub use tab_link::TabLink;
pub use tab_panel::TabPanel;

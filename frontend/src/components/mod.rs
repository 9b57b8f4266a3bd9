mod display_card;
mod history_stack;
mod home_page;
mod page_container;
mod pie_chart;

pub use display_card::{CardTone, DisplayCard};
pub use history_stack::HistoryStack;
pub use home_page::HomePage;
pub use page_container::PageContainer;
pub use pie_chart::PieChart;

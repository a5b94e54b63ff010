pub mod address;
pub mod engine;
pub mod history;
pub mod shell;

pub use engine::Browser;
pub use history::NavigationHistory;

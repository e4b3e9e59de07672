// ABOUTME: UI components for the TUI interface: the assessment wizard, help overlay, and layout

pub mod help;
pub mod layout;
pub mod wizard;

pub use help::HelpComponent;
pub use layout::LayoutComponent;
pub use wizard::WizardComponent;

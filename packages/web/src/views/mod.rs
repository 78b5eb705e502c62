mod shell;
pub use shell::Shell;

mod dashboard;
pub use dashboard::Dashboard;

mod alerts;
pub use alerts::Alerts;

mod analytics;
pub use analytics::Analytics;

mod live_feeds;
pub use live_feeds::LiveFeeds;

mod incidents;
pub use incidents::Incidents;

mod reports;
pub use reports::Reports;

mod settings;
pub use settings::Settings;

mod login;
pub use login::Login;

mod actions;
mod chart;
mod forecast_panel;
mod risk_badge;
mod selection;
mod stats;
mod view;

pub use view::Dashboard;

// Domain layer - Layouts, widgets and reconciliation
pub mod layout;
pub mod reconcile;
pub mod widget;

pub mod maintenance;
pub mod maintenance_action;
pub mod pledge;

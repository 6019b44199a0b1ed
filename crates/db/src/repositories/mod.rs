pub mod maintenance_action_repo;
pub mod maintenance_repo;
pub mod pledge_repo;

pub use maintenance_action_repo::MaintenanceActionRepo;
pub use maintenance_repo::MaintenanceRepo;
pub use pledge_repo::PledgeRepo;

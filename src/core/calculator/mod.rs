pub mod attendance;
pub mod daily;
pub mod netting;
pub mod reconcile;

pub use daily::{DailyCalculator, compute_day};
pub use netting::{BucketHours, LeaveNetting, net_lateness, net_leave};
pub use reconcile::{LatenessTotals, reconcile};

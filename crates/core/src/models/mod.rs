pub mod booking;
pub mod operator;
pub mod robot;

pub use booking::{Booking, BookingCandidate, BookingId, ScheduleView};
pub use operator::{NewOperator, Operator, OperatorId, OperatorRole, QualifiedModels};
pub use robot::{NewRobot, Robot, RobotId, RobotState};

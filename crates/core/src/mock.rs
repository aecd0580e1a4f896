use async_trait::async_trait;
use chrono::NaiveDateTime;
use mockall::mock;

use crate::errors::OpsResult;
use crate::models::{
    Booking, BookingCandidate, BookingId, NewOperator, NewRobot, Operator, OperatorId, Robot,
    RobotId, ScheduleView,
};
use crate::store::EntityStore;

// Mock store for testing
mock! {
    pub Store {}

    #[async_trait]
    impl EntityStore for Store {
        async fn insert_robot(&self, robot: NewRobot) -> OpsResult<Robot>;
        async fn get_robot(&self, id: RobotId) -> OpsResult<Option<Robot>>;
        async fn list_robots(&self) -> OpsResult<Vec<Robot>>;
        async fn robot_models(&self) -> OpsResult<Vec<String>>;
        async fn delete_robot(&self, id: RobotId) -> OpsResult<()>;
        async fn insert_operator(&self, operator: NewOperator) -> OpsResult<Operator>;
        async fn get_operator(&self, id: OperatorId) -> OpsResult<Option<Operator>>;
        async fn list_operators(&self) -> OpsResult<Vec<Operator>>;
        async fn insert_booking(&self, booking: BookingCandidate) -> OpsResult<Booking>;
        async fn bookings_for_robot(&self, robot_id: RobotId) -> OpsResult<Vec<Booking>>;
        async fn delete_booking(&self, id: BookingId) -> OpsResult<()>;
        async fn schedule_view(&self) -> OpsResult<Vec<ScheduleView>>;
        async fn schedule_entry(&self, id: BookingId) -> OpsResult<Option<ScheduleView>>;
        async fn count_robots(&self) -> OpsResult<i64>;
        async fn count_engaged(&self, at: NaiveDateTime) -> OpsResult<i64>;
        async fn engaged_robot_ids(&self, at: NaiveDateTime) -> OpsResult<Vec<RobotId>>;
    }
}

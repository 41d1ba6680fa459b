use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub id: String,
    pub day: String,
    pub time: String,
    pub topic: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewScheduleItem {
    pub day: String,
    pub time: String,
    pub topic: String,
}

impl NewScheduleItem {
    pub fn with_id(self, id: String) -> ScheduleItem {
        ScheduleItem {
            id,
            day: self.day,
            time: self.time,
            topic: self.topic,
        }
    }
}

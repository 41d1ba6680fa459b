use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

use super::{
    Course, NewCourse, NewPost, NewScheduleItem, NewTeacher, Post, ScheduleItem, Teacher,
};

/// The content aggregate. Persisted as a single JSON document, so the field
/// names here are the stored format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppContent {
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub teachers: Vec<Teacher>,
    #[serde(default)]
    pub schedule: Vec<ScheduleItem>,
    #[serde(default)]
    pub course_history: String,
    #[serde(default)]
    pub contact_viber: String,
}

impl AppContent {
    /// Content shown on a fresh install, before an admin edits anything.
    pub fn initial() -> Self {
        Self {
            courses: vec![Course {
                id: "seed-course-1".to_string(),
                title: "Spoken English for Beginners".to_string(),
                teacher: "Daw Hnin".to_string(),
                telegram_link: "https://t.me/courseboard_english".to_string(),
                date: "2024-06-01".to_string(),
                description: "Eight weekly sessions covering everyday conversation.".to_string(),
            }],
            posts: vec![Post {
                id: "seed-post-1".to_string(),
                content: "Registration for the June intake is now open.".to_string(),
                image_url: None,
                date: "2024-05-20T09:00:00Z".to_string(),
            }],
            teachers: vec![Teacher {
                id: "seed-teacher-1".to_string(),
                name: "Daw Hnin".to_string(),
                bio: "Ten years of classroom experience teaching English.".to_string(),
            }],
            schedule: vec![ScheduleItem {
                id: "seed-schedule-1".to_string(),
                day: "Saturday".to_string(),
                time: "09:00".to_string(),
                topic: "Spoken English".to_string(),
            }],
            course_history: "Our classes started in a single rented room in 2015.".to_string(),
            contact_viber: "+95 9 000 000 000".to_string(),
        }
    }

    pub fn find_course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }
}

/// Names one of the four item collections inside [`AppContent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Courses,
    Posts,
    Teachers,
    Schedule,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Courses,
        Collection::Posts,
        Collection::Teachers,
        Collection::Schedule,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Courses => "courses",
            Collection::Posts => "posts",
            Collection::Teachers => "teachers",
            Collection::Schedule => "schedule",
        }
    }

    pub fn from_slug(slug: &str) -> Result<Self, AppError> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == slug)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown collection: {}", slug)))
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An item that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewItem {
    Course(NewCourse),
    Post(NewPost),
    Teacher(NewTeacher),
    ScheduleItem(NewScheduleItem),
}

impl NewItem {
    pub fn collection(&self) -> Collection {
        match self {
            NewItem::Course(_) => Collection::Courses,
            NewItem::Post(_) => Collection::Posts,
            NewItem::Teacher(_) => Collection::Teachers,
            NewItem::ScheduleItem(_) => Collection::Schedule,
        }
    }

    pub fn from_json(collection: Collection, value: Value) -> Result<Self, AppError> {
        let item = match collection {
            Collection::Courses => NewItem::Course(serde_json::from_value(value)?),
            Collection::Posts => NewItem::Post(serde_json::from_value(value)?),
            Collection::Teachers => NewItem::Teacher(serde_json::from_value(value)?),
            Collection::Schedule => NewItem::ScheduleItem(serde_json::from_value(value)?),
        };
        Ok(item)
    }

    pub fn with_id(self, id: String) -> Item {
        match self {
            NewItem::Course(c) => Item::Course(c.with_id(id)),
            NewItem::Post(p) => Item::Post(p.with_id(id)),
            NewItem::Teacher(t) => Item::Teacher(t.with_id(id)),
            NewItem::ScheduleItem(s) => Item::ScheduleItem(s.with_id(id)),
        }
    }
}

/// A stored item of any collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Course(Course),
    Post(Post),
    Teacher(Teacher),
    ScheduleItem(ScheduleItem),
}

impl Item {
    pub fn collection(&self) -> Collection {
        match self {
            Item::Course(_) => Collection::Courses,
            Item::Post(_) => Collection::Posts,
            Item::Teacher(_) => Collection::Teachers,
            Item::ScheduleItem(_) => Collection::Schedule,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Item::Course(c) => &c.id,
            Item::Post(p) => &p.id,
            Item::Teacher(t) => &t.id,
            Item::ScheduleItem(s) => &s.id,
        }
    }

    pub fn from_json(collection: Collection, value: Value) -> Result<Self, AppError> {
        let item = match collection {
            Collection::Courses => Item::Course(serde_json::from_value(value)?),
            Collection::Posts => Item::Post(serde_json::from_value(value)?),
            Collection::Teachers => Item::Teacher(serde_json::from_value(value)?),
            Collection::Schedule => Item::ScheduleItem(serde_json::from_value(value)?),
        };
        Ok(item)
    }

    pub fn to_json(&self) -> Result<Value, AppError> {
        let value = match self {
            Item::Course(c) => serde_json::to_value(c)?,
            Item::Post(p) => serde_json::to_value(p)?,
            Item::Teacher(t) => serde_json::to_value(t)?,
            Item::ScheduleItem(s) => serde_json::to_value(s)?,
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stored_field_names_are_stable() {
        let content = AppContent::initial();
        let value = serde_json::to_value(&content).expect("serialize");

        assert!(value.get("courseHistory").is_some());
        assert!(value.get("contactViber").is_some());
        assert!(value["courses"][0].get("telegramLink").is_some());
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let content: AppContent =
            serde_json::from_value(json!({ "courseHistory": "since 2015" })).expect("parse");

        assert!(content.courses.is_empty());
        assert_eq!(content.course_history, "since 2015");
        assert_eq!(content.contact_viber, "");
    }

    #[test]
    fn test_collection_from_slug() {
        assert_eq!(Collection::from_slug("schedule").unwrap(), Collection::Schedule);
        assert!(matches!(
            Collection::from_slug("gallery"),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_new_item_from_json_requires_fields() {
        let missing_title = json!({
            "teacher": "T",
            "telegramLink": "L",
            "date": "2024-01-01",
            "description": "D"
        });
        assert!(NewItem::from_json(Collection::Courses, missing_title).is_err());

        let post = NewItem::from_json(
            Collection::Posts,
            json!({ "content": "hello", "date": "2024-01-01" }),
        )
        .expect("post without image");
        assert_eq!(post.collection(), Collection::Posts);
    }
}
